use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::icon::IconRegistry;
use crate::id::auto_id;
use crate::provider::SelectionProvider;
use crate::style::Intent;
use crate::theme::ThemeRef;
use crate::view_model::{ToggleAnimation, ToggleViewModel};

use super::{paint, registry, transition};

type ToggleChangeHandler = Rc<dyn Fn(bool, &mut Window, &mut gpui::App)>;

/// Declarative on/off switch.
#[derive(IntoElement)]
pub struct Toggle {
    id: SharedString,
    label: Option<SharedString>,
    custom_label: Option<AnyElement>,
    on: Option<bool>,
    default_on: bool,
    intent: Intent,
    disabled: bool,
    theme: Option<ThemeRef>,
    on_change: Option<ToggleChangeHandler>,
}

impl Toggle {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: auto_id("toggle"),
            label: Some(label.into()),
            custom_label: None,
            on: None,
            default_on: false,
            intent: Intent::Basic,
            disabled: false,
            theme: None,
            on_change: None,
        }
    }

    #[track_caller]
    pub fn custom(label: impl IntoElement) -> Self {
        let mut toggle = Self::new(SharedString::default());
        toggle.label = None;
        toggle.custom_label = Some(label.into_any_element());
        toggle
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    pub fn default_on(mut self, on: bool) -> Self {
        self.default_on = on;
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn theme(mut self, theme: ThemeRef) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Toggle {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme.unwrap_or_else(|| SelectionProvider::theme(cx));
        let accessibility = SelectionProvider::accessibility(cx);
        let initial = self.on.unwrap_or(self.default_on);
        let view_model =
            registry::state(&self.id, || ToggleViewModel::new(theme.clone(), self.intent, initial));

        {
            let mut view_model = view_model.borrow_mut();
            view_model.set_theme(theme);
            view_model.set_intent(self.intent);
            view_model.set_is_enabled(!self.disabled);
            view_model.set_is_custom_label(self.custom_label.is_some());
            view_model.set_is_reduce_motion_enabled(accessibility.reduce_motion);
            view_model.set_is_on_off_switch_labels_enabled(accessibility.on_off_switch_labels);
            view_model.set_contrast(accessibility.contrast);
            if let Some(on) = self.on {
                view_model.set_is_on(on, false);
            }
            if !view_model.is_ready() {
                view_model.load(
                    accessibility.reduce_motion,
                    accessibility.on_off_switch_labels,
                    accessibility.contrast,
                );
            }
        }

        let (content, rendered) = {
            let view_model = view_model.borrow();
            let control = paint::toggle_track(&self.id, &view_model, &IconRegistry::new());
            (
                paint::label_row(&self.id, control, self.label, self.custom_label, &view_model),
                view_model.is_on(),
            )
        };

        let mut row = div().id(self.id.clone()).child(content);
        if self.disabled {
            return row.cursor_default();
        }

        let on_change = self.on_change.clone();
        row = row.cursor_pointer().on_click(move |_, window, cx| {
            let (next, animation) = {
                let mut view_model = view_model.borrow_mut();
                view_model.set_is_enabled(true);
                let Some(next) = view_model.toggle_from(rendered) else {
                    return;
                };
                (next, view_model.dynamic_animation_type().unwrap_or_default())
            };
            tracing::debug!(on = next, "toggle flipped");

            let reporter = view_model.clone();
            transition::report_completions::<ToggleAnimation>(
                animation,
                window,
                cx,
                move |token| reporter.borrow_mut().set_completed_animation(token),
            );
            window.refresh();
            if let Some(handler) = on_change.as_ref() {
                (handler)(next, window, cx);
            }
        });
        row
    }
}
