use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::id::auto_id;
use crate::provider::SelectionProvider;
use crate::style::Intent;
use crate::theme::ThemeRef;
use crate::view_model::{RadioAnimation, RadioViewModel};

use super::{paint, registry, transition};

type RadioChangeHandler = Rc<dyn Fn(bool, &mut Window, &mut gpui::App)>;

/// Declarative radio button. Tapping selects it; only its group can unselect it.
#[derive(IntoElement)]
pub struct Radio {
    id: SharedString,
    label: Option<SharedString>,
    custom_label: Option<AnyElement>,
    selected: Option<bool>,
    default_selected: bool,
    intent: Intent,
    disabled: bool,
    theme: Option<ThemeRef>,
    on_change: Option<RadioChangeHandler>,
}

impl Radio {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: auto_id("radio"),
            label: Some(label.into()),
            custom_label: None,
            selected: None,
            default_selected: false,
            intent: Intent::Basic,
            disabled: false,
            theme: None,
            on_change: None,
        }
    }

    #[track_caller]
    pub fn custom(label: impl IntoElement) -> Self {
        let mut radio = Self::new(SharedString::default());
        radio.label = None;
        radio.custom_label = Some(label.into_any_element());
        radio
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn default_selected(mut self, selected: bool) -> Self {
        self.default_selected = selected;
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

impl RenderOnce for Radio {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme.unwrap_or_else(|| SelectionProvider::theme(cx));
        let accessibility = SelectionProvider::accessibility(cx);
        let initial = self.selected.unwrap_or(self.default_selected);
        let view_model =
            registry::state(&self.id, || RadioViewModel::new(theme.clone(), self.intent, initial));

        {
            let mut view_model = view_model.borrow_mut();
            view_model.set_theme(theme);
            view_model.set_intent(self.intent);
            view_model.set_is_enabled(!self.disabled);
            view_model.set_is_custom_label(self.custom_label.is_some());
            view_model.set_is_reduce_motion_enabled(accessibility.reduce_motion);
            if let Some(selected) = self.selected {
                view_model.set_is_selected(selected, false);
            }
            if !view_model.is_ready() {
                view_model.load(accessibility.reduce_motion);
            }
        }

        let (content, rendered) = {
            let view_model = view_model.borrow();
            let control = paint::radio_circle(&self.id, &view_model);
            (
                paint::label_row(&self.id, control, self.label, self.custom_label, &view_model),
                view_model.is_selected(),
            )
        };

        let mut row = div().id(self.id.clone()).child(content);
        if self.disabled {
            return row.cursor_default();
        }

        let on_change = self.on_change.clone();
        row = row.cursor_pointer().on_click(move |_, window, cx| {
            let animation = {
                let mut view_model = view_model.borrow_mut();
                view_model.set_is_enabled(true);
                if !view_model.select_from(rendered) {
                    return;
                }
                view_model.dynamic_animation_type().unwrap_or_default()
            };
            tracing::debug!("radio button selected");

            let reporter = view_model.clone();
            transition::report_completions::<RadioAnimation>(
                animation,
                window,
                cx,
                move |token| reporter.borrow_mut().set_completed_animation(token),
            );
            window.refresh();
            if let Some(handler) = on_change.as_ref() {
                (handler)(true, window, cx);
            }
        });
        row
    }
}
