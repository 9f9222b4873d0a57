use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::icon::IconRegistry;
use crate::id::auto_id;
use crate::provider::SelectionProvider;
use crate::style::{Intent, SelectionState};
use crate::theme::ThemeRef;
use crate::view_model::{CheckboxAnimation, CheckboxViewModel};

use super::{paint, registry, transition};

type CheckboxChangeHandler = Rc<dyn Fn(SelectionState, &mut Window, &mut gpui::App)>;

/// Declarative checkbox. Its view-model survives between frames under its id.
#[derive(IntoElement)]
pub struct Checkbox {
    id: SharedString,
    label: Option<SharedString>,
    custom_label: Option<AnyElement>,
    selection_state: Option<SelectionState>,
    default_selection_state: SelectionState,
    intent: Intent,
    disabled: bool,
    theme: Option<ThemeRef>,
    on_change: Option<CheckboxChangeHandler>,
}

impl Checkbox {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: auto_id("checkbox"),
            label: Some(label.into()),
            custom_label: None,
            selection_state: None,
            default_selection_state: SelectionState::Unselected,
            intent: Intent::Basic,
            disabled: false,
            theme: None,
            on_change: None,
        }
    }

    /// Checkbox whose label is drawn by the caller.
    #[track_caller]
    pub fn custom(label: impl IntoElement) -> Self {
        let mut checkbox = Self::new(SharedString::default());
        checkbox.label = None;
        checkbox.custom_label = Some(label.into_any_element());
        checkbox
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    /// Makes the checkbox controlled by the host.
    pub fn selection_state(mut self, selection_state: SelectionState) -> Self {
        self.selection_state = Some(selection_state);
        self
    }

    pub fn checked(self, checked: bool) -> Self {
        self.selection_state(checked.into())
    }

    pub fn default_selection_state(mut self, selection_state: SelectionState) -> Self {
        self.default_selection_state = selection_state;
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

    pub fn on_change(
        mut self,
        handler: impl Fn(SelectionState, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme.unwrap_or_else(|| SelectionProvider::theme(cx));
        let accessibility = SelectionProvider::accessibility(cx);
        let initial = self.selection_state.unwrap_or(self.default_selection_state);
        let view_model = registry::state(&self.id, || {
            CheckboxViewModel::new(theme.clone(), self.intent, initial)
        });

        {
            let mut view_model = view_model.borrow_mut();
            view_model.set_theme(theme);
            view_model.set_intent(self.intent);
            view_model.set_is_enabled(!self.disabled);
            view_model.set_is_custom_label(self.custom_label.is_some());
            view_model.set_is_reduce_motion_enabled(accessibility.reduce_motion);
            if let Some(selection_state) = self.selection_state {
                view_model.set_selection_state(selection_state, false);
            }
            if !view_model.is_ready() {
                view_model.load(accessibility.reduce_motion);
            }
        }

        let (content, rendered) = {
            let view_model = view_model.borrow();
            let control = paint::checkbox_box(&self.id, &view_model, &IconRegistry::new());
            (
                paint::label_row(&self.id, control, self.label, self.custom_label, &view_model),
                view_model.selection_state(),
            )
        };

        let mut row = div().id(self.id.clone()).child(content);
        if self.disabled {
            return row.cursor_default();
        }

        let on_change = self.on_change.clone();
        row = row.cursor_pointer().on_click(move |_, window, cx| {
            // Checkboxes sharing an id share a view-model; tap the state this one painted.
            let (next, animation) = {
                let mut view_model = view_model.borrow_mut();
                view_model.set_is_enabled(true);
                let Some(next) = view_model.toggle_from(rendered) else {
                    return;
                };
                (next, view_model.dynamic_animation_type().unwrap_or_default())
            };
            tracing::debug!(?next, "checkbox toggled");

            let reporter = view_model.clone();
            transition::report_completions::<CheckboxAnimation>(
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
