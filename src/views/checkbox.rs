use gpui::{
    App, ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div,
};

use crate::accessibility::{accessibility_label, checkbox_accessibility_value};
use crate::components::paint;
use crate::icon::IconRegistry;
use crate::id::unique_id;
use crate::provider::SelectionProvider;
use crate::style::{Intent, SelectionState};
use crate::theme::ThemeRef;
use crate::view_model::{CheckboxAnimation, CheckboxViewModel};

use super::{CheckboxChanged, ValueChanged, report_completions};

/// Checkbox entity. Taps cycle the selection and emit [`CheckboxChanged`].
pub struct CheckboxView {
    id: SharedString,
    label: Option<SharedString>,
    accessibility_label: Option<SharedString>,
    theme: Option<ThemeRef>,
    view_model: CheckboxViewModel,
    icons: IconRegistry,
}

impl EventEmitter<CheckboxChanged> for CheckboxView {}
impl EventEmitter<ValueChanged> for CheckboxView {}

impl CheckboxView {
    pub fn new(label: impl Into<SharedString>, cx: &App) -> Self {
        Self {
            id: unique_id("checkbox-view"),
            label: Some(label.into()),
            accessibility_label: None,
            theme: None,
            view_model: CheckboxViewModel::new(
                SelectionProvider::theme(cx),
                Intent::Basic,
                SelectionState::Unselected,
            ),
            icons: IconRegistry::new(),
        }
    }

    pub fn view_model(&self) -> &CheckboxViewModel {
        &self.view_model
    }

    pub fn selection_state(&self) -> SelectionState {
        self.view_model.selection_state()
    }

    pub fn accessibility_value(&self) -> SharedString {
        checkbox_accessibility_value(self.view_model.selection_state())
    }

    pub fn accessibility_label(&self) -> SharedString {
        accessibility_label(
            self.accessibility_label.as_ref(),
            self.label.as_ref(),
            "Checkbox",
        )
    }

    /// Name announced instead of the visible label.
    pub fn set_accessibility_label(&mut self, label: Option<SharedString>) {
        self.accessibility_label = label;
    }

    /// Overrides the provider theme; `None` follows the provider again.
    pub fn set_theme(&mut self, theme: Option<ThemeRef>, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }

    pub fn set_label(&mut self, label: Option<SharedString>, cx: &mut Context<Self>) {
        self.label = label;
        cx.notify();
    }

    pub fn set_intent(&mut self, intent: Intent, cx: &mut Context<Self>) {
        self.view_model.set_intent(intent);
        cx.notify();
    }

    pub fn set_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.view_model.set_is_enabled(enabled);
        cx.notify();
    }

    /// Sets the selection without emitting events.
    pub fn set_selection_state(
        &mut self,
        selection_state: SelectionState,
        animated: bool,
        cx: &mut Context<Self>,
    ) {
        if self.view_model.selection_state() == selection_state {
            return;
        }
        self.view_model.set_selection_state(selection_state, animated);
        self.schedule_completions(cx);
        cx.notify();
    }

    fn complete(&mut self, token: CheckboxAnimation) {
        self.view_model.set_completed_animation(token);
    }

    fn schedule_completions(&mut self, cx: &mut Context<Self>) {
        if let Some(animation) = self.view_model.dynamic_animation_type() {
            report_completions(self, animation, cx, Self::complete);
        }
    }

    pub(super) fn click(&mut self, cx: &mut Context<Self>) {
        let before = self.view_model.selection_state();
        self.view_model.toggle();
        let selection_state = self.view_model.selection_state();
        if selection_state == before {
            return;
        }
        tracing::debug!(id = %self.id, ?selection_state, "checkbox view toggled");

        self.schedule_completions(cx);
        cx.emit(CheckboxChanged { selection_state });
        cx.emit(ValueChanged);
        cx.notify();
    }
}

impl Render for CheckboxView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| SelectionProvider::theme(cx));
        let accessibility = SelectionProvider::accessibility(cx);
        self.view_model.set_theme(theme);
        self.view_model
            .set_is_reduce_motion_enabled(accessibility.reduce_motion);
        if !self.view_model.is_ready() {
            self.view_model.load(accessibility.reduce_motion);
        }

        let control = paint::checkbox_box(&self.id, &self.view_model, &self.icons);
        let content = paint::label_row(
            &self.id,
            control,
            self.label.clone(),
            None,
            &self.view_model,
        );
        let row = div().id(self.id.clone()).child(content);
        if !self.view_model.is_enabled() {
            return row.cursor_default();
        }
        row.cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.click(cx)))
    }
}
