use gpui::{
    App, ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div,
};

use crate::accessibility::{accessibility_label, accessibility_value};
use crate::components::paint;
use crate::id::unique_id;
use crate::provider::SelectionProvider;
use crate::style::Intent;
use crate::theme::ThemeRef;
use crate::view_model::{RadioAnimation, RadioViewModel};

use super::{RadioSelected, ValueChanged, report_completions};

/// Radio button entity. A tap selects it; only the host can unselect it.
pub struct RadioView {
    id: SharedString,
    label: Option<SharedString>,
    accessibility_label: Option<SharedString>,
    theme: Option<ThemeRef>,
    view_model: RadioViewModel,
}

impl EventEmitter<RadioSelected> for RadioView {}
impl EventEmitter<ValueChanged> for RadioView {}

impl RadioView {
    pub fn new(label: impl Into<SharedString>, cx: &App) -> Self {
        Self {
            id: unique_id("radio-view"),
            label: Some(label.into()),
            accessibility_label: None,
            theme: None,
            view_model: RadioViewModel::new(SelectionProvider::theme(cx), Intent::Basic, false),
        }
    }

    pub fn view_model(&self) -> &RadioViewModel {
        &self.view_model
    }

    pub fn is_selected(&self) -> bool {
        self.view_model.is_selected()
    }

    pub fn accessibility_value(&self) -> SharedString {
        accessibility_value(self.view_model.is_selected())
    }

    pub fn accessibility_label(&self) -> SharedString {
        accessibility_label(
            self.accessibility_label.as_ref(),
            self.label.as_ref(),
            "Radio button",
        )
    }

    /// Name announced instead of the visible label.
    pub fn set_accessibility_label(&mut self, label: Option<SharedString>) {
        self.accessibility_label = label;
    }

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

    pub fn set_selected(&mut self, is_selected: bool, animated: bool, cx: &mut Context<Self>) {
        if self.view_model.is_selected() == is_selected {
            return;
        }
        self.view_model.set_is_selected(is_selected, animated);
        self.schedule_completions(cx);
        cx.notify();
    }

    fn complete(&mut self, token: RadioAnimation) {
        self.view_model.set_completed_animation(token);
    }

    fn schedule_completions(&mut self, cx: &mut Context<Self>) {
        if let Some(animation) = self.view_model.dynamic_animation_type() {
            report_completions(self, animation, cx, Self::complete);
        }
    }

    pub(super) fn click(&mut self, cx: &mut Context<Self>) {
        if !self.view_model.is_enabled() || !self.view_model.toggle_if_possible() {
            return;
        }
        tracing::debug!(id = %self.id, "radio view selected");

        self.schedule_completions(cx);
        cx.emit(RadioSelected);
        cx.emit(ValueChanged);
        cx.notify();
    }
}

impl Render for RadioView {
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

        let control = paint::radio_circle(&self.id, &self.view_model);
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
