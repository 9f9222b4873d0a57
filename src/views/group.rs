use std::collections::BTreeSet;

use gpui::{
    App, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, Window,
};

use crate::components::group_state::{self, SelectionItem};
use crate::components::{Checkbox, Radio, paint, registry};
use crate::id::{item_id, unique_id};
use crate::provider::SelectionProvider;
use crate::style::{Axis, Intent};
use crate::theme::ThemeRef;
use crate::view_model::{CheckboxViewModel, GroupViewModel, RadioViewModel};

use super::{CheckboxGroupChanged, RadioGroupChanged, ValueChanged};

/// Drops the registered view-model of one item.
type Evict = fn(&SharedString) -> bool;

/// Shared plumbing of both group views.
struct GroupFrame {
    id: SharedString,
    items: Vec<SelectionItem>,
    intent: Intent,
    enabled: bool,
    theme: Option<ThemeRef>,
    view_model: GroupViewModel,
    evict: Evict,
}

impl GroupFrame {
    fn new(id: SharedString, theme: ThemeRef, evict: Evict) -> Self {
        tracing::trace!(%id, "creating group view");
        Self {
            id,
            items: Vec::new(),
            intent: Intent::Basic,
            enabled: true,
            theme: None,
            view_model: GroupViewModel::new(theme, Axis::Vertical),
            evict,
        }
    }

    /// Replaces the items, dropping the item state of indices that no longer exist.
    fn set_items(&mut self, items: Vec<SelectionItem>) {
        self.evict_from(items.len());
        self.items = items;
    }

    fn evict_from(&self, first: usize) {
        for index in first..self.items.len() {
            (self.evict)(&item_id(&self.id, index));
        }
    }

    fn theme(&self, cx: &App) -> ThemeRef {
        self.theme
            .clone()
            .unwrap_or_else(|| SelectionProvider::theme(cx))
    }

    /// Brings the view-model in line with the provider and returns the layout.
    fn sync(&mut self, cx: &App) -> (ThemeRef, Axis, f32) {
        let theme = self.theme(cx);
        let is_accessibility_size = SelectionProvider::accessibility(cx).is_accessibility_size();
        self.view_model.set_theme(theme.clone());
        self.view_model
            .set_is_accessibility_size(is_accessibility_size);
        if !self.view_model.is_ready() {
            self.view_model.load(is_accessibility_size);
        }
        let axis = self
            .view_model
            .layout_axis()
            .unwrap_or(self.view_model.axis());
        (theme, axis, self.view_model.spacing().unwrap_or_default())
    }
}

impl Drop for GroupFrame {
    fn drop(&mut self) {
        tracing::trace!(id = %self.id, "dropping group view");
        self.evict_from(0);
    }
}

/// Checkbox group entity holding a sorted selection list.
pub struct CheckboxGroupView {
    frame: GroupFrame,
    values: Vec<SharedString>,
}

impl EventEmitter<CheckboxGroupChanged> for CheckboxGroupView {}
impl EventEmitter<ValueChanged> for CheckboxGroupView {}

impl CheckboxGroupView {
    pub fn new(items: impl IntoIterator<Item = SelectionItem>, cx: &App) -> Self {
        let mut frame = GroupFrame::new(
            unique_id("checkbox-group-view"),
            SelectionProvider::theme(cx),
            registry::remove::<CheckboxViewModel>,
        );
        frame.set_items(items.into_iter().collect());
        Self {
            frame,
            values: Vec::new(),
        }
    }

    pub fn view_model(&self) -> &GroupViewModel {
        &self.frame.view_model
    }

    pub fn values(&self) -> &[SharedString] {
        &self.values
    }

    pub fn items(&self) -> &[SelectionItem] {
        &self.frame.items
    }

    pub fn set_items(
        &mut self,
        items: impl IntoIterator<Item = SelectionItem>,
        cx: &mut Context<Self>,
    ) {
        self.frame.set_items(items.into_iter().collect());
        cx.notify();
    }

    /// Replaces the selection without emitting events.
    pub fn set_values(
        &mut self,
        values: impl IntoIterator<Item = SharedString>,
        cx: &mut Context<Self>,
    ) {
        self.values = values
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        cx.notify();
    }

    pub fn set_axis(&mut self, axis: Axis, cx: &mut Context<Self>) {
        self.frame.view_model.set_axis(axis);
        cx.notify();
    }

    pub fn set_theme(&mut self, theme: Option<ThemeRef>, cx: &mut Context<Self>) {
        self.frame.theme = theme;
        cx.notify();
    }

    pub fn set_intent(&mut self, intent: Intent, cx: &mut Context<Self>) {
        self.frame.intent = intent;
        cx.notify();
    }

    pub fn set_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.frame.enabled = enabled;
        cx.notify();
    }

    pub(super) fn toggle_item(&mut self, index: usize, cx: &mut Context<Self>) {
        if !self.frame.enabled {
            return;
        }
        let Some(next) = self
            .frame
            .items
            .get(index)
            .and_then(|item| group_state::toggled_values(&self.values, item))
        else {
            return;
        };
        tracing::debug!(id = %self.frame.id, ?next, "checkbox group changed");
        self.values = next.clone();
        cx.emit(CheckboxGroupChanged { values: next });
        cx.emit(ValueChanged);
        cx.notify();
    }
}

impl Render for CheckboxGroupView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (theme, axis, spacing) = self.frame.sync(cx);
        let view = cx.entity().downgrade();

        let children = self
            .frame
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let view = view.clone();
                Checkbox::new(item.label.clone())
                    .with_id(item_id(&self.frame.id, index))
                    .checked(group_state::contains_value(&self.values, &item.value))
                    .intent(self.frame.intent)
                    .disabled(!self.frame.enabled || item.disabled)
                    .theme(theme.clone())
                    .on_change(move |_, _, cx| {
                        view.update(cx, |view, cx| view.toggle_item(index, cx)).ok();
                    })
            })
            .collect::<Vec<_>>();

        paint::group_stack(axis, spacing)
            .id(self.frame.id.clone())
            .children(children)
    }
}

/// Radio group entity; at most one item is selected.
pub struct RadioGroupView {
    frame: GroupFrame,
    value: Option<SharedString>,
}

impl EventEmitter<RadioGroupChanged> for RadioGroupView {}
impl EventEmitter<ValueChanged> for RadioGroupView {}

impl RadioGroupView {
    pub fn new(items: impl IntoIterator<Item = SelectionItem>, cx: &App) -> Self {
        let mut frame = GroupFrame::new(
            unique_id("radio-group-view"),
            SelectionProvider::theme(cx),
            registry::remove::<RadioViewModel>,
        );
        frame.set_items(items.into_iter().collect());
        Self { frame, value: None }
    }

    pub fn view_model(&self) -> &GroupViewModel {
        &self.frame.view_model
    }

    pub fn value(&self) -> Option<&SharedString> {
        self.value.as_ref()
    }

    pub fn items(&self) -> &[SelectionItem] {
        &self.frame.items
    }

    pub fn set_items(
        &mut self,
        items: impl IntoIterator<Item = SelectionItem>,
        cx: &mut Context<Self>,
    ) {
        self.frame.set_items(items.into_iter().collect());
        cx.notify();
    }

    /// Replaces the selection without emitting events.
    pub fn set_value(&mut self, value: Option<SharedString>, cx: &mut Context<Self>) {
        self.value = value;
        cx.notify();
    }

    pub fn set_axis(&mut self, axis: Axis, cx: &mut Context<Self>) {
        self.frame.view_model.set_axis(axis);
        cx.notify();
    }

    pub fn set_theme(&mut self, theme: Option<ThemeRef>, cx: &mut Context<Self>) {
        self.frame.theme = theme;
        cx.notify();
    }

    pub fn set_intent(&mut self, intent: Intent, cx: &mut Context<Self>) {
        self.frame.intent = intent;
        cx.notify();
    }

    pub fn set_enabled(&mut self, enabled: bool, cx: &mut Context<Self>) {
        self.frame.enabled = enabled;
        cx.notify();
    }

    pub(super) fn select_item(&mut self, index: usize, cx: &mut Context<Self>) {
        if !self.frame.enabled {
            return;
        }
        let Some(next) = self
            .frame
            .items
            .get(index)
            .and_then(|item| group_state::selected_value(self.value.as_ref(), item))
        else {
            return;
        };
        tracing::debug!(id = %self.frame.id, value = %next, "radio group changed");
        self.value = Some(next.clone());
        cx.emit(RadioGroupChanged { value: next });
        cx.emit(ValueChanged);
        cx.notify();
    }
}

impl Render for RadioGroupView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (theme, axis, spacing) = self.frame.sync(cx);
        let view = cx.entity().downgrade();

        let children = self
            .frame
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let view = view.clone();
                Radio::new(item.label.clone())
                    .with_id(item_id(&self.frame.id, index))
                    .selected(self.value.as_ref() == Some(&item.value))
                    .intent(self.frame.intent)
                    .disabled(!self.frame.enabled || item.disabled)
                    .theme(theme.clone())
                    .on_change(move |_, _, cx| {
                        view.update(cx, |view, cx| view.select_item(index, cx)).ok();
                    })
            })
            .collect::<Vec<_>>();

        paint::group_stack(axis, spacing)
            .id(self.frame.id.clone())
            .children(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::CalmTheme;

    fn frame(id: &'static str, evict: Evict, len: usize) -> GroupFrame {
        let mut frame = GroupFrame::new(id.into(), CalmTheme::default().into_ref(), evict);
        frame.set_items(
            (0..len)
                .map(|index| SelectionItem::new(format!("v{index}"), format!("Item {index}")))
                .collect(),
        );
        frame
    }

    fn register_checkboxes(frame: &GroupFrame) {
        for index in 0..frame.items.len() {
            registry::state(&item_id(&frame.id, index), || {
                CheckboxViewModel::new(
                    CalmTheme::default().into_ref(),
                    Intent::Basic,
                    crate::style::SelectionState::Unselected,
                )
            });
        }
    }

    #[test]
    fn shrinking_items_drops_removed_item_state() {
        let mut frame = frame("group-shrink", registry::remove::<CheckboxViewModel>, 3);
        register_checkboxes(&frame);

        frame.set_items(vec![SelectionItem::new("v0", "Item 0")]);
        assert!(registry::contains::<CheckboxViewModel>(&item_id("group-shrink", 0)));
        assert!(!registry::contains::<CheckboxViewModel>(&item_id("group-shrink", 1)));
        assert!(!registry::contains::<CheckboxViewModel>(&item_id("group-shrink", 2)));
    }

    #[test]
    fn dropping_group_drops_item_state() {
        let frame = frame("group-drop", registry::remove::<CheckboxViewModel>, 2);
        register_checkboxes(&frame);
        assert!(registry::contains::<CheckboxViewModel>(&item_id("group-drop", 1)));

        drop(frame);
        assert!(!registry::contains::<CheckboxViewModel>(&item_id("group-drop", 0)));
        assert!(!registry::contains::<CheckboxViewModel>(&item_id("group-drop", 1)));
    }

    #[test]
    fn radio_frames_only_drop_radio_state() {
        let frame = frame("group-radio", registry::remove::<RadioViewModel>, 1);
        register_checkboxes(&frame);
        registry::state(&item_id("group-radio", 0), || {
            RadioViewModel::new(CalmTheme::default().into_ref(), Intent::Basic, false)
        });

        drop(frame);
        assert!(!registry::contains::<RadioViewModel>(&item_id("group-radio", 0)));
        assert!(registry::contains::<CheckboxViewModel>(&item_id("group-radio", 0)));
    }
}
