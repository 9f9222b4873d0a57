use std::rc::Rc;

use gpui::{
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Window,
};

use crate::id::{auto_id, item_id};
use crate::provider::SelectionProvider;
use crate::style::{Axis, Intent};
use crate::theme::ThemeRef;
use crate::view_model::GroupViewModel;

use super::group_state::{self, SelectionItem};
use super::{Checkbox, Radio, paint, registry};

type CheckboxGroupChangeHandler = Rc<dyn Fn(Vec<SharedString>, &mut Window, &mut gpui::App)>;
type RadioGroupChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

/// Loads or refreshes the layout state of a group and returns its axis and spacing.
fn group_layout(id: &SharedString, theme: &ThemeRef, axis: Axis, cx: &gpui::App) -> (Axis, f32) {
    let accessibility = SelectionProvider::accessibility(cx);
    let view_model = registry::state(id, || GroupViewModel::new(theme.clone(), axis));
    let mut view_model = view_model.borrow_mut();
    view_model.set_theme(theme.clone());
    view_model.set_axis(axis);
    view_model.set_is_accessibility_size(accessibility.is_accessibility_size());
    if !view_model.is_ready() {
        view_model.load(accessibility.is_accessibility_size());
    }
    (
        view_model.layout_axis().unwrap_or(axis),
        view_model.spacing().unwrap_or_default(),
    )
}

/// Several checkboxes sharing one sorted selection list.
#[derive(IntoElement)]
pub struct CheckboxGroup {
    id: SharedString,
    items: Vec<SelectionItem>,
    values: Option<Vec<SharedString>>,
    default_values: Vec<SharedString>,
    axis: Axis,
    intent: Intent,
    disabled: bool,
    theme: Option<ThemeRef>,
    on_change: Option<CheckboxGroupChangeHandler>,
}

impl CheckboxGroup {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: auto_id("checkbox-group"),
            items: Vec::new(),
            values: None,
            default_values: Vec::new(),
            axis: Axis::Vertical,
            intent: Intent::Basic,
            disabled: false,
            theme: None,
            on_change: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn item(mut self, item: SelectionItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = SelectionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = SharedString>) -> Self {
        self.values = Some(values.into_iter().collect());
        self
    }

    pub fn default_values(mut self, values: impl IntoIterator<Item = SharedString>) -> Self {
        self.default_values = values.into_iter().collect();
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
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
        handler: impl Fn(Vec<SharedString>, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for CheckboxGroup {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme.unwrap_or_else(|| SelectionProvider::theme(cx));
        let (axis, spacing) = group_layout(&self.id, &theme, self.axis, cx);
        let is_controlled = self.values.is_some();
        let values = group_state::resolve(&self.id, self.values, self.default_values);

        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let checked = group_state::contains_value(&values, &item.value);
                let current = values.clone();
                let group_id = self.id.clone();
                let on_change = self.on_change.clone();
                Checkbox::new(item.label.clone())
                    .with_id(item_id(&self.id, index))
                    .checked(checked)
                    .intent(self.intent)
                    .disabled(self.disabled || item.disabled)
                    .theme(theme.clone())
                    .on_change(move |_, window, cx| {
                        let Some(next) = group_state::toggled_values(&current, &item) else {
                            return;
                        };
                        if group_state::apply(&group_id, is_controlled, next.clone()) {
                            window.refresh();
                        }
                        if let Some(handler) = on_change.as_ref() {
                            (handler)(next, window, cx);
                        }
                    })
            })
            .collect::<Vec<_>>();

        paint::group_stack(axis, spacing)
            .id(self.id.clone())
            .children(items)
    }
}

/// Radio buttons of which at most one is selected.
#[derive(IntoElement)]
pub struct RadioGroup {
    id: SharedString,
    items: Vec<SelectionItem>,
    value: Option<Option<SharedString>>,
    default_value: Option<SharedString>,
    axis: Axis,
    intent: Intent,
    disabled: bool,
    theme: Option<ThemeRef>,
    on_change: Option<RadioGroupChangeHandler>,
}

impl RadioGroup {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: auto_id("radio-group"),
            items: Vec::new(),
            value: None,
            default_value: None,
            axis: Axis::Vertical,
            intent: Intent::Basic,
            disabled: false,
            theme: None,
            on_change: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn item(mut self, item: SelectionItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = SelectionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn value(mut self, value: Option<SharedString>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
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
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = self.theme.unwrap_or_else(|| SelectionProvider::theme(cx));
        let (axis, spacing) = group_layout(&self.id, &theme, self.axis, cx);
        let is_controlled = self.value.is_some();
        let selected = group_state::resolve(&self.id, self.value, self.default_value);

        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = selected.as_ref() == Some(&item.value);
                let current = selected.clone();
                let group_id = self.id.clone();
                let on_change = self.on_change.clone();
                Radio::new(item.label.clone())
                    .with_id(item_id(&self.id, index))
                    .selected(is_selected)
                    .intent(self.intent)
                    .disabled(self.disabled || item.disabled)
                    .theme(theme.clone())
                    .on_change(move |_, window, cx| {
                        let Some(next) = group_state::selected_value(current.as_ref(), &item)
                        else {
                            return;
                        };
                        if group_state::apply(&group_id, is_controlled, Some(next.clone())) {
                            window.refresh();
                        }
                        if let Some(handler) = on_change.as_ref() {
                            (handler)(next, window, cx);
                        }
                    })
            })
            .collect::<Vec<_>>();

        paint::group_stack(axis, spacing)
            .id(self.id.clone())
            .children(items)
    }
}
