use std::collections::BTreeSet;

use gpui::SharedString;

use super::registry;

/// One entry of a checkbox or radio button group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectionItem {
    pub value: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl SelectionItem {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub fn contains_value(values: &[SharedString], target: &SharedString) -> bool {
    values.iter().any(|value| value == target)
}

/// Selection list after tapping `item`, or `None` when the tap is ignored.
///
/// The result is sorted and free of duplicates.
pub fn toggled_values(values: &[SharedString], item: &SelectionItem) -> Option<Vec<SharedString>> {
    if item.disabled {
        return None;
    }
    let mut set = values.iter().cloned().collect::<BTreeSet<_>>();
    if !set.insert(item.value.clone()) {
        set.remove(&item.value);
    }
    Some(set.into_iter().collect())
}

/// New radio selection after tapping `item`, or `None` when nothing changes.
pub fn selected_value(current: Option<&SharedString>, item: &SelectionItem) -> Option<SharedString> {
    if item.disabled || current == Some(&item.value) {
        return None;
    }
    Some(item.value.clone())
}

/// Resolves a group value that is either controlled by the host or kept
/// between frames under `id`.
pub fn resolve<T: Clone + 'static>(id: &SharedString, controlled: Option<T>, default: T) -> T {
    match controlled {
        Some(value) => value,
        None => registry::state(id, || default).borrow().clone(),
    }
}

/// Stores an uncontrolled group value. Returns `false` for controlled groups.
pub fn apply<T: 'static>(id: &SharedString, controlled: bool, next: T) -> bool {
    if controlled {
        return false;
    }
    registry::replace(id, next);
    true
}
