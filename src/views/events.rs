use gpui::SharedString;

use crate::style::SelectionState;

/// Emitted by every view after its value changed through user interaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueChanged;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckboxChanged {
    pub selection_state: SelectionState,
}

/// A radio button was selected. Radios never report being unselected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RadioSelected;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToggleChanged {
    pub is_on: bool,
}

/// Sorted selection list of a checkbox group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckboxGroupChanged {
    pub values: Vec<SharedString>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RadioGroupChanged {
    pub value: SharedString,
}
