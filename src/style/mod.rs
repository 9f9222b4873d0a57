use crate::tokens::{ColorToken, TextStyle};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Intent {
    #[default]
    Basic,
    Error,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ControlType {
    Checkbox,
    RadioButton,
    Toggle,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectionState {
    Selected,
    #[default]
    Unselected,
    Indeterminate,
}

impl SelectionState {
    pub const fn is_unselected(self) -> bool {
        matches!(self, Self::Unselected)
    }
}

impl From<bool> for SelectionState {
    fn from(value: bool) -> Self {
        if value {
            Self::Selected
        } else {
            Self::Unselected
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Contrast {
    #[default]
    Standard,
    Increased,
}

/// Typography and color of the optional text label next to a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleStyle {
    pub typography: TextStyle,
    pub color: ColorToken,
}
