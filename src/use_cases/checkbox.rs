use crate::style::{Intent, SelectionState};
use crate::theme::Theme;
use crate::tokens::ColorToken;

use super::color::{GetColor, GetColorUseCase};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxStaticColors {
    pub icon: ColorToken,
    pub hover: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxDynamicColors {
    pub background: ColorToken,
    pub border: ColorToken,
}

/// Crossfade weights of the filled box and the outlined box; always one of
/// the two is fully visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckboxToggleOpacities {
    pub background: f32,
    pub border: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CheckboxIcon {
    Check,
    Indeterminate,
}

impl CheckboxIcon {
    pub const fn for_state(selection_state: SelectionState) -> Option<Self> {
        match selection_state {
            SelectionState::Selected => Some(Self::Check),
            SelectionState::Indeterminate => Some(Self::Indeterminate),
            SelectionState::Unselected => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Indeterminate => "indeterminate",
        }
    }
}

pub trait GetCheckboxColors {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> CheckboxStaticColors;
    fn execute_dynamic(
        &self,
        theme: &dyn Theme,
        intent: Intent,
        selection_state: SelectionState,
    ) -> CheckboxDynamicColors;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetCheckboxColorsUseCase<C = GetColorUseCase> {
    get_color: C,
}

impl<C: GetColor> GetCheckboxColorsUseCase<C> {
    pub fn new(get_color: C) -> Self {
        Self { get_color }
    }
}

impl<C: GetColor> GetCheckboxColors for GetCheckboxColorsUseCase<C> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> CheckboxStaticColors {
        CheckboxStaticColors {
            icon: self.get_color.on_content(theme, intent),
            hover: self.get_color.hover(theme, intent),
        }
    }

    fn execute_dynamic(
        &self,
        theme: &dyn Theme,
        intent: Intent,
        selection_state: SelectionState,
    ) -> CheckboxDynamicColors {
        let is_selected = !selection_state.is_unselected();
        let background = if is_selected {
            self.get_color.content(theme, intent)
        } else {
            ColorToken::CLEAR
        };
        CheckboxDynamicColors {
            background,
            border: self.get_color.border(theme, intent, is_selected),
        }
    }
}

pub trait GetCheckboxIsIcon {
    fn execute(&self, selection_state: SelectionState) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetCheckboxIsIconUseCase;

impl GetCheckboxIsIcon for GetCheckboxIsIconUseCase {
    fn execute(&self, selection_state: SelectionState) -> bool {
        !selection_state.is_unselected()
    }
}

/// Next state after a user tap, or `None` when the tap must be ignored.
pub trait GetCheckboxNewSelectedValue {
    fn execute(&self, selection_state: SelectionState, is_enabled: bool)
    -> Option<SelectionState>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetCheckboxNewSelectedValueUseCase;

impl GetCheckboxNewSelectedValue for GetCheckboxNewSelectedValueUseCase {
    fn execute(
        &self,
        selection_state: SelectionState,
        is_enabled: bool,
    ) -> Option<SelectionState> {
        if !is_enabled {
            return None;
        }
        Some(match selection_state {
            SelectionState::Selected => SelectionState::Unselected,
            SelectionState::Unselected | SelectionState::Indeterminate => {
                SelectionState::Selected
            }
        })
    }
}

pub trait GetCheckboxToggleOpacities {
    fn execute(&self, selection_state: SelectionState) -> CheckboxToggleOpacities;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetCheckboxToggleOpacitiesUseCase;

impl GetCheckboxToggleOpacities for GetCheckboxToggleOpacitiesUseCase {
    fn execute(&self, selection_state: SelectionState) -> CheckboxToggleOpacities {
        if selection_state.is_unselected() {
            CheckboxToggleOpacities {
                background: 0.0,
                border: 1.0,
            }
        } else {
            CheckboxToggleOpacities {
                background: 1.0,
                border: 0.0,
            }
        }
    }
}
