use crate::style::{Contrast, Intent};
use crate::theme::Theme;
use crate::tokens::ColorToken;

use super::color::{GetColor, GetColorUseCase};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleStaticColors {
    pub thumb: ColorToken,
    pub hover: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleDynamicColors {
    pub track: ColorToken,
    pub icon: ColorToken,
}

/// Sides of the track left empty by the thumb.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ToggleSpace {
    pub left: bool,
    pub right: bool,
}

impl ToggleSpace {
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
}

pub trait GetToggleColors {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> ToggleStaticColors;
    fn execute_dynamic(&self, theme: &dyn Theme, intent: Intent, is_on: bool)
    -> ToggleDynamicColors;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetToggleColorsUseCase<C = GetColorUseCase> {
    get_color: C,
}

impl<C: GetColor> GetToggleColorsUseCase<C> {
    pub fn new(get_color: C) -> Self {
        Self { get_color }
    }
}

impl<C: GetColor> GetToggleColors for GetToggleColorsUseCase<C> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> ToggleStaticColors {
        ToggleStaticColors {
            thumb: theme.colors().base.surface,
            hover: self.get_color.hover(theme, intent),
        }
    }

    fn execute_dynamic(
        &self,
        theme: &dyn Theme,
        intent: Intent,
        is_on: bool,
    ) -> ToggleDynamicColors {
        let opacity = if is_on {
            theme.dims().none
        } else {
            theme.dims().dim2
        };
        let color = self.get_color.content(theme, intent).opacity(opacity);
        ToggleDynamicColors {
            track: color,
            icon: color,
        }
    }
}

pub trait GetToggleShowSpace {
    fn execute(&self, is_on: bool) -> ToggleSpace;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetToggleShowSpaceUseCase;

impl GetToggleShowSpace for GetToggleShowSpaceUseCase {
    fn execute(&self, is_on: bool) -> ToggleSpace {
        if is_on {
            ToggleSpace::LEFT
        } else {
            ToggleSpace::RIGHT
        }
    }
}

/// On/off glyphs inside the thumb, shown when either accessibility signal asks for them.
pub trait GetToggleIsIcon {
    fn execute(&self, is_on_off_switch_labels_enabled: bool, contrast: Contrast) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetToggleIsIconUseCase;

impl GetToggleIsIcon for GetToggleIsIconUseCase {
    fn execute(&self, is_on_off_switch_labels_enabled: bool, contrast: Contrast) -> bool {
        is_on_off_switch_labels_enabled || contrast == Contrast::Increased
    }
}
