use crate::style::Intent;
use crate::theme::Theme;
use crate::tokens::ColorToken;

use super::color::{GetColor, GetColorUseCase};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioStaticColors {
    pub hover: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioDynamicColors {
    pub border: ColorToken,
    pub dot: ColorToken,
}

pub trait GetRadioColors {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> RadioStaticColors;
    fn execute_dynamic(&self, theme: &dyn Theme, intent: Intent, is_on: bool)
    -> RadioDynamicColors;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetRadioColorsUseCase<C = GetColorUseCase> {
    get_color: C,
}

impl<C: GetColor> GetRadioColorsUseCase<C> {
    pub fn new(get_color: C) -> Self {
        Self { get_color }
    }
}

impl<C: GetColor> GetRadioColors for GetRadioColorsUseCase<C> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> RadioStaticColors {
        RadioStaticColors {
            hover: self.get_color.hover(theme, intent),
        }
    }

    fn execute_dynamic(
        &self,
        theme: &dyn Theme,
        intent: Intent,
        is_on: bool,
    ) -> RadioDynamicColors {
        let dot = if is_on {
            self.get_color.content(theme, intent)
        } else {
            ColorToken::CLEAR
        };
        RadioDynamicColors {
            border: self.get_color.border(theme, intent, is_on),
            dot,
        }
    }
}

pub trait GetRadioShowSelectedDot {
    fn execute(&self, is_selected: bool) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetRadioShowSelectedDotUseCase;

impl GetRadioShowSelectedDot for GetRadioShowSelectedDotUseCase {
    fn execute(&self, is_selected: bool) -> bool {
        is_selected
    }
}
