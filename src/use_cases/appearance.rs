use crate::style::{ControlType, TitleStyle};
use crate::theme::Theme;

pub trait GetContentRadius {
    fn execute(&self, theme: &dyn Theme, control_type: ControlType) -> f32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetContentRadiusUseCase;

impl GetContentRadius for GetContentRadiusUseCase {
    fn execute(&self, theme: &dyn Theme, control_type: ControlType) -> f32 {
        let radius = theme.border().radius;
        match control_type {
            ControlType::Checkbox => radius.small,
            ControlType::RadioButton | ControlType::Toggle => radius.full,
        }
    }
}

pub trait GetDim {
    fn execute(&self, theme: &dyn Theme, is_enabled: bool) -> f32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetDimUseCase;

impl GetDim for GetDimUseCase {
    fn execute(&self, theme: &dyn Theme, is_enabled: bool) -> f32 {
        if is_enabled {
            theme.dims().none
        } else {
            theme.dims().dim3
        }
    }
}

pub trait GetTitleStyle {
    fn execute(&self, theme: &dyn Theme) -> TitleStyle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetTitleStyleUseCase;

impl GetTitleStyle for GetTitleStyleUseCase {
    fn execute(&self, theme: &dyn Theme) -> TitleStyle {
        TitleStyle {
            typography: theme.typography().body1,
            color: theme.colors().base.on_surface,
        }
    }
}

/// A custom label still reserves an empty, hidden text label so accessibility
/// and layout keep a text anchor.
pub trait GetShowHiddenEmptyLabel {
    fn execute(&self, is_custom_label: bool) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetShowHiddenEmptyLabelUseCase;

impl GetShowHiddenEmptyLabel for GetShowHiddenEmptyLabelUseCase {
    fn execute(&self, is_custom_label: bool) -> bool {
        is_custom_label
    }
}
