use crate::style::Axis;
use crate::theme::Theme;

/// Distance between a control and its label.
pub trait GetSpacing {
    fn execute(&self, theme: &dyn Theme) -> f32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetSpacingUseCase;

impl GetSpacing for GetSpacingUseCase {
    fn execute(&self, theme: &dyn Theme) -> f32 {
        theme.layout().spacing.medium
    }
}

/// Distance between two items of a group.
pub trait GetGroupSpacing {
    fn execute(&self, theme: &dyn Theme, axis: Axis, is_accessibility_size: bool) -> f32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetGroupSpacingUseCase;

impl GetGroupSpacing for GetGroupSpacingUseCase {
    fn execute(&self, theme: &dyn Theme, axis: Axis, is_accessibility_size: bool) -> f32 {
        let spacing = theme.layout().spacing;
        match axis {
            Axis::Horizontal if !is_accessibility_size => spacing.x_large,
            Axis::Horizontal | Axis::Vertical => spacing.large,
        }
    }
}

/// Accessibility text sizes collapse horizontal groups to a vertical stack.
pub trait GetGroupAxis {
    fn execute(&self, axis: Axis, is_accessibility_size: bool) -> Axis;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetGroupAxisUseCase;

impl GetGroupAxis for GetGroupAxisUseCase {
    fn execute(&self, axis: Axis, is_accessibility_size: bool) -> Axis {
        if is_accessibility_size {
            Axis::Vertical
        } else {
            axis
        }
    }
}
