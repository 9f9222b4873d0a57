//! Pure derivations from theme and control state to presentation values.
//!
//! Every derivation is a trait with a single responsibility plus a unit struct
//! implementing it. View-models hold them as trait objects so tests can count
//! or replace individual derivations.

mod animation;
mod appearance;
mod checkbox;
mod color;
mod radio;
mod spacing;
mod toggle;

#[cfg(test)]
pub(crate) mod spies;

pub use animation::{
    GetAnimationType, GetAnimationTypeUseCase, ResetAnimation, ResetAnimationUseCase,
};
pub use appearance::{
    GetContentRadius, GetContentRadiusUseCase, GetDim, GetDimUseCase, GetShowHiddenEmptyLabel,
    GetShowHiddenEmptyLabelUseCase, GetTitleStyle, GetTitleStyleUseCase,
};
pub use checkbox::{
    CheckboxDynamicColors, CheckboxIcon, CheckboxStaticColors, CheckboxToggleOpacities,
    GetCheckboxColors, GetCheckboxColorsUseCase, GetCheckboxIsIcon, GetCheckboxIsIconUseCase,
    GetCheckboxNewSelectedValue, GetCheckboxNewSelectedValueUseCase, GetCheckboxToggleOpacities,
    GetCheckboxToggleOpacitiesUseCase,
};
pub use color::{GetColor, GetColorUseCase};
pub use radio::{
    GetRadioColors, GetRadioColorsUseCase, GetRadioShowSelectedDot,
    GetRadioShowSelectedDotUseCase, RadioDynamicColors, RadioStaticColors,
};
pub use spacing::{
    GetGroupAxis, GetGroupAxisUseCase, GetGroupSpacing, GetGroupSpacingUseCase, GetSpacing,
    GetSpacingUseCase,
};
pub use toggle::{
    GetToggleColors, GetToggleColorsUseCase, GetToggleIsIcon, GetToggleIsIconUseCase,
    GetToggleShowSpace, GetToggleShowSpaceUseCase, ToggleDynamicColors, ToggleSpace,
    ToggleStaticColors,
};
