use std::cell::RefCell;
use std::rc::Rc;

use crate::motion::AnimationType;
use crate::style::{Axis, Contrast, ControlType, Intent, SelectionState, TitleStyle};
use crate::theme::Theme;
use crate::view_model::{
    AnimationBookkeeping, AnimationToken, CheckboxUseCases, GroupUseCases, RadioUseCases,
    SelectionUseCases, ToggleUseCases,
};

use super::*;

/// Shared record of derivation calls, in call order.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<&'static str>>>);

impl CallLog {
    pub(crate) fn record(&self, name: &'static str) {
        self.0.borrow_mut().push(name);
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|entry| **entry == name).count()
    }

    pub(crate) fn total(&self) -> usize {
        self.0.borrow().len()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Forwards to the real derivation and records the call under `name`.
pub(crate) struct Spy<T> {
    inner: T,
    name: &'static str,
    log: CallLog,
}

impl<T> Spy<T> {
    pub(crate) fn new(inner: T, name: &'static str, log: &CallLog) -> Self {
        Self {
            inner,
            name,
            log: log.clone(),
        }
    }

    fn hit(&self) -> &T {
        self.log.record(self.name);
        &self.inner
    }
}

impl<T: GetAnimationType> GetAnimationType for Spy<T> {
    fn execute(&self, is_reduce_motion_enabled: bool) -> AnimationType {
        self.hit().execute(is_reduce_motion_enabled)
    }

    fn execute_with_animated(
        &self,
        animated: bool,
        is_reduce_motion_enabled: bool,
    ) -> AnimationType {
        self.log.record("get_dynamic_animation_type");
        self.inner
            .execute_with_animated(animated, is_reduce_motion_enabled)
    }
}

impl<A: AnimationToken, T: ResetAnimation<A>> ResetAnimation<A> for Spy<T> {
    fn execute(&self, bookkeeping: &mut AnimationBookkeeping<A>) {
        self.hit().execute(bookkeeping);
    }
}

impl<T: GetContentRadius> GetContentRadius for Spy<T> {
    fn execute(&self, theme: &dyn Theme, control_type: ControlType) -> f32 {
        self.hit().execute(theme, control_type)
    }
}

impl<T: GetDim> GetDim for Spy<T> {
    fn execute(&self, theme: &dyn Theme, is_enabled: bool) -> f32 {
        self.hit().execute(theme, is_enabled)
    }
}

impl<T: GetSpacing> GetSpacing for Spy<T> {
    fn execute(&self, theme: &dyn Theme) -> f32 {
        self.hit().execute(theme)
    }
}

impl<T: GetTitleStyle> GetTitleStyle for Spy<T> {
    fn execute(&self, theme: &dyn Theme) -> TitleStyle {
        self.hit().execute(theme)
    }
}

impl<T: GetShowHiddenEmptyLabel> GetShowHiddenEmptyLabel for Spy<T> {
    fn execute(&self, is_custom_label: bool) -> bool {
        self.hit().execute(is_custom_label)
    }
}

impl<T: GetCheckboxColors> GetCheckboxColors for Spy<T> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> CheckboxStaticColors {
        self.log.record("get_static_colors");
        self.inner.execute_static(theme, intent)
    }

    fn execute_dynamic(
        &self,
        theme: &dyn Theme,
        intent: Intent,
        selection_state: SelectionState,
    ) -> CheckboxDynamicColors {
        self.log.record("get_dynamic_colors");
        self.inner.execute_dynamic(theme, intent, selection_state)
    }
}

impl<T: GetCheckboxIsIcon> GetCheckboxIsIcon for Spy<T> {
    fn execute(&self, selection_state: SelectionState) -> bool {
        self.hit().execute(selection_state)
    }
}

impl<T: GetCheckboxNewSelectedValue> GetCheckboxNewSelectedValue for Spy<T> {
    fn execute(
        &self,
        selection_state: SelectionState,
        is_enabled: bool,
    ) -> Option<SelectionState> {
        self.hit().execute(selection_state, is_enabled)
    }
}

impl<T: GetCheckboxToggleOpacities> GetCheckboxToggleOpacities for Spy<T> {
    fn execute(&self, selection_state: SelectionState) -> CheckboxToggleOpacities {
        self.hit().execute(selection_state)
    }
}

impl<T: GetRadioColors> GetRadioColors for Spy<T> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> RadioStaticColors {
        self.log.record("get_static_colors");
        self.inner.execute_static(theme, intent)
    }

    fn execute_dynamic(&self, theme: &dyn Theme, intent: Intent, is_on: bool) -> RadioDynamicColors {
        self.log.record("get_dynamic_colors");
        self.inner.execute_dynamic(theme, intent, is_on)
    }
}

impl<T: GetRadioShowSelectedDot> GetRadioShowSelectedDot for Spy<T> {
    fn execute(&self, is_selected: bool) -> bool {
        self.hit().execute(is_selected)
    }
}

impl<T: GetToggleColors> GetToggleColors for Spy<T> {
    fn execute_static(&self, theme: &dyn Theme, intent: Intent) -> ToggleStaticColors {
        self.log.record("get_static_colors");
        self.inner.execute_static(theme, intent)
    }

    fn execute_dynamic(&self, theme: &dyn Theme, intent: Intent, is_on: bool) -> ToggleDynamicColors {
        self.log.record("get_dynamic_colors");
        self.inner.execute_dynamic(theme, intent, is_on)
    }
}

impl<T: GetToggleShowSpace> GetToggleShowSpace for Spy<T> {
    fn execute(&self, is_on: bool) -> ToggleSpace {
        self.hit().execute(is_on)
    }
}

impl<T: GetToggleIsIcon> GetToggleIsIcon for Spy<T> {
    fn execute(&self, is_on_off_switch_labels_enabled: bool, contrast: Contrast) -> bool {
        self.hit().execute(is_on_off_switch_labels_enabled, contrast)
    }
}

impl<T: GetGroupSpacing> GetGroupSpacing for Spy<T> {
    fn execute(&self, theme: &dyn Theme, axis: Axis, is_accessibility_size: bool) -> f32 {
        self.hit().execute(theme, axis, is_accessibility_size)
    }
}

impl<T: GetGroupAxis> GetGroupAxis for Spy<T> {
    fn execute(&self, axis: Axis, is_accessibility_size: bool) -> Axis {
        self.hit().execute(axis, is_accessibility_size)
    }
}

pub(crate) fn selection_use_cases<A: AnimationToken>(log: &CallLog) -> SelectionUseCases<A> {
    SelectionUseCases {
        get_animation_type: Box::new(Spy::new(GetAnimationTypeUseCase, "get_static_animation_type", log)),
        get_content_radius: Box::new(Spy::new(GetContentRadiusUseCase, "get_content_radius", log)),
        get_dim: Box::new(Spy::new(GetDimUseCase, "get_dim", log)),
        get_spacing: Box::new(Spy::new(GetSpacingUseCase, "get_spacing", log)),
        get_title_style: Box::new(Spy::new(GetTitleStyleUseCase, "get_title_style", log)),
        get_show_hidden_empty_label: Box::new(Spy::new(
            GetShowHiddenEmptyLabelUseCase,
            "get_show_hidden_empty_label",
            log,
        )),
        reset_animation: Box::new(Spy::new(ResetAnimationUseCase, "reset_animation", log)),
    }
}

pub(crate) fn checkbox_use_cases(log: &CallLog) -> CheckboxUseCases {
    CheckboxUseCases {
        get_colors: Box::new(Spy::new(<GetCheckboxColorsUseCase>::default(), "get_colors", log)),
        get_is_icon: Box::new(Spy::new(GetCheckboxIsIconUseCase, "get_is_icon", log)),
        get_new_selected_value: Box::new(Spy::new(
            GetCheckboxNewSelectedValueUseCase,
            "get_new_selected_value",
            log,
        )),
        get_toggle_opacities: Box::new(Spy::new(
            GetCheckboxToggleOpacitiesUseCase,
            "get_toggle_opacities",
            log,
        )),
    }
}

pub(crate) fn radio_use_cases(log: &CallLog) -> RadioUseCases {
    RadioUseCases {
        get_colors: Box::new(Spy::new(<GetRadioColorsUseCase>::default(), "get_colors", log)),
        get_show_selected_dot: Box::new(Spy::new(
            GetRadioShowSelectedDotUseCase,
            "get_show_selected_dot",
            log,
        )),
    }
}

pub(crate) fn toggle_use_cases(log: &CallLog) -> ToggleUseCases {
    ToggleUseCases {
        get_colors: Box::new(Spy::new(<GetToggleColorsUseCase>::default(), "get_colors", log)),
        get_show_space: Box::new(Spy::new(GetToggleShowSpaceUseCase, "get_show_space", log)),
        get_is_icon: Box::new(Spy::new(GetToggleIsIconUseCase, "get_is_icon", log)),
    }
}

pub(crate) fn group_use_cases(log: &CallLog) -> GroupUseCases {
    GroupUseCases {
        get_spacing: Box::new(Spy::new(GetGroupSpacingUseCase, "get_group_spacing", log)),
        get_axis: Box::new(Spy::new(GetGroupAxisUseCase, "get_group_axis", log)),
    }
}
