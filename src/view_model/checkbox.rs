use std::ops::Deref;

use crate::style::{ControlType, Intent, SelectionState};
use crate::theme::ThemeRef;
use crate::use_cases::{
    CheckboxDynamicColors, CheckboxIcon, CheckboxStaticColors, CheckboxToggleOpacities,
    GetCheckboxColors, GetCheckboxColorsUseCase, GetCheckboxIsIcon, GetCheckboxIsIconUseCase,
    GetCheckboxNewSelectedValue, GetCheckboxNewSelectedValueUseCase, GetCheckboxToggleOpacities,
    GetCheckboxToggleOpacitiesUseCase,
};

use super::AnimationToken;
use super::base::{SelectionUseCases, SelectionViewModel};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, AnimationToken)]
pub enum CheckboxAnimation {
    Colors,
    Icon,
}

pub struct CheckboxUseCases {
    pub get_colors: Box<dyn GetCheckboxColors>,
    pub get_is_icon: Box<dyn GetCheckboxIsIcon>,
    pub get_new_selected_value: Box<dyn GetCheckboxNewSelectedValue>,
    pub get_toggle_opacities: Box<dyn GetCheckboxToggleOpacities>,
}

impl Default for CheckboxUseCases {
    fn default() -> Self {
        Self {
            get_colors: Box::new(<GetCheckboxColorsUseCase>::default()),
            get_is_icon: Box::new(GetCheckboxIsIconUseCase),
            get_new_selected_value: Box::new(GetCheckboxNewSelectedValueUseCase),
            get_toggle_opacities: Box::new(GetCheckboxToggleOpacitiesUseCase),
        }
    }
}

pub struct CheckboxViewModel {
    base: SelectionViewModel<SelectionState, CheckboxAnimation>,
    intent: Intent,
    static_colors: Option<CheckboxStaticColors>,
    dynamic_colors: Option<CheckboxDynamicColors>,
    is_icon: Option<bool>,
    toggle_opacities: Option<CheckboxToggleOpacities>,
    use_cases: CheckboxUseCases,
}

impl CheckboxViewModel {
    pub fn new(theme: ThemeRef, intent: Intent, selection_state: SelectionState) -> Self {
        Self::with_use_cases(
            theme,
            intent,
            selection_state,
            SelectionUseCases::default(),
            CheckboxUseCases::default(),
        )
    }

    pub fn with_use_cases(
        theme: ThemeRef,
        intent: Intent,
        selection_state: SelectionState,
        selection_use_cases: SelectionUseCases<CheckboxAnimation>,
        use_cases: CheckboxUseCases,
    ) -> Self {
        Self {
            base: SelectionViewModel::with_use_cases(
                ControlType::Checkbox,
                theme,
                selection_state,
                selection_use_cases,
            ),
            intent,
            static_colors: None,
            dynamic_colors: None,
            is_icon: None,
            toggle_opacities: None,
            use_cases,
        }
    }

    pub fn load(&mut self, is_reduce_motion_enabled: bool) {
        self.base.load_outputs(is_reduce_motion_enabled);
        self.update_static_colors();
        self.update_selection_outputs();
        self.base.mark_ready();
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn selection_state(&self) -> SelectionState {
        *self.base.selected_value()
    }

    pub fn static_colors(&self) -> Option<CheckboxStaticColors> {
        self.static_colors
    }

    pub fn dynamic_colors(&self) -> Option<CheckboxDynamicColors> {
        self.dynamic_colors
    }

    pub fn is_icon(&self) -> Option<bool> {
        self.is_icon
    }

    /// Glyph drawn inside the box, `None` while no icon is shown.
    pub fn icon(&self) -> Option<CheckboxIcon> {
        match self.is_icon {
            Some(true) => CheckboxIcon::for_state(self.selection_state()),
            _ => None,
        }
    }

    pub fn toggle_opacities(&self) -> Option<CheckboxToggleOpacities> {
        self.toggle_opacities
    }

    pub fn set_theme(&mut self, theme: ThemeRef) {
        if self.base.set_theme(theme) {
            self.update_static_colors();
            self.update_dynamic_colors();
        }
    }

    pub fn set_intent(&mut self, intent: Intent) {
        let changed = self.intent != intent;
        self.intent = intent;
        if self.base.is_ready() && changed {
            self.update_static_colors();
            self.update_dynamic_colors();
        }
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) {
        self.base.set_is_enabled(is_enabled);
    }

    pub fn set_is_reduce_motion_enabled(&mut self, is_reduce_motion_enabled: bool) {
        self.base
            .set_is_reduce_motion_enabled(is_reduce_motion_enabled);
    }

    pub fn set_is_custom_label(&mut self, is_custom_label: bool) {
        self.base.set_is_custom_label(is_custom_label);
    }

    pub fn set_selection_state(&mut self, selection_state: SelectionState, animated: bool) {
        if self
            .base
            .set_selected_value(selection_state, animated)
            .is_some()
        {
            self.update_selection_outputs();
        }
    }

    /// Applies a user tap. Disabled checkboxes ignore it.
    pub fn toggle(&mut self) {
        self.toggle_from(self.selection_state());
    }

    /// Applies a user tap to the state the control was painted with.
    ///
    /// Returns the new state, or `None` when the tap was ignored.
    pub fn toggle_from(&mut self, rendered: SelectionState) -> Option<SelectionState> {
        let next = self
            .use_cases
            .get_new_selected_value
            .execute(rendered, self.base.is_enabled())?;
        self.set_selection_state(next, true);
        Some(next)
    }

    pub fn set_completed_animation(&mut self, token: CheckboxAnimation) {
        self.base.set_completed_animation(token);
    }

    fn update_static_colors(&mut self) {
        self.static_colors = Some(
            self.use_cases
                .get_colors
                .execute_static(self.base.theme().as_ref(), self.intent),
        );
    }

    fn update_dynamic_colors(&mut self) {
        self.dynamic_colors = Some(self.use_cases.get_colors.execute_dynamic(
            self.base.theme().as_ref(),
            self.intent,
            self.selection_state(),
        ));
    }

    fn update_selection_outputs(&mut self) {
        self.update_dynamic_colors();
        let selection_state = self.selection_state();
        self.is_icon = Some(self.use_cases.get_is_icon.execute(selection_state));
        self.toggle_opacities = Some(
            self.use_cases
                .get_toggle_opacities
                .execute(selection_state),
        );
    }
}

impl Deref for CheckboxViewModel {
    type Target = SelectionViewModel<SelectionState, CheckboxAnimation>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
