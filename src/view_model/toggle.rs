use std::ops::Deref;

use crate::style::{Contrast, ControlType, Intent};
use crate::theme::ThemeRef;
use crate::use_cases::{
    GetToggleColors, GetToggleColorsUseCase, GetToggleIsIcon, GetToggleIsIconUseCase,
    GetToggleShowSpace, GetToggleShowSpaceUseCase, ToggleDynamicColors, ToggleSpace,
    ToggleStaticColors,
};

use super::AnimationToken;
use super::base::{SelectionUseCases, SelectionViewModel};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, AnimationToken)]
pub enum ToggleAnimation {
    Track,
    Thumb,
}

pub struct ToggleUseCases {
    pub get_colors: Box<dyn GetToggleColors>,
    pub get_show_space: Box<dyn GetToggleShowSpace>,
    pub get_is_icon: Box<dyn GetToggleIsIcon>,
}

impl Default for ToggleUseCases {
    fn default() -> Self {
        Self {
            get_colors: Box::new(<GetToggleColorsUseCase>::default()),
            get_show_space: Box::new(GetToggleShowSpaceUseCase),
            get_is_icon: Box::new(GetToggleIsIconUseCase),
        }
    }
}

pub struct ToggleViewModel {
    base: SelectionViewModel<bool, ToggleAnimation>,
    intent: Intent,
    is_on_off_switch_labels_enabled: bool,
    contrast: Contrast,
    static_colors: Option<ToggleStaticColors>,
    dynamic_colors: Option<ToggleDynamicColors>,
    show_space: Option<ToggleSpace>,
    is_icon: Option<bool>,
    use_cases: ToggleUseCases,
}

impl ToggleViewModel {
    pub fn new(theme: ThemeRef, intent: Intent, is_on: bool) -> Self {
        Self::with_use_cases(
            theme,
            intent,
            is_on,
            SelectionUseCases::default(),
            ToggleUseCases::default(),
        )
    }

    pub fn with_use_cases(
        theme: ThemeRef,
        intent: Intent,
        is_on: bool,
        selection_use_cases: SelectionUseCases<ToggleAnimation>,
        use_cases: ToggleUseCases,
    ) -> Self {
        Self {
            base: SelectionViewModel::with_use_cases(
                ControlType::Toggle,
                theme,
                is_on,
                selection_use_cases,
            ),
            intent,
            is_on_off_switch_labels_enabled: false,
            contrast: Contrast::Standard,
            static_colors: None,
            dynamic_colors: None,
            show_space: None,
            is_icon: None,
            use_cases,
        }
    }

    pub fn load(
        &mut self,
        is_reduce_motion_enabled: bool,
        is_on_off_switch_labels_enabled: bool,
        contrast: Contrast,
    ) {
        self.is_on_off_switch_labels_enabled = is_on_off_switch_labels_enabled;
        self.contrast = contrast;
        self.base.load_outputs(is_reduce_motion_enabled);
        self.update_static_colors();
        self.update_selection_outputs();
        self.update_is_icon();
        self.base.mark_ready();
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn is_on(&self) -> bool {
        *self.base.selected_value()
    }

    pub fn is_on_off_switch_labels_enabled(&self) -> bool {
        self.is_on_off_switch_labels_enabled
    }

    pub fn contrast(&self) -> Contrast {
        self.contrast
    }

    pub fn static_colors(&self) -> Option<ToggleStaticColors> {
        self.static_colors
    }

    pub fn dynamic_colors(&self) -> Option<ToggleDynamicColors> {
        self.dynamic_colors
    }

    pub fn show_space(&self) -> Option<ToggleSpace> {
        self.show_space
    }

    pub fn is_icon(&self) -> Option<bool> {
        self.is_icon
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

    pub fn set_is_on_off_switch_labels_enabled(&mut self, is_enabled: bool) {
        let changed = self.is_on_off_switch_labels_enabled != is_enabled;
        self.is_on_off_switch_labels_enabled = is_enabled;
        if self.base.is_ready() && changed {
            self.update_is_icon();
        }
    }

    pub fn set_contrast(&mut self, contrast: Contrast) {
        let changed = self.contrast != contrast;
        self.contrast = contrast;
        if self.base.is_ready() && changed {
            self.update_is_icon();
        }
    }

    pub fn set_is_on(&mut self, is_on: bool, animated: bool) {
        if self.base.set_selected_value(is_on, animated).is_some() {
            self.update_selection_outputs();
        }
    }

    /// Flips the toggle after a user tap. Disabled toggles ignore it.
    pub fn toggle(&mut self) {
        self.toggle_from(self.is_on());
    }

    /// Flips the value the toggle was painted with. Returns the new value,
    /// or `None` when disabled.
    pub fn toggle_from(&mut self, rendered: bool) -> Option<bool> {
        if !self.base.is_enabled() {
            return None;
        }
        self.set_is_on(!rendered, true);
        Some(!rendered)
    }

    pub fn set_completed_animation(&mut self, token: ToggleAnimation) {
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
            self.is_on(),
        ));
    }

    fn update_selection_outputs(&mut self) {
        self.update_dynamic_colors();
        self.show_space = Some(self.use_cases.get_show_space.execute(self.is_on()));
    }

    fn update_is_icon(&mut self) {
        self.is_icon = Some(
            self.use_cases
                .get_is_icon
                .execute(self.is_on_off_switch_labels_enabled, self.contrast),
        );
    }
}

impl Deref for ToggleViewModel {
    type Target = SelectionViewModel<bool, ToggleAnimation>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
