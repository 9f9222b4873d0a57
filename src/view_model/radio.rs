use std::ops::Deref;

use crate::style::{ControlType, Intent};
use crate::theme::ThemeRef;
use crate::use_cases::{
    GetRadioColors, GetRadioColorsUseCase, GetRadioShowSelectedDot,
    GetRadioShowSelectedDotUseCase, RadioDynamicColors, RadioStaticColors,
};

use super::AnimationToken;
use super::base::{SelectionUseCases, SelectionViewModel};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, AnimationToken)]
pub enum RadioAnimation {
    Border,
    Dot,
}

pub struct RadioUseCases {
    pub get_colors: Box<dyn GetRadioColors>,
    pub get_show_selected_dot: Box<dyn GetRadioShowSelectedDot>,
}

impl Default for RadioUseCases {
    fn default() -> Self {
        Self {
            get_colors: Box::new(<GetRadioColorsUseCase>::default()),
            get_show_selected_dot: Box::new(GetRadioShowSelectedDotUseCase),
        }
    }
}

pub struct RadioViewModel {
    base: SelectionViewModel<bool, RadioAnimation>,
    intent: Intent,
    static_colors: Option<RadioStaticColors>,
    dynamic_colors: Option<RadioDynamicColors>,
    show_selected_dot: Option<bool>,
    use_cases: RadioUseCases,
}

impl RadioViewModel {
    pub fn new(theme: ThemeRef, intent: Intent, is_selected: bool) -> Self {
        Self::with_use_cases(
            theme,
            intent,
            is_selected,
            SelectionUseCases::default(),
            RadioUseCases::default(),
        )
    }

    pub fn with_use_cases(
        theme: ThemeRef,
        intent: Intent,
        is_selected: bool,
        selection_use_cases: SelectionUseCases<RadioAnimation>,
        use_cases: RadioUseCases,
    ) -> Self {
        Self {
            base: SelectionViewModel::with_use_cases(
                ControlType::RadioButton,
                theme,
                is_selected,
                selection_use_cases,
            ),
            intent,
            static_colors: None,
            dynamic_colors: None,
            show_selected_dot: None,
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

    pub fn is_selected(&self) -> bool {
        *self.base.selected_value()
    }

    pub fn static_colors(&self) -> Option<RadioStaticColors> {
        self.static_colors
    }

    pub fn dynamic_colors(&self) -> Option<RadioDynamicColors> {
        self.dynamic_colors
    }

    pub fn show_selected_dot(&self) -> Option<bool> {
        self.show_selected_dot
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

    pub fn set_is_selected(&mut self, is_selected: bool, animated: bool) {
        if self
            .base
            .set_selected_value(is_selected, animated)
            .is_some()
        {
            self.update_selection_outputs();
        }
    }

    /// Selects the radio button after a user tap.
    ///
    /// A selected radio button cannot be unselected by tapping it; only its
    /// group can do that. Returns `false` when nothing changed.
    pub fn toggle_if_possible(&mut self) -> bool {
        self.select_from(self.is_selected())
    }

    /// Same as [`Self::toggle_if_possible`], judged by the value the radio
    /// button was painted with.
    pub fn select_from(&mut self, rendered: bool) -> bool {
        if rendered {
            return false;
        }
        self.set_is_selected(true, true);
        true
    }

    pub fn set_completed_animation(&mut self, token: RadioAnimation) {
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
            self.is_selected(),
        ));
    }

    fn update_selection_outputs(&mut self) {
        self.update_dynamic_colors();
        self.show_selected_dot = Some(
            self.use_cases
                .get_show_selected_dot
                .execute(self.is_selected()),
        );
    }
}

impl Deref for RadioViewModel {
    type Target = SelectionViewModel<bool, RadioAnimation>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
