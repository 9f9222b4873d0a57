use crate::motion::AnimationType;
use crate::style::{ControlType, TitleStyle};
use crate::theme::{ThemeRef, same_theme};
use crate::use_cases::{
    GetAnimationType, GetAnimationTypeUseCase, GetContentRadius, GetContentRadiusUseCase, GetDim,
    GetDimUseCase, GetShowHiddenEmptyLabel, GetShowHiddenEmptyLabelUseCase, GetSpacing,
    GetSpacingUseCase, GetTitleStyle, GetTitleStyleUseCase, ResetAnimation,
    ResetAnimationUseCase,
};

use super::animation::{AnimationBookkeeping, AnimationToken};

/// Derivations shared by every selection control.
pub struct SelectionUseCases<A: AnimationToken> {
    pub get_animation_type: Box<dyn GetAnimationType>,
    pub get_content_radius: Box<dyn GetContentRadius>,
    pub get_dim: Box<dyn GetDim>,
    pub get_spacing: Box<dyn GetSpacing>,
    pub get_title_style: Box<dyn GetTitleStyle>,
    pub get_show_hidden_empty_label: Box<dyn GetShowHiddenEmptyLabel>,
    pub reset_animation: Box<dyn ResetAnimation<A>>,
}

impl<A: AnimationToken> Default for SelectionUseCases<A> {
    fn default() -> Self {
        Self {
            get_animation_type: Box::new(GetAnimationTypeUseCase),
            get_content_radius: Box::new(GetContentRadiusUseCase),
            get_dim: Box::new(GetDimUseCase),
            get_spacing: Box::new(GetSpacingUseCase),
            get_title_style: Box::new(GetTitleStyleUseCase),
            get_show_hidden_empty_label: Box::new(GetShowHiddenEmptyLabelUseCase),
            reset_animation: Box::new(ResetAnimationUseCase),
        }
    }
}

/// State shared by checkbox, radio button and toggle view-models.
///
/// Inputs are written through setters. Before [`SelectionViewModel::load`]
/// every setter only stores its value; afterwards a setter recomputes the
/// outputs depending on that input, and only when the value changed.
pub struct SelectionViewModel<V, A: AnimationToken> {
    control_type: ControlType,
    theme: ThemeRef,
    is_enabled: bool,
    is_reduce_motion_enabled: bool,
    is_custom_label: bool,
    selected_value: V,
    is_ready: bool,

    content_radius: Option<f32>,
    dim: Option<f32>,
    previous_dim: Option<f32>,
    title_style: Option<TitleStyle>,
    spacing: Option<f32>,
    show_hidden_empty_label: Option<bool>,
    static_animation_type: Option<AnimationType>,
    animation: AnimationBookkeeping<A>,

    use_cases: SelectionUseCases<A>,
}

impl<V, A> SelectionViewModel<V, A>
where
    V: Clone + PartialEq + std::fmt::Debug,
    A: AnimationToken,
{
    pub fn new(control_type: ControlType, theme: ThemeRef, selected_value: V) -> Self {
        Self::with_use_cases(control_type, theme, selected_value, SelectionUseCases::default())
    }

    pub fn with_use_cases(
        control_type: ControlType,
        theme: ThemeRef,
        selected_value: V,
        use_cases: SelectionUseCases<A>,
    ) -> Self {
        Self {
            control_type,
            theme,
            is_enabled: true,
            is_reduce_motion_enabled: false,
            is_custom_label: false,
            selected_value,
            is_ready: false,
            content_radius: None,
            dim: None,
            previous_dim: None,
            title_style: None,
            spacing: None,
            show_hidden_empty_label: None,
            static_animation_type: None,
            animation: AnimationBookkeeping::default(),
            use_cases,
        }
    }

    /// Computes every output once and marks the view-model ready.
    pub fn load(&mut self, is_reduce_motion_enabled: bool) {
        self.load_outputs(is_reduce_motion_enabled);
        self.mark_ready();
    }

    pub(crate) fn load_outputs(&mut self, is_reduce_motion_enabled: bool) {
        self.is_reduce_motion_enabled = is_reduce_motion_enabled;
        self.update_theme_outputs();
        self.update_dim();
        self.update_show_hidden_empty_label();
        self.update_static_animation_type();
        self.update_dynamic_animation_type();
    }

    pub(crate) fn mark_ready(&mut self) {
        self.is_ready = true;
        tracing::debug!(control = ?self.control_type, "selection view-model loaded");
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    pub fn theme(&self) -> &ThemeRef {
        &self.theme
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn is_reduce_motion_enabled(&self) -> bool {
        self.is_reduce_motion_enabled
    }

    pub fn is_custom_label(&self) -> bool {
        self.is_custom_label
    }

    pub fn selected_value(&self) -> &V {
        &self.selected_value
    }

    pub fn content_radius(&self) -> Option<f32> {
        self.content_radius
    }

    pub fn dim(&self) -> Option<f32> {
        self.dim
    }

    /// Opacity change of the last enable or theme update after `load`, as `(from, to)`.
    pub fn dim_transition(&self) -> Option<(f32, f32)> {
        self.previous_dim.zip(self.dim)
    }

    pub fn title_style(&self) -> Option<TitleStyle> {
        self.title_style
    }

    pub fn spacing(&self) -> Option<f32> {
        self.spacing
    }

    pub fn show_hidden_empty_label(&self) -> Option<bool> {
        self.show_hidden_empty_label
    }

    /// Animation of values that do not follow the selection (theme, intent, enabled).
    pub fn static_animation_type(&self) -> Option<AnimationType> {
        self.static_animation_type
    }

    /// Animation of the current selection transition.
    pub fn dynamic_animation_type(&self) -> Option<AnimationType> {
        self.is_ready.then_some(self.animation.animation_type)
    }

    pub fn selected_value_animated(&self) -> bool {
        self.animation.selected_value_animated
    }

    pub fn completed_animations(&self) -> &[A] {
        &self.animation.completed_animations
    }

    pub fn animation(&self) -> &AnimationBookkeeping<A> {
        &self.animation
    }

    /// Returns `true` when the theme outputs were recomputed.
    pub fn set_theme(&mut self, theme: ThemeRef) -> bool {
        if !self.is_ready {
            self.theme = theme;
            return false;
        }
        if same_theme(self.theme.as_ref(), theme.as_ref()) {
            tracing::trace!(control = ?self.control_type, "theme unchanged");
            self.theme = theme;
            return false;
        }
        self.theme = theme;
        self.update_theme_outputs();
        self.update_dim();
        true
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) -> bool {
        let changed = self.is_enabled != is_enabled;
        self.is_enabled = is_enabled;
        if !self.is_ready || !changed {
            return false;
        }
        self.update_dim();
        true
    }

    pub fn set_is_reduce_motion_enabled(&mut self, is_reduce_motion_enabled: bool) -> bool {
        let changed = self.is_reduce_motion_enabled != is_reduce_motion_enabled;
        self.is_reduce_motion_enabled = is_reduce_motion_enabled;
        if !self.is_ready || !changed {
            return false;
        }
        self.update_static_animation_type();
        self.update_dynamic_animation_type();
        true
    }

    pub fn set_is_custom_label(&mut self, is_custom_label: bool) -> bool {
        let changed = self.is_custom_label != is_custom_label;
        self.is_custom_label = is_custom_label;
        if !self.is_ready || !changed {
            return false;
        }
        self.update_show_hidden_empty_label();
        true
    }

    /// Stores a new selected value.
    ///
    /// Returns the previous value when the caller must run its own
    /// selection-dependent derivations, i.e. the value changed after `load`.
    pub fn set_selected_value(&mut self, value: V, animated: bool) -> Option<V> {
        if self.selected_value == value {
            return None;
        }

        self.animation.completed_animations.clear();
        self.animation.selected_value_animated = animated;
        if self.is_ready {
            self.update_dynamic_animation_type();
        }

        let old_value = std::mem::replace(&mut self.selected_value, value);
        if !self.is_ready {
            return None;
        }
        tracing::trace!(
            control = ?self.control_type,
            from = ?old_value,
            to = ?self.selected_value,
            animated,
            "selected value changed"
        );
        Some(old_value)
    }

    /// Records one finished animation and settles the transition once all have finished.
    pub fn set_completed_animation(&mut self, token: A) {
        self.animation.completed_animations.push(token);
        self.use_cases.reset_animation.execute(&mut self.animation);
        if self.animation.is_idle() {
            tracing::trace!(control = ?self.control_type, "selection transition settled");
        }
    }

    fn update_theme_outputs(&mut self) {
        let theme = self.theme.as_ref();
        self.content_radius = Some(
            self.use_cases
                .get_content_radius
                .execute(theme, self.control_type),
        );
        self.title_style = Some(self.use_cases.get_title_style.execute(theme));
        self.spacing = Some(self.use_cases.get_spacing.execute(theme));
    }

    fn update_dim(&mut self) {
        let dim = self
            .use_cases
            .get_dim
            .execute(self.theme.as_ref(), self.is_enabled);
        if self.is_ready && self.dim != Some(dim) {
            self.previous_dim = self.dim;
        }
        self.dim = Some(dim);
    }

    fn update_show_hidden_empty_label(&mut self) {
        self.show_hidden_empty_label = Some(
            self.use_cases
                .get_show_hidden_empty_label
                .execute(self.is_custom_label),
        );
    }

    fn update_static_animation_type(&mut self) {
        self.static_animation_type = Some(
            self.use_cases
                .get_animation_type
                .execute(self.is_reduce_motion_enabled),
        );
    }

    fn update_dynamic_animation_type(&mut self) {
        self.animation.animation_type = self.use_cases.get_animation_type.execute_with_animated(
            self.animation.selected_value_animated,
            self.is_reduce_motion_enabled,
        );
    }
}
