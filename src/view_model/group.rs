use crate::style::Axis;
use crate::theme::{ThemeRef, same_theme};
use crate::use_cases::{GetGroupAxis, GetGroupAxisUseCase, GetGroupSpacing, GetGroupSpacingUseCase};

pub struct GroupUseCases {
    pub get_spacing: Box<dyn GetGroupSpacing>,
    pub get_axis: Box<dyn GetGroupAxis>,
}

impl Default for GroupUseCases {
    fn default() -> Self {
        Self {
            get_spacing: Box::new(GetGroupSpacingUseCase),
            get_axis: Box::new(GetGroupAxisUseCase),
        }
    }
}

/// Layout state of a checkbox or radio button group.
pub struct GroupViewModel {
    theme: ThemeRef,
    axis: Axis,
    is_accessibility_size: bool,
    is_ready: bool,
    spacing: Option<f32>,
    layout_axis: Option<Axis>,
    use_cases: GroupUseCases,
}

impl GroupViewModel {
    pub fn new(theme: ThemeRef, axis: Axis) -> Self {
        Self::with_use_cases(theme, axis, GroupUseCases::default())
    }

    pub fn with_use_cases(theme: ThemeRef, axis: Axis, use_cases: GroupUseCases) -> Self {
        Self {
            theme,
            axis,
            is_accessibility_size: false,
            is_ready: false,
            spacing: None,
            layout_axis: None,
            use_cases,
        }
    }

    pub fn load(&mut self, is_accessibility_size: bool) {
        self.is_accessibility_size = is_accessibility_size;
        self.update_spacing();
        self.update_layout_axis();
        self.is_ready = true;
        tracing::debug!(axis = ?self.axis, "group view-model loaded");
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn theme(&self) -> &ThemeRef {
        &self.theme
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_accessibility_size(&self) -> bool {
        self.is_accessibility_size
    }

    pub fn spacing(&self) -> Option<f32> {
        self.spacing
    }

    /// Axis the items are actually laid out along.
    pub fn layout_axis(&self) -> Option<Axis> {
        self.layout_axis
    }

    pub fn set_theme(&mut self, theme: ThemeRef) {
        let changed = !same_theme(self.theme.as_ref(), theme.as_ref());
        self.theme = theme;
        if self.is_ready && changed {
            self.update_spacing();
        }
    }

    pub fn set_axis(&mut self, axis: Axis) {
        let changed = self.axis != axis;
        self.axis = axis;
        if self.is_ready && changed {
            self.update_spacing();
            self.update_layout_axis();
        }
    }

    pub fn set_is_accessibility_size(&mut self, is_accessibility_size: bool) {
        let changed = self.is_accessibility_size != is_accessibility_size;
        self.is_accessibility_size = is_accessibility_size;
        if self.is_ready && changed {
            self.update_spacing();
            self.update_layout_axis();
        }
    }

    fn update_spacing(&mut self) {
        self.spacing = Some(self.use_cases.get_spacing.execute(
            self.theme.as_ref(),
            self.axis,
            self.is_accessibility_size,
        ));
    }

    fn update_layout_axis(&mut self) {
        self.layout_axis = Some(
            self.use_cases
                .get_axis
                .execute(self.axis, self.is_accessibility_size),
        );
    }
}
