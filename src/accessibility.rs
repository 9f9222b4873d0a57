use gpui::SharedString;

use crate::style::{Contrast, SelectionState};

/// Preferred text size reported by the platform.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    pub fn is_accessibility_category(self) -> bool {
        self >= Self::AccessibilityMedium
    }
}

/// Platform accessibility preferences that selection controls react to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AccessibilitySettings {
    pub reduce_motion: bool,
    pub on_off_switch_labels: bool,
    pub contrast: Contrast,
    pub content_size_category: ContentSizeCategory,
}

impl AccessibilitySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reduce_motion(mut self, value: bool) -> Self {
        self.reduce_motion = value;
        self
    }

    pub fn with_on_off_switch_labels(mut self, value: bool) -> Self {
        self.on_off_switch_labels = value;
        self
    }

    pub fn with_contrast(mut self, value: Contrast) -> Self {
        self.contrast = value;
        self
    }

    pub fn with_content_size_category(mut self, value: ContentSizeCategory) -> Self {
        self.content_size_category = value;
        self
    }

    pub fn is_accessibility_size(&self) -> bool {
        self.content_size_category.is_accessibility_category()
    }
}

pub fn accessibility_value(is_selected: bool) -> SharedString {
    if is_selected { "1" } else { "0" }.into()
}

/// Indeterminate checkboxes report as not selected.
pub fn checkbox_accessibility_value(selection_state: SelectionState) -> SharedString {
    accessibility_value(selection_state == SelectionState::Selected)
}

/// Name announced by assistive technology.
///
/// An explicit accessibility label wins over the visible label. Controls
/// with neither fall back to the generic control name and log a warning.
pub fn accessibility_label(
    explicit: Option<&SharedString>,
    label: Option<&SharedString>,
    fallback: &str,
) -> SharedString {
    [explicit, label]
        .into_iter()
        .flatten()
        .find(|label| !label.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!(fallback, "selection control has no accessibility label");
            SharedString::from(fallback.to_string())
        })
}
