pub use crate::SelectionProvider;
pub use crate::accessibility::{AccessibilitySettings, ContentSizeCategory};
pub use crate::components::{Checkbox, CheckboxGroup, Radio, RadioGroup, SelectionItem, Toggle};
pub use crate::style::{Axis, Contrast, Intent, SelectionState};
pub use crate::theme::{CalmTheme, ColorScheme, Theme, ThemeRef};
pub use crate::view_model::AnimationToken;
pub use crate::views::{
    CheckboxChanged, CheckboxGroupChanged, CheckboxGroupView, CheckboxView, RadioGroupChanged,
    RadioGroupView, RadioSelected, RadioView, ToggleChanged, ToggleView, ValueChanged,
};
