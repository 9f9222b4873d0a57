//! Stateful view-models behind each selection control.

mod animation;
mod base;
mod checkbox;
mod group;
mod radio;
mod toggle;

#[cfg(test)]
mod tests;

pub use animation::{AnimationBookkeeping, AnimationToken};
pub use base::{SelectionUseCases, SelectionViewModel};
pub use calmui_selection_derive::AnimationToken;
pub use checkbox::{CheckboxAnimation, CheckboxUseCases, CheckboxViewModel};
pub use group::{GroupUseCases, GroupViewModel};
pub use radio::{RadioAnimation, RadioUseCases, RadioViewModel};
pub use toggle::{ToggleAnimation, ToggleUseCases, ToggleViewModel};
