//! Declarative selection controls, rebuilt every frame.

mod checkbox;
mod group;
pub mod group_state;
pub mod paint;
mod radio;
pub(crate) mod registry;
mod toggle;
pub mod transition;

pub use checkbox::Checkbox;
pub use group::{CheckboxGroup, RadioGroup};
pub use group_state::SelectionItem;
pub use radio::Radio;
pub use toggle::Toggle;
