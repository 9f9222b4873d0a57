//! Themeable selection controls for gpui: checkbox, radio button, toggle and
//! their groups.
//!
//! Presentation values are derived by small use cases and cached in
//! view-models; the declarative [`components`] and the imperative [`views`]
//! both paint from those view-models.

pub mod accessibility;
pub mod components;
pub mod icon;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod use_cases;
pub mod view_model;
pub mod views;

#[cfg(test)]
mod test_public_api;

pub use provider::SelectionProvider;
pub use view_model::AnimationToken;
