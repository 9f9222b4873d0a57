use std::fmt;
use std::hash::Hash;

use crate::motion::AnimationType;

/// Tags the independent animations started by one selection change.
///
/// `ALL` is the full universe of tags; a transition is settled once each of
/// them has reported completion. Fieldless enums can derive it with
/// `#[derive(AnimationToken)]`.
pub trait AnimationToken: Copy + Eq + Hash + fmt::Debug + 'static {
    const ALL: &'static [Self];
}

/// Transient state of an in-flight selection transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnimationBookkeeping<A> {
    pub animation_type: AnimationType,
    pub completed_animations: Vec<A>,
    pub selected_value_animated: bool,
}

impl<A> Default for AnimationBookkeeping<A> {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::Unanimated,
            completed_animations: Vec::new(),
            selected_value_animated: false,
        }
    }
}

impl<A: AnimationToken> AnimationBookkeeping<A> {
    pub fn is_idle(&self) -> bool {
        !self.selected_value_animated && self.completed_animations.is_empty()
    }
}
