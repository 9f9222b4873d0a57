use std::collections::HashSet;

use crate::motion::AnimationType;
use crate::view_model::{AnimationBookkeeping, AnimationToken};

pub trait GetAnimationType {
    fn execute(&self, is_reduce_motion_enabled: bool) -> AnimationType;

    /// Animated only when the caller asked for it and motion is not reduced.
    fn execute_with_animated(&self, animated: bool, is_reduce_motion_enabled: bool)
    -> AnimationType;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetAnimationTypeUseCase;

impl GetAnimationType for GetAnimationTypeUseCase {
    fn execute(&self, is_reduce_motion_enabled: bool) -> AnimationType {
        if is_reduce_motion_enabled {
            AnimationType::Unanimated
        } else {
            AnimationType::DEFAULT_ANIMATED
        }
    }

    fn execute_with_animated(
        &self,
        animated: bool,
        is_reduce_motion_enabled: bool,
    ) -> AnimationType {
        if animated {
            self.execute(is_reduce_motion_enabled)
        } else {
            AnimationType::Unanimated
        }
    }
}

/// Join point of the animations started by one selection change.
///
/// Resets the bookkeeping to idle once every token of `A` has been reported
/// at least once. Order and duplicates do not matter; an incomplete report
/// leaves the bookkeeping untouched.
pub trait ResetAnimation<A: AnimationToken> {
    fn execute(&self, bookkeeping: &mut AnimationBookkeeping<A>);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ResetAnimationUseCase;

impl<A: AnimationToken> ResetAnimation<A> for ResetAnimationUseCase {
    fn execute(&self, bookkeeping: &mut AnimationBookkeeping<A>) {
        let completed = bookkeeping
            .completed_animations
            .iter()
            .copied()
            .collect::<HashSet<_>>();
        let expected = A::ALL.iter().copied().collect::<HashSet<_>>();

        if completed == expected {
            *bookkeeping = AnimationBookkeeping::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, crate::AnimationToken)]
    enum Pair {
        A,
        B,
    }

    fn busy(completed: Vec<Pair>) -> AnimationBookkeeping<Pair> {
        AnimationBookkeeping {
            animation_type: AnimationType::DEFAULT_ANIMATED,
            completed_animations: completed,
            selected_value_animated: true,
        }
    }

    #[test]
    fn reduce_motion_disables_animation() {
        let use_case = GetAnimationTypeUseCase;
        assert_eq!(use_case.execute(true), AnimationType::Unanimated);
        assert_eq!(use_case.execute(false), AnimationType::DEFAULT_ANIMATED);
    }

    #[test]
    fn explicit_animation_requires_flag_and_full_motion() {
        let use_case = GetAnimationTypeUseCase;
        assert_eq!(
            use_case.execute_with_animated(true, false),
            AnimationType::DEFAULT_ANIMATED
        );
        assert_eq!(
            use_case.execute_with_animated(true, true),
            AnimationType::Unanimated
        );
        assert_eq!(
            use_case.execute_with_animated(false, false),
            AnimationType::Unanimated
        );
        assert_eq!(
            use_case.execute_with_animated(false, true),
            AnimationType::Unanimated
        );
    }

    #[test]
    fn partial_completion_leaves_bookkeeping_untouched() {
        let mut bookkeeping = busy(vec![Pair::A]);
        ResetAnimationUseCase.execute(&mut bookkeeping);
        assert_eq!(bookkeeping, busy(vec![Pair::A]));

        let mut repeated = busy(vec![Pair::B, Pair::B]);
        ResetAnimationUseCase.execute(&mut repeated);
        assert_eq!(repeated, busy(vec![Pair::B, Pair::B]));
    }

    #[test]
    fn empty_completion_leaves_bookkeeping_untouched() {
        let mut bookkeeping = busy(Vec::new());
        ResetAnimationUseCase.execute(&mut bookkeeping);
        assert_eq!(bookkeeping, busy(Vec::new()));
    }

    #[test]
    fn full_completion_resets_in_any_order_with_duplicates() {
        for completed in [
            vec![Pair::A, Pair::B],
            vec![Pair::B, Pair::A],
            vec![Pair::A, Pair::A, Pair::B],
            vec![Pair::B, Pair::A, Pair::B, Pair::A],
        ] {
            let mut bookkeeping = busy(completed);
            ResetAnimationUseCase.execute(&mut bookkeeping);
            assert_eq!(bookkeeping, AnimationBookkeeping::default());
            assert_eq!(bookkeeping.animation_type, AnimationType::Unanimated);
            assert!(bookkeeping.completed_animations.is_empty());
            assert!(!bookkeeping.selected_value_animated);
        }
    }
}
