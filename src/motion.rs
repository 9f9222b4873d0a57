use std::time::Duration;

use crate::tokens::MOTION_DURATIONS;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

/// How a change of a derived value is presented.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AnimationType {
    #[default]
    Unanimated,
    Animated { duration_ms: u16, easing: Easing },
}

impl AnimationType {
    pub const DEFAULT_ANIMATED: Self = Self::Animated {
        duration_ms: MOTION_DURATIONS.fast_ms,
        easing: Easing::EaseInOut,
    };

    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Animated { .. })
    }

    pub fn duration(self) -> Duration {
        match self {
            Self::Unanimated => Duration::ZERO,
            Self::Animated { duration_ms, .. } => Duration::from_millis(u64::from(duration_ms)),
        }
    }

    pub const fn easing(self) -> Easing {
        match self {
            Self::Unanimated => Easing::Linear,
            Self::Animated { easing, .. } => easing,
        }
    }
}
