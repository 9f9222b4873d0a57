use std::time::Duration;

use futures_timer::Delay;
use gpui::{Animation, AnimationExt, AnyElement, ElementId, IntoElement, Styled, Window};

use crate::motion::{AnimationType, Easing};
use crate::view_model::AnimationToken;

/// When the animations of one selection change finish.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Completion {
    Immediate,
    After(Duration),
}

impl Completion {
    pub fn for_animation(animation_type: AnimationType) -> Self {
        match animation_type {
            AnimationType::Unanimated => Self::Immediate,
            AnimationType::Animated { .. } => Self::After(animation_type.duration()),
        }
    }

    pub async fn wait(self) {
        if let Self::After(duration) = self {
            Delay::new(duration).await;
        }
    }
}

/// Reports every token of `A` once its animation has finished.
///
/// Each token gets its own timer so completions arrive independently, the
/// way separately animated properties finish.
pub fn report_completions<A: AnimationToken>(
    animation_type: AnimationType,
    window: &Window,
    cx: &mut gpui::App,
    report: impl Fn(A) + Clone + 'static,
) {
    let completion = Completion::for_animation(animation_type);
    if completion == Completion::Immediate {
        A::ALL.iter().copied().for_each(report);
        return;
    }

    for &token in A::ALL {
        let report = report.clone();
        let window_handle = window.window_handle();
        cx.spawn(async move |cx| {
            completion.wait().await;
            let _ = window_handle.update(cx, |_, window, _| {
                report(token);
                window.refresh();
            });
        })
        .detach();
    }
}

pub fn easing_fn(easing: Easing) -> impl Fn(f32) -> f32 {
    move |delta| match easing {
        Easing::Linear => gpui::linear(delta),
        Easing::EaseInOut => gpui::ease_in_out(delta),
    }
}

/// Fades `element` in when the selection change is animated.
///
/// `key` must change with the selected value so the animation restarts on
/// every transition.
pub fn fade_in<E>(element: E, key: impl Into<ElementId>, animation_type: AnimationType) -> AnyElement
where
    E: IntoElement + Styled + AnimationExt + 'static,
{
    match animation_type {
        AnimationType::Unanimated => element.into_any_element(),
        AnimationType::Animated { easing, .. } => {
            let animation =
                Animation::new(animation_type.duration()).with_easing(easing_fn(easing));
            element
                .with_animation(key, animation, |this, delta| this.opacity(delta))
                .into_any_element()
        }
    }
}

/// Opacity `delta` of the way from `from` to `to`.
pub fn blend(from: f32, to: f32, delta: f32) -> f32 {
    from + (to - from) * delta.clamp(0.0, 1.0)
}

/// Draws `element` at opacity `to`, animating from `from` when `animation_type` asks for it.
pub fn fade_between<E>(
    element: E,
    key: impl Into<ElementId>,
    animation_type: AnimationType,
    from: f32,
    to: f32,
) -> AnyElement
where
    E: IntoElement + Styled + AnimationExt + 'static,
{
    match animation_type {
        AnimationType::Animated { easing, .. } if from != to => {
            let animation =
                Animation::new(animation_type.duration()).with_easing(easing_fn(easing));
            element
                .with_animation(key, animation, move |this, delta| {
                    this.opacity(blend(from, to, delta))
                })
                .into_any_element()
        }
        _ => element.opacity(to).into_any_element(),
    }
}
