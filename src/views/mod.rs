//! Imperative selection controls: long-lived entities driven through setters.
//!
//! Each view owns its view-model, emits a typed change event plus
//! [`ValueChanged`], and paints with the same code as the declarative
//! controls.

mod checkbox;
mod events;
mod group;
mod radio;
mod toggle;

use gpui::Context;

use crate::components::transition::Completion;
use crate::motion::AnimationType;
use crate::view_model::AnimationToken;

pub use checkbox::CheckboxView;
pub use events::{
    CheckboxChanged, CheckboxGroupChanged, RadioGroupChanged, RadioSelected, ToggleChanged,
    ValueChanged,
};
pub use group::{CheckboxGroupView, RadioGroupView};
pub use radio::RadioView;
pub use toggle::ToggleView;

/// Reports each token of `A` back into `view` once its animation has finished.
fn report_completions<T, A>(
    view: &mut T,
    animation_type: AnimationType,
    cx: &mut Context<T>,
    report: fn(&mut T, A),
) where
    T: 'static,
    A: AnimationToken,
{
    let completion = Completion::for_animation(animation_type);
    if completion == Completion::Immediate {
        for &token in A::ALL {
            report(view, token);
        }
        return;
    }

    for &token in A::ALL {
        cx.spawn(async move |this, cx| {
            completion.wait().await;
            this.update(cx, |view, cx| {
                report(view, token);
                cx.notify();
            })
            .ok();
        })
        .detach();
    }
}
