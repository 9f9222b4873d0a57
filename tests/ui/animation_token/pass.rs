use calmui_selection::AnimationToken;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, AnimationToken)]
enum Transition {
    Border,
    Background,
    Icon,
}

fn main() {
    assert_eq!(
        Transition::ALL,
        &[Transition::Border, Transition::Background, Transition::Icon]
    );
}
