#![allow(dead_code)]
use calmui_selection::AnimationToken;

#[derive(AnimationToken)]
struct Thumb {
    offset: f32,
}

fn main() {}
