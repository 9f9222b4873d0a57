#![allow(dead_code)]
use calmui_selection::AnimationToken;

#[derive(AnimationToken)]
enum Track {
    Color,
    Offset(f32),
}

fn main() {}
