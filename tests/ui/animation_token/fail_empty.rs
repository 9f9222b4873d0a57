#![allow(dead_code)]
use calmui_selection::AnimationToken;

#[derive(AnimationToken)]
enum Nothing {}

fn main() {}
