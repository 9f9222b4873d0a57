#![allow(dead_code)]
use calmui_selection::AnimationToken;

#[derive(AnimationToken)]
enum Phase<T> {
    Start,
    End(T),
}

fn main() {}
