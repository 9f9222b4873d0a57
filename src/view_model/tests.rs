use crate::motion::AnimationType;
use crate::style::{Axis, Contrast, Intent, SelectionState};
use crate::theme::{CalmTheme, ThemeRef};
use crate::tokens::{ColorToken, PaletteKey};
use crate::use_cases::ToggleSpace;
use crate::use_cases::spies::{self, CallLog};

use super::*;

fn theme() -> ThemeRef {
    CalmTheme::default().into_ref()
}

fn spied_checkbox(log: &CallLog, selection_state: SelectionState) -> CheckboxViewModel {
    CheckboxViewModel::with_use_cases(
        theme(),
        Intent::Basic,
        selection_state,
        spies::selection_use_cases(log),
        spies::checkbox_use_cases(log),
    )
}

fn spied_radio(log: &CallLog, is_selected: bool) -> RadioViewModel {
    RadioViewModel::with_use_cases(
        theme(),
        Intent::Basic,
        is_selected,
        spies::selection_use_cases(log),
        spies::radio_use_cases(log),
    )
}

fn spied_toggle(log: &CallLog, is_on: bool) -> ToggleViewModel {
    ToggleViewModel::with_use_cases(
        theme(),
        Intent::Basic,
        is_on,
        spies::selection_use_cases(log),
        spies::toggle_use_cases(log),
    )
}

#[test]
fn outputs_stay_empty_until_load() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);

    checkbox.set_is_enabled(false);
    checkbox.set_intent(Intent::Error);
    checkbox.set_is_custom_label(true);
    checkbox.set_is_reduce_motion_enabled(true);
    checkbox.set_theme(CalmTheme::default().with_primary_color(PaletteKey::Green).into_ref());
    checkbox.set_selection_state(SelectionState::Selected, true);

    assert_eq!(log.total(), 0);
    assert!(!checkbox.is_ready());
    assert_eq!(checkbox.dim(), None);
    assert_eq!(checkbox.content_radius(), None);
    assert_eq!(checkbox.static_colors(), None);
    assert_eq!(checkbox.dynamic_colors(), None);
    assert_eq!(checkbox.is_icon(), None);
    assert_eq!(checkbox.dynamic_animation_type(), None);

    assert_eq!(checkbox.selection_state(), SelectionState::Selected);
    assert_eq!(checkbox.intent(), Intent::Error);
    assert!(!checkbox.is_enabled());
}

#[test]
fn load_runs_each_derivation_once() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);

    for name in [
        "get_content_radius",
        "get_title_style",
        "get_spacing",
        "get_dim",
        "get_show_hidden_empty_label",
        "get_static_animation_type",
        "get_dynamic_animation_type",
        "get_static_colors",
        "get_dynamic_colors",
        "get_is_icon",
        "get_toggle_opacities",
    ] {
        assert_eq!(log.count(name), 1, "{name}");
    }
    assert_eq!(log.total(), 11);
    assert!(checkbox.is_ready());
    assert_eq!(checkbox.dim(), Some(1.0));
    assert_eq!(checkbox.content_radius(), Some(4.0));
    assert_eq!(checkbox.spacing(), Some(8.0));
    assert_eq!(checkbox.show_hidden_empty_label(), Some(false));
    assert_eq!(
        checkbox.static_animation_type(),
        Some(AnimationType::DEFAULT_ANIMATED)
    );
    assert_eq!(
        checkbox.dynamic_animation_type(),
        Some(AnimationType::Unanimated)
    );
    assert_eq!(checkbox.is_icon(), Some(false));
    assert_eq!(checkbox.icon(), None);
}

#[test]
fn unchanged_inputs_do_not_recompute() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Selected);
    checkbox.load(false);
    log.clear();

    checkbox.set_is_enabled(true);
    checkbox.set_intent(Intent::Basic);
    checkbox.set_is_custom_label(false);
    checkbox.set_is_reduce_motion_enabled(false);
    checkbox.set_selection_state(SelectionState::Selected, true);
    checkbox.set_theme(theme());

    assert_eq!(log.total(), 0);
}

#[test]
fn structurally_equal_theme_is_ignored() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    log.clear();

    checkbox.set_theme(CalmTheme::default().into_ref());
    assert_eq!(log.total(), 0);

    checkbox.set_theme(CalmTheme::default().with_primary_color(PaletteKey::Indigo).into_ref());
    assert_eq!(log.count("get_content_radius"), 1);
    assert_eq!(log.count("get_title_style"), 1);
    assert_eq!(log.count("get_spacing"), 1);
    assert_eq!(log.count("get_dim"), 1);
    assert_eq!(log.count("get_static_colors"), 1);
    assert_eq!(log.count("get_dynamic_colors"), 1);
    assert_eq!(log.count("get_is_icon"), 0);
}

#[test]
fn enabled_change_recomputes_only_dim() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    log.clear();

    checkbox.set_is_enabled(false);
    assert_eq!(log.count("get_dim"), 1);
    assert_eq!(log.total(), 1);
    assert_eq!(checkbox.dim(), Some(0.40));
}

#[test]
fn reduce_motion_recomputes_both_animation_types() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    log.clear();

    checkbox.set_is_reduce_motion_enabled(true);
    assert_eq!(log.count("get_static_animation_type"), 1);
    assert_eq!(log.count("get_dynamic_animation_type"), 1);
    assert_eq!(log.total(), 2);
    assert_eq!(checkbox.static_animation_type(), Some(AnimationType::Unanimated));
}

#[test]
fn custom_label_toggles_hidden_empty_label() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    log.clear();

    checkbox.set_is_custom_label(true);
    assert_eq!(log.count("get_show_hidden_empty_label"), 1);
    assert_eq!(checkbox.show_hidden_empty_label(), Some(true));
}

#[test]
fn checkbox_toggle_cycles_and_animates() {
    let mut checkbox = CheckboxViewModel::new(theme(), Intent::Basic, SelectionState::Indeterminate);
    checkbox.load(false);

    checkbox.toggle();
    assert_eq!(checkbox.selection_state(), SelectionState::Selected);
    assert!(checkbox.selected_value_animated());
    assert_eq!(
        checkbox.dynamic_animation_type(),
        Some(AnimationType::DEFAULT_ANIMATED)
    );
    assert_eq!(checkbox.icon(), Some(crate::use_cases::CheckboxIcon::Check));

    checkbox.toggle();
    assert_eq!(checkbox.selection_state(), SelectionState::Unselected);
    assert_eq!(checkbox.dynamic_colors().map(|c| c.background), Some(ColorToken::CLEAR));
    assert_eq!(checkbox.icon(), None);
}

#[test]
fn checkbox_tap_uses_painted_state() {
    let mut checkbox = CheckboxViewModel::new(theme(), Intent::Basic, SelectionState::Selected);
    checkbox.load(false);
    checkbox.set_selection_state(SelectionState::Unselected, false);

    assert_eq!(
        checkbox.toggle_from(SelectionState::Selected),
        Some(SelectionState::Unselected)
    );
    assert_eq!(checkbox.selection_state(), SelectionState::Unselected);

    assert_eq!(
        checkbox.toggle_from(SelectionState::Unselected),
        Some(SelectionState::Selected)
    );
    assert_eq!(checkbox.selection_state(), SelectionState::Selected);
    assert!(checkbox.selected_value_animated());

    checkbox.set_is_enabled(false);
    assert_eq!(checkbox.toggle_from(SelectionState::Selected), None);
    assert_eq!(checkbox.selection_state(), SelectionState::Selected);
}

#[test]
fn dim_transition_starts_after_load() {
    let mut checkbox = CheckboxViewModel::new(theme(), Intent::Basic, SelectionState::Unselected);
    checkbox.set_is_enabled(false);
    checkbox.load(false);
    assert_eq!(checkbox.dim(), Some(0.40));
    assert_eq!(checkbox.dim_transition(), None);

    checkbox.set_is_enabled(true);
    assert_eq!(checkbox.dim_transition(), Some((0.40, 1.0)));

    checkbox.set_theme(CalmTheme::default().with_primary_color(PaletteKey::Green).into_ref());
    assert_eq!(checkbox.dim_transition(), Some((0.40, 1.0)));

    checkbox.set_is_enabled(false);
    assert_eq!(checkbox.dim_transition(), Some((1.0, 0.40)));
}

#[test]
fn disabled_checkbox_ignores_toggle() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    checkbox.set_is_enabled(false);
    log.clear();

    checkbox.toggle();
    assert_eq!(checkbox.selection_state(), SelectionState::Unselected);
    assert_eq!(log.count("get_new_selected_value"), 1);
    assert_eq!(log.total(), 1);
}

#[test]
fn selection_change_recomputes_selection_outputs() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    log.clear();

    checkbox.set_selection_state(SelectionState::Indeterminate, false);
    assert_eq!(log.count("get_dynamic_animation_type"), 1);
    assert_eq!(log.count("get_dynamic_colors"), 1);
    assert_eq!(log.count("get_is_icon"), 1);
    assert_eq!(log.count("get_toggle_opacities"), 1);
    assert_eq!(log.count("get_static_colors"), 0);
    assert_eq!(
        checkbox.icon(),
        Some(crate::use_cases::CheckboxIcon::Indeterminate)
    );
    assert_eq!(
        checkbox.dynamic_animation_type(),
        Some(AnimationType::Unanimated)
    );
}

#[test]
fn animation_settles_only_after_every_token_completes() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Unselected);
    checkbox.load(false);
    checkbox.set_selection_state(SelectionState::Selected, true);

    checkbox.set_completed_animation(CheckboxAnimation::Colors);
    checkbox.set_completed_animation(CheckboxAnimation::Colors);
    assert!(checkbox.selected_value_animated());
    assert_eq!(checkbox.completed_animations().len(), 2);

    checkbox.set_completed_animation(CheckboxAnimation::Icon);
    assert!(!checkbox.selected_value_animated());
    assert!(checkbox.completed_animations().is_empty());
    assert!(checkbox.animation().is_idle());
    assert_eq!(
        checkbox.dynamic_animation_type(),
        Some(AnimationType::Unanimated)
    );
    assert_eq!(log.count("reset_animation"), 3);
}

#[test]
fn new_selection_discards_stale_completions() {
    let mut checkbox = CheckboxViewModel::new(theme(), Intent::Basic, SelectionState::Unselected);
    checkbox.load(false);
    checkbox.set_selection_state(SelectionState::Selected, true);
    checkbox.set_completed_animation(CheckboxAnimation::Colors);

    checkbox.set_selection_state(SelectionState::Unselected, true);
    assert!(checkbox.completed_animations().is_empty());
    assert!(checkbox.selected_value_animated());
}

#[test]
fn reduced_motion_keeps_selection_unanimated() {
    let mut checkbox = CheckboxViewModel::new(theme(), Intent::Basic, SelectionState::Unselected);
    checkbox.load(true);
    checkbox.toggle();
    assert!(checkbox.selected_value_animated());
    assert_eq!(
        checkbox.dynamic_animation_type(),
        Some(AnimationType::Unanimated)
    );
}

#[test]
fn intent_change_after_load_recolors() {
    let log = CallLog::default();
    let mut checkbox = spied_checkbox(&log, SelectionState::Selected);
    checkbox.load(false);
    let basic = checkbox.dynamic_colors();
    log.clear();

    checkbox.set_intent(Intent::Error);
    assert_eq!(log.count("get_static_colors"), 1);
    assert_eq!(log.count("get_dynamic_colors"), 1);
    assert_ne!(checkbox.dynamic_colors(), basic);
}

#[test]
fn radio_only_selects_on_tap() {
    let log = CallLog::default();
    let mut radio = spied_radio(&log, false);
    radio.load(false);
    assert_eq!(radio.show_selected_dot(), Some(false));
    assert_eq!(radio.content_radius(), Some(999.0));

    log.clear();
    assert!(radio.toggle_if_possible());
    assert!(radio.is_selected());
    assert_eq!(radio.show_selected_dot(), Some(true));
    assert_eq!(log.count("get_dynamic_colors"), 1);
    assert_eq!(log.count("get_show_selected_dot"), 1);
    assert_eq!(log.count("get_static_colors"), 0);

    log.clear();
    assert!(!radio.toggle_if_possible());
    assert!(radio.is_selected());
    assert_eq!(log.total(), 0);

    radio.set_is_selected(false, false);
    assert!(!radio.is_selected());
    assert_eq!(radio.dynamic_colors().map(|c| c.dot), Some(ColorToken::CLEAR));
}

#[test]
fn radio_unchanged_inputs_do_not_recompute() {
    let log = CallLog::default();
    let mut radio = spied_radio(&log, true);
    radio.load(false);
    log.clear();

    radio.set_intent(Intent::Basic);
    radio.set_theme(theme());
    radio.set_is_selected(true, true);
    radio.set_is_enabled(true);
    assert_eq!(log.total(), 0);
}

#[test]
fn radio_tap_uses_painted_value() {
    let mut radio = RadioViewModel::new(theme(), Intent::Basic, true);
    radio.load(false);
    radio.set_is_selected(false, false);

    assert!(!radio.select_from(true));
    assert!(!radio.is_selected());

    assert!(radio.select_from(false));
    assert!(radio.is_selected());
    assert!(radio.selected_value_animated());
}

#[test]
fn radio_animation_joins_border_and_dot() {
    let mut radio = RadioViewModel::new(theme(), Intent::Error, false);
    radio.load(false);
    radio.toggle_if_possible();

    radio.set_completed_animation(RadioAnimation::Dot);
    assert!(!radio.animation().is_idle());
    radio.set_completed_animation(RadioAnimation::Border);
    assert!(radio.animation().is_idle());
}

#[test]
fn toggle_load_takes_accessibility_inputs() {
    let log = CallLog::default();
    let mut toggle = spied_toggle(&log, true);
    toggle.load(false, false, Contrast::Standard);

    assert_eq!(log.count("get_is_icon"), 1);
    assert_eq!(log.count("get_show_space"), 1);
    assert_eq!(toggle.is_icon(), Some(false));
    assert_eq!(toggle.show_space(), Some(ToggleSpace::LEFT));

    log.clear();
    toggle.set_contrast(Contrast::Increased);
    assert_eq!(log.count("get_is_icon"), 1);
    assert_eq!(log.total(), 1);
    assert_eq!(toggle.is_icon(), Some(true));

    toggle.set_contrast(Contrast::Increased);
    assert_eq!(log.total(), 1);

    toggle.set_contrast(Contrast::Standard);
    toggle.set_is_on_off_switch_labels_enabled(true);
    assert_eq!(toggle.is_icon(), Some(true));
}

#[test]
fn disabled_toggle_ignores_tap() {
    let mut toggle = ToggleViewModel::new(theme(), Intent::Basic, false);
    toggle.load(false, false, Contrast::Standard);
    toggle.set_is_enabled(false);
    toggle.toggle();
    assert!(!toggle.is_on());

    toggle.set_is_enabled(true);
    toggle.toggle();
    assert!(toggle.is_on());
    assert_eq!(toggle.show_space(), Some(ToggleSpace::LEFT));

    toggle.set_completed_animation(ToggleAnimation::Track);
    toggle.set_completed_animation(ToggleAnimation::Thumb);
    assert!(toggle.animation().is_idle());
}

#[test]
fn toggle_unchanged_inputs_do_not_recompute() {
    let log = CallLog::default();
    let mut toggle = spied_toggle(&log, true);
    toggle.load(false, true, Contrast::Standard);
    log.clear();

    toggle.set_intent(Intent::Basic);
    toggle.set_theme(theme());
    toggle.set_is_on(true, true);
    toggle.set_is_on_off_switch_labels_enabled(true);
    toggle.set_contrast(Contrast::Standard);
    toggle.set_is_reduce_motion_enabled(false);
    assert_eq!(log.total(), 0);
}

#[test]
fn toggle_tap_uses_painted_value() {
    let mut toggle = ToggleViewModel::new(theme(), Intent::Basic, true);
    toggle.load(false, false, Contrast::Standard);
    toggle.set_is_on(false, false);

    assert_eq!(toggle.toggle_from(true), Some(false));
    assert!(!toggle.is_on());

    assert_eq!(toggle.toggle_from(false), Some(true));
    assert!(toggle.is_on());

    toggle.set_is_enabled(false);
    assert_eq!(toggle.toggle_from(true), None);
    assert!(toggle.is_on());
}

#[test]
fn toggle_inputs_before_load_are_stored_only() {
    let log = CallLog::default();
    let mut toggle = spied_toggle(&log, false);
    toggle.set_contrast(Contrast::Increased);
    toggle.set_is_on(true, true);
    assert_eq!(log.total(), 0);
    assert_eq!(toggle.is_icon(), None);
    assert!(toggle.is_on());
}

#[test]
fn group_layout_follows_accessibility_size() {
    let log = CallLog::default();
    let mut group = GroupViewModel::with_use_cases(theme(), Axis::Horizontal, spies::group_use_cases(&log));
    assert_eq!(group.spacing(), None);
    assert_eq!(group.layout_axis(), None);

    group.load(false);
    assert_eq!(group.spacing(), Some(24.0));
    assert_eq!(group.layout_axis(), Some(Axis::Horizontal));

    log.clear();
    group.set_is_accessibility_size(true);
    assert_eq!(log.count("get_group_spacing"), 1);
    assert_eq!(log.count("get_group_axis"), 1);
    assert_eq!(group.spacing(), Some(16.0));
    assert_eq!(group.layout_axis(), Some(Axis::Vertical));

    log.clear();
    group.set_is_accessibility_size(true);
    group.set_theme(theme());
    assert_eq!(log.total(), 0);
}
