//! Drawing shared by the declarative and the imperative controls.
//!
//! Every function reads view-model outputs only; nothing here decides state.

use std::fmt;

use gpui::{
    AnyElement, Div, FontWeight, InteractiveElement, IntoElement, ParentElement, SharedString,
    Styled, div, px, svg,
};

use crate::icon::{ControlIcon, IconRegistry};
use crate::style::{Axis, TitleStyle};
use crate::view_model::{
    AnimationToken, CheckboxViewModel, RadioViewModel, SelectionViewModel, ToggleViewModel,
};

use super::transition::{fade_between, fade_in};

pub const CHECKBOX_SIZE: f32 = 18.0;
pub const CHECKBOX_ICON_SIZE: f32 = 12.0;
pub const RADIO_SIZE: f32 = 20.0;
pub const RADIO_DOT_SIZE: f32 = 10.0;
pub const TOGGLE_WIDTH: f32 = 44.0;
pub const TOGGLE_HEIGHT: f32 = 24.0;
pub const TOGGLE_THUMB_SIZE: f32 = 20.0;
pub const TOGGLE_ICON_SIZE: f32 = 10.0;

/// Left offset of the toggle thumb; `space_left` means the thumb sits right.
pub fn toggle_thumb_left(space_left: bool) -> f32 {
    let inset = (TOGGLE_HEIGHT - TOGGLE_THUMB_SIZE) / 2.0;
    if space_left {
        TOGGLE_WIDTH - TOGGLE_THUMB_SIZE - inset
    } else {
        inset
    }
}

fn transition_key(id: &SharedString, part: &str, value: impl fmt::Debug) -> SharedString {
    format!("{id}::{part}::{value:?}").into()
}

fn icon_element(icons: &IconRegistry, icon: ControlIcon, size: f32, color: gpui::Hsla) -> AnyElement {
    match icons.resolve(icon) {
        Some(path) => svg()
            .external_path(path.to_string_lossy().to_string())
            .size(px(size))
            .text_color(color)
            .into_any_element(),
        None => div().size(px(size)).into_any_element(),
    }
}

pub fn checkbox_box(id: &SharedString, view_model: &CheckboxViewModel, icons: &IconRegistry) -> Div {
    let (Some(statics), Some(dynamics), Some(opacities), Some(radius)) = (
        view_model.static_colors(),
        view_model.dynamic_colors(),
        view_model.toggle_opacities(),
        view_model.content_radius(),
    ) else {
        return div().size(px(CHECKBOX_SIZE));
    };
    let animation = view_model.dynamic_animation_type().unwrap_or_default();

    let mut control = div()
        .size(px(CHECKBOX_SIZE))
        .flex()
        .items_center()
        .justify_center()
        .rounded(px(radius))
        .border(px(view_model.theme().border().width))
        .border_color(dynamics.border.opacity(opacities.border).to_hsla())
        .bg(dynamics.background.opacity(opacities.background).to_hsla());
    if view_model.is_enabled() {
        let hover = statics.hover.to_hsla();
        control = control.hover(move |style| style.border_color(hover));
    }

    if let Some(icon) = view_model.icon() {
        let glyph = div().child(icon_element(
            icons,
            icon.into(),
            CHECKBOX_ICON_SIZE,
            statics.icon.to_hsla(),
        ));
        control = control.child(fade_in(
            glyph,
            transition_key(id, "icon", view_model.selection_state()),
            animation,
        ));
    }
    control
}

pub fn radio_circle(id: &SharedString, view_model: &RadioViewModel) -> Div {
    let (Some(statics), Some(dynamics), Some(radius)) = (
        view_model.static_colors(),
        view_model.dynamic_colors(),
        view_model.content_radius(),
    ) else {
        return div().size(px(RADIO_SIZE));
    };
    let animation = view_model.dynamic_animation_type().unwrap_or_default();

    let mut control = div()
        .size(px(RADIO_SIZE))
        .flex()
        .items_center()
        .justify_center()
        .rounded(px(radius))
        .border(px(view_model.theme().border().width))
        .border_color(dynamics.border.to_hsla());
    if view_model.is_enabled() {
        let hover = statics.hover.to_hsla();
        control = control.hover(move |style| style.border_color(hover));
    }

    if view_model.show_selected_dot() == Some(true) {
        let dot = div()
            .size(px(RADIO_DOT_SIZE))
            .rounded(px(radius))
            .bg(dynamics.dot.to_hsla());
        control = control.child(fade_in(
            dot,
            transition_key(id, "dot", view_model.is_selected()),
            animation,
        ));
    }
    control
}

pub fn toggle_track(id: &SharedString, view_model: &ToggleViewModel, icons: &IconRegistry) -> Div {
    let (Some(statics), Some(dynamics), Some(space), Some(radius)) = (
        view_model.static_colors(),
        view_model.dynamic_colors(),
        view_model.show_space(),
        view_model.content_radius(),
    ) else {
        return div().w(px(TOGGLE_WIDTH)).h(px(TOGGLE_HEIGHT));
    };
    let animation = view_model.dynamic_animation_type().unwrap_or_default();
    let inset = (TOGGLE_HEIGHT - TOGGLE_THUMB_SIZE) / 2.0;

    let thumb = div()
        .absolute()
        .top(px(inset))
        .left(px(toggle_thumb_left(space.left)))
        .size(px(TOGGLE_THUMB_SIZE))
        .rounded(px(radius))
        .bg(statics.thumb.to_hsla());

    let mut track = div()
        .relative()
        .w(px(TOGGLE_WIDTH))
        .h(px(TOGGLE_HEIGHT))
        .rounded(px(radius))
        .bg(dynamics.track.to_hsla())
        .child(fade_in(
            thumb,
            transition_key(id, "thumb", view_model.is_on()),
            animation,
        ));
    if view_model.is_enabled() {
        let hover = statics.hover.to_hsla();
        track = track.hover(move |style| style.bg(hover));
    }

    if view_model.is_icon() == Some(true) {
        let icon_left = if space.left {
            (TOGGLE_WIDTH / 2.0 - TOGGLE_ICON_SIZE) / 2.0
        } else {
            TOGGLE_WIDTH / 2.0 + (TOGGLE_WIDTH / 2.0 - TOGGLE_ICON_SIZE) / 2.0
        };
        track = track.child(
            div()
                .absolute()
                .top(px((TOGGLE_HEIGHT - TOGGLE_ICON_SIZE) / 2.0))
                .left(px(icon_left))
                .child(icon_element(
                    icons,
                    ControlIcon::for_toggle(view_model.is_on()),
                    TOGGLE_ICON_SIZE,
                    dynamics.icon.to_hsla(),
                )),
        );
    }
    track
}

fn styled_title(text: SharedString, title: TitleStyle) -> Div {
    div()
        .text_size(px(title.typography.size))
        .line_height(px(title.typography.line_height))
        .font_weight(FontWeight(f32::from(title.typography.weight)))
        .text_color(title.color.to_hsla())
        .child(text)
}

/// Control, label and dimming for one selection control.
///
/// A custom label replaces the text, but an empty hidden text element stays in
/// place when the view-model asks for it.
pub fn label_row<V, A>(
    id: &SharedString,
    control: impl IntoElement,
    label: Option<SharedString>,
    custom_label: Option<AnyElement>,
    view_model: &SelectionViewModel<V, A>,
) -> AnyElement
where
    V: Clone + PartialEq + fmt::Debug,
    A: AnimationToken,
{
    let mut row = div()
        .flex()
        .flex_row()
        .items_center()
        .gap(px(view_model.spacing().unwrap_or_default()))
        .child(control);

    match (custom_label, view_model.title_style()) {
        (Some(custom), _) => {
            row = row.child(custom);
            if view_model.show_hidden_empty_label() == Some(true) {
                row = row.child(div().invisible().w(px(0.0)).child(SharedString::default()));
            }
        }
        (None, Some(title)) => {
            if let Some(text) = label {
                row = row.child(styled_title(text, title));
            }
        }
        (None, None) => {}
    }

    let dim = view_model.dim().unwrap_or(1.0);
    let (from, to) = view_model.dim_transition().unwrap_or((dim, dim));
    fade_between(
        row,
        transition_key(id, "dim", to),
        view_model.static_animation_type().unwrap_or_default(),
        from,
        to,
    )
}

/// Container laying out group items along `axis` with `spacing` between them.
pub fn group_stack(axis: Axis, spacing: f32) -> Div {
    let stack = div().flex().gap(px(spacing));
    match axis {
        Axis::Vertical => stack.flex_col(),
        Axis::Horizontal => stack.flex_row().flex_wrap().items_start(),
    }
}
