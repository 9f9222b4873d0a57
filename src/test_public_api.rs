use gpui::{IntoElement, Render, div};

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}
fn assert_render<T: Render>() {}
fn assert_emits<T: gpui::EventEmitter<E>, E: 'static>() {}

#[test]
fn components_are_render_once() {
    assert_render_once::<crate::components::Checkbox>();
    assert_render_once::<crate::components::Radio>();
    assert_render_once::<crate::components::Toggle>();
    assert_render_once::<crate::components::CheckboxGroup>();
    assert_render_once::<crate::components::RadioGroup>();
}

#[test]
fn views_render_and_emit_changes() {
    use crate::views::*;

    assert_render::<CheckboxView>();
    assert_render::<RadioView>();
    assert_render::<ToggleView>();
    assert_render::<CheckboxGroupView>();
    assert_render::<RadioGroupView>();

    assert_emits::<CheckboxView, CheckboxChanged>();
    assert_emits::<CheckboxView, ValueChanged>();
    assert_emits::<RadioView, RadioSelected>();
    assert_emits::<ToggleView, ToggleChanged>();
    assert_emits::<CheckboxGroupView, CheckboxGroupChanged>();
    assert_emits::<RadioGroupView, RadioGroupChanged>();
    assert_emits::<RadioGroupView, ValueChanged>();
}

#[test]
fn prelude_smoke_builds_controls() {
    use crate::prelude::*;

    let _ = into_any(Checkbox::new("Accept terms").checked(true).intent(Intent::Error));
    let _ = into_any(Checkbox::custom(div()).selection_state(SelectionState::Indeterminate));
    let _ = into_any(Radio::new("Email").default_selected(true));
    let _ = into_any(Toggle::new("Wi-Fi").on(true).disabled(true));
    let _ = into_any(
        CheckboxGroup::new()
            .item(SelectionItem::new("a", "A"))
            .item(SelectionItem::new("b", "B").disabled(true))
            .values(["a".into()])
            .axis(Axis::Horizontal),
    );
    let _ = into_any(
        RadioGroup::new()
            .items([SelectionItem::new("x", "X"), SelectionItem::new("y", "Y")])
            .default_value("y"),
    );
}

#[test]
fn provider_builder_accepts_theme_and_settings() {
    use crate::prelude::*;

    let _ = SelectionProvider::new()
        .configure_theme(|theme| theme)
        .set_accessibility(
            AccessibilitySettings::new()
                .with_reduce_motion(true)
                .with_content_size_category(ContentSizeCategory::AccessibilityLarge),
        );
}
