use crate::style::Intent;
use crate::theme::Theme;
use crate::tokens::ColorToken;

/// Intent-gated color lookups shared by every control.
pub trait GetColor {
    fn content(&self, theme: &dyn Theme, intent: Intent) -> ColorToken;
    fn on_content(&self, theme: &dyn Theme, intent: Intent) -> ColorToken;
    fn border(&self, theme: &dyn Theme, intent: Intent, is_selected: bool) -> ColorToken;
    fn hover(&self, theme: &dyn Theme, intent: Intent) -> ColorToken;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GetColorUseCase;

impl GetColor for GetColorUseCase {
    fn content(&self, theme: &dyn Theme, intent: Intent) -> ColorToken {
        let colors = theme.colors();
        match intent {
            Intent::Basic => colors.basic.basic,
            Intent::Error => colors.feedback.error,
        }
    }

    fn on_content(&self, theme: &dyn Theme, intent: Intent) -> ColorToken {
        let colors = theme.colors();
        match intent {
            Intent::Basic => colors.basic.on_basic,
            Intent::Error => colors.feedback.on_error,
        }
    }

    fn border(&self, theme: &dyn Theme, intent: Intent, is_selected: bool) -> ColorToken {
        let colors = theme.colors();
        match intent {
            Intent::Basic if is_selected => colors.basic.basic,
            Intent::Basic => colors.base.outline,
            Intent::Error => colors.feedback.error,
        }
    }

    fn hover(&self, theme: &dyn Theme, intent: Intent) -> ColorToken {
        let colors = theme.colors();
        match intent {
            Intent::Basic => colors.basic.basic_container,
            Intent::Error => colors.feedback.error_container,
        }
    }
}
