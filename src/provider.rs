use crate::accessibility::AccessibilitySettings;
use crate::theme::{CalmTheme, ThemeRef};

/// App-wide theme and accessibility preferences for selection controls.
#[derive(Default)]
pub struct SelectionProvider {
    theme: Option<ThemeRef>,
    accessibility: Option<AccessibilitySettings>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: ThemeRef,
    accessibility: AccessibilitySettings,
}

impl gpui::Global for ProviderGlobal {}

impl SelectionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, theme: ThemeRef) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn configure_theme(mut self, configure: impl FnOnce(CalmTheme) -> CalmTheme) -> Self {
        self.theme = Some(configure(CalmTheme::default()).into_ref());
        self
    }

    pub fn set_accessibility(mut self, settings: AccessibilitySettings) -> Self {
        self.accessibility = Some(settings);
        self
    }

    /// Installs the provider, or merges the configured parts into an installed one.
    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = theme;
            }
            if let Some(settings) = self.accessibility {
                global.accessibility = settings;
            }
            return;
        }

        tracing::debug!("installing selection provider");
        cx.set_global(ProviderGlobal {
            theme: self.theme.unwrap_or_else(|| CalmTheme::default().into_ref()),
            accessibility: self.accessibility.unwrap_or_default(),
        });
    }

    pub fn theme(cx: &gpui::App) -> ThemeRef {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| CalmTheme::default().into_ref())
    }

    pub fn accessibility(cx: &gpui::App) -> AccessibilitySettings {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.accessibility)
            .unwrap_or_default()
    }
}
