use std::fmt;
use std::sync::Arc;

use crate::tokens::{ColorToken, ColorValue, PaletteKey, TextStyle};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicColors {
    pub basic: ColorToken,
    pub on_basic: ColorToken,
    pub basic_container: ColorToken,
    pub on_basic_container: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackColors {
    pub error: ColorToken,
    pub on_error: ColorToken,
    pub error_container: ColorToken,
    pub on_error_container: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseColors {
    pub surface: ColorToken,
    pub on_surface: ColorToken,
    pub outline: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub basic: BasicColors,
    pub feedback: FeedbackColors,
    pub base: BaseColors,
}

impl Colors {
    pub fn defaults_for(primary: PaletteKey, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                basic: BasicColors {
                    basic: ColorToken::palette(primary, 6),
                    on_basic: ColorToken::new(ColorValue::White),
                    basic_container: ColorToken::palette(primary, 1),
                    on_basic_container: ColorToken::palette(primary, 9),
                },
                feedback: FeedbackColors {
                    error: ColorToken::palette(PaletteKey::Red, 7),
                    on_error: ColorToken::new(ColorValue::White),
                    error_container: ColorToken::palette(PaletteKey::Red, 1),
                    on_error_container: ColorToken::palette(PaletteKey::Red, 9),
                },
                base: BaseColors {
                    surface: ColorToken::new(ColorValue::White),
                    on_surface: ColorToken::palette(PaletteKey::Dark, 9),
                    outline: ColorToken::palette(PaletteKey::Gray, 5),
                },
            },
            ColorScheme::Dark => Self {
                basic: BasicColors {
                    basic: ColorToken::palette(primary, 4),
                    on_basic: ColorToken::palette(PaletteKey::Dark, 9),
                    basic_container: ColorToken::palette(primary, 9),
                    on_basic_container: ColorToken::palette(primary, 1),
                },
                feedback: FeedbackColors {
                    error: ColorToken::palette(PaletteKey::Red, 5),
                    on_error: ColorToken::palette(PaletteKey::Dark, 9),
                    error_container: ColorToken::palette(PaletteKey::Red, 9),
                    on_error_container: ColorToken::palette(PaletteKey::Red, 1),
                },
                base: BaseColors {
                    surface: ColorToken::palette(PaletteKey::Dark, 7),
                    on_surface: ColorToken::palette(PaletteKey::Dark, 0),
                    outline: ColorToken::palette(PaletteKey::Dark, 3),
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub caption: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body1: TextStyle::new(16.0, 24.0, 400),
            body2: TextStyle::new(14.0, 20.0, 400),
            caption: TextStyle::new(12.0, 16.0, 400),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusTokens {
    pub small: f32,
    pub full: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub radius: RadiusTokens,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 2.0,
            radius: RadiusTokens {
                small: 4.0,
                full: 999.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingTokens {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub x_large: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub spacing: SpacingTokens,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            spacing: SpacingTokens {
                small: 4.0,
                medium: 8.0,
                large: 16.0,
                x_large: 24.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dims {
    pub none: f32,
    pub dim1: f32,
    pub dim2: f32,
    pub dim3: f32,
}

impl Default for Dims {
    fn default() -> Self {
        Self {
            none: 1.0,
            dim1: 0.72,
            dim2: 0.56,
            dim3: 0.40,
        }
    }
}

/// Design-system tokens consumed by every selection control.
///
/// Implementations are compared by value through [`same_theme`], never by
/// identity.
pub trait Theme: fmt::Debug + 'static {
    fn colors(&self) -> &Colors;
    fn typography(&self) -> &Typography;
    fn border(&self) -> &Border;
    fn layout(&self) -> &Layout;
    fn dims(&self) -> &Dims;
}

pub type ThemeRef = Arc<dyn Theme>;

pub fn same_theme(left: &dyn Theme, right: &dyn Theme) -> bool {
    left.colors() == right.colors()
        && left.typography() == right.typography()
        && left.border() == right.border()
        && left.layout() == right.layout()
        && left.dims() == right.dims()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalmTheme {
    pub primary_color: PaletteKey,
    pub color_scheme: ColorScheme,
    pub colors: Colors,
    pub typography: Typography,
    pub border: Border,
    pub layout: Layout,
    pub dims: Dims,
}

impl Default for CalmTheme {
    fn default() -> Self {
        let primary = PaletteKey::Blue;
        Self {
            primary_color: primary,
            color_scheme: ColorScheme::Light,
            colors: Colors::defaults_for(primary, ColorScheme::Light),
            typography: Typography::default(),
            border: Border::default(),
            layout: Layout::default(),
            dims: Dims::default(),
        }
    }
}

impl CalmTheme {
    pub fn with_primary_color(mut self, primary: PaletteKey) -> Self {
        self.primary_color = primary;
        self.colors = Colors::defaults_for(primary, self.color_scheme);
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self.colors = Colors::defaults_for(self.primary_color, scheme);
        self
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }

    /// Replaces the basic color family with a custom `#rrggbb` / `#rrggbbaa` brand color.
    pub fn with_custom_basic(mut self, hex: &str) -> Result<Self, ThemeError> {
        let basic = parse_hex_color(hex)?;
        self.colors.basic.basic = ColorToken::new(basic);
        Ok(self)
    }

    pub fn into_ref(self) -> ThemeRef {
        Arc::new(self)
    }
}

impl Theme for CalmTheme {
    fn colors(&self) -> &Colors {
        &self.colors
    }

    fn typography(&self) -> &Typography {
        &self.typography
    }

    fn border(&self) -> &Border {
        &self.border
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn dims(&self) -> &Dims {
        &self.dims
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ThemeError {
    InvalidColor { value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { value } => write!(f, "invalid hex color `{value}`"),
        }
    }
}

impl std::error::Error for ThemeError {}

pub fn parse_hex_color(value: &str) -> Result<ColorValue, ThemeError> {
    let invalid = || ThemeError::InvalidColor {
        value: value.to_string(),
    };
    let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    let parsed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
        6 => Ok(ColorValue::Custom((parsed << 8) | 0xff)),
        8 => Ok(ColorValue::Custom(parsed)),
        _ => Err(invalid()),
    }
}
