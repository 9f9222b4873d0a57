use gpui::Hsla;

pub const COLOR_STOPS: usize = 10;
pub type ColorScale = [&'static str; COLOR_STOPS];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PaletteKey {
    Dark,
    Gray,
    Red,
    Blue,
    Indigo,
    Green,
}

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn scale(key: PaletteKey) -> ColorScale {
        match key {
            PaletteKey::Dark => [
                "#C9C9C9", "#b8b8b8", "#828282", "#696969", "#424242", "#3b3b3b", "#2e2e2e",
                "#242424", "#1f1f1f", "#141414",
            ],
            PaletteKey::Gray => [
                "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96",
                "#495057", "#343a40", "#212529",
            ],
            PaletteKey::Red => [
                "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252",
                "#f03e3e", "#e03131", "#c92a2a",
            ],
            PaletteKey::Blue => [
                "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6",
                "#1c7ed6", "#1971c2", "#1864ab",
            ],
            PaletteKey::Indigo => [
                "#edf2ff", "#dbe4ff", "#bac8ff", "#91a7ff", "#748ffc", "#5c7cfa", "#4c6ef5",
                "#4263eb", "#3b5bdb", "#364fc7",
            ],
            PaletteKey::Green => [
                "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#40c057",
                "#37b24d", "#2f9e44", "#2b8a3e",
            ],
        }
    }

    pub fn hex(key: PaletteKey, shade: u8) -> &'static str {
        let scale = Self::scale(key);
        scale[usize::from(shade).min(COLOR_STOPS - 1)]
    }
}

/// Where a color token draws its value from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColorValue {
    Palette { key: PaletteKey, shade: u8 },
    White,
    Clear,
    /// `0xRRGGBBAA`
    Custom(u32),
}

impl ColorValue {
    pub const fn palette(key: PaletteKey, shade: u8) -> Self {
        Self::Palette { key, shade }
    }
}

/// A theme color plus the opacity it is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorToken {
    pub value: ColorValue,
    pub opacity: f32,
}

impl ColorToken {
    pub const CLEAR: Self = Self::new(ColorValue::Clear);

    pub const fn new(value: ColorValue) -> Self {
        Self {
            value,
            opacity: 1.0,
        }
    }

    pub const fn palette(key: PaletteKey, shade: u8) -> Self {
        Self::new(ColorValue::palette(key, shade))
    }

    pub fn opacity(self, factor: f32) -> Self {
        Self {
            opacity: (self.opacity * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_hsla(self) -> Hsla {
        let base: Hsla = match self.value {
            ColorValue::Palette { key, shade } => {
                gpui::Rgba::try_from(PaletteCatalog::hex(key, shade))
                    .map(Into::into)
                    .unwrap_or_else(|_| gpui::black())
            }
            ColorValue::White => gpui::white(),
            ColorValue::Clear => gpui::transparent_black(),
            ColorValue::Custom(rgba) => gpui::rgba(rgba).into(),
        };
        base.opacity(self.opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub line_height: f32,
    pub weight: u16,
}

impl TextStyle {
    pub const fn new(size: f32, line_height: f32, weight: u16) -> Self {
        Self {
            size,
            line_height,
            weight,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DurationScale {
    pub fast_ms: u16,
}

pub const MOTION_DURATIONS: DurationScale = DurationScale {
    fast_ms: 150,
};
