use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use rust_embed::RustEmbed;

use crate::use_cases::CheckboxIcon;

/// Glyphs drawn inside selection controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ControlIcon {
    Check,
    Indeterminate,
    ToggleOn,
    ToggleOff,
}

impl ControlIcon {
    pub const ALL: [Self; 4] = [
        Self::Check,
        Self::Indeterminate,
        Self::ToggleOn,
        Self::ToggleOff,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Indeterminate => "indeterminate",
            Self::ToggleOn => "toggle-on",
            Self::ToggleOff => "toggle-off",
        }
    }

    /// On/off glyph drawn inside the toggle track.
    pub fn for_toggle(is_on: bool) -> Self {
        if is_on { Self::ToggleOn } else { Self::ToggleOff }
    }
}

impl From<CheckboxIcon> for ControlIcon {
    fn from(icon: CheckboxIcon) -> Self {
        match icon {
            CheckboxIcon::Check => Self::Check,
            CheckboxIcon::Indeterminate => Self::Indeterminate,
        }
    }
}

#[derive(Debug, Default)]
struct IconIndex {
    paths: BTreeMap<String, PathBuf>,
}

/// Resolves control icons to SVG files extracted from the embedded assets.
#[derive(Clone, Debug)]
pub struct IconRegistry {
    index: Arc<IconIndex>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let index = extract_embedded::<EmbeddedControlIcons>("controls")
            .and_then(|root| index_from_root(&root).ok())
            .unwrap_or_default();
        if index.paths.is_empty() {
            tracing::warn!("control icons could not be extracted; icons will not render");
        }
        Self {
            index: Arc::new(index),
        }
    }

    pub fn resolve(&self, icon: ControlIcon) -> Option<PathBuf> {
        self.index.paths.get(icon.name()).cloned()
    }

    pub fn len(&self) -> usize {
        self.index.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.paths.is_empty()
    }
}

fn index_from_root(root: &Path) -> Result<IconIndex, std::io::Error> {
    let mut index = IconIndex::default();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .is_some_and(|value| value.eq_ignore_ascii_case("svg"));
        if !path.is_file() || !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            index.paths.insert(stem.to_string(), path.clone());
        }
    }
    Ok(index)
}

fn extract_embedded<T: RustEmbed>(folder_name: &str) -> Option<PathBuf> {
    let root = std::env::temp_dir()
        .join("calmui-selection-icons")
        .join(env!("CARGO_PKG_VERSION"))
        .join(folder_name);
    let marker = root.join(".extract-ready");

    if marker.exists() && embedded_is_complete::<T>(&root) {
        return Some(root);
    }

    let _ = fs::remove_dir_all(&root);
    if let Err(error) = fs::create_dir_all(&root) {
        tracing::warn!(%error, path = %root.display(), "cannot create icon directory");
        return None;
    }

    for relative in T::iter() {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            continue;
        };
        let Some(content) = T::get(relative) else {
            continue;
        };
        if fs::write(root.join(safe_relative), content.data.as_ref()).is_err() {
            return None;
        }
    }

    fs::write(marker, b"ok").ok()?;
    tracing::debug!(path = %root.display(), "extracted control icons");
    Some(root)
}

fn embedded_is_complete<T: RustEmbed>(root: &Path) -> bool {
    T::iter().all(|relative| {
        sanitize_relative_path(relative.as_ref())
            .is_some_and(|safe_relative| root.join(safe_relative).is_file())
    })
}

fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

#[derive(RustEmbed)]
#[folder = "assets/icons"]
struct EmbeddedControlIcons;
