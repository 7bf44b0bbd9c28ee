use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType, StyleKey, ThemeName};
use crate::catalog::themes::ThemeRegistry;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Default mask color.
pub const DEFAULT_MASK_COLOR: Rgb8 = Rgb8::new(0xE8, 0xE6, 0xE1);
/// Default hair color.
pub const DEFAULT_HAIR_COLOR: Rgb8 = Rgb8::new(0x8B, 0x89, 0x85);
/// Default outfit color.
pub const DEFAULT_OUTFIT_COLOR: Rgb8 = Rgb8::new(0xD4, 0xD2, 0xCD);
/// Substitute for malformed accessory colors.
pub const DEFAULT_ACCESSORY_COLOR: Rgb8 = Rgb8::new(0x6B, 0x69, 0x65);
/// Default mask pattern tag.
pub const DEFAULT_MASK_PATTERN: &str = "plain";

/// Complete persona descriptor, as stored by the profile API.
///
/// Fields are raw strings on purpose: the profile layer may hand over legacy or corrupted values
/// and the engine degrades them at render time instead of rejecting them here. Missing sections
/// take their documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonaConfig {
    /// Face covering.
    pub mask: MaskConfig,
    /// Hair.
    pub hair: HairConfig,
    /// Clothing.
    pub outfit: OutfitConfig,
    /// Background/lighting preset.
    pub theme: ThemeConfig,
    /// Worn extras; array order is draw order (later entries on top).
    pub accessories: Vec<AccessoryConfig>,
    /// Show this persona instead of a photo.
    pub enabled: bool,
}

/// Mask section.
///
/// Fields missing from stored JSON read as empty strings; rendering substitutes and records them
/// like any other out-of-catalog value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Mask style key.
    #[serde(default)]
    pub style: String,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: String,
    /// Free-form pattern tag, carried through untouched.
    #[serde(default)]
    pub pattern: String,
}

/// Hair section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairConfig {
    /// Hair style key.
    #[serde(default)]
    pub style: String,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: String,
}

/// Outfit section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitConfig {
    /// Outfit type key.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: String,
}

/// Theme section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme preset key.
    #[serde(default)]
    pub name: String,
    /// Lighting tag saved with the preset.
    #[serde(default)]
    pub lighting: String,
    /// Background descriptor saved with the preset.
    #[serde(default)]
    pub background: String,
}

/// One accessory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryConfig {
    /// Accessory type key.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Free-form sub-style tag.
    #[serde(default)]
    pub style: String,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: String,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            style: MaskStyle::DEFAULT.key().to_owned(),
            color: DEFAULT_MASK_COLOR.to_hex(),
            pattern: DEFAULT_MASK_PATTERN.to_owned(),
        }
    }
}

impl Default for HairConfig {
    fn default() -> Self {
        Self {
            style: HairStyle::DEFAULT.key().to_owned(),
            color: DEFAULT_HAIR_COLOR.to_hex(),
        }
    }
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self {
            kind: OutfitType::DEFAULT.key().to_owned(),
            color: DEFAULT_OUTFIT_COLOR.to_hex(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::from_registry(ThemeRegistry::builtin(), ThemeName::DEFAULT)
    }
}

impl ThemeConfig {
    /// Theme section mirroring a registry preset (name, lighting and background).
    pub fn from_registry(registry: &ThemeRegistry, name: ThemeName) -> Self {
        match registry.get(name) {
            Some(p) => Self {
                name: name.key().to_owned(),
                lighting: p.lighting.to_owned(),
                background: p.background.to_owned(),
            },
            None => Self {
                name: name.key().to_owned(),
                lighting: String::new(),
                background: String::new(),
            },
        }
    }
}

impl AccessoryConfig {
    /// Accessory entry with an empty sub-style.
    pub fn new(kind: AccessoryType, color: Rgb8) -> Self {
        Self {
            kind: kind.key().to_owned(),
            style: String::new(),
            color: color.to_hex(),
        }
    }

    /// Set the sub-style tag.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            mask: MaskConfig::default(),
            hair: HairConfig::default(),
            outfit: OutfitConfig::default(),
            theme: ThemeConfig::default(),
            accessories: Vec::new(),
            enabled: false,
        }
    }
}

impl PersonaConfig {
    /// Parse a persona from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AvatarResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AvatarError::serde(format!("parse persona JSON: {e}")))
    }

    /// Parse a persona from a JSON string.
    pub fn from_json_str(s: &str) -> AvatarResult<Self> {
        serde_json::from_str(s).map_err(|e| AvatarError::serde(format!("parse persona JSON: {e}")))
    }

    /// Parse a persona from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AvatarError::Other(anyhow::Error::new(e).context(format!(
                "open persona JSON '{}'",
                path.display()
            )))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AvatarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AvatarError::serde(format!("serialize persona JSON: {e}")))
    }

    /// Strict check for the profile-write path: every key in its closed set, every color valid.
    ///
    /// Rendering never calls this; it degrades instead.
    pub fn validate(&self) -> AvatarResult<()> {
        let mut issues = Vec::new();
        crate::persona::resolve::resolve_persona(self, &mut issues);
        if issues.is_empty() {
            return Ok(());
        }
        let msgs = issues
            .iter()
            .map(|d| format!("{}: {}", d.slot, d.detail))
            .collect::<Vec<_>>();
        Err(AvatarError::validation(msgs.join("; ")))
    }

    /// Copy with the mask replaced.
    pub fn with_mask(mut self, style: MaskStyle, color: Rgb8) -> Self {
        self.mask.style = style.key().to_owned();
        self.mask.color = color.to_hex();
        self
    }

    /// Copy with the hair replaced.
    pub fn with_hair(mut self, style: HairStyle, color: Rgb8) -> Self {
        self.hair = HairConfig {
            style: style.key().to_owned(),
            color: color.to_hex(),
        };
        self
    }

    /// Copy with the outfit replaced.
    pub fn with_outfit(mut self, kind: OutfitType, color: Rgb8) -> Self {
        self.outfit = OutfitConfig {
            kind: kind.key().to_owned(),
            color: color.to_hex(),
        };
        self
    }

    /// Copy with the theme replaced by a built-in preset.
    pub fn with_theme(mut self, name: ThemeName) -> Self {
        self.theme = ThemeConfig::from_registry(ThemeRegistry::builtin(), name);
        self
    }

    /// Copy with one more accessory on top.
    pub fn with_accessory(mut self, accessory: AccessoryConfig) -> Self {
        self.accessories.push(accessory);
        self
    }

    /// Copy with the enabled flag set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persona/model.rs"]
mod tests;
