use serde::Serialize;

use crate::catalog::keys::{StyleKey, ThemeName};

/// Named color triple carried by some presets for UI chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Dominant color.
    pub primary: &'static str,
    /// Supporting color.
    pub secondary: &'static str,
    /// Accent color.
    pub accent: &'static str,
}

/// A named background + lighting + mood bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemePreset {
    /// Closed-set key.
    pub key: ThemeName,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Glyph shown in pickers.
    pub icon: &'static str,
    /// Opaque background descriptor; color stops are mined from its `#RRGGBB` tokens.
    pub background: &'static str,
    /// Lighting tag.
    pub lighting: &'static str,
    /// Mood tag.
    pub mood: &'static str,
    /// Optional named colors.
    pub colors: Option<ThemeColors>,
}

/// Built-in presets, one per [`ThemeName`].
pub const THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        key: ThemeName::UrbanDawn,
        name: "Urban Dawn",
        description: "First light over concrete and glass",
        icon: "🌅",
        background: "linear-gradient(135deg, #FFE5B4 0%, #FFB6A3 45%, #A7B4C8 100%)",
        lighting: "soft-warm",
        mood: "hopeful",
        colors: Some(ThemeColors {
            primary: "#FFB6A3",
            secondary: "#A7B4C8",
            accent: "#FFE5B4",
        }),
    },
    ThemePreset {
        key: ThemeName::NeonNight,
        name: "Neon Night",
        description: "Signage glow on wet streets",
        icon: "🌃",
        background: "linear-gradient(160deg, #0F0C29 0%, #302B63 50%, #FF2E97 100%)",
        lighting: "neon-rim",
        mood: "electric",
        colors: Some(ThemeColors {
            primary: "#FF2E97",
            secondary: "#302B63",
            accent: "#00F0FF",
        }),
    },
    ThemePreset {
        key: ThemeName::ForestMist,
        name: "Forest Mist",
        description: "Fog drifting between pines",
        icon: "🌲",
        background: "linear-gradient(180deg, #D8E2DC 0%, #95B8A6 55%, #3F5E4E 100%)",
        lighting: "diffuse-cool",
        mood: "calm",
        colors: None,
    },
    ThemePreset {
        key: ThemeName::OceanDepth,
        name: "Ocean Depth",
        description: "Sunlight fading into deep water",
        icon: "🌊",
        background: "linear-gradient(180deg, #48CAE4 0%, #0077B6 50%, #03045E 100%)",
        lighting: "caustic",
        mood: "contemplative",
        colors: Some(ThemeColors {
            primary: "#0077B6",
            secondary: "#03045E",
            accent: "#48CAE4",
        }),
    },
    ThemePreset {
        key: ThemeName::DesertSunset,
        name: "Desert Sunset",
        description: "Dunes burning orange into violet",
        icon: "🏜️",
        background: "linear-gradient(200deg, #FFD166 0%, #F77F00 40%, #D62828 75%, #5A189A 100%)",
        lighting: "golden-hour",
        mood: "warm",
        colors: None,
    },
    ThemePreset {
        key: ThemeName::ArcticAurora,
        name: "Arctic Aurora",
        description: "Curtains of green light over ice",
        icon: "🌌",
        background: "linear-gradient(120deg, #0B132B 0%, #1C7C7D 45%, #5BFFB0 75%, #9D4EDD 100%)",
        lighting: "aurora-glow",
        mood: "mystical",
        colors: Some(ThemeColors {
            primary: "#5BFFB0",
            secondary: "#0B132B",
            accent: "#9D4EDD",
        }),
    },
    ThemePreset {
        key: ThemeName::CosmicVoid,
        name: "Cosmic Void",
        description: "Deep space with a faint nebula core",
        icon: "🪐",
        background: "radial-gradient(circle at center, #3C096C 0%, #10002B 60%, #000000 100%)",
        lighting: "starlight",
        mood: "vast",
        colors: None,
    },
    ThemePreset {
        key: ThemeName::StudioMinimal,
        name: "Studio Minimal",
        description: "Seamless paper backdrop under softboxes",
        icon: "⬜",
        background: "linear-gradient(180deg, #FAFAF9 0%, #E7E5E4 100%)",
        lighting: "softbox",
        mood: "neutral",
        colors: None,
    },
];

static BUILTIN: ThemeRegistry = ThemeRegistry::new(THEME_PRESETS);

/// Read-only lookup over a set of theme presets.
#[derive(Clone, Copy, Debug)]
pub struct ThemeRegistry {
    presets: &'static [ThemePreset],
}

impl ThemeRegistry {
    /// Wrap a static preset table.
    pub const fn new(presets: &'static [ThemePreset]) -> Self {
        Self { presets }
    }

    /// The process-wide built-in registry.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Preset for `key`, if the registry carries one.
    pub fn get(&self, key: ThemeName) -> Option<&'static ThemePreset> {
        self.presets.iter().find(|p| p.key == key)
    }

    /// Preset for a raw theme name, if it is a known key present in this registry.
    pub fn lookup(&self, name: &str) -> Option<&'static ThemePreset> {
        ThemeName::parse(name).and_then(|k| self.get(k))
    }

    /// Preset for [`ThemeName::DEFAULT`].
    pub fn default_preset(&self) -> Option<&'static ThemePreset> {
        self.get(ThemeName::DEFAULT)
    }

    /// Presets in registry order.
    pub fn iter(&self) -> std::slice::Iter<'static, ThemePreset> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Return `true` when the registry has no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        BUILTIN
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/themes.rs"]
mod tests;
