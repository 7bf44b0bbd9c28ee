use serde::{Deserialize, Serialize};

/// The configurable categories of a persona.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Face covering.
    Mask,
    /// Hair style.
    Hair,
    /// Clothing.
    Outfit,
    /// Background/lighting preset.
    Theme,
    /// Worn extras drawn above the mask.
    Accessory,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Mask,
        Category::Hair,
        Category::Outfit,
        Category::Theme,
        Category::Accessory,
    ];

    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Mask => "mask",
            Category::Hair => "hair",
            Category::Outfit => "outfit",
            Category::Theme => "theme",
            Category::Accessory => "accessory",
        }
    }
}

/// A closed set of style keys for one category.
///
/// Parsing is lenient about surrounding whitespace and ASCII case; [`StyleKey::resolve`] never
/// fails and substitutes [`StyleKey::DEFAULT`] for anything outside the set.
pub trait StyleKey: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Category this key set belongs to.
    const CATEGORY: Category;
    /// Every member of the closed set, in catalog order.
    const ALL: &'static [Self];
    /// Documented fallback for unknown keys.
    const DEFAULT: Self;

    /// Stable wire key.
    fn key(self) -> &'static str;

    /// Look up a key in the closed set.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.key().eq_ignore_ascii_case(raw))
    }

    /// Look up a key, substituting the category default when it is unknown.
    fn resolve(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::DEFAULT)
    }
}

/// Mask styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskStyle {
    /// Wrapped fabric with stitched seam and side knot.
    Cloth,
    /// Glossy ceramic oval with painted features.
    Porcelain,
    /// Faceted low-poly plates.
    Geometric,
    /// Visor band, side modules and jaw plate.
    Cyber,
    /// Ornate carnival half mask.
    Venetian,
}

impl StyleKey for MaskStyle {
    const CATEGORY: Category = Category::Mask;
    const ALL: &'static [Self] = &[
        MaskStyle::Cloth,
        MaskStyle::Porcelain,
        MaskStyle::Geometric,
        MaskStyle::Cyber,
        MaskStyle::Venetian,
    ];
    const DEFAULT: Self = MaskStyle::Cloth;

    fn key(self) -> &'static str {
        match self {
            MaskStyle::Cloth => "cloth",
            MaskStyle::Porcelain => "porcelain",
            MaskStyle::Geometric => "geometric",
            MaskStyle::Cyber => "cyber",
            MaskStyle::Venetian => "venetian",
        }
    }
}

/// Hair styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HairStyle {
    /// Straight cut with blunt fringe.
    Straight,
    /// Shoulder-length waves.
    Wavy,
    /// Clustered ringlets.
    Curly,
    /// Close crop.
    Buzz,
    /// Long curtains past the shoulders.
    Long,
    /// Slicked back into a top bun.
    Bun,
    /// Spiked central crest over shaved sides.
    Mohawk,
    /// Full rounded volume.
    Afro,
}

impl StyleKey for HairStyle {
    const CATEGORY: Category = Category::Hair;
    const ALL: &'static [Self] = &[
        HairStyle::Straight,
        HairStyle::Wavy,
        HairStyle::Curly,
        HairStyle::Buzz,
        HairStyle::Long,
        HairStyle::Bun,
        HairStyle::Mohawk,
        HairStyle::Afro,
    ];
    const DEFAULT: Self = HairStyle::Straight;

    fn key(self) -> &'static str {
        match self {
            HairStyle::Straight => "straight",
            HairStyle::Wavy => "wavy",
            HairStyle::Curly => "curly",
            HairStyle::Buzz => "buzz",
            HairStyle::Long => "long",
            HairStyle::Bun => "bun",
            HairStyle::Mohawk => "mohawk",
            HairStyle::Afro => "afro",
        }
    }
}

/// Outfit types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutfitType {
    /// Hooded sweatshirt with drawstrings and pocket.
    Hoodie,
    /// Zip jacket over an inner shirt.
    Jacket,
    /// Crew-neck tee.
    Tshirt,
    /// Tailored suit with shirt and tie.
    Suit,
    /// Knit sweater.
    Sweater,
    /// Rolled high collar.
    Turtleneck,
    /// Crossed-collar robe with obi.
    Kimono,
}

impl StyleKey for OutfitType {
    const CATEGORY: Category = Category::Outfit;
    const ALL: &'static [Self] = &[
        OutfitType::Hoodie,
        OutfitType::Jacket,
        OutfitType::Tshirt,
        OutfitType::Suit,
        OutfitType::Sweater,
        OutfitType::Turtleneck,
        OutfitType::Kimono,
    ];
    const DEFAULT: Self = OutfitType::Hoodie;

    fn key(self) -> &'static str {
        match self {
            OutfitType::Hoodie => "hoodie",
            OutfitType::Jacket => "jacket",
            OutfitType::Tshirt => "tshirt",
            OutfitType::Suit => "suit",
            OutfitType::Sweater => "sweater",
            OutfitType::Turtleneck => "turtleneck",
            OutfitType::Kimono => "kimono",
        }
    }
}

/// Accessory types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessoryType {
    /// Round-framed glasses.
    Glasses,
    /// Hoops with drop gems.
    Earrings,
    /// Brimmed hat.
    Hat,
    /// Over-ear headphones.
    Headphones,
    /// Wrapped scarf with hanging tail.
    Scarf,
}

impl StyleKey for AccessoryType {
    const CATEGORY: Category = Category::Accessory;
    const ALL: &'static [Self] = &[
        AccessoryType::Glasses,
        AccessoryType::Earrings,
        AccessoryType::Hat,
        AccessoryType::Headphones,
        AccessoryType::Scarf,
    ];
    const DEFAULT: Self = AccessoryType::Glasses;

    fn key(self) -> &'static str {
        match self {
            AccessoryType::Glasses => "glasses",
            AccessoryType::Earrings => "earrings",
            AccessoryType::Hat => "hat",
            AccessoryType::Headphones => "headphones",
            AccessoryType::Scarf => "scarf",
        }
    }
}

/// Theme preset names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Peach-to-slate morning city light.
    UrbanDawn,
    /// Magenta and cyan after dark.
    NeonNight,
    /// Damp greens.
    ForestMist,
    /// Deep blues.
    OceanDepth,
    /// Warm oranges into dusk.
    DesertSunset,
    /// Teal and violet polar light.
    ArcticAurora,
    /// Near-black with a violet core.
    CosmicVoid,
    /// Plain studio backdrop.
    StudioMinimal,
}

impl StyleKey for ThemeName {
    const CATEGORY: Category = Category::Theme;
    const ALL: &'static [Self] = &[
        ThemeName::UrbanDawn,
        ThemeName::NeonNight,
        ThemeName::ForestMist,
        ThemeName::OceanDepth,
        ThemeName::DesertSunset,
        ThemeName::ArcticAurora,
        ThemeName::CosmicVoid,
        ThemeName::StudioMinimal,
    ];
    const DEFAULT: Self = ThemeName::UrbanDawn;

    fn key(self) -> &'static str {
        match self {
            ThemeName::UrbanDawn => "urban-dawn",
            ThemeName::NeonNight => "neon-night",
            ThemeName::ForestMist => "forest-mist",
            ThemeName::OceanDepth => "ocean-depth",
            ThemeName::DesertSunset => "desert-sunset",
            ThemeName::ArcticAurora => "arctic-aurora",
            ThemeName::CosmicVoid => "cosmic-void",
            ThemeName::StudioMinimal => "studio-minimal",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/keys.rs"]
mod tests;
