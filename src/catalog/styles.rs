use serde::Serialize;

use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType, StyleKey};

/// Display metadata for one selectable style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StyleEntry<K: 'static> {
    /// Closed-set key.
    pub key: K,
    /// Human-readable name.
    pub name: &'static str,
    /// Glyph shown in pickers.
    pub icon: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Suggested colors (`#RRGGBB`); empty when the category has no palette.
    pub palette: &'static [&'static str],
}

/// A closed key set with a read-only display catalog.
pub trait StyleCatalog: StyleKey + Serialize {
    /// Catalog entries, one per key, in [`StyleKey::ALL`] order.
    const ENTRIES: &'static [StyleEntry<Self>];

    /// Metadata for this key.
    fn entry(self) -> Option<&'static StyleEntry<Self>> {
        Self::ENTRIES.iter().find(|e| e.key == self)
    }
}

/// Mask catalog.
pub const MASK_STYLES: &[StyleEntry<MaskStyle>] = &[
    StyleEntry {
        key: MaskStyle::Cloth,
        name: "Cloth Wrap",
        icon: "🧣",
        description: "Soft fabric wrapped over the face, stitched down the middle",
        palette: &["#E8E6E1", "#2F3437", "#7A8B6F", "#B5524A", "#3E5C76"],
    },
    StyleEntry {
        key: MaskStyle::Porcelain,
        name: "Porcelain",
        icon: "🏺",
        description: "Glazed ceramic oval with painted lips and a touch of blush",
        palette: &["#F7F4EF", "#EFE3D3", "#DCE6EA", "#F2D7D9", "#E9E4F0"],
    },
    StyleEntry {
        key: MaskStyle::Geometric,
        name: "Geometric",
        icon: "🔷",
        description: "Faceted low-poly plates that catch the light at angles",
        palette: &["#5B7DB1", "#C8553D", "#2A9D8F", "#E9C46A", "#6D597A"],
    },
    StyleEntry {
        key: MaskStyle::Cyber,
        name: "Cyber Visor",
        icon: "🤖",
        description: "Reflective visor band with side modules and a vented jaw plate",
        palette: &["#1F2933", "#3D5A80", "#00B4D8", "#7B2CBF", "#9AA5B1"],
    },
    StyleEntry {
        key: MaskStyle::Venetian,
        name: "Venetian",
        icon: "🎭",
        description: "Ornate carnival half mask with curled wings and a jewel",
        palette: &["#C9A227", "#8E1B2C", "#1B3A4B", "#F5F0E6", "#4B2C5E"],
    },
];

/// Hair catalog.
pub const HAIR_STYLES: &[StyleEntry<HairStyle>] = &[
    StyleEntry {
        key: HairStyle::Straight,
        name: "Straight",
        icon: "💇",
        description: "Sleek straight cut with a blunt fringe",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Wavy,
        name: "Wavy",
        icon: "🌊",
        description: "Loose waves falling to the jaw",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Curly,
        name: "Curly",
        icon: "➰",
        description: "Tight ringlets clustered around the crown",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Buzz,
        name: "Buzz Cut",
        icon: "✂️",
        description: "Close-cropped and low maintenance",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Long,
        name: "Long",
        icon: "🧜",
        description: "Center-parted curtains past the shoulders",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Bun,
        name: "Top Bun",
        icon: "🍡",
        description: "Pulled back and tied up high",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Mohawk,
        name: "Mohawk",
        icon: "🦔",
        description: "Spiked crest over shaved sides",
        palette: &[],
    },
    StyleEntry {
        key: HairStyle::Afro,
        name: "Afro",
        icon: "☁️",
        description: "Full, rounded volume",
        palette: &[],
    },
];

/// Outfit catalog.
pub const OUTFIT_TYPES: &[StyleEntry<OutfitType>] = &[
    StyleEntry {
        key: OutfitType::Hoodie,
        name: "Hoodie",
        icon: "🧥",
        description: "Relaxed hoodie with drawstrings and a front pocket",
        palette: &["#D4D2CD", "#2B2D42", "#8D99AE", "#6B705C", "#A44A3F"],
    },
    StyleEntry {
        key: OutfitType::Jacket,
        name: "Zip Jacket",
        icon: "🧥",
        description: "Zip-front jacket with a fold-down collar over a light tee",
        palette: &["#3A506B", "#5C4033", "#1C1C1C", "#6F1D1B", "#556B2F"],
    },
    StyleEntry {
        key: OutfitType::Tshirt,
        name: "T-Shirt",
        icon: "👕",
        description: "Classic crew-neck tee",
        palette: &["#FFFFFF", "#111111", "#E63946", "#457B9D", "#F4A261"],
    },
    StyleEntry {
        key: OutfitType::Suit,
        name: "Suit",
        icon: "🤵",
        description: "Tailored jacket, crisp shirt and a tie",
        palette: &["#22223B", "#4A4E69", "#2F3E46", "#5E503F", "#0B090A"],
    },
    StyleEntry {
        key: OutfitType::Sweater,
        name: "Knit Sweater",
        icon: "🧶",
        description: "Chunky knit with a ribbed collar",
        palette: &["#B56576", "#E5989B", "#6D6875", "#83A392", "#DDA15E"],
    },
    StyleEntry {
        key: OutfitType::Turtleneck,
        name: "Turtleneck",
        icon: "🥼",
        description: "Rolled high collar, minimal lines",
        palette: &["#1B1B1E", "#F1FAEE", "#A8DADC", "#7F5539", "#495057"],
    },
    StyleEntry {
        key: OutfitType::Kimono,
        name: "Kimono",
        icon: "👘",
        description: "Crossed collar robe tied with an obi",
        palette: &["#9D0208", "#264653", "#E9D8A6", "#6A4C93", "#0A9396"],
    },
];

/// Accessory catalog.
pub const ACCESSORY_TYPES: &[StyleEntry<AccessoryType>] = &[
    StyleEntry {
        key: AccessoryType::Glasses,
        name: "Glasses",
        icon: "👓",
        description: "Round frames with tinted lenses",
        palette: &[],
    },
    StyleEntry {
        key: AccessoryType::Earrings,
        name: "Earrings",
        icon: "💎",
        description: "Small hoops with drop gems",
        palette: &[],
    },
    StyleEntry {
        key: AccessoryType::Hat,
        name: "Hat",
        icon: "🎩",
        description: "Pinched-crown hat with a band",
        palette: &[],
    },
    StyleEntry {
        key: AccessoryType::Headphones,
        name: "Headphones",
        icon: "🎧",
        description: "Over-ear headphones with padded band",
        palette: &[],
    },
    StyleEntry {
        key: AccessoryType::Scarf,
        name: "Scarf",
        icon: "🧣",
        description: "Wrapped scarf with a fringed tail",
        palette: &[],
    },
];

impl StyleCatalog for MaskStyle {
    const ENTRIES: &'static [StyleEntry<Self>] = MASK_STYLES;
}

impl StyleCatalog for HairStyle {
    const ENTRIES: &'static [StyleEntry<Self>] = HAIR_STYLES;
}

impl StyleCatalog for OutfitType {
    const ENTRIES: &'static [StyleEntry<Self>] = OUTFIT_TYPES;
}

impl StyleCatalog for AccessoryType {
    const ENTRIES: &'static [StyleEntry<Self>] = ACCESSORY_TYPES;
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/styles.rs"]
mod tests;
