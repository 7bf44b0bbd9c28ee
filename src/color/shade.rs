use crate::foundation::core::Rgb8;
use crate::foundation::math::{offset_channel, shade_delta};

/// Neutral substitute for a malformed base color when no slot-specific default applies.
pub const NEUTRAL_FALLBACK: Rgb8 = Rgb8::new(0x80, 0x80, 0x80);

/// Darken (negative `percent`) or lighten (positive `percent`) a color.
///
/// Every channel is offset by `round(2.55 * percent)` and clamped to `[0, 255]`.
pub fn derive_shade(base: Rgb8, percent: i32) -> Rgb8 {
    let delta = shade_delta(percent);
    Rgb8::new(
        offset_channel(base.r, delta),
        offset_channel(base.g, delta),
        offset_channel(base.b, delta),
    )
}

/// String form of [`derive_shade`]: `#RRGGBB` in, `#RRGGBB` out.
///
/// A malformed `base` is replaced by [`NEUTRAL_FALLBACK`] before any math runs.
pub fn derive_shade_hex(base: &str, percent: i32) -> String {
    derive_shade(Rgb8::parse_or(base, NEUTRAL_FALLBACK), percent).to_hex()
}

/// Shadow/highlight offsets used by one drawing category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shading {
    /// Percent applied for the shadow tone (negative).
    pub shadow: i32,
    /// Percent applied for the highlight tone (positive).
    pub highlight: i32,
}

impl Shading {
    /// Hair reads best with a deep shadow and a soft sheen.
    pub const HAIR: Self = Self {
        shadow: -25,
        highlight: 20,
    };
    /// Masks carry a bright gloss.
    pub const MASK: Self = Self {
        shadow: -20,
        highlight: 25,
    };
    /// Fabric folds need the darkest shadow.
    pub const OUTFIT: Self = Self {
        shadow: -30,
        highlight: 15,
    };
    /// Small accessories need strong contrast to survive thumbnail sizes.
    pub const ACCESSORY: Self = Self {
        shadow: -25,
        highlight: 30,
    };
}

/// A base color plus its derived depth companions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// The user's chosen color.
    pub base: Rgb8,
    /// Darker variant for folds, undersides and drop shadows.
    pub shadow: Rgb8,
    /// Lighter variant for sheen and edges facing the light.
    pub highlight: Rgb8,
}

impl Palette {
    /// Derive shadow and highlight tones from `base`.
    pub fn derive(base: Rgb8, shading: Shading) -> Self {
        Self {
            base,
            shadow: derive_shade(base, shading.shadow),
            highlight: derive_shade(base, shading.highlight),
        }
    }

    /// An extra-deep tone for cavities (eye holes, inner hood).
    pub fn deep(&self) -> Rgb8 {
        derive_shade(self.shadow, -30)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/shade.rs"]
mod tests;
