use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType};
use crate::foundation::core::Rgb8;
use crate::geometry::primitive::Primitive;
use crate::geometry::{accessory, hair, mask, outfit};

/// Source of per-category drawings used by the compositor.
///
/// The base silhouette and the ambient shadow are fixed and never come from a provider.
///
/// Keys arrive already resolved into their closed sets and colors already validated, so
/// implementations never need to handle fallback themselves. Implementations must be
/// deterministic: the same arguments always produce the same primitives.
pub trait GeometryProvider: Sync {
    /// Outfit drawing.
    fn outfit(&self, kind: OutfitType, base: Rgb8) -> Vec<Primitive>;
    /// Hair drawing.
    fn hair(&self, style: HairStyle, base: Rgb8) -> Vec<Primitive>;
    /// Mask drawing.
    fn mask(&self, style: MaskStyle, base: Rgb8) -> Vec<Primitive>;
    /// Accessory drawing. `style` is the free-form sub-style tag from the persona.
    fn accessory(&self, kind: AccessoryType, style: &str, base: Rgb8) -> Vec<Primitive>;
}

/// The built-in hand-authored vector recipes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProceduralGeometry;

impl GeometryProvider for ProceduralGeometry {
    fn outfit(&self, kind: OutfitType, base: Rgb8) -> Vec<Primitive> {
        outfit::draw(kind, base)
    }

    fn hair(&self, style: HairStyle, base: Rgb8) -> Vec<Primitive> {
        hair::draw(style, base)
    }

    fn mask(&self, style: MaskStyle, base: Rgb8) -> Vec<Primitive> {
        mask::draw(style, base)
    }

    fn accessory(&self, kind: AccessoryType, _style: &str, base: Rgb8) -> Vec<Primitive> {
        accessory::draw(kind, base)
    }
}
