pub(crate) mod accessory;
pub(crate) mod hair;
pub(crate) mod mask;
pub(crate) mod outfit;
pub(crate) mod primitive;
pub(crate) mod provider;
pub(crate) mod silhouette;

use crate::color::shade::Palette;
use crate::geometry::primitive::Primitive;

/// A hand-authored drawing for one style key, in the 200×200 design space.
pub type Recipe = fn(&Palette) -> Vec<Primitive>;

#[cfg(test)]
#[path = "../../tests/unit/geometry/recipes.rs"]
mod tests;
