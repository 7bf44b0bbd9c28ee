use serde::Serialize;

use crate::catalog::keys::{AccessoryType, ThemeName};
use crate::foundation::core::{Affine, Rgb8};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::geometry::primitive::Primitive;
use crate::persona::resolve::Degradation;

/// The seven compositing slots, bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Theme gradient filling the whole square.
    Background,
    /// Clothing.
    Outfit,
    /// Head, neck and ears.
    Silhouette,
    /// Hair.
    Hair,
    /// Face covering.
    Mask,
    /// One sub-layer per accessory.
    Accessories,
    /// Ground shadow.
    AmbientShadow,
}

impl LayerKind {
    /// Draw order, bottom first.
    pub const ORDER: [LayerKind; 7] = [
        LayerKind::Background,
        LayerKind::Outfit,
        LayerKind::Silhouette,
        LayerKind::Hair,
        LayerKind::Mask,
        LayerKind::Accessories,
        LayerKind::AmbientShadow,
    ];
}

/// Drawing for one accessory entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessoryLayer {
    /// Accessory type after fallback.
    pub kind: AccessoryType,
    /// Free-form sub-style tag from the persona.
    pub style: String,
    /// Primitives in draw order.
    pub primitives: Vec<Primitive>,
}

/// What a layer holds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "content", rename_all = "snake_case")]
pub enum LayerContent {
    /// A flat primitive list.
    Primitives {
        /// Primitives in draw order.
        primitives: Vec<Primitive>,
    },
    /// Ordered accessory sub-layers (possibly none).
    Accessories {
        /// Sub-layers in persona array order.
        sublayers: Vec<AccessoryLayer>,
    },
}

/// One compositing slot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    /// Slot.
    pub kind: LayerKind,
    /// Slot content.
    #[serde(flatten)]
    pub content: LayerContent,
}

impl Layer {
    pub(crate) fn primitives(kind: LayerKind, primitives: Vec<Primitive>) -> Self {
        Self {
            kind,
            content: LayerContent::Primitives { primitives },
        }
    }

    /// Primitives of this layer, flattening accessory sub-layers in order.
    pub fn iter_primitives(&self) -> Box<dyn Iterator<Item = &Primitive> + '_> {
        match &self.content {
            LayerContent::Primitives { primitives } => Box::new(primitives.iter()),
            LayerContent::Accessories { sublayers } => {
                Box::new(sublayers.iter().flat_map(|s| s.primitives.iter()))
            }
        }
    }
}

/// A fully layered avatar ready for any vector surface.
///
/// All primitives are in the 200×200 design space; `transform` maps them to the requested size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComposedAvatar {
    /// Output edge length in surface units.
    pub size: f64,
    /// Uniform design-space → output scale.
    pub transform: Affine,
    /// Theme actually used.
    pub theme: ThemeName,
    /// Lighting tag of that theme (empty when no preset backed it).
    pub lighting: String,
    /// Mood tag of that theme (empty when no preset backed it).
    pub mood: String,
    /// Background gradient colors, at least two.
    pub gradient_stops: Vec<Rgb8>,
    /// Exactly seven layers, in [`LayerKind::ORDER`].
    pub layers: Vec<Layer>,
    /// Every substitution made while composing.
    pub degradations: Vec<Degradation>,
}

impl ComposedAvatar {
    /// Layer for `kind`.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Accessory sub-layers in persona array order.
    pub fn accessory_layers(&self) -> &[AccessoryLayer] {
        match self.layer(LayerKind::Accessories).map(|l| &l.content) {
            Some(LayerContent::Accessories { sublayers }) => sublayers,
            _ => &[],
        }
    }

    /// Every primitive, bottom to top.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.layers.iter().flat_map(|l| l.iter_primitives())
    }

    /// Return `true` when nothing had to be substituted.
    pub fn is_clean(&self) -> bool {
        self.degradations.is_empty()
    }

    /// Pretty-printed JSON for a rendering surface.
    pub fn to_json_pretty(&self) -> AvatarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AvatarError::serde(format!("serialize composed avatar: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layers.rs"]
mod tests;
