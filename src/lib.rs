//! Persona avatars as layered vector drawings.
//!
//! A [`PersonaConfig`] (mask, hair, outfit, theme, accessories) is turned into a
//! [`ComposedAvatar`]: exactly seven ordered layers of 2D primitives in a fixed 200×200 design
//! space, plus one uniform transform to the requested size. Nothing is rasterized here; any
//! vector surface (SVG, canvas, a GPU path renderer) can draw the result.
//!
//! - Compose one avatar with [`compose_avatar`], many with [`compose_batch`]
//! - Memoize with [`AvatarCache`] (keyed by [`fingerprint`])
//! - Enumerate pickers from the static catalogs ([`MASK_STYLES`], [`ThemeRegistry`], ...)
//!
//! Rendering never fails. Out-of-catalog keys, malformed colors and unusable backgrounds are
//! replaced by documented defaults and reported as [`Degradation`]s. Strict checking for the
//! profile-write path is [`PersonaConfig::validate`].
//!
//! See [`guide`] for the layer model and the fallback rules.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod catalog;
pub(crate) mod color;
pub(crate) mod compose;
pub(crate) mod geometry;
/// Walkthrough of the layer model and fallback rules.
pub mod guide;
pub(crate) mod persona;

pub use crate::foundation::core::{Affine, BezPath, DESIGN_SIZE, Point, Rect, Rgb8, Vec2};
pub use crate::foundation::error::{AvatarError, AvatarResult};

pub use crate::catalog::keys::{
    AccessoryType, Category, HairStyle, MaskStyle, OutfitType, StyleKey, ThemeName,
};
pub use crate::catalog::styles::{
    ACCESSORY_TYPES, HAIR_STYLES, MASK_STYLES, OUTFIT_TYPES, StyleCatalog, StyleEntry,
};
pub use crate::catalog::themes::{THEME_PRESETS, ThemeColors, ThemePreset, ThemeRegistry};

pub use crate::color::gradient::{
    DEFAULT_ANGLE_DEG, FALLBACK_STOPS, extract_gradient_stops, gradient_angle,
    linear_across_design_space,
};
pub use crate::color::shade::{NEUTRAL_FALLBACK, Palette, Shading, derive_shade, derive_shade_hex};

pub use crate::geometry::Recipe;
pub use crate::geometry::accessory::generate_accessory;
pub use crate::geometry::hair::generate_hair;
pub use crate::geometry::mask::generate_mask;
pub use crate::geometry::outfit::generate_outfit;
pub use crate::geometry::primitive::{
    GradientStop, PATH_TOLERANCE, Paint, PathBuilder, Primitive, Shape, Stroke,
};
pub use crate::geometry::provider::{GeometryProvider, ProceduralGeometry};

pub use crate::persona::model::{
    AccessoryConfig, DEFAULT_ACCESSORY_COLOR, DEFAULT_HAIR_COLOR, DEFAULT_MASK_COLOR,
    DEFAULT_MASK_PATTERN, DEFAULT_OUTFIT_COLOR, HairConfig, MaskConfig, OutfitConfig,
    PersonaConfig, ThemeConfig,
};
pub use crate::persona::resolve::{
    Degradation, DegradationKind, Resolved, ResolvedAccessory, ResolvedPersona, resolve_persona,
};

pub use crate::compose::batch::{BatchOpts, compose_batch, compose_batch_with};
pub use crate::compose::cache::AvatarCache;
pub use crate::compose::compositor::{compose_avatar, compose_avatar_with};
pub use crate::compose::fingerprint::{AvatarFingerprint, fingerprint};
pub use crate::compose::layers::{AccessoryLayer, ComposedAvatar, Layer, LayerContent, LayerKind};
