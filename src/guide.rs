//! # persona-avatar guide
//!
//! A short walkthrough of what a composed avatar is and how the engine behaves when a persona
//! carries values it does not recognize.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PersonaConfig`](crate::PersonaConfig): the raw descriptor stored by the profile API
//! - [`ThemeRegistry`](crate::ThemeRegistry): read-only theme presets (background, lighting, mood)
//! - [`GeometryProvider`](crate::GeometryProvider): where per-category drawings come from;
//!   [`ProceduralGeometry`](crate::ProceduralGeometry) is the built-in hand-authored set
//! - [`ComposedAvatar`](crate::ComposedAvatar): seven ordered layers plus a size transform
//!
//! ---
//!
//! ## The design space
//!
//! Every primitive lives in a fixed 200×200 square with y pointing down. The head is an ellipse
//! centered at `(100, 88)`; the shoulders reach the bottom edge. Recipes never see the output size.
//! Scaling happens once, through [`ComposedAvatar::transform`](crate::ComposedAvatar::transform),
//! so a 48-unit thumbnail and a 400-unit profile header share identical layer data.
//!
//! ---
//!
//! ## Layer order
//!
//! Bottom to top ([`LayerKind::ORDER`](crate::LayerKind::ORDER)):
//!
//! 1. background: the theme gradient across the whole square
//! 2. outfit
//! 3. silhouette: neck, ears and head with a fixed skin gradient
//! 4. hair
//! 5. mask
//! 6. accessories: one sub-layer per persona entry, in array order (later entries on top)
//! 7. ambient shadow: a faint ground ellipse
//!
//! The accessories layer is always present, even when it holds zero sub-layers.
//!
//! ---
//!
//! ## Depth from one color
//!
//! Each category derives a [`Palette`](crate::Palette) from the user's color with
//! [`derive_shade`](crate::derive_shade): every channel is offset by `round(2.55 * percent)` and
//! clamped. Shadows and highlights are then faked by layering offset or translucent copies.
//!
//! | category  | shadow | highlight |
//! |-----------|--------|-----------|
//! | hair      | -25    | +20       |
//! | mask      | -20    | +25       |
//! | outfit    | -30    | +15       |
//! | accessory | -25    | +30       |
//!
//! ---
//!
//! ## Fallback rules
//!
//! | input problem                         | substitute                                   |
//! |---------------------------------------|----------------------------------------------|
//! | unknown style/type key                | `cloth`, `straight`, `hoodie`, `glasses`     |
//! | unknown theme name                    | `urban-dawn`                                 |
//! | malformed mask/hair/outfit color      | `#E8E6E1` / `#8B8985` / `#D4D2CD`            |
//! | malformed accessory color             | `#6B6965`                                    |
//! | background with fewer than two colors | `#F5F5F4` → `#D6D3D1`                        |
//! | non-finite or non-positive size       | `200`                                        |
//!
//! Keys match ignoring surrounding whitespace and ASCII case. Every substitution is recorded in
//! [`ComposedAvatar::degradations`](crate::ComposedAvatar::degradations) and emitted as a
//! `tracing` debug event; none of them is an error.
//!
//! The background always comes from the registry preset. A persona's own `theme.background`
//! string is only used when the registry has neither the requested theme nor the default one.
//!
//! ---
//!
//! ## Example
//!
//! ```rust
//! use persona_avatar::{
//!     AccessoryConfig, AccessoryType, HairStyle, LayerKind, PersonaConfig, Rgb8, ThemeName,
//!     ThemeRegistry, compose_avatar,
//! };
//!
//! let persona = PersonaConfig::default()
//!     .with_hair(HairStyle::Curly, Rgb8::new(0x3B, 0x24, 0x1A))
//!     .with_theme(ThemeName::NeonNight)
//!     .with_accessory(AccessoryConfig::new(AccessoryType::Glasses, Rgb8::BLACK));
//!
//! let avatar = compose_avatar(&persona, ThemeRegistry::builtin(), 64.0);
//! assert_eq!(avatar.layers.len(), 7);
//! assert_eq!(avatar.layers[0].kind, LayerKind::Background);
//! assert_eq!(avatar.accessory_layers().len(), 1);
//! assert!(avatar.degradations.is_empty());
//! ```
//!
//! ---
//!
//! ## Strict validation
//!
//! Rendering is lenient; writing a profile should not be. Call
//! [`PersonaConfig::validate`](crate::PersonaConfig::validate) before persisting user input: it
//! runs the same resolution and turns every would-be substitution into an
//! [`AvatarError::Validation`](crate::AvatarError::Validation).
