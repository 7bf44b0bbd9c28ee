use serde::Serialize;

use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType, StyleKey, ThemeName};
use crate::foundation::core::Rgb8;
use crate::persona::model::{
    DEFAULT_ACCESSORY_COLOR, DEFAULT_HAIR_COLOR, DEFAULT_MASK_COLOR, DEFAULT_OUTFIT_COLOR,
    PersonaConfig,
};

/// What kind of substitution the engine made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradationKind {
    /// A style/type/theme key outside its closed set; the category default was used.
    UnknownStyleKey,
    /// A color that is not `#RRGGBB`; the slot's neutral default was used.
    MalformedColor,
    /// A background descriptor with fewer than two color tokens; the fallback pair was used.
    MalformedThemeBackground,
    /// A non-finite or non-positive output size; the design size was used.
    InvalidSize,
}

/// One recorded substitution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Degradation {
    /// Config path of the offending value, e.g. `accessories[1].color`.
    pub slot: String,
    /// Substitution kind.
    pub kind: DegradationKind,
    /// Human-readable description including the rejected value.
    pub detail: String,
}

impl Degradation {
    pub(crate) fn new(slot: impl Into<String>, kind: DegradationKind, detail: String) -> Self {
        let d = Self {
            slot: slot.into(),
            kind,
            detail,
        };
        tracing::debug!(slot = %d.slot, kind = ?d.kind, detail = %d.detail, "persona degraded");
        d
    }
}

/// A category key and color after fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<K> {
    /// Style key inside the closed set.
    pub style: K,
    /// Well-formed base color.
    pub color: Rgb8,
}

/// One accessory after fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAccessory {
    /// Accessory type inside the closed set.
    pub kind: AccessoryType,
    /// Sub-style tag, untouched.
    pub style: String,
    /// Well-formed base color.
    pub color: Rgb8,
}

/// Every drawable field of a persona, guaranteed in-catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPersona {
    /// Mask style and color.
    pub mask: Resolved<MaskStyle>,
    /// Hair style and color.
    pub hair: Resolved<HairStyle>,
    /// Outfit type and color.
    pub outfit: Resolved<OutfitType>,
    /// Theme key; the preset itself is looked up by the compositor.
    pub theme: ThemeName,
    /// Accessories in draw order.
    pub accessories: Vec<ResolvedAccessory>,
}

pub(crate) fn resolve_key<K: StyleKey>(raw: &str, slot: &str, issues: &mut Vec<Degradation>) -> K {
    match K::parse(raw) {
        Some(k) => k,
        None => {
            issues.push(Degradation::new(
                slot,
                DegradationKind::UnknownStyleKey,
                format!(
                    "unknown {} key '{raw}', using '{}'",
                    K::CATEGORY.as_str(),
                    K::DEFAULT.key()
                ),
            ));
            K::DEFAULT
        }
    }
}

pub(crate) fn resolve_color(
    raw: &str,
    fallback: Rgb8,
    slot: &str,
    issues: &mut Vec<Degradation>,
) -> Rgb8 {
    match Rgb8::parse_hex(raw) {
        Ok(c) => c,
        Err(_) => {
            issues.push(Degradation::new(
                slot,
                DegradationKind::MalformedColor,
                format!("malformed color '{raw}', using '{fallback}'"),
            ));
            fallback
        }
    }
}

/// Map every drawable field of `config` into its closed set, recording each substitution.
///
/// Only the theme key is resolved here; which preset backs it depends on the compositor's registry.
pub fn resolve_persona(config: &PersonaConfig, issues: &mut Vec<Degradation>) -> ResolvedPersona {
    let mask = Resolved {
        style: resolve_key(&config.mask.style, "mask.style", issues),
        color: resolve_color(&config.mask.color, DEFAULT_MASK_COLOR, "mask.color", issues),
    };
    let hair = Resolved {
        style: resolve_key(&config.hair.style, "hair.style", issues),
        color: resolve_color(&config.hair.color, DEFAULT_HAIR_COLOR, "hair.color", issues),
    };
    let outfit = Resolved {
        style: resolve_key(&config.outfit.kind, "outfit.type", issues),
        color: resolve_color(
            &config.outfit.color,
            DEFAULT_OUTFIT_COLOR,
            "outfit.color",
            issues,
        ),
    };
    let theme = resolve_key(&config.theme.name, "theme.name", issues);

    let accessories = config
        .accessories
        .iter()
        .enumerate()
        .map(|(i, a)| ResolvedAccessory {
            kind: resolve_key(&a.kind, &format!("accessories[{i}].type"), issues),
            style: a.style.clone(),
            color: resolve_color(
                &a.color,
                DEFAULT_ACCESSORY_COLOR,
                &format!("accessories[{i}].color"),
                issues,
            ),
        })
        .collect();

    ResolvedPersona {
        mask,
        hair,
        outfit,
        theme,
        accessories,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persona/resolve.rs"]
mod tests;
