use crate::catalog::keys::{StyleKey, ThemeName};
use crate::catalog::themes::{ThemePreset, ThemeRegistry};
use crate::color::gradient::{
    extract_gradient_stops, gradient_angle, linear_across_design_space, scan_color_tokens,
};
use crate::compose::layers::{AccessoryLayer, ComposedAvatar, Layer, LayerContent, LayerKind};
use crate::foundation::core::{Affine, DESIGN_SIZE, Rgb8};
use crate::geometry::primitive::Primitive;
use crate::geometry::provider::{GeometryProvider, ProceduralGeometry};
use crate::geometry::silhouette;
use crate::persona::model::PersonaConfig;
use crate::persona::resolve::{Degradation, DegradationKind, resolve_persona};

/// Compose a persona into its seven ordered layers using the built-in recipes.
///
/// Never fails: unknown keys, malformed colors, unusable backgrounds and bad sizes are all
/// substituted and reported in [`ComposedAvatar::degradations`]. `config` is only read.
pub fn compose_avatar(
    config: &PersonaConfig,
    registry: &ThemeRegistry,
    size: f64,
) -> ComposedAvatar {
    compose_avatar_with(&ProceduralGeometry, config, registry, size)
}

/// [`compose_avatar`] with a caller-supplied geometry source.
#[tracing::instrument(skip(provider, config, registry))]
pub fn compose_avatar_with(
    provider: &dyn GeometryProvider,
    config: &PersonaConfig,
    registry: &ThemeRegistry,
    size: f64,
) -> ComposedAvatar {
    let mut degradations = Vec::new();
    let size = sanitize_size(size, &mut degradations);
    let persona = resolve_persona(config, &mut degradations);

    let preset = select_preset(registry, persona.theme, &mut degradations);
    let descriptor = preset.map_or(config.theme.background.as_str(), |p| p.background);
    let gradient_stops = background_stops(descriptor, &mut degradations);
    let background = Primitive::rect(0.0, 0.0, DESIGN_SIZE, DESIGN_SIZE).paint(
        linear_across_design_space(gradient_angle(descriptor), &gradient_stops),
    );

    let sublayers = persona
        .accessories
        .iter()
        .map(|a| AccessoryLayer {
            kind: a.kind,
            style: a.style.clone(),
            primitives: provider.accessory(a.kind, &a.style, a.color),
        })
        .collect();

    let layers = vec![
        Layer::primitives(LayerKind::Background, vec![background]),
        Layer::primitives(
            LayerKind::Outfit,
            provider.outfit(persona.outfit.style, persona.outfit.color),
        ),
        Layer::primitives(LayerKind::Silhouette, silhouette::base_silhouette()),
        Layer::primitives(
            LayerKind::Hair,
            provider.hair(persona.hair.style, persona.hair.color),
        ),
        Layer::primitives(
            LayerKind::Mask,
            provider.mask(persona.mask.style, persona.mask.color),
        ),
        Layer {
            kind: LayerKind::Accessories,
            content: LayerContent::Accessories { sublayers },
        },
        Layer::primitives(LayerKind::AmbientShadow, silhouette::ambient_shadow()),
    ];

    tracing::debug!(
        theme = persona.theme.key(),
        accessories = persona.accessories.len(),
        degradations = degradations.len(),
        "avatar composed"
    );

    ComposedAvatar {
        size,
        transform: Affine::scale(size / DESIGN_SIZE),
        theme: preset.map_or(persona.theme, |p| p.key),
        lighting: preset.map(|p| p.lighting.to_owned()).unwrap_or_default(),
        mood: preset.map(|p| p.mood.to_owned()).unwrap_or_default(),
        gradient_stops,
        layers,
        degradations,
    }
}

fn sanitize_size(size: f64, degradations: &mut Vec<Degradation>) -> f64 {
    if size.is_finite() && size > 0.0 {
        return size;
    }
    degradations.push(Degradation::new(
        "size",
        DegradationKind::InvalidSize,
        format!("invalid output size {size}, using {DESIGN_SIZE}"),
    ));
    DESIGN_SIZE
}

/// Registry preset for `name`, else the registry's default preset, else none.
fn select_preset(
    registry: &ThemeRegistry,
    name: ThemeName,
    degradations: &mut Vec<Degradation>,
) -> Option<&'static ThemePreset> {
    if let Some(p) = registry.get(name) {
        return Some(p);
    }
    let fallback = registry.default_preset();
    degradations.push(Degradation::new(
        "theme.name",
        DegradationKind::UnknownStyleKey,
        match fallback {
            Some(p) => format!("theme '{}' not in registry, using '{}'", name.key(), p.key.key()),
            None => format!(
                "theme '{}' not in registry and no default preset, using persona background",
                name.key()
            ),
        },
    ));
    fallback
}

fn background_stops(descriptor: &str, degradations: &mut Vec<Degradation>) -> Vec<Rgb8> {
    if scan_color_tokens(descriptor).len() < 2 {
        degradations.push(Degradation::new(
            "theme.background",
            DegradationKind::MalformedThemeBackground,
            format!("background '{descriptor}' has fewer than two colors, using fallback pair"),
        ));
    }
    extract_gradient_stops(descriptor)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
