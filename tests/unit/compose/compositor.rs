use super::*;
use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType};
use crate::catalog::themes::THEME_PRESETS;
use crate::color::gradient::FALLBACK_STOPS;
use crate::geometry::primitive::Paint;
use crate::geometry::{hair, mask, outfit};
use crate::persona::model::{AccessoryConfig, DEFAULT_HAIR_COLOR};

fn builtin() -> &'static ThemeRegistry {
    ThemeRegistry::builtin()
}

#[test]
fn always_seven_layers_in_order() {
    let a = compose_avatar(&PersonaConfig::default(), builtin(), 200.0);
    let kinds: Vec<LayerKind> = a.layers.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, LayerKind::ORDER);
}

#[test]
fn default_config_scenario() {
    let config = PersonaConfig::default();
    let a = compose_avatar(&config, builtin(), 200.0);
    assert!(a.is_clean(), "{:?}", a.degradations);
    assert_eq!(a.theme, ThemeName::UrbanDawn);
    assert_eq!(a.lighting, "soft-warm");
    assert_eq!(
        a.gradient_stops,
        [
            Rgb8::new(0xFF, 0xE5, 0xB4),
            Rgb8::new(0xFF, 0xB6, 0xA3),
            Rgb8::new(0xA7, 0xB4, 0xC8)
        ]
    );
    assert_eq!(
        a.layer(LayerKind::Hair).unwrap().iter_primitives().cloned().collect::<Vec<_>>(),
        hair::draw(HairStyle::Straight, DEFAULT_HAIR_COLOR)
    );
    assert_eq!(
        a.layer(LayerKind::Mask).unwrap().iter_primitives().cloned().collect::<Vec<_>>(),
        mask::draw(MaskStyle::Cloth, Rgb8::new(0xE8, 0xE6, 0xE1))
    );
    assert_eq!(
        a.layer(LayerKind::Outfit).unwrap().iter_primitives().cloned().collect::<Vec<_>>(),
        outfit::draw(OutfitType::Hoodie, Rgb8::new(0xD4, 0xD2, 0xCD))
    );
    assert!(a.accessory_layers().is_empty());
    assert_eq!(a.transform, Affine::IDENTITY);
}

#[test]
fn background_is_a_full_square_linear_gradient() {
    let a = compose_avatar(&PersonaConfig::default(), builtin(), 200.0);
    let bg: Vec<&Primitive> = a.layer(LayerKind::Background).unwrap().iter_primitives().collect();
    assert_eq!(bg.len(), 1);
    let b = bg[0].bounding_box();
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (0.0, 0.0, 200.0, 200.0));
    match &bg[0].fill {
        Some(Paint::Linear { stops, .. }) => {
            assert_eq!(stops.len(), 3);
            assert_eq!(stops[0].offset, 0.0);
            assert_eq!(stops[2].offset, 1.0);
        }
        other => panic!("expected linear background, got {other:?}"),
    }
}

#[test]
fn accessory_sublayers_follow_array_order() {
    let config = PersonaConfig::default()
        .with_accessory(AccessoryConfig::new(AccessoryType::Scarf, Rgb8::WHITE))
        .with_accessory(
            AccessoryConfig::new(AccessoryType::Glasses, Rgb8::BLACK).with_style("round"),
        )
        .with_accessory(AccessoryConfig::new(AccessoryType::Hat, Rgb8::BLACK));
    let a = compose_avatar(&config, builtin(), 128.0);
    let kinds: Vec<AccessoryType> = a.accessory_layers().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [AccessoryType::Scarf, AccessoryType::Glasses, AccessoryType::Hat]
    );
    assert_eq!(a.accessory_layers()[1].style, "round");
    assert_eq!(a.layers.len(), 7);
}

#[test]
fn unknown_theme_uses_urban_dawn() {
    let mut config = PersonaConfig::default();
    config.theme.name = "vaporwave".to_owned();
    let a = compose_avatar(&config, builtin(), 200.0);
    assert_eq!(a.theme, ThemeName::UrbanDawn);
    assert_eq!(a.gradient_stops.len(), 3);
    assert_eq!(a.degradations.len(), 1);
    assert_eq!(a.degradations[0].slot, "theme.name");
}

#[test]
fn registry_preset_wins_over_persona_background() {
    let mut config = PersonaConfig::default().with_theme(ThemeName::NeonNight);
    config.theme.background = "linear-gradient(#000000, #111111)".to_owned();
    let a = compose_avatar(&config, builtin(), 200.0);
    assert_eq!(a.gradient_stops[2], Rgb8::new(0xFF, 0x2E, 0x97));
}

#[test]
fn partial_registry_falls_back_to_default_preset() {
    let only_dawn: &'static [ThemePreset] = Box::leak(vec![THEME_PRESETS[0]].into_boxed_slice());
    let reg = ThemeRegistry::new(only_dawn);
    let config = PersonaConfig::default().with_theme(ThemeName::OceanDepth);
    let a = compose_avatar(&config, &reg, 200.0);
    assert_eq!(a.theme, ThemeName::UrbanDawn);
    assert_eq!(a.degradations[0].kind, DegradationKind::UnknownStyleKey);
}

#[test]
fn empty_registry_uses_persona_background_then_fallback_pair() {
    let reg = ThemeRegistry::new(&[]);
    let mut config = PersonaConfig::default();
    config.theme.background = "linear-gradient(90deg, #112233, #445566)".to_owned();
    let a = compose_avatar(&config, &reg, 200.0);
    assert_eq!(
        a.gradient_stops,
        [Rgb8::new(0x11, 0x22, 0x33), Rgb8::new(0x44, 0x55, 0x66)]
    );
    assert!(a.lighting.is_empty());

    config.theme.background = "sky blue".to_owned();
    let a = compose_avatar(&config, &reg, 200.0);
    assert_eq!(a.gradient_stops, FALLBACK_STOPS);
    assert!(
        a.degradations
            .iter()
            .any(|d| d.kind == DegradationKind::MalformedThemeBackground)
    );
}

#[test]
fn size_scales_through_one_transform() {
    let small = compose_avatar(&PersonaConfig::default(), builtin(), 48.0);
    let large = compose_avatar(&PersonaConfig::default(), builtin(), 400.0);
    assert_eq!(small.layers, large.layers);
    assert_eq!(small.transform, Affine::scale(0.24));
    assert_eq!(large.transform, Affine::scale(2.0));
}

#[test]
fn invalid_size_is_replaced() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let a = compose_avatar(&PersonaConfig::default(), builtin(), bad);
        assert_eq!(a.size, 200.0);
        assert_eq!(a.degradations.len(), 1);
        assert_eq!(a.degradations[0].kind, DegradationKind::InvalidSize);
    }
}

#[test]
fn config_is_not_mutated_and_output_is_deterministic() {
    let mut config = PersonaConfig::default()
        .with_hair(HairStyle::Curly, Rgb8::new(0x3B, 0x24, 0x1A))
        .with_accessory(AccessoryConfig::new(AccessoryType::Earrings, Rgb8::new(0xC9, 0xA2, 0x27)));
    config.mask.style = "plastic".to_owned();
    let before = config.clone();
    let a = compose_avatar(&config, builtin(), 200.0);
    let b = compose_avatar(&config, builtin(), 200.0);
    assert_eq!(config, before);
    assert_eq!(a, b);
    assert_eq!(a.degradations.len(), 1);
}

struct Blank;

impl GeometryProvider for Blank {
    fn outfit(&self, _: OutfitType, _: Rgb8) -> Vec<Primitive> {
        Vec::new()
    }
    fn hair(&self, _: HairStyle, _: Rgb8) -> Vec<Primitive> {
        Vec::new()
    }
    fn mask(&self, _: MaskStyle, _: Rgb8) -> Vec<Primitive> {
        Vec::new()
    }
    fn accessory(&self, _: AccessoryType, _: &str, _: Rgb8) -> Vec<Primitive> {
        vec![Primitive::circle(100.0, 100.0, 1.0)]
    }
}

#[test]
fn custom_provider_keeps_layer_structure() {
    let config = PersonaConfig::default()
        .with_accessory(AccessoryConfig::new(AccessoryType::Hat, Rgb8::BLACK));
    let a = compose_avatar_with(&Blank, &config, builtin(), 200.0);
    assert_eq!(a.layers.len(), 7);
    assert_eq!(a.layer(LayerKind::Hair).unwrap().iter_primitives().count(), 0);
    assert_eq!(a.accessory_layers()[0].primitives.len(), 1);
    assert!(a.layer(LayerKind::Silhouette).unwrap().iter_primitives().count() > 0);
}

#[test]
fn silhouette_and_shadow_ignore_the_provider() {
    use crate::geometry::silhouette;

    let a = compose_avatar_with(&Blank, &PersonaConfig::default(), builtin(), 200.0);
    let layer = |kind: LayerKind| {
        a.layer(kind)
            .unwrap()
            .iter_primitives()
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(layer(LayerKind::Silhouette), silhouette::base_silhouette());
    assert_eq!(layer(LayerKind::AmbientShadow), silhouette::ambient_shadow());
}
