use super::*;
use crate::color::gradient::scan_color_tokens;
use crate::foundation::core::Rgb8;

#[test]
fn builtin_has_one_preset_per_theme_name() {
    let reg = ThemeRegistry::builtin();
    assert_eq!(reg.len(), ThemeName::ALL.len());
    for &name in ThemeName::ALL {
        let p = reg.get(name).expect("preset for every theme");
        assert_eq!(p.key, name);
        assert!(!p.name.is_empty() && !p.lighting.is_empty() && !p.mood.is_empty());
    }
}

#[test]
fn every_builtin_background_yields_real_stops() {
    for p in ThemeRegistry::builtin().iter() {
        assert!(
            scan_color_tokens(p.background).len() >= 2,
            "{} has fewer than two color tokens",
            p.name
        );
    }
}

#[test]
fn named_colors_are_valid_hex() {
    for p in THEME_PRESETS {
        if let Some(c) = p.colors {
            for hex in [c.primary, c.secondary, c.accent] {
                assert!(Rgb8::parse_hex(hex).is_ok());
            }
        }
    }
}

#[test]
fn lookup_by_raw_name() {
    let reg = ThemeRegistry::builtin();
    assert_eq!(reg.lookup("neon-night").map(|p| p.key), Some(ThemeName::NeonNight));
    assert!(reg.lookup("vaporwave").is_none());
    assert_eq!(reg.default_preset().map(|p| p.key), Some(ThemeName::UrbanDawn));
}

#[test]
fn custom_registries_may_be_partial() {
    let only_neon: &'static [ThemePreset] = Box::leak(vec![THEME_PRESETS[1]].into_boxed_slice());
    let reg = ThemeRegistry::new(only_neon);
    assert_eq!(reg.len(), 1);
    assert!(reg.default_preset().is_none());
    assert!(reg.get(ThemeName::NeonNight).is_some());

    let empty = ThemeRegistry::new(&[]);
    assert!(empty.is_empty());
}
