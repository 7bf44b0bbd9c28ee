use super::*;
use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, ThemeName};
use crate::foundation::core::Rgb8;
use crate::persona::model::AccessoryConfig;

fn base() -> PersonaConfig {
    PersonaConfig::default()
        .with_accessory(AccessoryConfig::new(AccessoryType::Glasses, Rgb8::BLACK))
}

#[test]
fn stable_for_equal_inputs() {
    assert_eq!(fingerprint(&base(), 200.0), fingerprint(&base().clone(), 200.0));
}

#[test]
fn changes_with_every_visual_field() {
    let reference = fingerprint(&base(), 200.0);
    let variants = [
        base().with_hair(HairStyle::Afro, Rgb8::new(0x8B, 0x89, 0x85)),
        base().with_hair(HairStyle::Straight, Rgb8::new(0x8B, 0x89, 0x86)),
        base().with_mask(MaskStyle::Cyber, Rgb8::new(0xE8, 0xE6, 0xE1)),
        base().with_theme(ThemeName::CosmicVoid),
        base().with_accessory(AccessoryConfig::new(AccessoryType::Hat, Rgb8::BLACK)),
        PersonaConfig::default(),
        {
            let mut c = base();
            c.accessories[0].style = "aviator".to_owned();
            c
        },
        {
            let mut c = base();
            c.theme.background = "#000000 #FFFFFF".to_owned();
            c
        },
    ];
    for (i, v) in variants.iter().enumerate() {
        assert_ne!(fingerprint(v, 200.0), reference, "variant {i}");
    }
    assert_ne!(fingerprint(&base(), 64.0), reference);
}

#[test]
fn ignores_non_visual_fields() {
    let reference = fingerprint(&base(), 200.0);
    let mut c = base().with_enabled(true);
    c.mask.pattern = "houndstooth".to_owned();
    c.theme.lighting = "harsh".to_owned();
    assert_eq!(fingerprint(&c, 200.0), reference);
}

#[test]
fn field_boundaries_are_unambiguous() {
    let mut a = base();
    a.hair.style = "ab".to_owned();
    a.hair.color = "c".to_owned();
    let mut b = base();
    b.hair.style = "a".to_owned();
    b.hair.color = "bc".to_owned();
    assert_ne!(fingerprint(&a, 200.0), fingerprint(&b, 200.0));
}

#[test]
fn displays_as_32_hex_digits() {
    let s = fingerprint(&base(), 200.0).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
