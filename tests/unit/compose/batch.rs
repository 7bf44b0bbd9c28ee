use super::*;
use crate::catalog::keys::{AccessoryType, HairStyle, OutfitType, StyleKey, ThemeName};
use crate::compose::compositor::compose_avatar;
use crate::foundation::core::Rgb8;
use crate::persona::model::AccessoryConfig;

fn crowd() -> Vec<PersonaConfig> {
    let mut out = Vec::new();
    for (i, &hair) in HairStyle::ALL.iter().enumerate() {
        let outfit = OutfitType::ALL[i % OutfitType::ALL.len()];
        let theme = ThemeName::ALL[i % ThemeName::ALL.len()];
        let shade = (i * 29) as u8;
        let mut c = PersonaConfig::default()
            .with_hair(hair, Rgb8::new(shade, 0x40, 0x20))
            .with_outfit(outfit, Rgb8::new(0x20, shade, 0x80))
            .with_theme(theme);
        for &kind in &AccessoryType::ALL[..i % 4] {
            c = c.with_accessory(AccessoryConfig::new(kind, Rgb8::BLACK));
        }
        out.push(c);
    }
    let mut broken = PersonaConfig::default();
    broken.hair.style = "dreadlocks".to_owned();
    broken.outfit.color = "plaid".to_owned();
    out.push(broken);
    out
}

#[test]
fn parallel_matches_sequential_in_order() {
    let configs = crowd();
    let reg = ThemeRegistry::builtin();
    let seq = compose_batch(&configs, reg, 64.0, BatchOpts::default()).unwrap();
    let par = compose_batch(
        &configs,
        reg,
        64.0,
        BatchOpts {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), configs.len());
    assert_eq!(seq, par);
    for (c, a) in configs.iter().zip(&seq) {
        assert_eq!(*a, compose_avatar(c, reg, 64.0));
    }
}

#[test]
fn zero_threads_is_rejected() {
    for parallel in [false, true] {
        let err = compose_batch(
            &crowd(),
            ThemeRegistry::builtin(),
            64.0,
            BatchOpts {
                parallel,
                threads: Some(0),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AvatarError::Validation(_)));
    }
}

#[test]
fn empty_batch_is_empty() {
    let out = compose_batch(
        &[],
        ThemeRegistry::builtin(),
        64.0,
        BatchOpts {
            parallel: true,
            threads: None,
        },
    )
    .unwrap();
    assert!(out.is_empty());
}
