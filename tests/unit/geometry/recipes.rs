use super::*;
use crate::catalog::keys::{AccessoryType, HairStyle, MaskStyle, OutfitType, StyleKey};
use crate::foundation::core::Rgb8;
use crate::geometry::provider::{GeometryProvider, ProceduralGeometry};

const MARGIN: f64 = 20.0;

const COLORS: [Rgb8; 4] = [
    Rgb8::new(0x8B, 0x89, 0x85),
    Rgb8::new(0x00, 0x00, 0x00),
    Rgb8::new(0xFF, 0xFF, 0xFF),
    Rgb8::new(0x3A, 0x86, 0xFF),
];

fn check_category<K: StyleKey>(draw: impl Fn(K, Rgb8) -> Vec<Primitive>) {
    for &k in K::ALL {
        for c in COLORS {
            let a = draw(k, c);
            assert!(!a.is_empty(), "{k:?} drew nothing");
            assert_eq!(a, draw(k, c), "{k:?} is not deterministic");
            for prim in &a {
                let b = prim.bounding_box();
                assert!(
                    b.x0 >= -MARGIN
                        && b.y0 >= -MARGIN
                        && b.x1 <= 200.0 + MARGIN
                        && b.y1 <= 200.0 + MARGIN,
                    "{k:?} escapes the design space: {b:?}"
                );
                if let Some(o) = prim.opacity {
                    assert!((0.0..=1.0).contains(&o));
                }
            }
        }
    }

    let base = COLORS[0];
    for (i, &a) in K::ALL.iter().enumerate() {
        for &b in &K::ALL[i + 1..] {
            assert_ne!(draw(a, base), draw(b, base), "{a:?} and {b:?} share a drawing");
        }
    }
}

#[test]
fn hair_recipes_are_bounded_deterministic_and_distinct() {
    check_category::<HairStyle>(hair::draw);
}

#[test]
fn mask_recipes_are_bounded_deterministic_and_distinct() {
    check_category::<MaskStyle>(mask::draw);
}

#[test]
fn outfit_recipes_are_bounded_deterministic_and_distinct() {
    check_category::<OutfitType>(outfit::draw);
}

#[test]
fn accessory_recipes_are_bounded_deterministic_and_distinct() {
    check_category::<AccessoryType>(accessory::draw);
}

#[test]
fn recipes_follow_the_base_color() {
    let dark = hair::draw(HairStyle::Afro, Rgb8::BLACK);
    let light = hair::draw(HairStyle::Afro, Rgb8::WHITE);
    assert_eq!(dark.len(), light.len());
    assert_ne!(dark, light);
}

#[test]
fn procedural_provider_matches_module_drawings() {
    let g = ProceduralGeometry;
    let c = COLORS[3];
    assert_eq!(g.hair(HairStyle::Bun, c), hair::draw(HairStyle::Bun, c));
    assert_eq!(g.mask(MaskStyle::Cyber, c), mask::draw(MaskStyle::Cyber, c));
    assert_eq!(g.outfit(OutfitType::Suit, c), outfit::draw(OutfitType::Suit, c));
    assert_eq!(
        g.accessory(AccessoryType::Hat, "fedora", c),
        accessory::draw(AccessoryType::Hat, c)
    );
}
