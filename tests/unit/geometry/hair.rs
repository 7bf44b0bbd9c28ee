use super::*;
use crate::color::shade::derive_shade;
use crate::geometry::primitive::Paint;

fn solid_colors(prims: &[Primitive]) -> Vec<Rgb8> {
    prims
        .iter()
        .filter_map(|p| match p.fill {
            Some(Paint::Solid { color }) => Some(color),
            _ => None,
        })
        .collect()
}

#[test]
fn default_straight_is_tinted_with_derived_tones() {
    let prims = generate_hair("straight", "#8B8985");
    let colors = solid_colors(&prims);
    assert!(colors.contains(&Rgb8::new(0x8B, 0x89, 0x85)));
    assert!(colors.contains(&derive_shade(DEFAULT_HAIR_COLOR, -25)));
    assert!(colors.contains(&Rgb8::new(0xBE, 0xBC, 0xB8)));
}

#[test]
fn unknown_style_draws_straight() {
    assert_eq!(
        generate_hair("dreadlocks", "#8B8985"),
        draw(HairStyle::Straight, DEFAULT_HAIR_COLOR)
    );
    assert_eq!(generate_hair("", "#8B8985"), generate_hair("straight", "#8B8985"));
}

#[test]
fn malformed_color_uses_default_hair_color() {
    assert_eq!(generate_hair("bun", "chestnut"), draw(HairStyle::Bun, DEFAULT_HAIR_COLOR));
}

#[test]
fn every_style_has_a_recipe() {
    for &s in HairStyle::ALL {
        assert_eq!(generate_hair(s.key(), "#222222"), draw(s, Rgb8::new(0x22, 0x22, 0x22)));
    }
}

#[test]
fn bun_sits_on_top_of_the_head() {
    let prims = generate_hair("bun", "#332211");
    let top = prims
        .iter()
        .map(|p| p.bounding_box().y0)
        .fold(f64::INFINITY, f64::min);
    assert!(top < 20.0);
}

#[test]
fn buzz_stipple_stays_in_the_crop_band() {
    use crate::foundation::core::Point;
    use crate::geometry::primitive::Shape;

    let dots: Vec<Point> = draw(HairStyle::Buzz, Rgb8::new(0x22, 0x22, 0x22))
        .iter()
        .filter_map(|p| match p.shape {
            Shape::Circle { center, radius } if radius == 0.8 => Some(center),
            _ => None,
        })
        .collect();
    assert!(dots.len() > 20, "{}", dots.len());
    for c in dots {
        assert!((42.0..=62.0).contains(&c.y), "{c:?}");
        assert!((64.0..=136.0).contains(&c.x), "{c:?}");
    }
}
