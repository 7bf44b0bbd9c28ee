use super::*;

#[test]
fn unknown_type_draws_hoodie() {
    assert_eq!(generate_outfit("toga", "#D4D2CD"), draw(OutfitType::Hoodie, DEFAULT_OUTFIT_COLOR));
}

#[test]
fn malformed_color_uses_default_outfit_color() {
    assert_eq!(generate_outfit("suit", "navy"), draw(OutfitType::Suit, DEFAULT_OUTFIT_COLOR));
}

#[test]
fn every_outfit_starts_with_the_torso() {
    for &k in OutfitType::ALL {
        let prims = draw(k, DEFAULT_OUTFIT_COLOR);
        assert_eq!(prims[0].to_bez_path(), torso(0.0), "{k:?}");
    }
}

#[test]
fn outfits_stay_below_the_chin() {
    for &k in OutfitType::ALL {
        for prim in draw(k, Rgb8::new(0x22, 0x22, 0x3B)) {
            assert!(prim.bounding_box().y0 >= 125.0, "{k:?}");
        }
    }
}
