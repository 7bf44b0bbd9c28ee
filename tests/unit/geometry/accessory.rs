use super::*;

#[test]
fn unknown_type_draws_glasses() {
    assert_eq!(
        generate_accessory("monocle", "#6B6965"),
        draw(AccessoryType::Glasses, DEFAULT_ACCESSORY_COLOR)
    );
}

#[test]
fn malformed_color_uses_default_accessory_color() {
    assert_eq!(
        generate_accessory("scarf", "#XYZXYZ"),
        draw(AccessoryType::Scarf, DEFAULT_ACCESSORY_COLOR)
    );
}

#[test]
fn glasses_frames_are_stroke_only() {
    let prims = generate_accessory("glasses", "#111111");
    let frames = prims
        .iter()
        .filter(|p| p.fill.is_none() && p.stroke.is_some())
        .count();
    assert!(frames >= 4);
}

#[test]
fn earrings_hang_at_both_ears() {
    let prims = generate_accessory("earrings", "#C9A227");
    assert!(prims.iter().any(|p| p.bounding_box().x1 < 70.0));
    assert!(prims.iter().any(|p| p.bounding_box().x0 > 130.0));
}
