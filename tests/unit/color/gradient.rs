use super::*;

#[test]
fn extracts_tokens_in_order() {
    let stops =
        extract_gradient_stops("linear-gradient(135deg, #FFE5B4 0%, #ffb6c1 50%, #B0C4DE 100%)");
    assert_eq!(
        stops,
        vec![
            Rgb8::new(0xFF, 0xE5, 0xB4),
            Rgb8::new(0xFF, 0xB6, 0xC1),
            Rgb8::new(0xB0, 0xC4, 0xDE),
        ]
    );
}

#[test]
fn short_descriptors_fall_back_to_neutral_pair() {
    for d in ["", "no colors here", "solid #123456", "#12345 #GGGGGG"] {
        assert_eq!(extract_gradient_stops(d), FALLBACK_STOPS.to_vec(), "{d:?}");
    }
}

#[test]
fn always_at_least_two_stops() {
    for d in ["", "#000000", "#000000#FFFFFF", "x #ABCDEF y #abcdef z #012345"] {
        assert!(extract_gradient_stops(d).len() >= 2);
    }
}

#[test]
fn adjacent_tokens_are_both_found() {
    assert_eq!(scan_color_tokens("#000000#FFFFFF").len(), 2);
}

#[test]
fn angle_parsing() {
    assert_eq!(gradient_angle("linear-gradient(45deg, #000000, #FFFFFF)"), 45.0);
    assert_eq!(gradient_angle("linear-gradient(-90deg, #000000, #FFFFFF)"), 270.0);
    assert_eq!(gradient_angle("linear-gradient(to right, #000000, #FFFFFF)"), 90.0);
    assert_eq!(gradient_angle("radial-gradient(#000000, #FFFFFF)"), DEFAULT_ANGLE_DEG);
}

#[test]
fn linear_paint_spans_design_square() {
    let Paint::Linear { start, end, stops } =
        linear_across_design_space(180.0, &[Rgb8::BLACK, Rgb8::WHITE])
    else {
        panic!("expected linear paint");
    };
    assert!((start.x - 100.0).abs() < 1e-9 && start.y.abs() < 1e-9);
    assert!((end.x - 100.0).abs() < 1e-9 && (end.y - 200.0).abs() < 1e-9);
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].offset, 0.0);
    assert_eq!(stops[1].offset, 1.0);
}

#[test]
fn even_stops_spacing() {
    let s = even_stops(&[Rgb8::BLACK, Rgb8::WHITE, Rgb8::BLACK, Rgb8::WHITE, Rgb8::BLACK]);
    let offsets: Vec<f64> = s.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}
