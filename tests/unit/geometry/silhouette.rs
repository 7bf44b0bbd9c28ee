use super::*;
use crate::geometry::primitive::Shape;

#[test]
fn head_is_last_and_uses_radial_skin() {
    let prims = base_silhouette();
    let head = prims.last().unwrap();
    match &head.shape {
        Shape::Ellipse { center, radii, .. } => {
            assert_eq!((center.x, center.y), HEAD_CENTER);
            assert_eq!((radii.x, radii.y), HEAD_RADII);
        }
        other => panic!("expected head ellipse, got {other:?}"),
    }
    match &head.fill {
        Some(Paint::Radial { stops, .. }) => {
            assert_eq!(stops.len(), 3);
            assert_eq!(stops[0].color, SKIN_LIGHT);
        }
        other => panic!("expected radial skin paint, got {other:?}"),
    }
}

#[test]
fn silhouette_is_fixed() {
    assert_eq!(base_silhouette(), base_silhouette());
}

#[test]
fn ambient_shadow_is_faint_and_grounded() {
    let s = ambient_shadow();
    assert_eq!(s.len(), 1);
    assert!(s[0].effective_opacity() < 0.2);
    let b = s[0].bounding_box();
    assert!(b.y1 <= 200.0 && b.y0 >= 180.0);
}
