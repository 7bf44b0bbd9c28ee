use crate::foundation::core::{Point, Rgb8};
use crate::geometry::primitive::{GradientStop, Paint, PathBuilder, Primitive};

/// Head center in design space.
pub const HEAD_CENTER: (f64, f64) = (100.0, 88.0);
/// Head radii.
pub const HEAD_RADII: (f64, f64) = (42.0, 50.0);

const SKIN_LIGHT: Rgb8 = Rgb8::new(0xF3, 0xD9, 0xC4);
const SKIN_MID: Rgb8 = Rgb8::new(0xE0, 0xB9, 0x9C);
const SKIN_DARK: Rgb8 = Rgb8::new(0xC9, 0x9A, 0x7B);
const SKIN_SHADE: Rgb8 = Rgb8::new(0xB0, 0x7F, 0x5F);

fn skin() -> Paint {
    Paint::Radial {
        center: Point::new(92.0, 76.0),
        radius: 62.0,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: SKIN_LIGHT,
            },
            GradientStop {
                offset: 0.6,
                color: SKIN_MID,
            },
            GradientStop {
                offset: 1.0,
                color: SKIN_DARK,
            },
        ],
    }
}

/// Neck, ears and head, shared by every persona.
pub fn base_silhouette() -> Vec<Primitive> {
    let (hx, hy) = HEAD_CENTER;
    let (rx, ry) = HEAD_RADII;
    vec![
        Primitive::path(
            PathBuilder::at(86.0, 128.0)
                .line(114.0, 128.0)
                .line(114.0, 150.0)
                .quad(100.0, 160.0, 86.0, 150.0)
                .close(),
        )
        .fill(SKIN_MID),
        // jaw shadow on the neck
        Primitive::ellipse(100.0, 134.0, 16.0, 6.0)
            .fill(SKIN_SHADE)
            .opacity(0.3),
        Primitive::ellipse(hx - rx, 92.0, 7.0, 11.0).fill(SKIN_DARK),
        Primitive::ellipse(hx + rx, 92.0, 7.0, 11.0).fill(SKIN_DARK),
        Primitive::ellipse(hx - rx + 1.0, 92.0, 3.5, 6.0)
            .fill(SKIN_SHADE)
            .opacity(0.5),
        Primitive::ellipse(hx + rx - 1.0, 92.0, 3.5, 6.0)
            .fill(SKIN_SHADE)
            .opacity(0.5),
        Primitive::ellipse(hx, hy, rx, ry).paint(skin()),
    ]
}

/// Soft ground shadow drawn above everything else.
pub fn ambient_shadow() -> Vec<Primitive> {
    vec![
        Primitive::ellipse(100.0, 192.0, 70.0, 8.0)
            .fill(Rgb8::BLACK)
            .opacity(0.12),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/silhouette.rs"]
mod tests;
