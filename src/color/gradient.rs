use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::core::{DESIGN_SIZE, Point, Rgb8};
use crate::geometry::primitive::{GradientStop, Paint};

/// Neutral two-stop gradient used when a descriptor carries fewer than two color tokens.
pub const FALLBACK_STOPS: [Rgb8; 2] = [Rgb8::new(0xF5, 0xF5, 0xF4), Rgb8::new(0xD6, 0xD3, 0xD1)];

/// Gradient direction when the descriptor does not name one (CSS convention, top-left light).
pub const DEFAULT_ANGLE_DEG: f64 = 135.0;

static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("static hex token pattern"));
static ANGLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*deg").expect("static gradient angle pattern")
});
static SIDE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"to\s+(top|right|bottom|left)\b").expect("static gradient side pattern")
});

/// Every `#RRGGBB` token in `descriptor`, left to right, with no length guarantee.
pub fn scan_color_tokens(descriptor: &str) -> Vec<Rgb8> {
    HEX_TOKEN
        .find_iter(descriptor)
        .filter_map(|m| Rgb8::parse_hex(m.as_str()).ok())
        .collect()
}

/// Ordered gradient stops mined from an opaque background descriptor.
///
/// Always returns at least two colors; descriptors with zero or one token yield
/// [`FALLBACK_STOPS`].
pub fn extract_gradient_stops(descriptor: &str) -> Vec<Rgb8> {
    let tokens = scan_color_tokens(descriptor);
    if tokens.len() < 2 {
        return FALLBACK_STOPS.to_vec();
    }
    tokens
}

/// Gradient angle in degrees (CSS convention: 0 points up, 90 points right).
pub fn gradient_angle(descriptor: &str) -> f64 {
    if let Some(angle) = ANGLE_TOKEN
        .captures(descriptor)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|a| a.is_finite())
    {
        return angle.rem_euclid(360.0);
    }

    match SIDE_TOKEN
        .captures(descriptor)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    {
        Some("top") => 0.0,
        Some("right") => 90.0,
        Some("bottom") => 180.0,
        Some("left") => 270.0,
        _ => DEFAULT_ANGLE_DEG,
    }
}

/// Linear paint spanning the full design square along `angle_deg`, stops evenly spaced.
///
/// The gradient line length follows CSS: the square's corners land exactly on offsets 0 and 1.
pub fn linear_across_design_space(angle_deg: f64, colors: &[Rgb8]) -> Paint {
    let theta = angle_deg.to_radians();
    let dir = kurbo::Vec2::new(theta.sin(), -theta.cos());
    let half_len = (DESIGN_SIZE * theta.sin().abs() + DESIGN_SIZE * theta.cos().abs()) / 2.0;
    let center = Point::new(DESIGN_SIZE / 2.0, DESIGN_SIZE / 2.0);

    Paint::Linear {
        start: center - dir * half_len,
        end: center + dir * half_len,
        stops: even_stops(colors),
    }
}

pub(crate) fn even_stops(colors: &[Rgb8]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| GradientStop {
            offset: i as f64 / last,
            color,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
