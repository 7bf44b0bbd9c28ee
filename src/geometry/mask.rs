use crate::catalog::keys::{MaskStyle, StyleKey};
use crate::color::shade::{Palette, Shading};
use crate::foundation::core::Rgb8;
use crate::geometry::Recipe;
use crate::geometry::primitive::{PathBuilder, Primitive, mirror_x, polygon};
use crate::persona::model::DEFAULT_MASK_COLOR;

const EYE_Y: f64 = 84.0;
const EYE_L: f64 = 84.0;
const EYE_R: f64 = 116.0;

const LIP: Rgb8 = Rgb8::new(0xB5, 0x48, 0x5A);
const BLUSH: Rgb8 = Rgb8::new(0xE8, 0xA0, 0xA8);
const GEM: Rgb8 = Rgb8::new(0xC1, 0x12, 0x1F);

impl MaskStyle {
    /// Drawing for this style.
    pub fn recipe(self) -> Recipe {
        match self {
            MaskStyle::Cloth => cloth,
            MaskStyle::Porcelain => porcelain,
            MaskStyle::Geometric => geometric,
            MaskStyle::Cyber => cyber,
            MaskStyle::Venetian => venetian,
        }
    }
}

/// Mask primitives for a raw style key and `#RRGGBB` base color.
///
/// Unknown styles draw `cloth`; a malformed color is replaced by the default mask color.
pub fn generate_mask(style: &str, base_color: &str) -> Vec<Primitive> {
    draw(
        MaskStyle::resolve(style),
        Rgb8::parse_or(base_color, DEFAULT_MASK_COLOR),
    )
}

pub(crate) fn draw(style: MaskStyle, base: Rgb8) -> Vec<Primitive> {
    (style.recipe())(&Palette::derive(base, Shading::MASK))
}

fn eye_pair(rx: f64, ry: f64, color: Rgb8) -> [Primitive; 2] {
    [
        Primitive::ellipse(EYE_L, EYE_Y, rx, ry).fill(color),
        Primitive::ellipse(EYE_R, EYE_Y, rx, ry).fill(color),
    ]
}

fn cloth(p: &Palette) -> Vec<Primitive> {
    let mut out = vec![
        Primitive::ellipse(101.0, 92.0, 40.0, 46.0)
            .fill(p.shadow)
            .opacity(0.6),
        Primitive::ellipse(100.0, 90.0, 40.0, 46.0).fill(p.base),
    ];
    out.extend(eye_pair(8.0, 4.5, p.deep()));
    // wrap folds
    for (y, bend) in [(104.0, 6.0), (116.0, 5.0), (126.0, 4.0)] {
        out.push(
            Primitive::path(
                PathBuilder::at(66.0, y)
                    .quad(100.0, y + bend, 134.0, y)
                    .open(),
            )
            .stroke(p.shadow, 1.5)
            .opacity(0.6),
        );
    }
    out.push(
        Primitive::path(PathBuilder::at(100.0, 46.0).line(100.0, 134.0).open())
            .stroke(p.shadow, 1.0)
            .opacity(0.5),
    );
    // side knot with tails
    out.extend([
        Primitive::ellipse(146.0, 100.0, 4.0, 11.0)
            .rotated(20.0)
            .fill(p.shadow),
        Primitive::ellipse(150.0, 96.0, 4.0, 10.0)
            .rotated(40.0)
            .fill(p.base),
        Primitive::circle(140.0, 88.0, 5.0).fill(p.shadow),
        Primitive::circle(139.0, 87.0, 2.0)
            .fill(p.highlight)
            .opacity(0.7),
    ]);
    out
}

fn porcelain(p: &Palette) -> Vec<Primitive> {
    let almond = |cx: f64| {
        PathBuilder::at(cx - 9.0, EYE_Y)
            .quad(cx, EYE_Y - 7.0, cx + 9.0, EYE_Y)
            .quad(cx, EYE_Y + 5.0, cx - 9.0, EYE_Y)
            .close()
    };
    vec![
        Primitive::ellipse(100.0, 88.0, 38.0, 46.0).fill(p.base),
        Primitive::ellipse(108.0, 96.0, 30.0, 38.0)
            .fill(p.shadow)
            .opacity(0.25),
        Primitive::ellipse(86.0, 64.0, 12.0, 6.0)
            .rotated(-20.0)
            .fill(p.highlight)
            .opacity(0.8),
        Primitive::circle(82.0, 62.0, 2.0)
            .fill(Rgb8::WHITE)
            .opacity(0.9),
        Primitive::path(almond(EYE_L)).fill(p.deep()),
        Primitive::path(almond(EYE_R)).fill(p.deep()),
        Primitive::path(PathBuilder::at(76.0, 74.0).quad(84.0, 70.0, 92.0, 73.0).open())
            .stroke(p.deep(), 1.2),
        Primitive::path(
            PathBuilder::at(mirror_x(76.0), 74.0)
                .quad(mirror_x(84.0), 70.0, mirror_x(92.0), 73.0)
                .open(),
        )
        .stroke(p.deep(), 1.2),
        Primitive::circle(78.0, 102.0, 7.0).fill(BLUSH).opacity(0.35),
        Primitive::circle(122.0, 102.0, 7.0).fill(BLUSH).opacity(0.35),
        Primitive::path(
            PathBuilder::at(92.0, 114.0)
                .quad(96.0, 110.0, 100.0, 112.0)
                .quad(104.0, 110.0, 108.0, 114.0)
                .quad(100.0, 120.0, 92.0, 114.0)
                .close(),
        )
        .fill(LIP),
    ]
}

fn geometric(p: &Palette) -> Vec<Primitive> {
    // faceted plates left to right; the face is symmetric, so mirror each left facet
    let left: [([(f64, f64); 3], u8); 6] = [
        ([(100.0, 40.0), (64.0, 60.0), (100.0, 76.0)], 2),
        ([(64.0, 60.0), (58.0, 92.0), (100.0, 76.0)], 0),
        ([(58.0, 92.0), (100.0, 76.0), (100.0, 100.0)], 1),
        ([(58.0, 92.0), (72.0, 122.0), (100.0, 100.0)], 0),
        ([(72.0, 122.0), (100.0, 100.0), (100.0, 138.0)], 1),
        ([(72.0, 122.0), (100.0, 138.0), (86.0, 134.0)], 2),
    ];
    let tone = |t: u8| match t {
        0 => p.base,
        1 => p.shadow,
        _ => p.highlight,
    };
    let mut out = Vec::with_capacity(left.len() * 2 + 4);
    for (tri, t) in left {
        out.push(Primitive::path(polygon(&tri)).fill(tone(t)));
        let mirrored = tri.map(|(x, y)| (mirror_x(x), y));
        // the lit side is on the left
        out.push(Primitive::path(polygon(&mirrored)).fill(tone((t + 1) % 3)));
    }
    let hex = |cx: f64| {
        let pts: Vec<(f64, f64)> = (0..6)
            .map(|i| {
                let a = (60.0 * i as f64).to_radians();
                (cx + 8.0 * a.cos(), EYE_Y + 6.0 * a.sin())
            })
            .collect();
        polygon(&pts)
    };
    out.push(Primitive::path(hex(EYE_L)).fill(p.deep()));
    out.push(Primitive::path(hex(EYE_R)).fill(p.deep()));
    out.push(
        Primitive::path(PathBuilder::at(100.0, 40.0).line(100.0, 138.0).open())
            .stroke(p.shadow, 0.8)
            .opacity(0.7),
    );
    out
}

fn cyber(p: &Palette) -> Vec<Primitive> {
    let mut out = vec![
        Primitive::ellipse(100.0, 90.0, 40.0, 46.0).fill(p.shadow),
        Primitive::ellipse(100.0, 88.0, 38.0, 44.0)
            .fill(p.base)
            .opacity(0.9),
        // visor band
        Primitive::rounded_rect(58.0, 76.0, 84.0, 17.0, 8.0).fill(p.deep()),
        Primitive::rounded_rect(62.0, 79.0, 76.0, 3.0, 1.5)
            .fill(p.highlight)
            .opacity(0.8),
    ];
    for y in [85.0, 88.0] {
        out.push(
            Primitive::path(PathBuilder::at(64.0, y).line(136.0, y).open())
                .stroke(p.highlight, 0.6)
                .opacity(0.4),
        );
    }
    // side modules
    for x in [52.0, 138.0] {
        out.push(Primitive::rounded_rect(x, 78.0, 10.0, 20.0, 3.0).fill(p.shadow));
        out.push(Primitive::circle(x + 5.0, 88.0, 2.0).fill(p.highlight));
    }
    // jaw plate with vents
    out.push(
        Primitive::path(
            PathBuilder::at(74.0, 108.0)
                .line(126.0, 108.0)
                .line(118.0, 132.0)
                .quad(100.0, 140.0, 82.0, 132.0)
                .close(),
        )
        .fill(p.shadow)
        .stroke(p.deep(), 1.0),
    );
    for x in [88.0, 97.0, 106.0] {
        out.push(Primitive::rounded_rect(x, 116.0, 6.0, 12.0, 2.0).fill(p.deep()));
    }
    out
}

fn venetian(p: &Palette) -> Vec<Primitive> {
    let half = |m: bool| {
        let f = |x: f64| if m { mirror_x(x) } else { x };
        PathBuilder::at(f(100.0), 72.0)
            .cubic(f(90.0), 66.0, f(70.0), 64.0, f(58.0), 70.0)
            .cubic(f(50.0), 62.0, f(46.0), 54.0, f(48.0), 46.0)
            .cubic(f(56.0), 56.0, f(60.0), 60.0, f(64.0), 62.0)
            .line(f(56.0), 82.0)
            .cubic(f(62.0), 96.0, f(84.0), 100.0, f(96.0), 96.0)
            .line(f(100.0), 92.0)
            .close()
    };
    let mut out = vec![
        Primitive::path(half(false)).fill(p.base),
        Primitive::path(half(true)).fill(p.base),
        Primitive::ellipse(112.0, 88.0, 16.0, 6.0)
            .fill(p.shadow)
            .opacity(0.4),
    ];
    out.extend(eye_pair(9.0, 5.0, p.deep()));
    // filigree scrolls
    for m in [false, true] {
        let f = |x: f64| if m { mirror_x(x) } else { x };
        out.push(
            Primitive::path(
                PathBuilder::at(f(64.0), 76.0)
                    .cubic(f(66.0), 70.0, f(74.0), 70.0, f(74.0), 76.0)
                    .quad(f(74.0), 80.0, f(70.0), 79.0)
                    .open(),
            )
            .stroke(p.highlight, 1.0),
        );
        out.push(
            Primitive::path(
                PathBuilder::at(f(60.0), 90.0)
                    .quad(f(76.0), 98.0, f(92.0), 94.0)
                    .open(),
            )
            .stroke(p.highlight, 0.8)
            .opacity(0.8),
        );
    }
    out.push(Primitive::circle(100.0, 70.0, 4.0).fill(GEM));
    out.push(
        Primitive::circle(99.0, 69.0, 1.2)
            .fill(Rgb8::WHITE)
            .opacity(0.8),
    );
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
