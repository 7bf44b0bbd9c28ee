use crate::catalog::keys::{AccessoryType, StyleKey};
use crate::color::shade::{Palette, Shading};
use crate::foundation::core::Rgb8;
use crate::geometry::Recipe;
use crate::geometry::primitive::{PathBuilder, Primitive, mirror_x};
use crate::persona::model::DEFAULT_ACCESSORY_COLOR;

impl AccessoryType {
    /// Drawing for this accessory.
    pub fn recipe(self) -> Recipe {
        match self {
            AccessoryType::Glasses => glasses,
            AccessoryType::Earrings => earrings,
            AccessoryType::Hat => hat,
            AccessoryType::Headphones => headphones,
            AccessoryType::Scarf => scarf,
        }
    }
}

/// Accessory primitives for a raw type key and `#RRGGBB` base color.
///
/// Unknown types draw `glasses`; a malformed color is replaced by the default accessory color.
pub fn generate_accessory(kind: &str, base_color: &str) -> Vec<Primitive> {
    draw(
        AccessoryType::resolve(kind),
        Rgb8::parse_or(base_color, DEFAULT_ACCESSORY_COLOR),
    )
}

pub(crate) fn draw(kind: AccessoryType, base: Rgb8) -> Vec<Primitive> {
    (kind.recipe())(&Palette::derive(base, Shading::ACCESSORY))
}

fn glasses(p: &Palette) -> Vec<Primitive> {
    let mut out = Vec::new();
    for cx in [84.0, 116.0] {
        out.push(Primitive::circle(cx, 84.0, 11.0).fill(p.highlight).opacity(0.15));
        out.push(Primitive::circle(cx + 0.8, 85.0, 11.0).stroke(p.shadow, 3.0));
        out.push(Primitive::circle(cx, 84.0, 11.0).stroke(p.base, 3.0));
        out.push(
            Primitive::ellipse(cx - 4.0, 80.0, 3.5, 1.8)
                .rotated(-30.0)
                .fill(Rgb8::WHITE)
                .opacity(0.6),
        );
    }
    out.push(
        Primitive::path(PathBuilder::at(95.0, 84.0).quad(100.0, 79.0, 105.0, 84.0).open())
            .stroke(p.base, 2.5),
    );
    out.push(
        Primitive::path(PathBuilder::at(73.0, 82.0).line(58.0, 86.0).open()).stroke(p.base, 2.5),
    );
    out.push(
        Primitive::path(PathBuilder::at(mirror_x(73.0), 82.0).line(mirror_x(58.0), 86.0).open())
            .stroke(p.base, 2.5),
    );
    out
}

fn earrings(p: &Palette) -> Vec<Primitive> {
    let mut out = Vec::new();
    for x in [58.0, 142.0] {
        out.push(Primitive::circle(x + 0.6, 106.8, 5.0).stroke(p.shadow, 2.0));
        out.push(Primitive::circle(x, 106.0, 5.0).stroke(p.base, 2.0));
        out.push(Primitive::circle(x, 113.0, 2.5).fill(p.highlight));
        out.push(
            Primitive::circle(x - 0.8, 112.2, 0.8)
                .fill(Rgb8::WHITE)
                .opacity(0.8),
        );
    }
    out
}

fn hat(p: &Palette) -> Vec<Primitive> {
    vec![
        Primitive::ellipse(100.0, 48.0, 60.0, 10.0).fill(p.shadow),
        Primitive::ellipse(100.0, 46.0, 60.0, 9.0).fill(p.base),
        Primitive::path(
            PathBuilder::at(66.0, 46.0)
                .cubic(64.0, 20.0, 74.0, 8.0, 100.0, 8.0)
                .cubic(126.0, 8.0, 136.0, 20.0, 134.0, 46.0)
                .quad(100.0, 52.0, 66.0, 46.0)
                .close(),
        )
        .fill(p.base),
        Primitive::path(
            PathBuilder::at(66.0, 36.0)
                .line(134.0, 36.0)
                .line(134.5, 44.0)
                .quad(100.0, 50.0, 65.5, 44.0)
                .close(),
        )
        .fill(p.deep()),
        Primitive::ellipse(84.0, 20.0, 10.0, 4.0)
            .rotated(-20.0)
            .fill(p.highlight)
            .opacity(0.5),
    ]
}

fn headphones(p: &Palette) -> Vec<Primitive> {
    let band = || {
        PathBuilder::at(54.0, 86.0)
            .cubic(50.0, 30.0, 150.0, 30.0, 146.0, 86.0)
            .open()
    };
    let mut out = vec![
        Primitive::path(band()).stroke(p.shadow, 8.0),
        Primitive::path(band()).stroke(p.base, 6.0),
        Primitive::path(
            PathBuilder::at(64.0, 58.0)
                .quad(100.0, 28.0, 136.0, 58.0)
                .open(),
        )
        .stroke(p.highlight, 1.5)
        .opacity(0.6),
    ];
    for m in [false, true] {
        // left edge of the ear cup
        let x = if m { mirror_x(53.0) - 14.0 } else { 53.0 };
        out.push(Primitive::rounded_rect(x, 76.0, 14.0, 28.0, 6.0).fill(p.base));
        out.push(Primitive::rounded_rect(x + 3.0, 80.0, 8.0, 20.0, 4.0).fill(p.shadow));
        out.push(
            Primitive::rounded_rect(x + 2.0, 78.0, 3.0, 10.0, 1.5)
                .fill(p.highlight)
                .opacity(0.7),
        );
    }
    out
}

fn scarf(p: &Palette) -> Vec<Primitive> {
    let mut out = vec![
        Primitive::path(
            PathBuilder::at(72.0, 146.0)
                .cubic(80.0, 138.0, 120.0, 138.0, 128.0, 146.0)
                .line(130.0, 158.0)
                .cubic(118.0, 166.0, 82.0, 166.0, 70.0, 158.0)
                .close(),
        )
        .fill(p.base),
        Primitive::path(PathBuilder::at(74.0, 152.0).quad(100.0, 160.0, 126.0, 152.0).open())
            .stroke(p.shadow, 1.5)
            .opacity(0.7),
        // hanging tail
        Primitive::path(
            PathBuilder::at(108.0, 158.0)
                .line(122.0, 158.0)
                .line(126.0, 192.0)
                .line(112.0, 194.0)
                .close(),
        )
        .fill(p.base)
        .stroke(p.shadow, 1.0),
        Primitive::rect(110.0, 172.0, 14.0, 3.0)
            .fill(p.shadow)
            .opacity(0.6),
        Primitive::ellipse(100.0, 142.0, 16.0, 3.0)
            .fill(p.highlight)
            .opacity(0.5),
    ];
    for i in 0..5 {
        let x = 113.0 + 3.0 * i as f64;
        out.push(
            Primitive::path(PathBuilder::at(x, 193.0).line(x + 0.5, 198.0).open())
                .stroke(p.shadow, 1.0),
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/accessory.rs"]
mod tests;
