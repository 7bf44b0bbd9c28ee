use crate::catalog::keys::{OutfitType, StyleKey};
use crate::color::shade::{Palette, Shading};
use crate::foundation::core::{BezPath, Rgb8};
use crate::geometry::Recipe;
use crate::geometry::primitive::{PathBuilder, Primitive, mirror_x, polygon};
use crate::persona::model::DEFAULT_OUTFIT_COLOR;

const SHIRT_WHITE: Rgb8 = Rgb8::new(0xFA, 0xFA, 0xF9);
const TIE: Rgb8 = Rgb8::new(0x8B, 0x1E, 0x3F);

impl OutfitType {
    /// Drawing for this outfit.
    pub fn recipe(self) -> Recipe {
        match self {
            OutfitType::Hoodie => hoodie,
            OutfitType::Jacket => jacket,
            OutfitType::Tshirt => tshirt,
            OutfitType::Suit => suit,
            OutfitType::Sweater => sweater,
            OutfitType::Turtleneck => turtleneck,
            OutfitType::Kimono => kimono,
        }
    }
}

/// Outfit primitives for a raw type key and `#RRGGBB` base color.
///
/// Unknown types draw `hoodie`; a malformed color is replaced by the default outfit color.
pub fn generate_outfit(kind: &str, base_color: &str) -> Vec<Primitive> {
    draw(
        OutfitType::resolve(kind),
        Rgb8::parse_or(base_color, DEFAULT_OUTFIT_COLOR),
    )
}

pub(crate) fn draw(kind: OutfitType, base: Rgb8) -> Vec<Primitive> {
    (kind.recipe())(&Palette::derive(base, Shading::OUTFIT))
}

/// Shoulders and chest down to the bottom edge.
fn torso(dy: f64) -> BezPath {
    PathBuilder::at(30.0, 200.0)
        .cubic(30.0, 172.0 + dy, 48.0, 156.0 + dy, 78.0, 150.0 + dy)
        .line(122.0, 150.0 + dy)
        .cubic(152.0, 156.0 + dy, 170.0, 172.0 + dy, 170.0, 200.0)
        .close()
}

fn body(p: &Palette) -> Vec<Primitive> {
    vec![
        Primitive::path(torso(0.0)).fill(p.shadow),
        Primitive::path(torso(3.0)).fill(p.base),
        // shoulder light
        Primitive::ellipse(62.0, 164.0, 14.0, 5.0)
            .rotated(-25.0)
            .fill(p.highlight)
            .opacity(0.35),
    ]
}

fn hoodie(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.extend([
        // hood rim
        Primitive::path(
            PathBuilder::at(68.0, 152.0)
                .cubic(74.0, 138.0, 126.0, 138.0, 132.0, 152.0)
                .cubic(122.0, 166.0, 78.0, 166.0, 68.0, 152.0)
                .close(),
        )
        .fill(p.shadow),
        Primitive::ellipse(100.0, 152.0, 22.0, 7.0)
            .fill(p.deep())
            .opacity(0.6),
        // pocket
        Primitive::path(
            PathBuilder::at(74.0, 182.0)
                .line(126.0, 182.0)
                .line(132.0, 200.0)
                .line(68.0, 200.0)
                .close(),
        )
        .fill(p.shadow)
        .opacity(0.5),
    ]);
    for x in [94.0, 106.0] {
        out.push(
            Primitive::path(
                PathBuilder::at(x, 160.0)
                    .quad(x - 1.0, 170.0, x - 2.0, 180.0)
                    .open(),
            )
            .stroke(p.highlight, 2.0),
        );
        out.push(Primitive::circle(x - 2.0, 181.0, 1.6).fill(p.highlight));
    }
    out
}

fn jacket(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.push(
        Primitive::path(polygon(&[(84.0, 152.0), (116.0, 152.0), (100.0, 186.0)]))
            .fill(p.highlight),
    );
    for m in [false, true] {
        let f = |x: f64| if m { mirror_x(x) } else { x };
        out.push(
            Primitive::path(polygon(&[
                (f(80.0), 151.0),
                (f(90.0), 151.0),
                (f(100.0), 186.0),
                (f(86.0), 170.0),
                (f(76.0), 164.0),
            ]))
            .fill(p.shadow),
        );
        out.push(
            Primitive::path(PathBuilder::at(f(60.0), 186.0).line(f(78.0), 186.0).open())
                .stroke(p.shadow, 1.5),
        );
    }
    out.push(
        Primitive::path(PathBuilder::at(100.0, 186.0).line(100.0, 200.0).open())
            .stroke(p.deep(), 1.5),
    );
    out.push(Primitive::rounded_rect(98.5, 186.0, 3.0, 5.0, 1.0).fill(p.highlight));
    out
}

fn tshirt(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.push(
        Primitive::path(
            PathBuilder::at(82.0, 152.0)
                .quad(100.0, 166.0, 118.0, 152.0)
                .open(),
        )
        .stroke(p.shadow, 4.0),
    );
    // sleeve hems
    for m in [false, true] {
        let f = |x: f64| if m { mirror_x(x) } else { x };
        out.push(
            Primitive::path(PathBuilder::at(f(42.0), 180.0).line(f(48.0), 200.0).open())
                .stroke(p.shadow, 2.0)
                .opacity(0.7),
        );
    }
    out
}

fn suit(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.push(
        Primitive::path(polygon(&[(82.0, 151.0), (118.0, 151.0), (100.0, 192.0)]))
            .fill(SHIRT_WHITE),
    );
    // tie: knot then blade
    out.push(
        Primitive::path(polygon(&[
            (96.0, 154.0),
            (104.0, 154.0),
            (102.0, 161.0),
            (98.0, 161.0),
        ]))
        .fill(TIE),
    );
    out.push(
        Primitive::path(polygon(&[
            (98.0, 161.0),
            (102.0, 161.0),
            (105.0, 184.0),
            (100.0, 190.0),
            (95.0, 184.0),
        ]))
        .fill(TIE),
    );
    for m in [false, true] {
        let f = |x: f64| if m { mirror_x(x) } else { x };
        out.push(
            Primitive::path(polygon(&[
                (f(78.0), 151.0),
                (f(84.0), 151.0),
                (f(100.0), 192.0),
                (f(90.0), 180.0),
                (f(82.0), 170.0),
                (f(72.0), 164.0),
            ]))
            .fill(p.base)
            .stroke(p.shadow, 1.0),
        );
    }
    out.push(Primitive::circle(100.0, 194.0, 1.8).fill(p.deep()));
    out.push(Primitive::circle(100.0, 199.0, 1.8).fill(p.deep()));
    out.push(
        Primitive::path(polygon(&[
            (126.0, 176.0),
            (138.0, 176.0),
            (136.0, 172.0),
            (130.0, 171.0),
        ]))
        .fill(SHIRT_WHITE),
    );
    out
}

fn sweater(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.push(
        Primitive::path(
            PathBuilder::at(80.0, 151.0)
                .quad(100.0, 170.0, 120.0, 151.0)
                .line(114.0, 151.0)
                .quad(100.0, 162.0, 86.0, 151.0)
                .close(),
        )
        .fill(p.shadow),
    );
    // knit chevrons
    for y in [172.0, 182.0, 192.0] {
        let mut row = PathBuilder::at(46.0, y);
        let mut x = 46.0;
        let mut up = true;
        while x < 154.0 {
            x += 6.0;
            row = row.line(x, if up { y - 3.0 } else { y });
            up = !up;
        }
        out.push(Primitive::path(row.open()).stroke(p.shadow, 1.0).opacity(0.4));
    }
    out.push(Primitive::rect(32.0, 196.0, 136.0, 4.0).fill(p.shadow));
    for i in 0..17 {
        let x = 36.0 + 8.0 * i as f64;
        out.push(
            Primitive::path(PathBuilder::at(x, 196.0).line(x, 200.0).open())
                .stroke(p.deep(), 0.6)
                .opacity(0.5),
        );
    }
    out
}

fn turtleneck(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    out.push(Primitive::rounded_rect(82.0, 134.0, 36.0, 24.0, 9.0).fill(p.shadow));
    out.push(Primitive::rounded_rect(84.0, 132.0, 32.0, 24.0, 8.0).fill(p.base));
    for y in [139.0, 145.0, 151.0] {
        out.push(
            Primitive::path(PathBuilder::at(86.0, y).quad(100.0, y + 2.0, 114.0, y).open())
                .stroke(p.shadow, 1.0)
                .opacity(0.7),
        );
    }
    out.push(
        Primitive::rounded_rect(88.0, 134.0, 10.0, 3.0, 1.5)
            .fill(p.highlight)
            .opacity(0.6),
    );
    out
}

fn kimono(p: &Palette) -> Vec<Primitive> {
    let mut out = body(p);
    // right panel lies over the left
    out.push(
        Primitive::path(polygon(&[(112.0, 150.0), (122.0, 150.0), (96.0, 186.0), (86.0, 186.0)]))
            .fill(p.shadow),
    );
    out.push(
        Primitive::path(polygon(&[(78.0, 150.0), (88.0, 150.0), (118.0, 186.0), (108.0, 186.0)]))
            .fill(p.highlight),
    );
    out.push(Primitive::rect(36.0, 186.0, 128.0, 14.0).fill(p.deep()));
    out.push(Primitive::rect(36.0, 191.0, 128.0, 2.0).fill(p.highlight).opacity(0.6));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/outfit.rs"]
mod tests;
