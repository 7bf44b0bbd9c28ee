use crate::catalog::keys::{HairStyle, StyleKey};
use crate::color::shade::{Palette, Shading};
use crate::foundation::core::Rgb8;
use crate::geometry::Recipe;
use crate::geometry::primitive::{PathBuilder, Primitive, mirror_x, polygon};
use crate::persona::model::DEFAULT_HAIR_COLOR;

impl HairStyle {
    /// Drawing for this style.
    pub fn recipe(self) -> Recipe {
        match self {
            HairStyle::Straight => straight,
            HairStyle::Wavy => wavy,
            HairStyle::Curly => curly,
            HairStyle::Buzz => buzz,
            HairStyle::Long => long,
            HairStyle::Bun => bun,
            HairStyle::Mohawk => mohawk,
            HairStyle::Afro => afro,
        }
    }
}

/// Hair primitives for a raw style key and `#RRGGBB` base color.
///
/// Unknown styles draw `straight`; a malformed color is replaced by the default hair color.
pub fn generate_hair(style: &str, base_color: &str) -> Vec<Primitive> {
    draw(
        HairStyle::resolve(style),
        Rgb8::parse_or(base_color, DEFAULT_HAIR_COLOR),
    )
}

pub(crate) fn draw(style: HairStyle, base: Rgb8) -> Vec<Primitive> {
    (style.recipe())(&Palette::derive(base, Shading::HAIR))
}

/// Skull cap hugging the top of the head, ending at `side_y` above the ears.
fn cap(side_y: f64, inset: f64) -> PathBuilder {
    let l = 56.0 + inset;
    let r = mirror_x(l);
    PathBuilder::at(l, side_y)
        .cubic(l - 2.0, 58.0, 72.0, 34.0 + inset, 100.0, 34.0 + inset)
        .cubic(128.0, 34.0 + inset, r + 2.0, 58.0, r, side_y)
}

fn sheen(p: &Palette, cx: f64, cy: f64) -> Primitive {
    Primitive::ellipse(cx, cy, 15.0, 4.5)
        .rotated(-18.0)
        .fill(p.highlight)
        .opacity(0.55)
}

fn straight(p: &Palette) -> Vec<Primitive> {
    let outline = |dy: f64| {
        cap(100.0 + dy, 0.0)
            .line(138.0, 100.0 + dy)
            .cubic(136.0, 76.0, 126.0, 62.0, 116.0, 58.0)
            .line(84.0, 58.0)
            .cubic(74.0, 62.0, 64.0, 76.0, 62.0, 100.0 + dy)
            .close()
    };
    vec![
        Primitive::path(outline(3.0)).fill(p.shadow),
        Primitive::path(outline(0.0)).fill(p.base),
        // blunt fringe
        Primitive::path(
            PathBuilder::at(64.0, 60.0)
                .cubic(72.0, 46.0, 128.0, 46.0, 136.0, 60.0)
                .line(136.0, 68.0)
                .line(64.0, 68.0)
                .close(),
        )
        .fill(p.base),
        Primitive::rect(64.0, 66.0, 72.0, 2.5)
            .fill(p.shadow)
            .opacity(0.6),
        Primitive::path(PathBuilder::at(60.0, 76.0).quad(58.0, 90.0, 61.0, 102.0).open())
            .stroke(p.shadow, 1.5),
        Primitive::path(
            PathBuilder::at(mirror_x(60.0), 76.0)
                .quad(mirror_x(58.0), 90.0, mirror_x(61.0), 102.0)
                .open(),
        )
        .stroke(p.shadow, 1.5),
        sheen(p, 86.0, 46.0),
    ]
}

fn wavy(p: &Palette) -> Vec<Primitive> {
    let volume = cap(96.0, -2.0)
        .cubic(152.0, 104.0, 140.0, 112.0, 148.0, 124.0)
        .cubic(138.0, 122.0, 136.0, 110.0, 136.0, 100.0)
        .cubic(134.0, 76.0, 122.0, 62.0, 100.0, 60.0)
        .cubic(78.0, 62.0, 66.0, 76.0, 64.0, 100.0)
        .cubic(64.0, 110.0, 62.0, 122.0, 52.0, 124.0)
        .cubic(60.0, 112.0, 48.0, 104.0, 54.0, 96.0)
        .close();
    let mut out = vec![
        Primitive::path(volume.clone())
            .fill(p.shadow)
            .opacity(0.9),
        Primitive::path(volume).fill(p.base),
        // swept fringe
        Primitive::path(
            PathBuilder::at(66.0, 66.0)
                .cubic(80.0, 44.0, 112.0, 42.0, 134.0, 62.0)
                .cubic(118.0, 56.0, 100.0, 58.0, 88.0, 70.0)
                .cubic(80.0, 64.0, 72.0, 64.0, 66.0, 66.0)
                .close(),
        )
        .fill(p.base),
    ];
    for dx in [0.0, 8.0] {
        out.push(
            Primitive::path(
                PathBuilder::at(58.0 + dx * 0.5, 80.0)
                    .cubic(52.0 + dx * 0.5, 92.0, 64.0, 100.0, 56.0 + dx * 0.3, 116.0)
                    .open(),
            )
            .stroke(p.shadow, 1.5)
            .opacity(0.7),
        );
        out.push(
            Primitive::path(
                PathBuilder::at(mirror_x(58.0 + dx * 0.5), 80.0)
                    .cubic(
                        mirror_x(52.0 + dx * 0.5),
                        92.0,
                        mirror_x(64.0),
                        100.0,
                        mirror_x(56.0 + dx * 0.3),
                        116.0,
                    )
                    .open(),
            )
            .stroke(p.shadow, 1.5)
            .opacity(0.7),
        );
    }
    out.push(sheen(p, 90.0, 44.0));
    out
}

fn curly(p: &Palette) -> Vec<Primitive> {
    let mut out = vec![Primitive::path(cap(92.0, 2.0).close()).fill(p.shadow)];
    // ringlets along the upper arc of the head
    let (cx, cy, rx, ry) = (100.0, 80.0, 44.0, 44.0);
    let n = 13;
    for i in 0..n {
        let a = (190.0 + 160.0 * i as f64 / (n - 1) as f64).to_radians();
        let (x, y) = (cx + rx * a.cos(), cy + ry * a.sin());
        out.push(Primitive::circle(x + 1.5, y + 2.0, 10.0).fill(p.shadow));
        out.push(Primitive::circle(x, y, 10.0).fill(p.base));
        out.push(
            Primitive::circle(x - 3.0, y - 3.0, 3.0)
                .fill(p.highlight)
                .opacity(0.5),
        );
    }
    // short fringe curls
    for x in [78.0, 92.0, 108.0, 122.0] {
        out.push(Primitive::circle(x, 56.0, 7.0).fill(p.base));
        out.push(
            Primitive::path(PathBuilder::at(x - 4.0, 56.0).quad(x, 50.0, x + 4.0, 57.0).open())
                .stroke(p.shadow, 1.2),
        );
    }
    out
}

fn buzz(p: &Palette) -> Vec<Primitive> {
    let crop = cap(80.0, 2.0)
        .cubic(138.0, 66.0, 124.0, 54.0, 100.0, 52.0)
        .cubic(76.0, 54.0, 62.0, 66.0, 58.0, 80.0)
        .close();
    let mut out = vec![
        Primitive::path(crop.clone()).fill(p.base).opacity(0.85),
        Primitive::path(crop).stroke(p.shadow, 0.8).opacity(0.6),
    ];
    // stipple only inside the crop band
    let mut y: f64 = 42.0;
    while y <= 62.0 {
        let half = 36.0 - (y - 42.0) * 0.2;
        let mut x = 100.0 - half;
        while x <= 100.0 + half {
            let inner = ((x - 100.0) / 30.0).powi(2) + ((y - 66.0) / 14.0).powi(2);
            if inner > 1.0 {
                out.push(Primitive::circle(x, y, 0.8).fill(p.shadow).opacity(0.7));
            }
            x += 7.0;
        }
        y += 5.0;
    }
    out.push(sheen(p, 88.0, 42.0));
    out
}

fn long(p: &Palette) -> Vec<Primitive> {
    let curtain = |flip: bool| {
        let f = |x: f64| if flip { mirror_x(x) } else { x };
        PathBuilder::at(f(60.0), 60.0)
            .cubic(f(48.0), 90.0, f(46.0), 140.0, f(50.0), 170.0)
            .line(f(70.0), 170.0)
            .cubic(f(66.0), 140.0, f(64.0), 110.0, f(66.0), 84.0)
            .close()
    };
    vec![
        Primitive::path(curtain(false)).fill(p.shadow),
        Primitive::path(curtain(true)).fill(p.shadow),
        Primitive::path(
            cap(96.0, -1.0)
                .line(136.0, 96.0)
                .cubic(132.0, 70.0, 118.0, 58.0, 100.0, 56.0)
                .cubic(82.0, 58.0, 68.0, 70.0, 64.0, 96.0)
                .close(),
        )
        .fill(p.base),
        Primitive::path(
            PathBuilder::at(58.0, 72.0)
                .cubic(52.0, 100.0, 54.0, 140.0, 58.0, 166.0)
                .line(66.0, 166.0)
                .cubic(62.0, 130.0, 62.0, 100.0, 66.0, 80.0)
                .close(),
        )
        .fill(p.base),
        Primitive::path(
            PathBuilder::at(mirror_x(58.0), 72.0)
                .cubic(mirror_x(52.0), 100.0, mirror_x(54.0), 140.0, mirror_x(58.0), 166.0)
                .line(mirror_x(66.0), 166.0)
                .cubic(mirror_x(62.0), 130.0, mirror_x(62.0), 100.0, mirror_x(66.0), 80.0)
                .close(),
        )
        .fill(p.base),
        // center part
        Primitive::path(PathBuilder::at(100.0, 36.0).quad(99.0, 46.0, 100.0, 56.0).open())
            .stroke(p.shadow, 1.5),
        Primitive::path(PathBuilder::at(56.0, 100.0).quad(54.0, 130.0, 58.0, 160.0).open())
            .stroke(p.highlight, 1.2)
            .opacity(0.5),
        sheen(p, 84.0, 46.0),
        sheen(p, 116.0, 46.0).rotated(18.0),
    ]
}

fn bun(p: &Palette) -> Vec<Primitive> {
    vec![
        Primitive::circle(101.5, 34.0, 16.0).fill(p.shadow),
        Primitive::circle(100.0, 32.0, 16.0).fill(p.base),
        Primitive::path(PathBuilder::at(90.0, 26.0).quad(100.0, 20.0, 110.0, 28.0).open())
            .stroke(p.highlight, 1.5)
            .opacity(0.7),
        Primitive::path(
            cap(84.0, 1.0)
                .cubic(138.0, 70.0, 126.0, 52.0, 100.0, 50.0)
                .cubic(74.0, 52.0, 62.0, 70.0, 58.0, 84.0)
                .close(),
        )
        .fill(p.base),
        // slicked comb lines
        Primitive::path(PathBuilder::at(70.0, 60.0).quad(82.0, 44.0, 96.0, 46.0).open())
            .stroke(p.shadow, 1.0)
            .opacity(0.6),
        Primitive::path(PathBuilder::at(130.0, 60.0).quad(118.0, 44.0, 104.0, 46.0).open())
            .stroke(p.shadow, 1.0)
            .opacity(0.6),
        // hair tie
        Primitive::rounded_rect(90.0, 44.0, 20.0, 4.0, 2.0).fill(p.shadow),
    ]
}

fn mohawk(p: &Palette) -> Vec<Primitive> {
    let crest = [
        (88.0, 62.0),
        (84.0, 40.0),
        (92.0, 44.0),
        (90.0, 22.0),
        (98.0, 30.0),
        (100.0, 10.0),
        (104.0, 30.0),
        (110.0, 22.0),
        (110.0, 44.0),
        (116.0, 40.0),
        (112.0, 62.0),
    ];
    let shadow_crest: Vec<(f64, f64)> = crest.iter().map(|&(x, y)| (x + 2.0, y + 2.0)).collect();
    vec![
        // shaved sides
        Primitive::path(cap(84.0, 2.0).close())
            .fill(p.shadow)
            .opacity(0.35),
        Primitive::path(polygon(&shadow_crest)).fill(p.shadow),
        Primitive::path(polygon(&crest)).fill(p.base),
        Primitive::path(polygon(&[(98.0, 58.0), (99.0, 30.0), (100.0, 14.0), (102.0, 58.0)]))
            .fill(p.highlight)
            .opacity(0.5),
    ]
}

fn afro(p: &Palette) -> Vec<Primitive> {
    let crown = |grow: f64| {
        PathBuilder::at(50.0 - grow, 112.0)
            .cubic(30.0 - grow, 60.0, 60.0, 10.0 - grow, 100.0, 10.0 - grow)
            .cubic(140.0, 10.0 - grow, 170.0 + grow, 60.0, 150.0 + grow, 112.0)
            .line(138.0, 100.0)
            .cubic(136.0, 72.0, 122.0, 58.0, 100.0, 58.0)
            .cubic(78.0, 58.0, 64.0, 72.0, 62.0, 100.0)
            .close()
    };
    let mut out = vec![
        Primitive::path(crown(3.0)).fill(p.shadow),
        Primitive::path(crown(0.0)).fill(p.base),
    ];
    // scalloped rim
    let n = 11;
    for i in 0..n {
        let a = (170.0 + 200.0 * i as f64 / (n - 1) as f64).to_radians();
        let (x, y) = (100.0 + 54.0 * a.cos(), 64.0 + 52.0 * a.sin());
        out.push(Primitive::circle(x, y, 12.0).fill(p.base));
        out.push(
            Primitive::circle(x + 2.0, y + 2.0, 5.0)
                .fill(p.shadow)
                .opacity(0.35),
        );
    }
    for &(x, y) in &[(80.0, 32.0), (104.0, 26.0), (124.0, 38.0), (66.0, 50.0)] {
        out.push(Primitive::circle(x, y, 4.0).fill(p.highlight).opacity(0.3));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/hair.rs"]
mod tests;
