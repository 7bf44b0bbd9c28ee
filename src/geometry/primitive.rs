use kurbo::Shape as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Vec2};

/// Flattening tolerance (design-space units) used when converting shapes to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// One color stop of a gradient paint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Rgb8,
}

/// How a primitive's interior is filled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Rgb8,
    },
    /// Linear gradient between two design-space points.
    Linear {
        /// Point mapped to offset 0.
        start: Point,
        /// Point mapped to offset 1.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around a design-space center.
    Radial {
        /// Gradient origin (offset 0).
        center: Point,
        /// Distance at which offset 1 is reached.
        radius: f64,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

/// Outline drawn over a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgb8,
    /// Stroke width in design-space units.
    pub width: f64,
}

/// Geometry of a primitive, in the 200×200 design space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned ellipse, optionally rotated about its center.
    Ellipse {
        /// Center point.
        center: Point,
        /// Horizontal and vertical radii before rotation.
        radii: Vec2,
        /// Rotation in radians.
        rotation: f64,
    },
    /// Circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// Rectangle with optional rounded corners.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius (0 for sharp corners).
        corner_radius: f64,
    },
    /// Arbitrary Bézier path.
    Path {
        /// Path elements.
        path: BezPath,
    },
}

/// An atomic vector drawing instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Interior paint; `None` for stroke-only primitives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    /// Optional outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Optional opacity in `[0, 1]`; `None` means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Primitive {
    fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            stroke: None,
            opacity: None,
        }
    }

    /// Ellipse centered at `(cx, cy)`.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::from_shape(Shape::Ellipse {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            rotation: 0.0,
        })
    }

    /// Circle centered at `(cx, cy)`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::from_shape(Shape::Circle {
            center: Point::new(cx, cy),
            radius: r,
        })
    }

    /// Sharp-cornered rectangle with top-left `(x, y)`.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::rounded_rect(x, y, w, h, 0.0)
    }

    /// Rounded rectangle with top-left `(x, y)`.
    pub fn rounded_rect(x: f64, y: f64, w: f64, h: f64, r: f64) -> Self {
        Self::from_shape(Shape::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            corner_radius: r,
        })
    }

    /// Arbitrary path.
    pub fn path(path: BezPath) -> Self {
        Self::from_shape(Shape::Path { path })
    }

    /// Solid fill.
    pub fn fill(self, color: Rgb8) -> Self {
        self.paint(Paint::Solid { color })
    }

    /// Any paint as fill.
    pub fn paint(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    /// Outline with `color` and `width`.
    pub fn stroke(mut self, color: Rgb8, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Rotate an ellipse about its center by `degrees`. Other shapes are returned unchanged.
    pub fn rotated(mut self, degrees: f64) -> Self {
        if let Shape::Ellipse { rotation, .. } = &mut self.shape {
            *rotation = degrees.to_radians();
        }
        self
    }

    /// Effective opacity (`1.0` when unset).
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Outline of the shape as a Bézier path in design space.
    pub fn to_bez_path(&self) -> BezPath {
        match &self.shape {
            Shape::Ellipse {
                center,
                radii,
                rotation,
            } => kurbo::Ellipse::new(*center, *radii, *rotation).to_path(PATH_TOLERANCE),
            Shape::Circle { center, radius } => {
                kurbo::Circle::new(*center, *radius).to_path(PATH_TOLERANCE)
            }
            Shape::Rect {
                rect,
                corner_radius,
            } => {
                if *corner_radius > 0.0 {
                    kurbo::RoundedRect::from_rect(*rect, *corner_radius).to_path(PATH_TOLERANCE)
                } else {
                    rect.to_path(PATH_TOLERANCE)
                }
            }
            Shape::Path { path } => path.clone(),
        }
    }

    /// Design-space bounds of the shape, widened by half the stroke width.
    pub fn bounding_box(&self) -> Rect {
        let bounds = match &self.shape {
            Shape::Ellipse {
                center,
                radii,
                rotation,
            } => kurbo::Ellipse::new(*center, *radii, *rotation).bounding_box(),
            Shape::Circle { center, radius } => kurbo::Circle::new(*center, *radius).bounding_box(),
            Shape::Rect { rect, .. } => *rect,
            Shape::Path { path } => path.bounding_box(),
        };
        match self.stroke {
            Some(s) => bounds.inflate(s.width / 2.0, s.width / 2.0),
            None => bounds,
        }
    }

    /// Outline path mapped through `transform` (used to place design-space output on a canvas).
    pub fn transformed_path(&self, transform: Affine) -> BezPath {
        transform * self.to_bez_path()
    }
}

/// Fluent [`BezPath`] construction in design-space coordinates.
///
/// ```
/// use persona_avatar::PathBuilder;
///
/// let tri = PathBuilder::at(0.0, 0.0).line(10.0, 0.0).line(5.0, 8.0).close();
/// assert_eq!(tri.elements().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    path: BezPath,
}

impl PathBuilder {
    /// Start a new subpath at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        let mut path = BezPath::new();
        path.move_to((x, y));
        Self { path }
    }

    /// Start another subpath at `(x, y)` within the same path.
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.path.move_to((x, y));
        self
    }

    /// Straight segment to `(x, y)`.
    pub fn line(mut self, x: f64, y: f64) -> Self {
        self.path.line_to((x, y));
        self
    }

    /// Quadratic segment with control `(cx, cy)` ending at `(x, y)`.
    pub fn quad(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.path.quad_to((cx, cy), (x, y));
        self
    }

    /// Cubic segment with controls `(c1x, c1y)`, `(c2x, c2y)` ending at `(x, y)`.
    pub fn cubic(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.path.curve_to((c1x, c1y), (c2x, c2y), (x, y));
        self
    }

    /// Close the current subpath and finish.
    pub fn close(mut self) -> BezPath {
        self.path.close_path();
        self.path
    }

    /// Close the current subpath and keep building.
    pub fn close_sub(mut self) -> Self {
        self.path.close_path();
        self
    }

    /// Finish without closing (open polyline/curve, typically stroked).
    pub fn open(self) -> BezPath {
        self.path
    }
}

/// Closed polygon through `points`.
pub(crate) fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((&(x0, y0), rest)) = points.split_first() {
        path.move_to((x0, y0));
        for &(x, y) in rest {
            path.line_to((x, y));
        }
        path.close_path();
    }
    path
}

/// Mirror an x coordinate across the vertical center line of the design space.
pub(crate) fn mirror_x(x: f64) -> f64 {
    crate::foundation::core::DESIGN_SIZE - x
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitive.rs"]
mod tests;
