// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of path primitives, and options for drawing paths.

use kurbo::{Arc, BezPath, Point, Rect, RoundedRect, Shape, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accuracy used when curves are flattened into a `BezPath`.
const TOLERANCE: f64 = 0.1;

/// An elliptical arc in engine angle convention.
///
/// Angles are in degrees, measured counter-clockwise from the positive
/// x-axis as seen on a y-down surface; the arc runs counter-clockwise
/// from `start_angle` to `end_angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseArc {
    pub center: Point,
    pub radii: Vec2,
    /// Rotation of the ellipse's x-axis, in degrees.
    pub rotation: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// One geometric element appended to the engine's current path.
#[derive(Clone, Debug, PartialEq)]
pub enum PathOp {
    Line(Point, Point),
    /// An open run of connected lines.
    Polyline(Vec<Point>),
    /// A closed run of connected lines.
    Polygon(Vec<Point>),
    Rect(Rect),
    /// A rectangle with the same corner radius at every corner.
    RoundedRect(Rect, f64),
    /// The outline of an elliptical arc.
    Arc(EllipseArc),
    /// A pie slice: the arc closed through the center.
    Sector(EllipseArc),
    MoveTo(Point),
    LineTo(Point),
}

/// Options for angled joins in strokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Options for the cap of stroked lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Legacy line style.
///
/// Only `Solid` is rendered as requested; the dash styles are accepted
/// but draw solid, see `GraphicsContext::set_line_attributes`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineStyle {
    #[default]
    Solid,
    OnOffDash,
    DoubleDash,
}

/// Legacy cap style.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapStyle {
    #[default]
    Butt,
    Round,
    Projecting,
}

/// Legacy join style.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinStyle {
    Round,
    #[default]
    Miter,
    Bevel,
}

impl From<CapStyle> for LineCap {
    fn from(cap: CapStyle) -> LineCap {
        match cap {
            CapStyle::Butt => LineCap::Butt,
            CapStyle::Round => LineCap::Round,
            CapStyle::Projecting => LineCap::Square,
        }
    }
}

impl From<JoinStyle> for LineJoin {
    fn from(join: JoinStyle) -> LineJoin {
        match join {
            JoinStyle::Round => LineJoin::Round,
            JoinStyle::Miter => LineJoin::Miter,
            JoinStyle::Bevel => LineJoin::Bevel,
        }
    }
}

impl EllipseArc {
    /// The equivalent kurbo arc.
    ///
    /// kurbo measures angles clockwise on a y-down surface, so both the
    /// start angle and the sweep change sign.
    pub fn to_kurbo(&self) -> Arc {
        Arc {
            center: self.center,
            radii: self.radii,
            start_angle: -self.start_angle.to_radians(),
            sweep_angle: -(self.end_angle - self.start_angle).to_radians(),
            x_rotation: -self.rotation.to_radians(),
        }
    }

    /// The point on the ellipse at `angle` degrees.
    pub fn point_at(&self, angle: f64) -> Point {
        let (sin, cos) = (-angle.to_radians()).sin_cos();
        let (rot_sin, rot_cos) = (-self.rotation.to_radians()).sin_cos();
        let x = self.radii.x * cos;
        let y = self.radii.y * sin;
        self.center + Vec2::new(x * rot_cos - y * rot_sin, x * rot_sin + y * rot_cos)
    }

    fn is_empty(&self) -> bool {
        self.end_angle == self.start_angle
    }
}

impl PathOp {
    /// Append this element to a kurbo path.
    ///
    /// Engines that rasterize through kurbo can build their whole path
    /// from the ops they receive.
    pub fn append_to(&self, path: &mut BezPath) {
        match self {
            PathOp::Line(p0, p1) => {
                path.move_to(*p0);
                path.line_to(*p1);
            }
            PathOp::Polyline(points) => append_points(path, points),
            PathOp::Polygon(points) => {
                append_points(path, points);
                if !points.is_empty() {
                    path.close_path();
                }
            }
            PathOp::Rect(rect) => path.extend(rect.path_elements(TOLERANCE)),
            PathOp::RoundedRect(rect, radius) => {
                path.extend(RoundedRect::from_rect(*rect, *radius).path_elements(TOLERANCE))
            }
            PathOp::Arc(arc) => {
                path.move_to(arc.point_at(arc.start_angle));
                if !arc.is_empty() {
                    path.extend(arc.to_kurbo().append_iter(TOLERANCE));
                }
            }
            PathOp::Sector(arc) => {
                path.move_to(arc.center);
                path.line_to(arc.point_at(arc.start_angle));
                if !arc.is_empty() {
                    path.extend(arc.to_kurbo().append_iter(TOLERANCE));
                }
                path.close_path();
            }
            PathOp::MoveTo(p) => path.move_to(*p),
            PathOp::LineTo(p) => path.line_to(*p),
        }
    }
}

fn append_points(path: &mut BezPath, points: &[Point]) {
    let mut points = points.iter();
    if let Some(first) = points.next() {
        path.move_to(*first);
        for p in points {
            path.line_to(*p);
        }
    }
}
