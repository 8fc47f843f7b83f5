// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between legacy integer geometry and engine geometry.

use kurbo::{Point, Rect, Size, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trait for types that can be converted with precision loss.
///
/// This is our own implementation of a "lossy From" trait. It is essentially
/// adapted from <https://github.com/rust-lang/rfcs/pull/2484>.
pub trait RoundFrom<T> {
    /// Performs the conversion.
    fn round_from(x: T) -> Self;
}

/// The companion to `RoundFrom`.
///
/// As with `From` and `Into`, a blanket implementation is provided;
/// for the most part, implement `RoundFrom`.
pub trait RoundInto<T> {
    /// Performs the conversion.
    fn round_into(self) -> T;
}

impl<T, U> RoundInto<U> for T
where
    U: RoundFrom<T>,
{
    fn round_into(self) -> U {
        U::round_from(self)
    }
}

/// Blanket implementation, no conversion needed.
impl<T> RoundFrom<T> for T {
    fn round_from(x: T) -> T {
        x
    }
}

/// A legacy integer point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

/// A legacy integer rectangle: signed origin, unsigned extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One independent line of a segment batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl IntPoint {
    pub const ZERO: IntPoint = IntPoint::new(0, 0);

    pub const fn new(x: i32, y: i32) -> IntPoint {
        IntPoint { x, y }
    }
}

impl IntRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> IntRect {
        IntRect {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> IntPoint {
        IntPoint::new(self.x, self.y)
    }

    /// The center of the rectangle, at half-pixel precision.
    pub fn center(&self) -> Point {
        Point::new(
            self.x as f64 + 0.5 * self.width as f64,
            self.y as f64 + 0.5 * self.height as f64,
        )
    }

    /// Half of the width and height; the radii of the inscribed ellipse.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(0.5 * self.width as f64, 0.5 * self.height as f64)
    }
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
        Segment { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1 as f64, self.y1 as f64)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2 as f64, self.y2 as f64)
    }
}

impl From<IntPoint> for Point {
    #[inline]
    fn from(p: IntPoint) -> Point {
        Point::new(p.x as f64, p.y as f64)
    }
}

impl From<IntPoint> for Vec2 {
    #[inline]
    fn from(p: IntPoint) -> Vec2 {
        Vec2::new(p.x as f64, p.y as f64)
    }
}

impl From<IntRect> for Rect {
    #[inline]
    fn from(r: IntRect) -> Rect {
        Rect::from_origin_size(
            (r.x as f64, r.y as f64),
            Size::new(r.width as f64, r.height as f64),
        )
    }
}

/// Rounds outward: the lower corner is floored and the upper corner ceiled,
/// so the result always covers the source rectangle.
impl RoundFrom<Rect> for IntRect {
    fn round_from(r: Rect) -> IntRect {
        let r = r.abs();
        let x = r.x0.floor();
        let y = r.y0.floor();
        let width = r.x1.ceil() - x;
        let height = r.y1.ceil() - y;
        IntRect::new(
            saturate_i32(x),
            saturate_i32(y),
            saturate_i32(width).max(0) as u32,
            saturate_i32(height).max(0) as u32,
        )
    }
}

/// Splits a point into its integer part and its fractional remainder.
///
/// Both parts keep the sign of the input, as C's `modf` does, so
/// `int + frac` reproduces the point exactly.
impl RoundFrom<Point> for (Point, Vec2) {
    fn round_from(p: Point) -> (Point, Vec2) {
        (
            Point::new(p.x.trunc(), p.y.trunc()),
            Vec2::new(p.x.fract(), p.y.fract()),
        )
    }
}

/// Convert a legacy arc to engine start and end angles, in degrees.
///
/// Legacy arcs give a start angle and a sweep; the engine wants the range
/// mirrored into its own winding, so the arc `[start, start + sweep]`
/// becomes `[360 - (start + sweep), 360 - start]`.
pub fn arc_angles(start: u16, sweep: u16) -> (f64, f64) {
    let start = i32::from(start);
    let sweep = i32::from(sweep);
    (f64::from(360 - (start + sweep)), f64::from(360 - start))
}

fn saturate_i32(x: f64) -> i32 {
    if x.is_nan() {
        0
    } else {
        x.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    }
}
