// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy drawing primitives.
//!
//! Every primitive starts a fresh path, appends its geometry and then
//! strokes or fills it once with the current paint.

use kurbo::Point;

use crate::conv::arc_angles;
use crate::{EllipseArc, Engine, GraphicsContext, IntPoint, IntRect, PathOp, Segment};

/// The ellipse inscribed in `rect`, spanning the legacy angles.
pub fn inscribed_arc(rect: IntRect, start: u16, sweep: u16) -> EllipseArc {
    let (start_angle, end_angle) = arc_angles(start, sweep);
    EllipseArc {
        center: rect.center(),
        radii: rect.half_extents(),
        rotation: 0.0,
        start_angle,
        end_angle,
    }
}

/// The path element a filled arc is drawn with.
///
/// A non-zero sweep of whole turns is a full ellipse; anything else,
/// including no sweep at all, is a pie sector.
pub fn filled_arc(rect: IntRect, start: u16, sweep: u16) -> PathOp {
    let arc = inscribed_arc(rect, start, sweep);
    if sweep != 0 && sweep % 360 == 0 {
        PathOp::Arc(arc)
    } else {
        PathOp::Sector(arc)
    }
}

fn points(points: &[IntPoint]) -> Vec<Point> {
    points.iter().map(|&p| p.into()).collect()
}

impl<E: Engine, P> GraphicsContext<E, P> {
    fn stroke_ops(&mut self, ops: impl IntoIterator<Item = PathOp>) {
        let engine = self.engine_mut();
        engine.begin_path();
        for op in ops {
            engine.add_path(&op);
        }
        engine.stroke();
    }

    fn fill_ops(&mut self, ops: impl IntoIterator<Item = PathOp>) {
        let engine = self.engine_mut();
        engine.begin_path();
        for op in ops {
            engine.add_path(&op);
        }
        engine.fill();
    }

    pub fn draw_line(&mut self, from: IntPoint, to: IntPoint) {
        self.stroke_ops([PathOp::Line(from.into(), to.into())]);
    }

    /// Stroke connected lines through `vertices`, closing back to the
    /// first vertex when `closed`.
    pub fn draw_lines(&mut self, vertices: &[IntPoint], closed: bool) {
        let vertices = points(vertices);
        let op = if closed {
            PathOp::Polygon(vertices)
        } else {
            PathOp::Polyline(vertices)
        };
        self.stroke_ops([op]);
    }

    pub fn fill_polygon(&mut self, vertices: &[IntPoint]) {
        self.fill_ops([PathOp::Polygon(points(vertices))]);
    }

    /// Stroke the arc of the ellipse inscribed in `rect`.
    ///
    /// Angles are legacy degrees: `start` measured clockwise from three
    /// o'clock, `sweep` continuing clockwise.
    pub fn draw_arc(&mut self, rect: IntRect, start: u16, sweep: u16) {
        self.stroke_ops([PathOp::Arc(inscribed_arc(rect, start, sweep))]);
    }

    /// Fill a pie slice of the ellipse inscribed in `rect`.
    pub fn fill_arc(&mut self, rect: IntRect, start: u16, sweep: u16) {
        self.fill_ops([filled_arc(rect, start, sweep)]);
    }

    /// Stroke the outline of a pie slice.
    pub fn draw_segment(&mut self, rect: IntRect, start: u16, sweep: u16) {
        self.stroke_ops([PathOp::Sector(inscribed_arc(rect, start, sweep))]);
    }

    /// Stroke independent lines as one path.
    pub fn draw_segments(&mut self, segments: &[Segment]) {
        self.stroke_ops(
            segments
                .iter()
                .flat_map(|s| [PathOp::MoveTo(s.start()), PathOp::LineTo(s.end())]),
        );
    }

    pub fn draw_rect(&mut self, rect: IntRect) {
        self.stroke_ops([PathOp::Rect(rect.into())]);
    }

    pub fn fill_rect(&mut self, rect: IntRect) {
        self.fill_ops([PathOp::Rect(rect.into())]);
    }

    /// Fill every rectangle in one path.
    pub fn fill_rects(&mut self, rects: &[IntRect]) {
        self.fill_ops(rects.iter().map(|&r| PathOp::Rect(r.into())));
    }

    pub fn draw_round_rect(&mut self, rect: IntRect, radius: u16) {
        self.stroke_ops([PathOp::RoundedRect(rect.into(), f64::from(radius))]);
    }

    pub fn fill_round_rect(&mut self, rect: IntRect, radius: u16) {
        self.fill_ops([PathOp::RoundedRect(rect.into(), f64::from(radius))]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn arc_in_rect() {
        let arc = inscribed_arc(IntRect::new(0, 0, 100, 50), 0, 90);
        assert_eq!(arc.center, Point::new(50.0, 25.0));
        assert_eq!(arc.radii, Vec2::new(50.0, 25.0));
        assert_eq!((arc.start_angle, arc.end_angle), (270.0, 360.0));
    }

    #[test]
    fn filled_arc_variants() {
        let rect = IntRect::new(0, 0, 10, 10);
        assert!(matches!(filled_arc(rect, 0, 360), PathOp::Arc(_)));
        assert!(matches!(filled_arc(rect, 45, 720), PathOp::Arc(_)));
        assert!(matches!(filled_arc(rect, 0, 180), PathOp::Sector(_)));
        match filled_arc(rect, 30, 0) {
            PathOp::Sector(arc) => assert_eq!(arc.start_angle, arc.end_angle),
            other => panic!("expected a sector, got {other:?}"),
        }
    }
}
