// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient specifications: the legacy descriptor and the engine form.

use kurbo::{Affine, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::STOP_INT_MAX;
use crate::{Color, ImageFilter, IntPoint};

/// The shape of a legacy gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientKind {
    /// No gradient; setting one is a no-op.
    #[default]
    None,
    Linear,
    Radial,
    Conical,
    Diamond,
    /// The remaining kinds have no engine function and draw linear.
    Spiral,
    Xy,
    SqrtXy,
}

/// Legacy gradient rendering quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientQuality {
    #[default]
    Normal,
    Good,
}

/// One legacy ramp stop.
///
/// The offset is an integer position along the ramp, from 0 to
/// [`STOP_INT_MAX`](crate::util::STOP_INT_MAX).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RampStop {
    pub offset: u16,
    pub color: Color,
}

/// A legacy gradient fill, as stored on a drawing object.
///
/// The gradient is laid out by three control points: `origin` is where the
/// ramp starts, `primary` spans the ramp's direction and `secondary` its
/// cross direction. Ramp offsets must be non-decreasing.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientFill {
    pub kind: GradientKind,
    pub quality: GradientQuality,
    pub ramp: Vec<RampStop>,
    pub origin: IntPoint,
    pub primary: IntPoint,
    pub secondary: IntPoint,
    pub mirror: bool,
    pub wrap: bool,
    /// How many times the ramp repeats between `origin` and `primary`.
    pub repeat: u32,
}

/// The gradient functions offered by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientFunction {
    Linear,
    Radial,
    Conical,
    Sweep,
}

/// Specification of a gradient stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// The coordinate of the stop, from 0.0 to 1.0.
    pub pos: f32,
    /// The color at that stop.
    pub color: Color,
}

/// A gradient paint as the engine consumes it.
///
/// The gradient is defined in a unit space mapped onto user space by
/// `transform`: the unit x-axis follows the primary control point and the
/// unit y-axis the secondary one.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub function: GradientFunction,
    pub stops: Vec<GradientStop>,
    pub mirror: bool,
    pub wrap: bool,
    pub repeat: u32,
    pub transform: Affine,
    pub filter: ImageFilter,
}

impl GradientKind {
    /// The engine function drawing this kind, or `None` for no gradient.
    pub fn function(self) -> Option<GradientFunction> {
        match self {
            GradientKind::None => None,
            GradientKind::Linear => Some(GradientFunction::Linear),
            GradientKind::Radial => Some(GradientFunction::Radial),
            GradientKind::Conical => Some(GradientFunction::Conical),
            // The engine's sweep function renders what legacy files call a
            // diamond; the names differ, the output matches.
            GradientKind::Diamond => Some(GradientFunction::Sweep),
            GradientKind::Spiral | GradientKind::Xy | GradientKind::SqrtXy => {
                Some(GradientFunction::Linear)
            }
        }
    }
}

impl From<GradientQuality> for ImageFilter {
    fn from(quality: GradientQuality) -> ImageFilter {
        match quality {
            GradientQuality::Normal => ImageFilter::Nearest,
            GradientQuality::Good => ImageFilter::Bilinear,
        }
    }
}

impl RampStop {
    /// The stop with its offset normalized to the unit range.
    pub fn to_stop(self) -> GradientStop {
        GradientStop {
            pos: self.offset as f32 / STOP_INT_MAX as f32,
            color: self.color,
        }
    }
}

impl GradientFill {
    /// The affine basis of the control points.
    pub fn transform(&self) -> Affine {
        let origin = Point::from(self.origin);
        let primary = Point::from(self.primary) - origin;
        let secondary = Point::from(self.secondary) - origin;
        Affine::new([
            primary.x,
            primary.y,
            secondary.x,
            secondary.y,
            origin.x,
            origin.y,
        ])
    }

    /// Resolve into an engine gradient; `None` when the kind is `None`.
    pub fn resolve(&self) -> Option<Gradient> {
        let function = self.kind.function()?;
        Some(Gradient {
            function,
            stops: self.ramp.iter().map(|stop| stop.to_stop()).collect(),
            mirror: self.mirror,
            wrap: self.wrap,
            repeat: self.repeat,
            transform: self.transform(),
            filter: self.quality.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(offsets: &[u16]) -> Vec<RampStop> {
        offsets
            .iter()
            .map(|&offset| RampStop {
                offset,
                color: Color::BLACK,
            })
            .collect()
    }

    #[test]
    fn stop_normalization() {
        let fill = GradientFill {
            kind: GradientKind::Linear,
            ramp: ramp(&[0, 1000, 1000, 40000, u16::MAX]),
            ..GradientFill::default()
        };
        let gradient = fill.resolve().unwrap();
        let pos: Vec<f32> = gradient.stops.iter().map(|s| s.pos).collect();
        assert_eq!(pos[0], 0.0);
        assert_eq!(pos[4], 1.0);
        assert!(pos.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn none_resolves_to_nothing() {
        let fill = GradientFill {
            ramp: ramp(&[0, u16::MAX]),
            ..GradientFill::default()
        };
        assert_eq!(fill.resolve(), None);
    }

    #[test]
    fn kind_and_quality_mapping() {
        assert_eq!(GradientKind::Diamond.function(), Some(GradientFunction::Sweep));
        assert_eq!(GradientKind::Conical.function(), Some(GradientFunction::Conical));
        assert_eq!(GradientKind::Spiral.function(), Some(GradientFunction::Linear));
        assert_eq!(ImageFilter::from(GradientQuality::Normal), ImageFilter::Nearest);
        assert_eq!(ImageFilter::from(GradientQuality::Good), ImageFilter::Bilinear);
    }

    #[test]
    fn control_point_basis() {
        let fill = GradientFill {
            kind: GradientKind::Radial,
            origin: IntPoint::new(10, 20),
            primary: IntPoint::new(110, 20),
            secondary: IntPoint::new(10, 70),
            ..GradientFill::default()
        };
        let xf = fill.transform();
        assert_eq!(xf.as_coeffs(), [100.0, 0.0, 0.0, 50.0, 10.0, 20.0]);
        assert_eq!(xf * Point::new(1.0, 0.0), Point::new(110.0, 20.0));
        assert_eq!(xf * Point::new(0.0, 1.0), Point::new(10.0, 70.0));
    }

    #[test]
    fn distant_control_points() {
        let fill = GradientFill {
            kind: GradientKind::Linear,
            origin: IntPoint::new(-2_000_000_000, i32::MAX),
            primary: IntPoint::new(2_000_000_000, i32::MAX),
            secondary: IntPoint::new(-2_000_000_000, i32::MIN),
            ..GradientFill::default()
        };
        let coeffs = fill.resolve().unwrap().transform.as_coeffs();
        assert_eq!(coeffs[0], 4_000_000_000.0);
        assert_eq!(coeffs[1], 0.0);
        assert_eq!(coeffs[2], 0.0);
        assert_eq!(coeffs[3], -4_294_967_295.0);
        assert_eq!(coeffs[4], -2_000_000_000.0);
        assert_eq!(coeffs[5], f64::from(i32::MAX));
    }
}
