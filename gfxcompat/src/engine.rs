// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract consumed from the vector-graphics engine.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::{BlendMode, Color, Error, Gradient, LayerEffects, LineCap, LineJoin, PathOp, Raster};

/// How the engine samples images, patterns and gradient ramps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageFilter {
    #[default]
    Nearest,
    Bilinear,
}

/// A retained-mode 2D engine with a current path, a paint state and a
/// transform stack.
///
/// Every drawing call of a `GraphicsContext` lands here. Engines are
/// mutated directly on every call; nothing is buffered by the adapter.
pub trait Engine {
    /// A retained image handle, usable as a fill pattern.
    ///
    /// Cloning retains the image and dropping releases it, in the manner
    /// of `Rc`.
    type Image: Clone;

    /// A rasterized glyph coverage mask, in device space.
    type Mask;

    /// Report an engine failure that was deferred by an infallible call.
    fn status(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Append one element to the current path.
    fn add_path(&mut self, op: &PathOp);

    /// Stroke the current path with the stroke paint.
    fn stroke(&mut self);

    /// Fill the current path with the fill paint.
    fn fill(&mut self);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_gradient(&mut self, gradient: &Gradient);

    fn set_stroke_gradient(&mut self, gradient: &Gradient);

    /// Install a repeating image as the fill paint, or remove it with `None`.
    fn set_fill_pattern(
        &mut self,
        image: Option<&Self::Image>,
        transform: Affine,
        filter: ImageFilter,
    );

    fn set_stroke_width(&mut self, width: f64);

    fn set_stroke_cap(&mut self, cap: LineCap);

    fn set_stroke_join(&mut self, join: LineJoin);

    fn set_stroke_miter_limit(&mut self, limit: f64);

    /// Set the dash pattern; an empty slice strokes solid.
    fn set_stroke_dashes(&mut self, offset: f64, lengths: &[f64]);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Set the global opacity, in the range 0.0 to 1.0.
    fn set_opacity(&mut self, opacity: f64);

    fn set_antialias(&mut self, antialias: bool);

    /// Apply a translation to the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Reset the current transform to the surface's base transform.
    fn reset_transform(&mut self);

    /// Concatenate `transform` onto the current transform.
    ///
    /// The new transform applies to geometry before the existing one.
    fn concat_transform(&mut self, transform: Affine);

    /// Push the current graphics state (transform, clip and paint).
    fn save(&mut self);

    /// Pop the graphics state pushed by the matching `save`.
    fn restore(&mut self) -> Result<(), Error>;

    /// Intersect the clip with a rectangle in user space.
    fn clip_to_rect(&mut self, rect: Rect);

    /// Open a compositing layer; everything up to `end_layer` is merged
    /// onto the parent surface as one unit.
    fn begin_layer(&mut self);

    /// Open a compositing layer with visual effects applied when it closes.
    fn begin_layer_with_effects(&mut self, effects: &LayerEffects);

    /// Close the innermost layer.
    fn end_layer(&mut self) -> Result<(), Error>;

    /// Draw a raster into `dest`, in user space.
    fn draw_pixels(
        &mut self,
        raster: &Raster,
        dest: Rect,
        filter: ImageFilter,
    ) -> Result<(), Error>;

    /// The current clip, in device space.
    fn device_clip_bounds(&self) -> Rect;

    /// The transform from user space to device space.
    fn device_transform(&self) -> Affine;

    /// Composite a device-space mask with the fill paint at a whole-pixel
    /// device offset.
    fn draw_device_mask(&mut self, mask: &Self::Mask, offset: Point);

    /// The advance width of UTF-8 `text` at `size`.
    fn measure_text(&mut self, text: &str, size: f64) -> f64;
}

/// An engine that can allocate its own pixel-backed surface.
pub trait EngineFactory: Engine + Sized {
    /// Allocate a `width` by `height` surface, with or without an alpha
    /// channel.
    fn create(width: u32, height: u32, alpha: bool) -> Result<Self, Error>;
}
