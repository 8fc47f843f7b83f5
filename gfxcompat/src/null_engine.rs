// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An engine that does nothing.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::{
    BlendMode, Color, Engine, EngineFactory, Error, Gradient, ImageFilter, LayerEffects, LineCap,
    LineJoin, PathOp, Raster,
};

/// An engine that doesn't draw.
///
/// Its handle is a plain value that can be copied into many contexts.
/// This is useful largely for doc tests and benchmarks of the adapter
/// itself, but is made public in case it might come in handy.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEngine;

/// The image type of [`NullEngine`]; it has no pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullImage;

/// The glyph mask type of [`NullEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullMask;

impl NullEngine {
    pub fn new() -> NullEngine {
        NullEngine
    }
}

impl Engine for NullEngine {
    type Image = NullImage;
    type Mask = NullMask;

    fn begin_path(&mut self) {}
    fn add_path(&mut self, _op: &PathOp) {}
    fn stroke(&mut self) {}
    fn fill(&mut self) {}

    fn set_fill_color(&mut self, _color: Color) {}
    fn set_stroke_color(&mut self, _color: Color) {}
    fn set_fill_gradient(&mut self, _gradient: &Gradient) {}
    fn set_stroke_gradient(&mut self, _gradient: &Gradient) {}
    fn set_fill_pattern(
        &mut self,
        _image: Option<&NullImage>,
        _transform: Affine,
        _filter: ImageFilter,
    ) {
    }

    fn set_stroke_width(&mut self, _width: f64) {}
    fn set_stroke_cap(&mut self, _cap: LineCap) {}
    fn set_stroke_join(&mut self, _join: LineJoin) {}
    fn set_stroke_miter_limit(&mut self, _limit: f64) {}
    fn set_stroke_dashes(&mut self, _offset: f64, _lengths: &[f64]) {}

    fn set_blend_mode(&mut self, _mode: BlendMode) {}
    fn set_opacity(&mut self, _opacity: f64) {}
    fn set_antialias(&mut self, _antialias: bool) {}

    fn translate(&mut self, _offset: Vec2) {}
    fn reset_transform(&mut self) {}
    fn concat_transform(&mut self, _transform: Affine) {}
    fn save(&mut self) {}
    fn restore(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn clip_to_rect(&mut self, _rect: Rect) {}

    fn begin_layer(&mut self) {}
    fn begin_layer_with_effects(&mut self, _effects: &LayerEffects) {}
    fn end_layer(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn draw_pixels(
        &mut self,
        _raster: &Raster,
        _dest: Rect,
        _filter: ImageFilter,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn device_clip_bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn device_transform(&self) -> Affine {
        Affine::IDENTITY
    }

    fn draw_device_mask(&mut self, _mask: &NullMask, _offset: Point) {}

    fn measure_text(&mut self, _text: &str, _size: f64) -> f64 {
        0.0
    }
}

impl EngineFactory for NullEngine {
    fn create(_width: u32, _height: u32, _alpha: bool) -> Result<NullEngine, Error> {
        Ok(NullEngine)
    }
}
