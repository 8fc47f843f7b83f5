// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An engine that records every call it receives.
//!
//! Nothing is rasterized. The engine keeps the transform and clip stack
//! so introspection answers what a real engine would, and the ordered
//! log of [`EngineOp`]s can be compared against the expected calls.

use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::{
    new_error, AlphaMask, BlendMode, Color, Engine, EngineFactory, Error, ErrorKind, Gradient,
    ImageBuf, ImageFilter, LayerEffects, LineCap, LineJoin, PathOp, Raster, RasterFormat,
};

/// One recorded engine call.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineOp {
    BeginPath,
    AddPath(PathOp),
    Stroke,
    Fill,
    FillColor(Color),
    StrokeColor(Color),
    FillGradient(Gradient),
    StrokeGradient(Gradient),
    /// The pattern image is recorded by size only, so the log does not
    /// keep the image alive.
    FillPattern {
        image: Option<(u32, u32)>,
        transform: Affine,
        filter: ImageFilter,
    },
    StrokeWidth(f64),
    StrokeCap(LineCap),
    StrokeJoin(LineJoin),
    MiterLimit(f64),
    Dashes {
        offset: f64,
        lengths: Vec<f64>,
    },
    BlendMode(BlendMode),
    Opacity(f64),
    Antialias(bool),
    Translate(Vec2),
    ResetTransform,
    ConcatTransform(Affine),
    Save,
    Restore,
    ClipToRect(Rect),
    BeginLayer,
    BeginLayerWithEffects(LayerEffects),
    EndLayer,
    DrawPixels {
        width: u32,
        height: u32,
        format: RasterFormat,
        dest: Rect,
        filter: ImageFilter,
    },
    DrawMask {
        width: u32,
        height: u32,
        offset: Point,
    },
    MeasureText {
        text: String,
        size: f64,
    },
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    transform: Affine,
    clip: Rect,
}

/// A recording engine over a `width` by `height` device surface.
#[derive(Debug)]
pub struct RecordingEngine {
    ops: Vec<EngineOp>,
    surface: Rect,
    alpha: bool,
    current: Frame,
    stack: Vec<Frame>,
    layers: usize,
    reject_pixels: bool,
}

impl RecordingEngine {
    pub fn new(width: u32, height: u32) -> RecordingEngine {
        let surface = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        RecordingEngine {
            ops: Vec::new(),
            surface,
            alpha: true,
            current: Frame {
                transform: Affine::IDENTITY,
                clip: surface,
            },
            stack: Vec::new(),
            layers: 0,
            reject_pixels: false,
        }
    }

    /// Make every later `draw_pixels` fail with a backend error.
    pub fn reject_pixels(&mut self) {
        self.reject_pixels = true;
    }

    pub fn ops(&self) -> &[EngineOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EngineOp> {
        self.ops
    }

    /// Forget the calls recorded so far; the drawing state is kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha
    }

    /// The number of saves not yet restored.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// The number of layers not yet ended.
    pub fn layer_depth(&self) -> usize {
        self.layers
    }

    fn record(&mut self, op: EngineOp) {
        self.ops.push(op);
    }
}

#[derive(Debug)]
struct PixelsRejected;

impl std::fmt::Display for PixelsRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "pixels rejected")
    }
}

impl std::error::Error for PixelsRejected {}

impl Engine for RecordingEngine {
    type Image = Rc<ImageBuf>;
    type Mask = Rc<AlphaMask>;

    fn begin_path(&mut self) {
        self.record(EngineOp::BeginPath);
    }

    fn add_path(&mut self, op: &PathOp) {
        self.record(EngineOp::AddPath(op.clone()));
    }

    fn stroke(&mut self) {
        self.record(EngineOp::Stroke);
    }

    fn fill(&mut self) {
        self.record(EngineOp::Fill);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(EngineOp::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(EngineOp::StrokeColor(color));
    }

    fn set_fill_gradient(&mut self, gradient: &Gradient) {
        self.record(EngineOp::FillGradient(gradient.clone()));
    }

    fn set_stroke_gradient(&mut self, gradient: &Gradient) {
        self.record(EngineOp::StrokeGradient(gradient.clone()));
    }

    fn set_fill_pattern(
        &mut self,
        image: Option<&Rc<ImageBuf>>,
        transform: Affine,
        filter: ImageFilter,
    ) {
        self.record(EngineOp::FillPattern {
            image: image.map(|image| (image.width(), image.height())),
            transform,
            filter,
        });
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.record(EngineOp::StrokeWidth(width));
    }

    fn set_stroke_cap(&mut self, cap: LineCap) {
        self.record(EngineOp::StrokeCap(cap));
    }

    fn set_stroke_join(&mut self, join: LineJoin) {
        self.record(EngineOp::StrokeJoin(join));
    }

    fn set_stroke_miter_limit(&mut self, limit: f64) {
        self.record(EngineOp::MiterLimit(limit));
    }

    fn set_stroke_dashes(&mut self, offset: f64, lengths: &[f64]) {
        self.record(EngineOp::Dashes {
            offset,
            lengths: lengths.to_vec(),
        });
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.record(EngineOp::BlendMode(mode));
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.record(EngineOp::Opacity(opacity));
    }

    fn set_antialias(&mut self, antialias: bool) {
        self.record(EngineOp::Antialias(antialias));
    }

    fn translate(&mut self, offset: Vec2) {
        self.current.transform = self.current.transform * Affine::translate(offset);
        self.record(EngineOp::Translate(offset));
    }

    fn reset_transform(&mut self) {
        self.current.transform = Affine::IDENTITY;
        self.record(EngineOp::ResetTransform);
    }

    fn concat_transform(&mut self, transform: Affine) {
        self.current.transform = self.current.transform * transform;
        self.record(EngineOp::ConcatTransform(transform));
    }

    fn save(&mut self) {
        self.stack.push(self.current);
        self.record(EngineOp::Save);
    }

    fn restore(&mut self) -> Result<(), Error> {
        self.record(EngineOp::Restore);
        self.current = self
            .stack
            .pop()
            .ok_or_else(|| new_error(ErrorKind::StackUnbalance))?;
        Ok(())
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        let device = self.current.transform.transform_rect_bbox(rect);
        self.current.clip = self.current.clip.intersect(device);
        self.record(EngineOp::ClipToRect(rect));
    }

    fn begin_layer(&mut self) {
        self.layers += 1;
        self.record(EngineOp::BeginLayer);
    }

    fn begin_layer_with_effects(&mut self, effects: &LayerEffects) {
        self.layers += 1;
        self.record(EngineOp::BeginLayerWithEffects(effects.clone()));
    }

    fn end_layer(&mut self) -> Result<(), Error> {
        self.record(EngineOp::EndLayer);
        self.layers = self
            .layers
            .checked_sub(1)
            .ok_or_else(|| new_error(ErrorKind::StackUnbalance))?;
        Ok(())
    }

    fn draw_pixels(
        &mut self,
        raster: &Raster,
        dest: Rect,
        filter: ImageFilter,
    ) -> Result<(), Error> {
        if self.reject_pixels {
            let e: Box<dyn std::error::Error> = Box::new(PixelsRejected);
            return Err(e.into());
        }
        self.record(EngineOp::DrawPixels {
            width: raster.width,
            height: raster.height,
            format: raster.format,
            dest,
            filter,
        });
        Ok(())
    }

    fn device_clip_bounds(&self) -> Rect {
        self.current.clip
    }

    fn device_transform(&self) -> Affine {
        self.current.transform
    }

    fn draw_device_mask(&mut self, mask: &Rc<AlphaMask>, offset: Point) {
        self.record(EngineOp::DrawMask {
            width: mask.width,
            height: mask.height,
            offset,
        });
    }

    /// Every character advances by half the font size.
    fn measure_text(&mut self, text: &str, size: f64) -> f64 {
        self.record(EngineOp::MeasureText {
            text: text.to_owned(),
            size,
        });
        text.chars().count() as f64 * size * 0.5
    }
}

impl EngineFactory for RecordingEngine {
    /// Fails with `AllocationFailed` for an empty surface.
    fn create(width: u32, height: u32, alpha: bool) -> Result<RecordingEngine, Error> {
        if width == 0 || height == 0 {
            return Err(new_error(ErrorKind::AllocationFailed));
        }
        let mut engine = RecordingEngine::new(width, height);
        engine.alpha = alpha;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_follows_transform_stack() {
        let mut engine = RecordingEngine::new(100, 100);
        engine.save();
        engine.translate(Vec2::new(10.0, 20.0));
        engine.clip_to_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(engine.device_clip_bounds(), Rect::new(10.0, 20.0, 60.0, 70.0));
        assert_eq!(engine.device_transform(), Affine::translate((10.0, 20.0)));
        engine.restore().unwrap();
        assert_eq!(engine.device_clip_bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(engine.device_transform(), Affine::IDENTITY);
    }

    #[test]
    fn unbalanced_pairs_are_reported() {
        let mut engine = RecordingEngine::new(1, 1);
        let restored = engine.restore().unwrap_err();
        assert!(matches!(restored.kind(), ErrorKind::StackUnbalance));
        let ended = engine.end_layer().unwrap_err();
        assert!(matches!(ended.kind(), ErrorKind::StackUnbalance));
    }

    #[test]
    fn empty_surface_fails_allocation() {
        assert!(RecordingEngine::create(0, 10, true).is_err());
        let engine = RecordingEngine::create(4, 4, false).unwrap();
        assert!(!engine.has_alpha());
    }
}
