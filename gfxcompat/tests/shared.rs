// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contexts driving one engine handle that they share with the caller.

use std::cell::RefCell;
use std::rc::Rc;

use gfxcompat::kurbo::{Affine, Point, Rect, Vec2};
use gfxcompat::{
    AlphaMask, BlendMode, Color, Engine, EngineOp, Error, Gradient, GraphicsContext, ImageBuf,
    ImageFilter, IntPoint, IntRect, LayerEffects, LegacyColor, LineCap, LineJoin, NullPlatform,
    PathOp, Raster, RecordingEngine,
};

/// A reference-counted handle to one recording engine.
#[derive(Clone)]
struct SharedEngine(Rc<RefCell<RecordingEngine>>);

impl Engine for SharedEngine {
    type Image = Rc<ImageBuf>;
    type Mask = Rc<AlphaMask>;

    fn begin_path(&mut self) {
        self.0.borrow_mut().begin_path();
    }

    fn add_path(&mut self, op: &PathOp) {
        self.0.borrow_mut().add_path(op);
    }

    fn stroke(&mut self) {
        self.0.borrow_mut().stroke();
    }

    fn fill(&mut self) {
        self.0.borrow_mut().fill();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.0.borrow_mut().set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.0.borrow_mut().set_stroke_color(color);
    }

    fn set_fill_gradient(&mut self, gradient: &Gradient) {
        self.0.borrow_mut().set_fill_gradient(gradient);
    }

    fn set_stroke_gradient(&mut self, gradient: &Gradient) {
        self.0.borrow_mut().set_stroke_gradient(gradient);
    }

    fn set_fill_pattern(
        &mut self,
        image: Option<&Rc<ImageBuf>>,
        transform: Affine,
        filter: ImageFilter,
    ) {
        self.0.borrow_mut().set_fill_pattern(image, transform, filter);
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.0.borrow_mut().set_stroke_width(width);
    }

    fn set_stroke_cap(&mut self, cap: LineCap) {
        self.0.borrow_mut().set_stroke_cap(cap);
    }

    fn set_stroke_join(&mut self, join: LineJoin) {
        self.0.borrow_mut().set_stroke_join(join);
    }

    fn set_stroke_miter_limit(&mut self, limit: f64) {
        self.0.borrow_mut().set_stroke_miter_limit(limit);
    }

    fn set_stroke_dashes(&mut self, offset: f64, lengths: &[f64]) {
        self.0.borrow_mut().set_stroke_dashes(offset, lengths);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.0.borrow_mut().set_blend_mode(mode);
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.0.borrow_mut().set_opacity(opacity);
    }

    fn set_antialias(&mut self, antialias: bool) {
        self.0.borrow_mut().set_antialias(antialias);
    }

    fn translate(&mut self, offset: Vec2) {
        self.0.borrow_mut().translate(offset);
    }

    fn reset_transform(&mut self) {
        self.0.borrow_mut().reset_transform();
    }

    fn concat_transform(&mut self, transform: Affine) {
        self.0.borrow_mut().concat_transform(transform);
    }

    fn save(&mut self) {
        self.0.borrow_mut().save();
    }

    fn restore(&mut self) -> Result<(), Error> {
        self.0.borrow_mut().restore()
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        self.0.borrow_mut().clip_to_rect(rect);
    }

    fn begin_layer(&mut self) {
        self.0.borrow_mut().begin_layer();
    }

    fn begin_layer_with_effects(&mut self, effects: &LayerEffects) {
        self.0.borrow_mut().begin_layer_with_effects(effects);
    }

    fn end_layer(&mut self) -> Result<(), Error> {
        self.0.borrow_mut().end_layer()
    }

    fn draw_pixels(
        &mut self,
        raster: &Raster,
        dest: Rect,
        filter: ImageFilter,
    ) -> Result<(), Error> {
        self.0.borrow_mut().draw_pixels(raster, dest, filter)
    }

    fn device_clip_bounds(&self) -> Rect {
        self.0.borrow().device_clip_bounds()
    }

    fn device_transform(&self) -> Affine {
        self.0.borrow().device_transform()
    }

    fn draw_device_mask(&mut self, mask: &Rc<AlphaMask>, offset: Point) {
        self.0.borrow_mut().draw_device_mask(mask, offset);
    }

    fn measure_text(&mut self, text: &str, size: f64) -> f64 {
        self.0.borrow_mut().measure_text(text, size)
    }
}

#[test]
fn shared_engine_handle() {
    let recorder = Rc::new(RefCell::new(RecordingEngine::new(40, 30)));
    let engine = SharedEngine(recorder.clone());
    let mut a = GraphicsContext::from_shared(&engine, NullPlatform);
    let mut b = GraphicsContext::from_shared(&engine, NullPlatform);
    drop(engine);
    assert_eq!(Rc::strong_count(&recorder), 3);

    a.set_foreground(LegacyColor::new(0xffff, 0, 0));
    a.draw_line(IntPoint::ZERO, IntPoint::new(4, 4));
    b.fill_rect(IntRect::new(1, 2, 3, 4));
    assert_eq!(b.clip(), IntRect::new(0, 0, 40, 30));

    assert_eq!(
        recorder.borrow().ops(),
        [
            EngineOp::FillColor(Color::rgb8(0xff, 0, 0)),
            EngineOp::StrokeColor(Color::rgb8(0xff, 0, 0)),
            EngineOp::BeginPath,
            EngineOp::AddPath(PathOp::Line(Point::ZERO, Point::new(4.0, 4.0))),
            EngineOp::Stroke,
            EngineOp::BeginPath,
            EngineOp::AddPath(PathOp::Rect(Rect::new(1.0, 2.0, 4.0, 6.0))),
            EngineOp::Fill,
        ]
    );

    drop(a);
    assert_eq!(Rc::strong_count(&recorder), 2);
    drop(b);
    assert_eq!(Rc::strong_count(&recorder), 1);
}

#[test]
fn state_changes_reach_every_context() {
    let recorder = Rc::new(RefCell::new(RecordingEngine::new(10, 10)));
    let engine = SharedEngine(recorder.clone());
    let mut a = GraphicsContext::from_shared(&engine, NullPlatform);
    let b = GraphicsContext::from_shared(&engine, NullPlatform);

    a.set_origin(IntPoint::new(3, 5));
    assert_eq!(b.engine().device_transform(), Affine::translate((-3.0, -5.0)));
    a.clear_origin();
    assert_eq!(b.engine().device_transform(), Affine::IDENTITY);
}
