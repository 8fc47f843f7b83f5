// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill styles, the retained pattern image and gradients.

use std::rc::Rc;

use gfxcompat::kurbo::Affine;
use gfxcompat::{
    Color, EngineOp, FillStyle, GradientFill, GradientFunction, GradientKind, GradientQuality,
    GraphicsContext, ImageBuf, ImageFilter, IntPoint, NullPlatform, RampStop, RecordingEngine,
};

fn context() -> GraphicsContext<RecordingEngine> {
    GraphicsContext::new(RecordingEngine::new(100, 100), NullPlatform)
}

fn tile() -> Rc<ImageBuf> {
    Rc::new(ImageBuf::new(8, 4, true))
}

#[test]
fn tiled_pattern_is_retained_then_released_once() {
    let mut gc = context();
    let image = tile();
    gc.set_fill_style(FillStyle::Tiled, Some(image.clone()), IntPoint::new(3, -2));
    assert_eq!(Rc::strong_count(&image), 2);
    assert_eq!(
        gc.engine().ops(),
        &[EngineOp::FillPattern {
            image: Some((8, 4)),
            transform: Affine::translate((3.0, -2.0)),
            filter: ImageFilter::Bilinear,
        }]
    );

    let (style, retained, origin) = gc.fill_style();
    assert_eq!(style, FillStyle::Tiled);
    assert!(retained.is_some_and(|r| Rc::ptr_eq(r, &image)));
    assert_eq!(origin, IntPoint::new(3, -2));
    assert_eq!(Rc::strong_count(&image), 2);

    gc.set_fill_style(FillStyle::Solid, None, IntPoint::ZERO);
    assert_eq!(Rc::strong_count(&image), 1);
    assert_eq!(
        gc.engine().ops().last(),
        Some(&EngineOp::FillPattern {
            image: None,
            transform: Affine::IDENTITY,
            filter: ImageFilter::Nearest,
        })
    );
    assert_eq!(gc.fill_style().0, FillStyle::Solid);

    gc.set_fill_style(FillStyle::Solid, None, IntPoint::ZERO);
    assert_eq!(Rc::strong_count(&image), 1);
}

#[test]
fn replacing_a_pattern_releases_the_prior_image() {
    let mut gc = context();
    let first = tile();
    let second = tile();
    gc.set_fill_style(FillStyle::Tiled, Some(first.clone()), IntPoint::ZERO);
    gc.set_fill_style(FillStyle::Tiled, Some(second.clone()), IntPoint::ZERO);
    assert_eq!(Rc::strong_count(&first), 1);
    assert_eq!(Rc::strong_count(&second), 2);
    drop(gc);
    assert_eq!(Rc::strong_count(&second), 1);
}

#[test]
fn only_tiled_installs_a_pattern() {
    let mut gc = context();
    let image = tile();
    gc.set_fill_style(FillStyle::Stippled, Some(image.clone()), IntPoint::ZERO);
    gc.set_fill_style(FillStyle::OpaqueStippled, Some(image.clone()), IntPoint::ZERO);
    gc.set_fill_style(FillStyle::Tiled, None, IntPoint::ZERO);
    assert_eq!(Rc::strong_count(&image), 1);
    assert!(gc.fill_style().1.is_none());
    assert!(gc
        .engine()
        .ops()
        .iter()
        .all(|op| matches!(op, EngineOp::FillPattern { image: None, .. })));
}

fn gradient(kind: GradientKind) -> GradientFill {
    GradientFill {
        kind,
        quality: GradientQuality::Good,
        ramp: vec![
            RampStop {
                offset: 0,
                color: Color::from_argb32(0xff_ff_00_00),
            },
            RampStop {
                offset: u16::MAX,
                color: Color::from_argb32(0x80_00_00_ff),
            },
        ],
        origin: IntPoint::new(10, 10),
        primary: IntPoint::new(60, 10),
        secondary: IntPoint::new(10, 30),
        mirror: true,
        wrap: false,
        repeat: 2,
    }
}

#[test]
fn gradient_paints_fill_and_stroke() {
    let mut gc = context();
    gc.set_gradient(&gradient(GradientKind::Diamond));
    let ops = gc.engine().ops();
    assert_eq!(ops.len(), 2);
    let (EngineOp::FillGradient(fill), EngineOp::StrokeGradient(stroke)) = (&ops[0], &ops[1]) else {
        panic!("expected fill and stroke gradients, got {ops:?}");
    };
    assert_eq!(fill, stroke);
    assert_eq!(fill.function, GradientFunction::Sweep);
    assert_eq!(fill.filter, ImageFilter::Bilinear);
    assert_eq!(fill.stops[0].pos, 0.0);
    assert_eq!(fill.stops[1].pos, 1.0);
    assert_eq!(fill.stops[1].color, Color::rgba8(0, 0, 0xff, 0x80));
    assert_eq!(fill.transform, Affine::new([50.0, 0.0, 0.0, 20.0, 10.0, 10.0]));
    assert!(fill.mirror && !fill.wrap);
    assert_eq!(fill.repeat, 2);
}

#[test]
fn gradient_none_is_ignored() {
    let mut gc = context();
    gc.set_gradient(&gradient(GradientKind::None));
    assert!(gc.engine().ops().is_empty());
}
