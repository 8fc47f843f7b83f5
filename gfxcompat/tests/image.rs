// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blitting images under a scoped clip.

use gfxcompat::kurbo::{Affine, Point, Rect};
use gfxcompat::{
    Engine, EngineOp, ErrorKind, GraphicsContext, ImageBuf, ImageDescriptor, ImageFilter,
    IntPoint, IntRect, NullPlatform, RasterFormat, RecordingEngine,
};

fn context() -> GraphicsContext<RecordingEngine> {
    GraphicsContext::new(RecordingEngine::new(200, 200), NullPlatform)
}

#[test]
fn blit_is_clipped_and_scoped() {
    let mut gc = context();
    let bitmap = ImageBuf::new(64, 48, false);
    let image = ImageDescriptor {
        bitmap: &bitmap,
        transform: None,
        filter: ImageFilter::Bilinear,
    };
    gc.draw_image(&image, IntRect::new(4, 8, 16, 16), IntPoint::new(100, 50))
        .unwrap();
    assert_eq!(
        gc.engine().ops(),
        &[
            EngineOp::Save,
            EngineOp::ClipToRect(Rect::new(100.0, 50.0, 116.0, 66.0)),
            EngineOp::DrawPixels {
                width: 64,
                height: 48,
                format: RasterFormat::Xrgb,
                dest: Rect::new(96.0, 42.0, 160.0, 90.0),
                filter: ImageFilter::Bilinear,
            },
            EngineOp::Restore,
        ]
    );
    assert_eq!(gc.engine().device_clip_bounds(), Rect::new(0.0, 0.0, 200.0, 200.0));
}

#[test]
fn transform_applies_about_the_placed_origin() {
    let mut gc = context();
    let bitmap = ImageBuf::new(10, 10, true);
    let image = ImageDescriptor {
        bitmap: &bitmap,
        transform: Some(Affine::scale(2.0)),
        filter: ImageFilter::Nearest,
    };
    gc.draw_image(&image, IntRect::new(0, 0, 10, 10), IntPoint::new(30, 40))
        .unwrap();
    let ops = gc.engine().ops();
    let EngineOp::ConcatTransform(transform) = ops[2] else {
        panic!("expected a transform, got {ops:?}");
    };
    // The placed origin stays put and the image grows away from it.
    assert_eq!(transform * Point::new(30.0, 40.0), Point::new(30.0, 40.0));
    assert_eq!(transform * Point::new(40.0, 50.0), Point::new(50.0, 60.0));
    assert!(matches!(
        ops[3],
        EngineOp::DrawPixels {
            format: RasterFormat::Argb,
            ..
        }
    ));
    assert_eq!(gc.engine().device_transform(), Affine::IDENTITY);
}

#[test]
fn state_is_restored_when_the_engine_fails() {
    let mut engine = RecordingEngine::new(50, 50);
    engine.reject_pixels();
    let mut gc = GraphicsContext::new(engine, NullPlatform);
    let bitmap = ImageBuf::new(4, 4, true);
    let image = ImageDescriptor {
        bitmap: &bitmap,
        transform: Some(Affine::rotate(1.0)),
        filter: ImageFilter::Nearest,
    };
    let err = gc
        .draw_image(&image, IntRect::new(0, 0, 4, 4), IntPoint::new(1, 1))
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::BackendError(_)));
    assert_eq!(gc.engine().save_depth(), 0);
    assert_eq!(gc.engine().ops().last(), Some(&EngineOp::Restore));
    assert_eq!(gc.engine().device_transform(), Affine::IDENTITY);
}
