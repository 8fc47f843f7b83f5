// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel images and blitting them into a context.

use kurbo::{Affine, Rect, Vec2};

use crate::{new_error, Engine, Error, ErrorKind, GraphicsContext, ImageFilter, IntPoint, IntRect};

/// The layout of a 32-bit pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    /// Premultiplied alpha in the high byte.
    Argb,
    /// The high byte is ignored; every pixel is opaque.
    Xrgb,
}

impl RasterFormat {
    /// The format for an image with or without transparency.
    pub fn for_transparency(has_transparency: bool) -> RasterFormat {
        if has_transparency {
            RasterFormat::Argb
        } else {
            RasterFormat::Xrgb
        }
    }
}

/// A borrowed view of pixel data, as the engine draws it.
#[derive(Clone, Copy, Debug)]
pub struct Raster<'a> {
    pub width: u32,
    pub height: u32,
    /// Bytes from one row to the next.
    pub stride: usize,
    pub pixels: &'a [u8],
    pub format: RasterFormat,
}

/// An owned 32-bit pixel image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuf {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
    has_transparency: bool,
}

/// An image to blit: pixels plus how to place them.
#[derive(Clone, Copy, Debug)]
pub struct ImageDescriptor<'a> {
    pub bitmap: &'a ImageBuf,
    /// Applied in the image's own space, about the image's placed origin.
    pub transform: Option<Affine>,
    pub filter: ImageFilter,
}

impl ImageBuf {
    /// A zeroed image with tightly packed rows.
    pub fn new(width: u32, height: u32, has_transparency: bool) -> ImageBuf {
        let stride = width as usize * 4;
        ImageBuf {
            width,
            height,
            stride,
            pixels: vec![0; stride * height as usize],
            has_transparency,
        }
    }

    /// Wrap existing pixel data.
    ///
    /// Fails with `InvalidInput` when a row cannot hold `width` pixels or
    /// the buffer is shorter than `stride * height`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        stride: usize,
        pixels: Vec<u8>,
        has_transparency: bool,
    ) -> Result<ImageBuf, Error> {
        let row = (width as usize).checked_mul(4);
        let len = stride.checked_mul(height as usize);
        match (row, len) {
            (Some(row), Some(len)) if row <= stride && len <= pixels.len() => Ok(ImageBuf {
                width,
                height,
                stride,
                pixels,
                has_transparency,
            }),
            _ => Err(new_error(ErrorKind::InvalidInput)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_transparency(&self) -> bool {
        self.has_transparency
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The engine view of these pixels.
    pub fn raster(&self) -> Raster<'_> {
        Raster {
            width: self.width,
            height: self.height,
            stride: self.stride,
            pixels: &self.pixels,
            format: RasterFormat::for_transparency(self.has_transparency),
        }
    }
}

/// Where a blit lands: the clip and the rectangle receiving the whole raster.
///
/// The source rectangle `src` of a `width` by `height` raster is shown at
/// `dest`: the raster is offset so that `src`'s origin lands on `dest`,
/// and everything outside `src`'s extent is clipped away.
pub fn blit_placement(src: IntRect, dest: IntPoint, width: u32, height: u32) -> (Rect, Rect) {
    let clip = IntRect::new(dest.x, dest.y, src.width, src.height);
    let origin = Vec2::from(dest) - Vec2::from(src.origin());
    let size = (f64::from(width), f64::from(height));
    let placed = Rect::from_origin_size(origin.to_point(), size);
    (clip.into(), placed)
}

impl<E: Engine, P> GraphicsContext<E, P> {
    /// Draw the `src` part of an image with its origin at `dest`.
    ///
    /// The drawing happens under a saved state which is restored whether
    /// or not the engine accepts the pixels.
    pub fn draw_image(
        &mut self,
        image: &ImageDescriptor,
        src: IntRect,
        dest: IntPoint,
    ) -> Result<(), Error> {
        let raster = image.bitmap.raster();
        let (clip, placed) = blit_placement(src, dest, raster.width, raster.height);
        self.with_save(|gc| {
            let engine = gc.engine_mut();
            engine.clip_to_rect(clip);
            if let Some(transform) = image.transform {
                let origin = placed.origin().to_vec2();
                engine.concat_transform(
                    Affine::translate(origin) * transform * Affine::translate(-origin),
                );
            }
            engine.draw_pixels(&raster, placed, image.filter)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffer_must_fit() {
        assert!(ImageBuf::from_pixels(2, 2, 8, vec![0; 16], true).is_ok());
        assert!(ImageBuf::from_pixels(2, 2, 8, vec![0; 15], true).is_err());
        assert!(ImageBuf::from_pixels(3, 1, 8, vec![0; 16], true).is_err());
        assert!(ImageBuf::from_pixels(1, 2, 16, vec![0; 32], false).is_ok());
    }

    #[test]
    fn format_follows_transparency() {
        assert_eq!(ImageBuf::new(1, 1, true).raster().format, RasterFormat::Argb);
        assert_eq!(ImageBuf::new(1, 1, false).raster().format, RasterFormat::Xrgb);
    }

    #[test]
    fn placement_offsets_by_source_origin() {
        let (clip, placed) =
            blit_placement(IntRect::new(5, 10, 20, 30), IntPoint::new(100, 200), 64, 48);
        assert_eq!(clip, Rect::new(100.0, 200.0, 120.0, 230.0));
        assert_eq!(placed, Rect::new(95.0, 190.0, 159.0, 238.0));
    }
}
