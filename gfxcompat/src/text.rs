// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing and measuring legacy text.
//!
//! Glyphs are never rasterized here. The platform turns text into a
//! coverage mask for an exact sub-pixel position and the engine
//! composites that mask at a whole-pixel offset.

use kurbo::{Affine, Point, Rect, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::{decode_native, decode_utf16};
use crate::{Engine, GlyphRasterizer, GraphicsContext, IntPoint, IntRect, RoundInto};

/// A legacy font handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Font {
    pub name: String,
    pub size: u16,
    pub style: u16,
    /// Text in this font is always UTF-16.
    pub unicode: bool,
}

/// An 8-bit coverage mask in device space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

/// Where a run of text lands on the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    /// The device clip, rounded outward to whole pixels.
    pub clip: IntRect,
    /// The whole-pixel part of the device-space origin.
    pub offset: Point,
    /// The device transform carrying only the sub-pixel part of the origin.
    pub subpixel: Affine,
}

impl Font {
    pub fn new(name: impl Into<String>, size: u16) -> Font {
        Font {
            name: name.into(),
            size,
            style: 0,
            unicode: false,
        }
    }

    /// Decode legacy text in this font into a string.
    pub fn decode(&self, text: &[u8], unicode_override: bool) -> String {
        if self.unicode || unicode_override {
            decode_utf16(text)
        } else {
            decode_native(text)
        }
    }
}

impl TextPlacement {
    /// Place text drawn at user-space `origin`.
    pub fn new(clip_bounds: Rect, device: Affine, origin: IntPoint) -> TextPlacement {
        let (offset, fraction): (Point, Vec2) = (device * Point::from(origin)).round_into();
        let mut coeffs = device.as_coeffs();
        coeffs[4] = fraction.x;
        coeffs[5] = fraction.y;
        TextPlacement {
            clip: clip_bounds.round_into(),
            offset,
            subpixel: Affine::new(coeffs),
        }
    }
}

impl<E, P> GraphicsContext<E, P>
where
    E: Engine,
    P: GlyphRasterizer<E::Mask>,
{
    /// Draw legacy text with its baseline origin at `origin`.
    ///
    /// When the platform produces no mask nothing is drawn.
    pub fn draw_text(
        &mut self,
        origin: IntPoint,
        text: &[u8],
        font: &Font,
        unicode_override: bool,
    ) {
        let placement = TextPlacement::new(
            self.engine().device_clip_bounds(),
            self.engine().device_transform(),
            origin,
        );
        let mask = self.platform().text_mask(
            font,
            text,
            unicode_override,
            placement.clip,
            placement.subpixel,
        );
        match mask {
            Some(mask) => self.engine_mut().draw_device_mask(&mask, placement.offset),
            None => tracing::debug!(len = text.len(), "no glyph mask, text not drawn"),
        }
    }
}

impl<E: Engine, P> GraphicsContext<E, P> {
    /// The advance width of legacy text, truncated to whole pixels.
    pub fn text_width(&mut self, text: &[u8], font: &Font, unicode_override: bool) -> i32 {
        let text = font.decode(text, unicode_override);
        self.engine_mut().measure_text(&text, f64::from(font.size)) as i32
    }
}
