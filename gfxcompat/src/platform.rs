// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Services the adapter consumes from the host platform.

use std::rc::Rc;

use kurbo::Affine;

use crate::{Font, IntRect, LegacyColor};

/// Rasterizes text into glyph coverage masks of type `M`.
pub trait GlyphRasterizer<M> {
    /// Rasterize `text` in `font`, clipped to the device rectangle `clip`.
    ///
    /// `text` is UTF-16 when the font is wide or `unicode_override` is
    /// set, and single-byte otherwise. `transform` maps glyph space to
    /// device space with only the sub-pixel part of the translation; the
    /// whole-pixel part is applied when the mask is composited.
    ///
    /// `None` means there is nothing to draw.
    fn text_mask(
        &self,
        font: &Font,
        text: &[u8],
        unicode_override: bool,
        clip: IntRect,
        transform: Affine,
    ) -> Option<M>;
}

/// The host's canonical colors.
pub trait ScreenColors {
    fn black(&self) -> LegacyColor;

    fn white(&self) -> LegacyColor;

    fn gray(&self) -> LegacyColor;

    fn background(&self) -> LegacyColor;
}

impl<M, T: GlyphRasterizer<M> + ?Sized> GlyphRasterizer<M> for Rc<T> {
    fn text_mask(
        &self,
        font: &Font,
        text: &[u8],
        unicode_override: bool,
        clip: IntRect,
        transform: Affine,
    ) -> Option<M> {
        (**self).text_mask(font, text, unicode_override, clip, transform)
    }
}

impl<T: ScreenColors + ?Sized> ScreenColors for Rc<T> {
    fn black(&self) -> LegacyColor {
        (**self).black()
    }

    fn white(&self) -> LegacyColor {
        (**self).white()
    }

    fn gray(&self) -> LegacyColor {
        (**self).gray()
    }

    fn background(&self) -> LegacyColor {
        (**self).background()
    }
}

/// A platform without fonts.
///
/// No text is ever rasterized, and the screen palette is the classic
/// black, white, mid gray and light gray background.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPlatform;

impl<M> GlyphRasterizer<M> for NullPlatform {
    fn text_mask(&self, _: &Font, _: &[u8], _: bool, _: IntRect, _: Affine) -> Option<M> {
        None
    }
}

impl ScreenColors for NullPlatform {
    fn black(&self) -> LegacyColor {
        LegacyColor::from_rgb8(0, 0, 0)
    }

    fn white(&self) -> LegacyColor {
        LegacyColor::from_rgb8(0xff, 0xff, 0xff)
    }

    fn gray(&self) -> LegacyColor {
        LegacyColor::from_rgb8(0x80, 0x80, 0x80)
    }

    fn background(&self) -> LegacyColor {
        LegacyColor::from_rgb8(0xdc, 0xdc, 0xdc)
    }
}
