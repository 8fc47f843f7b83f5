// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine colors and the legacy 48-bit color.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color as the engine understands it.
///
/// This is a 32 bit RGBA value, alpha as the least significant byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Rgba32(u32),
}

impl Color {
    /// Create a color from a 32-bit rgba value (alpha as least significant byte).
    pub const fn rgba32(rgba: u32) -> Color {
        Color::Rgba32(rgba)
    }

    /// Create an opaque color from three 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgba8(r, g, b, 0xff)
    }

    /// Create a color from four 8-bit channels.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        let (r, g, b, a) = (r as u32, g as u32, b as u32, a as u32);
        Color::rgba32((r << 24) | (g << 16) | (b << 8) | a)
    }

    /// Create a color from a legacy packed value, alpha as the most
    /// significant byte.
    ///
    /// Effect colors and gradient ramp colors arrive in this layout.
    pub const fn from_argb32(argb: u32) -> Color {
        Color::rgba32(argb.rotate_left(8))
    }

    /// Convert a color value to a 32-bit rgba value.
    pub const fn as_rgba32(&self) -> u32 {
        match *self {
            Color::Rgba32(rgba) => rgba,
        }
    }

    /// Convert a color value to a legacy packed value, alpha most significant.
    pub const fn as_argb32(&self) -> u32 {
        self.as_rgba32().rotate_right(8)
    }

    /// Opaque white.
    pub const WHITE: Color = Color::rgba32(0xff_ff_ff_ff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgba32(0x00_00_00_ff);
}

/// A color as legacy callers specify it: three 16-bit channels, no alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyColor {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl LegacyColor {
    pub const fn new(red: u16, green: u16, blue: u16) -> LegacyColor {
        LegacyColor { red, green, blue }
    }

    /// Widen 8-bit channels to the legacy 16-bit form.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> LegacyColor {
        LegacyColor {
            red: (r as u16) << 8 | r as u16,
            green: (g as u16) << 8 | g as u16,
            blue: (b as u16) << 8 | b as u16,
        }
    }

    /// The engine color for this legacy color, always fully opaque.
    ///
    /// Only the high byte of each channel survives.
    pub const fn to_opaque(self) -> Color {
        Color::rgb8(
            (self.red >> 8) as u8,
            (self.green >> 8) as u8,
            (self.blue >> 8) as u8,
        )
    }
}
