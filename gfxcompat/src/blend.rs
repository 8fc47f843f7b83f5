// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping legacy raster operations and effect blend codes onto the
//! engine's compositing modes.
//!
//! Both mappings are total over closed enumerations. Raw legacy codes
//! enter through `RasterOp::from_code` and `EffectBlendMode::from_code`;
//! a code outside either table composites as source-over.

/// A compositing mode understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    Clear,
    Copy,
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    Xor,
    PlusLighter,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

macro_rules! legacy_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $code:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code,)*
        }

        impl $name {
            /// Look up a raw legacy code.
            pub fn from_code(code: u8) -> Option<$name> {
                match code {
                    $($code => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// The raw legacy code.
            pub const fn code(self) -> u8 {
                self as u8
            }
        }
    };
}

legacy_codes! {
    /// A legacy raster operation ("drawing function").
    ///
    /// The first sixteen are the classic bitwise raster ops; the
    /// `Blend*` family are Porter-Duff and separable blend operators.
    pub enum RasterOp {
        Clear = 0x00,
        And = 0x01,
        AndReverse = 0x02,
        Copy = 0x03,
        AndInverted = 0x04,
        Noop = 0x05,
        Xor = 0x06,
        Or = 0x07,
        Nor = 0x08,
        Equiv = 0x09,
        Invert = 0x0a,
        OrReverse = 0x0b,
        CopyInverted = 0x0c,
        OrInverted = 0x0d,
        Nand = 0x0e,
        Set = 0x0f,
        SrcBic = 0x10,
        NotSrcBic = 0x11,
        Blend = 0x12,
        AddPin = 0x13,
        AddOver = 0x14,
        SubPin = 0x15,
        AddMax = 0x17,
        SubOver = 0x18,
        AddMin = 0x19,
        BlendClear = 0x1a,
        BlendSrc = 0x1b,
        BlendDst = 0x1c,
        BlendSrcOver = 0x1d,
        BlendDstOver = 0x1e,
        BlendSrcIn = 0x1f,
        BlendDstIn = 0x20,
        BlendSrcOut = 0x21,
        BlendDstOut = 0x22,
        BlendSrcAtop = 0x23,
        BlendDstAtop = 0x24,
        BlendXor = 0x25,
        BlendPlus = 0x26,
        BlendMultiply = 0x27,
        BlendScreen = 0x28,
        BlendOverlay = 0x29,
        BlendDarken = 0x2a,
        BlendLighten = 0x2b,
        BlendDodge = 0x2c,
        BlendBurn = 0x2d,
        BlendHardLight = 0x2e,
        BlendSoftLight = 0x2f,
        BlendDifference = 0x30,
        BlendExclusion = 0x31,
    }
}

legacy_codes! {
    /// The blend mode attached to a single layer effect.
    pub enum EffectBlendMode {
        Normal = 0,
        Multiply = 1,
        Screen = 2,
        Overlay = 3,
        Darken = 4,
        Lighten = 5,
        ColorDodge = 6,
        ColorBurn = 7,
        HardLight = 8,
        SoftLight = 9,
        Difference = 10,
        Exclusion = 11,
        Hue = 12,
        Saturation = 13,
        Color = 14,
        Luminosity = 15,
    }
}

impl RasterOp {
    /// The engine mode this raster op composites with.
    ///
    /// Bitwise ops other than `Clear` and `Copy` have no compositing
    /// equivalent and draw source-over.
    pub fn blend_mode(self) -> BlendMode {
        match self {
            RasterOp::Clear | RasterOp::BlendClear => BlendMode::Clear,
            RasterOp::BlendSrc => BlendMode::Copy,
            // Legacy renderers clear for destination-only as well.
            RasterOp::BlendDst => BlendMode::Clear,
            RasterOp::Copy | RasterOp::BlendSrcOver => BlendMode::SourceOver,
            RasterOp::BlendDstOver => BlendMode::DestinationOver,
            RasterOp::BlendSrcIn => BlendMode::SourceIn,
            RasterOp::BlendDstIn => BlendMode::DestinationIn,
            RasterOp::BlendSrcOut => BlendMode::SourceOut,
            RasterOp::BlendDstOut => BlendMode::DestinationOut,
            RasterOp::BlendSrcAtop => BlendMode::SourceAtop,
            RasterOp::BlendDstAtop => BlendMode::DestinationAtop,
            RasterOp::BlendXor => BlendMode::Xor,
            RasterOp::BlendPlus => BlendMode::PlusLighter,
            RasterOp::BlendMultiply => BlendMode::Multiply,
            RasterOp::BlendScreen => BlendMode::Screen,
            RasterOp::BlendOverlay => BlendMode::Overlay,
            RasterOp::BlendDarken => BlendMode::Darken,
            RasterOp::BlendLighten => BlendMode::Lighten,
            RasterOp::BlendDodge => BlendMode::ColorDodge,
            RasterOp::BlendBurn => BlendMode::ColorBurn,
            RasterOp::BlendHardLight => BlendMode::HardLight,
            RasterOp::BlendSoftLight => BlendMode::SoftLight,
            RasterOp::BlendDifference => BlendMode::Difference,
            RasterOp::BlendExclusion => BlendMode::Exclusion,
            RasterOp::And
            | RasterOp::AndReverse
            | RasterOp::AndInverted
            | RasterOp::Noop
            | RasterOp::Xor
            | RasterOp::Or
            | RasterOp::Nor
            | RasterOp::Equiv
            | RasterOp::Invert
            | RasterOp::OrReverse
            | RasterOp::CopyInverted
            | RasterOp::OrInverted
            | RasterOp::Nand
            | RasterOp::Set
            | RasterOp::SrcBic
            | RasterOp::NotSrcBic
            | RasterOp::Blend
            | RasterOp::AddPin
            | RasterOp::AddOver
            | RasterOp::SubPin
            | RasterOp::AddMax
            | RasterOp::SubOver
            | RasterOp::AddMin => BlendMode::SourceOver,
        }
    }
}

impl EffectBlendMode {
    /// The engine mode a layer effect composites with.
    pub fn blend_mode(self) -> BlendMode {
        match self {
            EffectBlendMode::Normal => BlendMode::SourceOver,
            EffectBlendMode::Multiply => BlendMode::Multiply,
            EffectBlendMode::Screen => BlendMode::Screen,
            EffectBlendMode::Overlay => BlendMode::Overlay,
            EffectBlendMode::Darken => BlendMode::Darken,
            EffectBlendMode::Lighten => BlendMode::Lighten,
            EffectBlendMode::ColorDodge => BlendMode::ColorDodge,
            // Legacy output for burn and hard light is soft light. Kept for
            // visual parity until the intended targets are confirmed.
            EffectBlendMode::ColorBurn | EffectBlendMode::HardLight => BlendMode::SoftLight,
            EffectBlendMode::SoftLight => BlendMode::SoftLight,
            EffectBlendMode::Difference => BlendMode::Difference,
            EffectBlendMode::Exclusion => BlendMode::Exclusion,
            EffectBlendMode::Hue => BlendMode::Hue,
            EffectBlendMode::Saturation => BlendMode::Saturation,
            EffectBlendMode::Color => BlendMode::Color,
            EffectBlendMode::Luminosity => BlendMode::Luminosity,
        }
    }
}

/// Resolve a raw legacy raster-op code.
pub fn blend_mode_for_raster_op(code: u8) -> BlendMode {
    match RasterOp::from_code(code) {
        Some(op) => op.blend_mode(),
        None => {
            tracing::warn!(code, "unknown raster op, compositing source-over");
            BlendMode::SourceOver
        }
    }
}

/// Resolve a raw legacy effect blend code.
pub fn blend_mode_for_effect(code: u8) -> BlendMode {
    match EffectBlendMode::from_code(code) {
        Some(mode) => mode.blend_mode(),
        None => {
            tracing::warn!(code, "unknown effect blend mode, compositing source-over");
            BlendMode::SourceOver
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=u8::MAX {
            if let Some(op) = RasterOp::from_code(code) {
                assert_eq!(op.code(), code);
            }
            if let Some(mode) = EffectBlendMode::from_code(code) {
                assert_eq!(mode.code(), code);
            }
        }
        assert_eq!(RasterOp::from_code(0x16), None);
        assert_eq!(EffectBlendMode::from_code(16), None);
    }

    #[test]
    fn raster_ops_are_stable() {
        for code in 0..=u8::MAX {
            assert_eq!(blend_mode_for_raster_op(code), blend_mode_for_raster_op(code));
        }
    }

    #[test]
    fn raster_op_table() {
        assert_eq!(RasterOp::Clear.blend_mode(), BlendMode::Clear);
        assert_eq!(RasterOp::Copy.blend_mode(), BlendMode::SourceOver);
        assert_eq!(RasterOp::BlendSrc.blend_mode(), BlendMode::Copy);
        assert_eq!(RasterOp::BlendDst.blend_mode(), BlendMode::Clear);
        assert_eq!(RasterOp::BlendPlus.blend_mode(), BlendMode::PlusLighter);
        assert_eq!(RasterOp::BlendDodge.blend_mode(), BlendMode::ColorDodge);
        assert_eq!(RasterOp::BlendExclusion.blend_mode(), BlendMode::Exclusion);
        assert_eq!(RasterOp::Xor.blend_mode(), BlendMode::SourceOver);
        assert_eq!(RasterOp::BlendXor.blend_mode(), BlendMode::Xor);
    }

    #[test]
    fn effect_table() {
        assert_eq!(EffectBlendMode::Normal.blend_mode(), BlendMode::SourceOver);
        assert_eq!(EffectBlendMode::Luminosity.blend_mode(), BlendMode::Luminosity);
        assert_eq!(EffectBlendMode::ColorBurn.blend_mode(), BlendMode::SoftLight);
        assert_eq!(EffectBlendMode::HardLight.blend_mode(), BlendMode::SoftLight);
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(blend_mode_for_raster_op(0xff), BlendMode::SourceOver);
        assert_eq!(blend_mode_for_effect(200), BlendMode::SourceOver);
    }
}
