// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer effects: the legacy effect descriptor and its resolved form.
//!
//! A legacy [`BitmapEffects`] selects up to five effects with a bitmask.
//! [`BitmapEffects::resolve`] turns it into the [`LayerEffects`] handed to
//! the engine when a layer opens.

use std::f64::consts::PI;

use kurbo::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{blend_mode_for_effect, BlendMode, Color};

/// The five legacy effect kinds, in the order of their mask bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    OuterGlow,
    InnerGlow,
    ColorOverlay,
}

impl EffectKind {
    /// The bit selecting this kind in [`BitmapEffects::mask`].
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Where a glow starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlowSource {
    #[default]
    Edge,
    Center,
}

/// A flat color layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerEffect {
    pub color: Color,
    /// A raw legacy effect blend code.
    pub blend_mode: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlowEffect {
    pub color: Color,
    pub blend_mode: u8,
    pub size: u8,
    pub source: GlowSource,
}

/// A shadow cast at a fixed angle and distance.
///
/// Angle and distance are bytes in the legacy format: degrees and pixels
/// in the range 0 to 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShadowEffect {
    pub color: Color,
    pub blend_mode: u8,
    pub size: u8,
    pub angle: u8,
    pub distance: u8,
}

/// A legacy effect set, as stored on a drawing object.
///
/// Each effect is present iff its bit is set in `mask`; the slot of an
/// absent effect is ignored even when filled in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitmapEffects {
    pub mask: u8,
    pub drop_shadow: Option<ShadowEffect>,
    pub inner_shadow: Option<ShadowEffect>,
    pub outer_glow: Option<GlowEffect>,
    pub inner_glow: Option<GlowEffect>,
    pub color_overlay: Option<LayerEffect>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorOverlay {
    pub color: Color,
    pub blend_mode: BlendMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blend_mode: BlendMode,
    pub size: f64,
    /// The glow grows inward from the edge instead of outward from the center.
    pub inverted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blend_mode: BlendMode,
    pub size: f64,
    /// Whole-pixel offset of the shadow.
    pub offset: Vec2,
}

/// The effect parameters the engine applies when a layer closes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerEffects {
    pub color_overlay: Option<ColorOverlay>,
    pub inner_glow: Option<Glow>,
    pub inner_shadow: Option<Shadow>,
    pub outer_glow: Option<Glow>,
    pub drop_shadow: Option<Shadow>,
}

/// The pixel offset of a shadow cast at `angle` degrees, `distance` pixels away.
///
/// Each coordinate is rounded half up, `floor(0.5 + v)`, matching legacy
/// renderers to the pixel.
pub fn shadow_offset(angle: u8, distance: u8) -> Vec2 {
    let radians = f64::from(angle) * PI / 180.0;
    let distance = f64::from(distance);
    Vec2::new(
        (0.5 + distance * radians.cos()).floor(),
        (0.5 + distance * radians.sin()).floor(),
    )
}

impl BitmapEffects {
    /// An empty effect set.
    pub fn new() -> BitmapEffects {
        BitmapEffects::default()
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        self.mask & kind.bit() != 0
    }

    pub fn with_drop_shadow(mut self, shadow: ShadowEffect) -> BitmapEffects {
        self.mask |= EffectKind::DropShadow.bit();
        self.drop_shadow = Some(shadow);
        self
    }

    pub fn with_inner_shadow(mut self, shadow: ShadowEffect) -> BitmapEffects {
        self.mask |= EffectKind::InnerShadow.bit();
        self.inner_shadow = Some(shadow);
        self
    }

    pub fn with_outer_glow(mut self, glow: GlowEffect) -> BitmapEffects {
        self.mask |= EffectKind::OuterGlow.bit();
        self.outer_glow = Some(glow);
        self
    }

    pub fn with_inner_glow(mut self, glow: GlowEffect) -> BitmapEffects {
        self.mask |= EffectKind::InnerGlow.bit();
        self.inner_glow = Some(glow);
        self
    }

    pub fn with_color_overlay(mut self, layer: LayerEffect) -> BitmapEffects {
        self.mask |= EffectKind::ColorOverlay.bit();
        self.color_overlay = Some(layer);
        self
    }

    /// Resolve the selected effects into engine parameters.
    ///
    /// A kind whose bit is set but whose slot is empty is skipped.
    pub fn resolve(&self) -> LayerEffects {
        LayerEffects {
            color_overlay: self
                .selected(EffectKind::ColorOverlay, self.color_overlay)
                .map(|layer| ColorOverlay {
                    color: layer.color,
                    blend_mode: blend_mode_for_effect(layer.blend_mode),
                }),
            inner_glow: self
                .selected(EffectKind::InnerGlow, self.inner_glow)
                .map(|glow| glow.resolve(glow.source == GlowSource::Edge)),
            inner_shadow: self
                .selected(EffectKind::InnerShadow, self.inner_shadow)
                .map(ShadowEffect::resolve),
            outer_glow: self
                .selected(EffectKind::OuterGlow, self.outer_glow)
                .map(|glow| glow.resolve(false)),
            drop_shadow: self
                .selected(EffectKind::DropShadow, self.drop_shadow)
                .map(ShadowEffect::resolve),
        }
    }

    fn selected<T>(&self, kind: EffectKind, slot: Option<T>) -> Option<T> {
        slot.filter(|_| self.has(kind))
    }
}

impl GlowEffect {
    fn resolve(self, inverted: bool) -> Glow {
        Glow {
            color: self.color,
            blend_mode: blend_mode_for_effect(self.blend_mode),
            size: f64::from(self.size),
            inverted,
        }
    }
}

impl ShadowEffect {
    fn resolve(self) -> Shadow {
        Shadow {
            color: self.color,
            blend_mode: blend_mode_for_effect(self.blend_mode),
            size: f64::from(self.size),
            offset: shadow_offset(self.angle, self.distance),
        }
    }
}

impl LayerEffects {
    pub fn is_empty(&self) -> bool {
        self == &LayerEffects::default()
    }
}
