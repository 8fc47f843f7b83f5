// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy fill styles and the retained pattern image.

use kurbo::Affine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ImageFilter, IntPoint};

/// Legacy fill style.
///
/// Stipples have no engine counterpart; only `Tiled` with an image
/// changes the fill paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillStyle {
    #[default]
    Solid,
    Tiled,
    Stippled,
    OpaqueStippled,
}

/// A tiled fill: an image repeated from an origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern<I> {
    pub image: I,
    pub origin: IntPoint,
}

impl<I> Pattern<I> {
    pub fn new(image: I, origin: IntPoint) -> Pattern<I> {
        Pattern { image, origin }
    }

    /// The transform placing the first tile at the origin.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin)
    }

    /// Patterns are always sampled bilinearly.
    pub fn filter(&self) -> ImageFilter {
        ImageFilter::Bilinear
    }
}

/// The slot holding at most one retained pattern image.
///
/// Holding the image handle is what retains it; the handle is dropped,
/// and so released, exactly once when the slot is cleared or refilled.
#[derive(Debug)]
pub(crate) struct PatternSlot<I> {
    current: Option<Pattern<I>>,
}

impl<I> PatternSlot<I> {
    pub(crate) fn empty() -> PatternSlot<I> {
        PatternSlot { current: None }
    }

    /// Release the held image, if any.
    pub(crate) fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::trace!("pattern image released");
        }
    }

    /// Retain `pattern`, releasing the prior image first.
    pub(crate) fn replace(&mut self, pattern: Pattern<I>) {
        self.clear();
        self.current = Some(pattern);
    }

    pub(crate) fn get(&self) -> Option<&Pattern<I>> {
        self.current.as_ref()
    }
}
