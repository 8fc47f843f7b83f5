// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy immediate-mode 2D drawing on a retained vector-graphics engine.
//!
//! A [`GraphicsContext`] takes the calls of an older drawing interface
//! (integer lines, arcs, pie slices, raster ops, stipple-era fill styles,
//! bitmap effects and pre-rasterized text) and turns them into paths,
//! paints, blend modes and effect layers on any [`Engine`].

pub use kurbo;

/// constants and text helpers shared by the modules
pub mod util;

mod blend;
mod color;
mod context;
mod conv;
mod draw;
mod effects;
mod engine;
mod error;
mod fill;
mod gradient;
mod image;
mod null_engine;
mod platform;
mod recording;
mod shapes;
mod text;

pub use crate::blend::*;
pub use crate::color::*;
pub use crate::context::*;
pub use crate::conv::*;
pub use crate::draw::*;
pub use crate::effects::*;
pub use crate::engine::*;
pub use crate::error::*;
pub use crate::fill::{FillStyle, Pattern};
pub use crate::gradient::*;
pub use crate::image::*;
pub use crate::null_engine::*;
pub use crate::platform::*;
pub use crate::recording::*;
pub use crate::shapes::*;
pub use crate::text::*;
