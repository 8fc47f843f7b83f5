// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graphics context and its drawing state.

use kurbo::{Affine, BezPath, Vec2};

use crate::fill::{Pattern, PatternSlot};
use crate::util::{DEFAULT_MITER_LIMIT, SURFACE_DEPTH};
use crate::{
    blend_mode_for_raster_op, new_error, AlphaMask, BitmapEffects, CapStyle, Engine,
    EngineFactory, Error, ErrorKind, FillStyle, GradientFill, ImageFilter, IntPoint, IntRect,
    JoinStyle, LegacyColor, LineStyle, NullPlatform, RasterOp, RoundInto, ScreenColors,
};

/// The kind of surface a context draws on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContextType {
    Screen,
}

/// Legacy rendering quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quality {
    /// Aliased drawing.
    #[default]
    Normal,
    /// Antialiased drawing.
    Smooth,
}

/// Runs legacy drawing calls on an engine.
///
/// The context owns its engine handle. Engines whose handles are shared
/// by reference count can be wrapped with [`GraphicsContext::from_shared`].
///
/// A context is single-threaded: it is neither `Send` nor `Sync` when its
/// engine or platform is not, and it does no locking of its own.
pub struct GraphicsContext<E: Engine, P = NullPlatform> {
    // Declared first so the pattern image is released before the engine.
    pattern: PatternSlot<E::Image>,
    engine: E,
    platform: P,
    state: CachedState,
}

/// The values a legacy caller can read back.
#[derive(Clone, Copy, Debug)]
struct CachedState {
    clip: IntRect,
    function: u8,
    opacity: u8,
}

impl<E: Engine, P> GraphicsContext<E, P> {
    /// Wrap an engine.
    ///
    /// The cached clip starts as the engine's device clip, the function
    /// as copy and the opacity as fully opaque.
    pub fn new(engine: E, platform: P) -> GraphicsContext<E, P> {
        let clip = engine.device_clip_bounds().round_into();
        GraphicsContext {
            pattern: PatternSlot::empty(),
            engine,
            platform,
            state: CachedState {
                clip,
                function: RasterOp::Copy.code(),
                opacity: u8::MAX,
            },
        }
    }

    /// Wrap an engine handle that stays shared with the caller.
    pub fn from_shared(engine: &E, platform: P) -> GraphicsContext<E, P>
    where
        E: Clone,
    {
        GraphicsContext::new(engine.clone(), platform)
    }

    /// Allocate a `width` by `height` pixel surface and a context on it.
    ///
    /// The new surface starts with the legacy miter limit.
    pub fn with_size(
        width: u32,
        height: u32,
        alpha: bool,
        platform: P,
    ) -> Result<GraphicsContext<E, P>, Error>
    where
        E: EngineFactory,
    {
        let engine = E::create(width, height, alpha)?;
        let mut gc = GraphicsContext::new(engine, platform);
        gc.state.clip = IntRect::new(0, 0, width, height);
        gc.engine.set_stroke_miter_limit(DEFAULT_MITER_LIMIT);
        Ok(gc)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Report any failure the engine deferred.
    pub fn status(&mut self) -> Result<(), Error> {
        self.engine.status()
    }

    pub fn context_type(&self) -> ContextType {
        ContextType::Screen
    }

    /// Bits per pixel of the surface.
    pub fn depth(&self) -> u16 {
        SURFACE_DEPTH
    }

    /// Intersect the clip with `clip`.
    ///
    /// The clip can only shrink; it widens again when a saved state is
    /// restored.
    pub fn set_clip(&mut self, clip: IntRect) {
        self.state.clip = clip;
        self.engine.clip_to_rect(clip.into());
    }

    /// The clip most recently set.
    pub fn clip(&self) -> IntRect {
        self.state.clip
    }

    /// Has no effect: the engine cannot widen a clip in place.
    pub fn clear_clip(&mut self) {}

    /// Scroll the drawing so that `origin` appears at the top left.
    pub fn set_origin(&mut self, origin: IntPoint) {
        self.engine.translate(-Vec2::from(origin));
    }

    pub fn clear_origin(&mut self) {
        self.engine.reset_transform();
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.engine.set_antialias(quality == Quality::Smooth);
    }

    /// Set the legacy drawing function from a raw raster-op code.
    ///
    /// The code is kept as given and returned by [`function`](Self::function);
    /// unknown codes composite as source-over.
    pub fn set_function(&mut self, code: u8) {
        self.state.function = code;
        self.engine.set_blend_mode(blend_mode_for_raster_op(code));
    }

    pub fn function(&self) -> u8 {
        self.state.function
    }

    /// Set the opacity, from 0 (transparent) to 255 (opaque).
    pub fn set_opacity(&mut self, opacity: u8) {
        self.state.opacity = opacity;
        self.engine.set_opacity(f64::from(opacity) / 255.0);
    }

    pub fn opacity(&self) -> u8 {
        self.state.opacity
    }

    /// Set the fill and stroke color.
    ///
    /// Legacy colors have no alpha; both paints become fully opaque.
    pub fn set_foreground(&mut self, color: LegacyColor) {
        let color = color.to_opaque();
        self.engine.set_fill_color(color);
        self.engine.set_stroke_color(color);
    }

    /// Has no effect: nothing is painted in the background color.
    pub fn set_background(&mut self, _color: LegacyColor) {}

    /// Set the stroke from legacy line attributes.
    ///
    /// Width, cap and join always apply. Dashed line styles stroke solid
    /// and report `NotSupported`; use [`set_dashes`](Self::set_dashes) for
    /// an explicit dash pattern.
    pub fn set_line_attributes(
        &mut self,
        width: u16,
        style: LineStyle,
        cap: CapStyle,
        join: JoinStyle,
    ) -> Result<(), Error> {
        self.engine.set_stroke_width(f64::from(width));
        self.engine.set_stroke_cap(cap.into());
        self.engine.set_stroke_join(join.into());
        match style {
            LineStyle::Solid => Ok(()),
            LineStyle::OnOffDash | LineStyle::DoubleDash => {
                tracing::debug!(?style, "dashed line style drawn solid");
                Err(new_error(ErrorKind::NotSupported))
            }
        }
    }

    pub fn set_miter_limit(&mut self, limit: f64) {
        self.engine.set_stroke_miter_limit(limit);
    }

    /// Set the dash pattern from legacy byte lengths; empty strokes solid.
    pub fn set_dashes(&mut self, offset: u16, dashes: &[u8]) {
        let lengths: Vec<f64> = dashes.iter().map(|&d| f64::from(d)).collect();
        self.engine.set_stroke_dashes(f64::from(offset), &lengths);
    }

    /// Set the fill style.
    ///
    /// A tiled style with an image fills with that image repeated from
    /// `origin`, and the context retains the image until the style changes
    /// again. Every other combination removes the pattern.
    pub fn set_fill_style(&mut self, style: FillStyle, image: Option<E::Image>, origin: IntPoint) {
        self.pattern.clear();
        match image {
            Some(image) if style == FillStyle::Tiled => {
                let pattern = Pattern::new(image, origin);
                self.engine.set_fill_pattern(
                    Some(&pattern.image),
                    pattern.transform(),
                    pattern.filter(),
                );
                tracing::trace!(x = origin.x, y = origin.y, "pattern image retained");
                self.pattern.replace(pattern);
            }
            _ => self
                .engine
                .set_fill_pattern(None, Affine::IDENTITY, ImageFilter::Nearest),
        }
    }

    /// The current fill style, with the retained pattern image if any.
    pub fn fill_style(&self) -> (FillStyle, Option<&E::Image>, IntPoint) {
        match self.pattern.get() {
            Some(pattern) => (FillStyle::Tiled, Some(&pattern.image), pattern.origin),
            None => (FillStyle::Solid, None, IntPoint::ZERO),
        }
    }

    /// Paint fills and strokes with a gradient.
    ///
    /// A gradient of kind `None` leaves the paints unchanged.
    pub fn set_gradient(&mut self, gradient: &GradientFill) {
        match gradient.resolve() {
            Some(resolved) => {
                self.engine.set_fill_gradient(&resolved);
                self.engine.set_stroke_gradient(&resolved);
            }
            None => tracing::debug!("gradient kind none ignored"),
        }
    }

    /// Run `f` between a save and a restore of the drawing state.
    ///
    /// The state is restored even when `f` fails; `f`'s error takes
    /// precedence over a failed restore.
    pub fn with_save<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let saved = self.state;
        self.engine.save();
        let result = f(self);
        let restored = self.engine.restore();
        self.state = saved;
        let value = result?;
        restored?;
        Ok(value)
    }

    /// Open a plain compositing layer.
    ///
    /// Group and non-group layers are the same to the engine.
    pub fn begin(&mut self, _group: bool) {
        tracing::trace!("begin layer");
        self.engine.begin_layer();
    }

    /// Open a layer that is composited with `effects` when it ends.
    ///
    /// `shape` is the legacy object's bounds; the engine derives the
    /// effect extent from what is drawn, so it is not forwarded.
    pub fn begin_with_effects(&mut self, effects: &BitmapEffects, _shape: IntRect) {
        let resolved = effects.resolve();
        tracing::trace!(mask = effects.mask, "begin layer with effects");
        self.engine.begin_layer_with_effects(&resolved);
    }

    /// Close the innermost layer.
    pub fn end(&mut self) -> Result<(), Error> {
        tracing::trace!("end layer");
        self.engine.end_layer()
    }

    /// Run `f` inside a layer with `effects`.
    ///
    /// The layer is closed even when `f` fails.
    pub fn with_effects<T>(
        &mut self,
        effects: &BitmapEffects,
        shape: IntRect,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.begin_with_effects(effects, shape);
        let result = f(self);
        let ended = self.end();
        let value = result?;
        ended?;
        Ok(value)
    }

    /// Has no effect.
    pub fn set_print_mode(&mut self) {}

    /// Always succeeds; the surface has no separate opaque mode.
    pub fn change_opaque(&mut self, _opaque: bool) -> bool {
        true
    }

    /// Has no effect: fonts are chosen per call by `draw_text`.
    pub fn set_font(&mut self, _font: &crate::Font) {}

    /// Has no effect.
    pub fn draw_path(&mut self, _path: &BezPath) {}

    /// Has no effect.
    pub fn fill_path(&mut self, _path: &BezPath, _even_odd: bool) {}

    /// Has no effect: embedded pictures are not rendered.
    pub fn draw_picture(&mut self, _data: &[u8], _dest: IntRect, _crop: IntRect) {}

    /// Has no effect: embedded vector drawings are not rendered.
    pub fn draw_eps(&mut self, _data: &[u8], _dest: IntRect) {}

    /// Has no effect.
    pub fn draw_link(&mut self, _link: &str, _region: IntRect) {}

    /// Has no effect.
    pub fn clear(&mut self) {}

    /// Has no effect.
    pub fn clear_rect(&mut self, _rect: IntRect) {}

    /// Has no effect: window shapes are applied by the platform.
    pub fn apply_window_shape(&mut self, _mask: &AlphaMask, _width: u32, _height: u32) {}

    /// No mask region is ever computed.
    pub fn compute_mask_region(&mut self) -> Option<IntRect> {
        None
    }
}

impl<E: Engine, P: ScreenColors> GraphicsContext<E, P> {
    pub fn black(&self) -> LegacyColor {
        self.platform.black()
    }

    pub fn white(&self) -> LegacyColor {
        self.platform.white()
    }

    pub fn gray(&self) -> LegacyColor {
        self.platform.gray()
    }

    pub fn background(&self) -> LegacyColor {
        self.platform.background()
    }
}
