// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constants and helpers shared across the adapter.

/// The largest legacy ramp offset; it normalizes to 1.0.
pub const STOP_INT_MAX: u32 = u16::MAX as u32;

/// Bits per pixel of every surface the adapter draws on.
pub const SURFACE_DEPTH: u16 = 32;

/// The miter limit engines start with.
pub const DEFAULT_MITER_LIMIT: f64 = 10.0;

/// Decode single-byte legacy text.
///
/// Legacy native text is treated as ISO 8859-1, where every byte is the
/// code point of the same value.
pub fn decode_native(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decode wide legacy text: UTF-16 code units in native byte order.
///
/// An odd trailing byte is ignored and unpaired surrogates become U+FFFD.
pub fn decode_utf16(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
