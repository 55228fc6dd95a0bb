// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use paint_script::kurbo::Affine;
use paint_script::{IntRect, TextPaint};

/// A strategy that consumes the glyph rectangles of a replay pass.
///
/// For every text command the replay calls [`set_up`](Self::set_up) once and
/// then [`on_glyph_rect`](Self::on_glyph_rect) for each visible glyph of the
/// run, in drawing order.
pub trait GlyphAccumulator {
    /// Starts a new glyph run drawn with `paint` under `transform`.
    fn set_up(&mut self, paint: &TextPaint, transform: Affine, baseline_y: f32);

    /// Receives the device-space ink bounds of one glyph.
    ///
    /// Returning `true` ends the replay pass.
    fn on_glyph_rect(&mut self, rect: IntRect, glyph_id: u32) -> bool;
}
