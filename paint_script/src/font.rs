// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font interface consumed during replay.

use alloc::sync::Arc;
use core::fmt::Debug;

use crate::kurbo::Rect;

/// Vertical font metrics scaled to a font size.
///
/// Values are in a y-down coordinate system relative to the baseline, so the
/// ascent is normally negative and the descent positive.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the deepest glyphs.
    pub descent: f32,
}

/// Source of glyph metrics and character mappings for a single font face.
///
/// All lengths are in pixels at the requested size, y-down.
pub trait FontSource: Debug + Send + Sync {
    /// Line metrics at `size` pixels per em.
    fn metrics(&self, size: f32) -> FontMetrics;

    /// Horizontal advance of `glyph_id` at `size`.
    fn advance_width(&self, glyph_id: u32, size: f32) -> f32;

    /// Inked area of `glyph_id` at `size`, relative to the pen position.
    ///
    /// Returns `None` for glyphs that draw nothing, such as spaces.
    fn ink_bounds(&self, glyph_id: u32, size: f32) -> Option<Rect>;

    /// Maps a glyph back to the character it was shaped from.
    fn glyph_to_char(&self, glyph_id: u32) -> Option<char>;

    /// Maps a character to its nominal glyph.
    fn char_to_glyph(&self, ch: char) -> Option<u32>;

    /// Width of `text` at `size` when laid out glyph by glyph.
    ///
    /// Characters without a glyph contribute nothing.
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .filter_map(|ch| self.char_to_glyph(ch))
            .map(|glyph_id| self.advance_width(glyph_id, size))
            .sum()
    }
}

/// Font state attached to a recorded text run.
#[derive(Clone, Debug)]
pub struct TextPaint {
    /// The font face used to draw the run.
    pub font: Arc<dyn FontSource>,
    /// Font size in pixels per em.
    pub size: f32,
}

impl TextPaint {
    /// Creates a paint for `font` at `size`.
    pub fn new(font: Arc<dyn FontSource>, size: f32) -> Self {
        Self { font, size }
    }

    /// Line metrics of the font at this paint's size.
    pub fn metrics(&self) -> FontMetrics {
        self.font.metrics(self.size)
    }

    /// Width of `text` with this paint.
    pub fn measure_text(&self, text: &str) -> f32 {
        self.font.measure_text(text, self.size)
    }

    /// Maps a glyph back to its character with this paint's font.
    pub fn glyph_to_char(&self, glyph_id: u32) -> Option<char> {
        self.font.glyph_to_char(glyph_id)
    }
}
