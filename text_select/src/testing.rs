// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts with exactly representable metrics for unit tests.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use paint_script::kurbo::Rect;
use paint_script::{FontMetrics, FontSource, TextPaint};

/// A fixed-pitch font where glyph ids are code points.
///
/// Every glyph advances by `4/5` of the size and inks its whole advance box
/// from the ascent line to the baseline, except U+0020 which has no ink.
/// Glyph 0 is inked but maps to no character.
#[derive(Debug, Default)]
pub(crate) struct MonoFont;

impl FontSource for MonoFont {
    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: -size * 4.0 / 5.0,
            descent: size / 5.0,
        }
    }

    fn advance_width(&self, _: u32, size: f32) -> f32 {
        size * 4.0 / 5.0
    }

    fn ink_bounds(&self, glyph_id: u32, size: f32) -> Option<Rect> {
        let advance = f64::from(self.advance_width(glyph_id, size));
        let ascent = f64::from(self.metrics(size).ascent);
        (glyph_id != ' ' as u32).then(|| Rect::new(0.0, ascent, advance, 0.0))
    }

    fn glyph_to_char(&self, glyph_id: u32) -> Option<char> {
        char::from_u32(glyph_id).filter(|ch| *ch != '\0')
    }

    fn char_to_glyph(&self, ch: char) -> Option<u32> {
        Some(ch as u32)
    }
}

pub(crate) fn mono_paint(size: f32) -> TextPaint {
    TextPaint::new(Arc::new(MonoFont), size)
}

/// [`MonoFont`] that counts how often its line metrics are requested.
#[derive(Debug, Default)]
pub(crate) struct CountingFont {
    pub(crate) metrics_calls: AtomicUsize,
}

impl CountingFont {
    pub(crate) fn paint(size: f32) -> (Arc<Self>, TextPaint) {
        let font = Arc::new(Self::default());
        let paint = TextPaint::new(font.clone(), size);
        (font, paint)
    }
}

impl FontSource for CountingFont {
    fn metrics(&self, size: f32) -> FontMetrics {
        self.metrics_calls.fetch_add(1, Ordering::Relaxed);
        MonoFont.metrics(size)
    }

    fn advance_width(&self, glyph_id: u32, size: f32) -> f32 {
        MonoFont.advance_width(glyph_id, size)
    }

    fn ink_bounds(&self, glyph_id: u32, size: f32) -> Option<Rect> {
        MonoFont.ink_bounds(glyph_id, size)
    }

    fn glyph_to_char(&self, glyph_id: u32) -> Option<char> {
        MonoFont.glyph_to_char(glyph_id)
    }

    fn char_to_glyph(&self, ch: char) -> Option<u32> {
        MonoFont.char_to_glyph(ch)
    }
}

/// Glyph ids for `text` in [`MonoFont`].
pub(crate) fn glyphs(text: &str) -> Vec<u32> {
    text.chars().map(|ch| ch as u32).collect()
}
