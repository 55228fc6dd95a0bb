// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts for the tests: a synthetic fixed-pitch font with exactly
//! representable metrics, and a real face loaded with `skrifa`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use paint_script::kurbo::Rect;
use paint_script::{FontMetrics, FontSource, SkrifaFont, TextPaint};

/// Font size used throughout the tests.
///
/// At this size a glyph is 8 pixels wide, the ascent line is 8 pixels above
/// the baseline and the descent line 2 pixels below it. A space is 8 pixels
/// wide, so the word gap threshold is 6 pixels.
pub(crate) const SIZE: f32 = 10.0;

/// The glyph that maps to no character.
pub(crate) const NOTDEF: u32 = 0;

/// Glyph `n + 1` is the character with code point `n`. U+0020 has no ink.
#[derive(Debug)]
pub(crate) struct FixedFont;

impl FontSource for FixedFont {
    fn metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            ascent: -size * 0.8,
            descent: size * 0.2,
        }
    }

    fn advance_width(&self, _: u32, size: f32) -> f32 {
        size * 0.8
    }

    fn ink_bounds(&self, glyph_id: u32, size: f32) -> Option<Rect> {
        if self.glyph_to_char(glyph_id) == Some(' ') {
            return None;
        }
        let advance = f64::from(self.advance_width(glyph_id, size));
        let ascent = f64::from(self.metrics(size).ascent);
        Some(Rect::new(0.0, ascent, advance, 0.0))
    }

    fn glyph_to_char(&self, glyph_id: u32) -> Option<char> {
        glyph_id.checked_sub(1).and_then(char::from_u32)
    }

    fn char_to_glyph(&self, ch: char) -> Option<u32> {
        Some(ch as u32 + 1)
    }
}

pub(crate) fn paint() -> TextPaint {
    TextPaint::new(Arc::new(FixedFont), SIZE)
}

/// Glyph ids of `text` in [`FixedFont`].
pub(crate) fn glyphs(text: &str) -> Vec<u32> {
    text.chars()
        .filter_map(|ch| FixedFont.char_to_glyph(ch))
        .collect()
}

fn font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("assets")
        .join("dejavu_fonts")
}

/// DejaVu Sans Mono, read from the test assets.
pub(crate) fn dejavu_mono() -> SkrifaFont {
    let data = std::fs::read(font_dir().join("DejaVuSansMono.ttf")).unwrap();
    SkrifaFont::from_bytes(data, 0).unwrap()
}
