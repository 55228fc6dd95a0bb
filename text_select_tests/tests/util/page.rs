// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building test pictures.

use paint_script::{IntRect, Picture, PictureRecorder};
use text_select::Region;

use super::font::{glyphs, paint};

/// A working area that does not start at the origin, so that every query
/// exercises the translation into and out of area coordinates.
pub(crate) const AREA: IntRect = IntRect::new(-50, -40, 450, 460);

/// Line box of the glyph whose pen is at `left` on the line with baseline `y`.
pub(crate) fn line_box(left: i32, y: i32) -> IntRect {
    IntRect::new(left, y - 8, left + 8, y + 2)
}

/// A region large enough to contain every glyph in the tests.
pub(crate) fn everything() -> Region {
    Region::from_rect(IntRect::new(-1000, -1000, 1000, 1000))
}

/// Records text with the synthetic font.
#[derive(Debug, Default)]
pub(crate) struct Page {
    recorder: PictureRecorder,
}

impl Page {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Draws `text` with its first pen position at `(x, y)`.
    pub(crate) fn text(mut self, text: &str, x: i32, y: i32) -> Self {
        self.recorder
            .draw_text(&paint(), &glyphs(text), x as f32, y as f32);
        self
    }

    /// Draws raw glyph ids with their first pen position at `(x, y)`.
    pub(crate) fn glyph_ids(mut self, ids: &[u32], x: i32, y: i32) -> Self {
        self.recorder.draw_text(&paint(), ids, x as f32, y as f32);
        self
    }

    /// Draws one glyph per character of `text` at the given pen positions.
    pub(crate) fn positioned(mut self, text: &str, xs: &[f32], y: i32) -> Self {
        self.recorder
            .draw_pos_text_h(&paint(), &glyphs(text), xs, y as f32);
        self
    }

    /// Gives access to the recorder for commands other than text.
    pub(crate) fn with(mut self, record: impl FnOnce(&mut PictureRecorder)) -> Self {
        record(&mut self.recorder);
        self
    }

    pub(crate) fn finish(self) -> Picture {
        self.recorder.finish()
    }
}
