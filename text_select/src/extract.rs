// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recovering the text drawn inside a region.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use paint_script::kurbo::{Affine, Vec2};
use paint_script::{IntRect, TextPaint};

use crate::accumulator::GlyphAccumulator;
use crate::metrics::BaselineMetrics;
use crate::region::Region;

/// Tuning for the spaces inferred between extracted glyphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtractOptions {
    /// Fraction of the width of a space character that a horizontal gap
    /// between glyphs must reach to be read as a word break.
    pub space_width_ratio: f32,
    /// A glyph whose line box starts below the previous one, and no more than
    /// this many pixels above its bottom, is read as the start of a new line.
    pub line_join_tolerance: i32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            space_width_ratio: 0.75,
            line_join_tolerance: 2,
        }
    }
}

/// Text recovered from a paint script, as UTF-16 code units.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct ExtractedText(Vec<u16>);

impl ExtractedText {
    /// The UTF-16 code units.
    pub fn as_utf16(&self) -> &[u16] {
        &self.0
    }

    /// Number of UTF-16 code units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no text was extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the text, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.0.iter().copied())
            .map(|ch| ch.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.0.iter().copied()) {
            fmt::Write::write_char(f, ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

/// Collects the characters of every glyph whose line box lies inside a
/// [`Region`], in drawing order.
///
/// A single space is inferred before a glyph that starts a new line or that
/// follows the previous glyph after a horizontal gap at least as wide as
/// [`ExtractOptions::space_width_ratio`] times the width of a space. The
/// space width is measured in the run's text units and mapped through the
/// x axis of the run transform, so the threshold is in device pixels like the
/// glyph boxes it is compared with. The text never starts with an inferred
/// space. Glyphs without a character mapping contribute nothing but still
/// count as the previous glyph.
#[derive(Debug)]
pub struct TextExtractor<'r> {
    metrics: BaselineMetrics,
    region: &'r Region,
    options: ExtractOptions,
    min_space_width: f64,
    previous: Option<IntRect>,
    text: Vec<u16>,
}

impl<'r> TextExtractor<'r> {
    /// Creates an extractor reading glyphs inside `region`.
    pub fn new(region: &'r Region, options: ExtractOptions) -> Self {
        Self {
            metrics: BaselineMetrics::default(),
            region,
            options,
            min_space_width: 0.0,
            previous: None,
            text: Vec::new(),
        }
    }

    /// Finishes extraction.
    pub fn finish(self) -> ExtractedText {
        ExtractedText(self.text)
    }

    fn starts_word(&self, previous: &IntRect, rect: &IntRect, top: i32) -> bool {
        let new_line =
            previous.top < top && previous.bottom < top + self.options.line_join_tolerance;
        let word_gap = previous.left < rect.left
            && f64::from(rect.left - previous.right) >= self.min_space_width;
        new_line || word_gap
    }
}

impl GlyphAccumulator for TextExtractor<'_> {
    fn set_up(&mut self, paint: &TextPaint, transform: Affine, baseline_y: f32) {
        self.metrics.set_up(paint, transform, baseline_y);
        let space = f64::from(paint.measure_text(" ") * self.options.space_width_ratio);
        let [a, b, ..] = transform.as_coeffs();
        self.min_space_width = space * Vec2::new(a, b).hypot();
    }

    fn on_glyph_rect(&mut self, rect: IntRect, glyph_id: u32) -> bool {
        let top = self.metrics.top();
        let full = IntRect::new(rect.left, top, rect.right, self.metrics.bottom());
        if !self.region.contains(&full) {
            log::trace!("skipping glyph {glyph_id} at {full:?}");
            return false;
        }
        if let Some(previous) = &self.previous {
            if self.starts_word(previous, &rect, top) {
                log::trace!("inferring a space before glyph {glyph_id}");
                self.text.push(u16::from(b' '));
            }
        }
        let mapped = self.metrics.paint().and_then(|paint| paint.glyph_to_char(glyph_id));
        match mapped {
            Some(ch) => {
                let mut units = [0; 2];
                self.text.extend_from_slice(ch.encode_utf16(&mut units));
            }
            None => log::debug!("glyph {glyph_id} has no character mapping"),
        }
        self.previous = Some(full);
        false
    }
}
