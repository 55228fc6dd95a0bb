// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FontSource`] backed by `skrifa`.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::font::{FontMetrics, FontSource};
use crate::kurbo::Rect;
use crate::peniko::FontData;

/// A font face loaded with `skrifa`.
///
/// The face is parsed once, at construction time, and everything queried
/// during replay is kept in font units: line metrics, advances, ink bounds
/// and both directions of the charmap. Queries scale these linearly by
/// `size / units_per_em`, which matches unhinted outlines at that size.
///
/// When several characters map to the same glyph, the lowest code point wins
/// in [`glyph_to_char`](FontSource::glyph_to_char).
pub struct SkrifaFont {
    font: FontData,
    units_per_em: f32,
    ascent: f32,
    descent: f32,
    glyphs: Vec<GlyphInfo>,
    charmap: HashMap<char, u32>,
    reverse_charmap: HashMap<u32, char>,
}

/// Per-glyph data in font units.
#[derive(Copy, Clone, Debug)]
struct GlyphInfo {
    advance: f32,
    ink: Option<Rect>,
}

impl SkrifaFont {
    /// Loads the face at `font.index` from `font.data`.
    pub fn new(font: FontData) -> Result<Self, FontError> {
        let font_ref = FontRef::from_index(font.data.as_ref(), font.index)
            .map_err(|_| FontError::new(FontErrorKind::InvalidData, font.index))?;
        if font_ref.head().is_err() || font_ref.hmtx().is_err() {
            return Err(FontError::new(FontErrorKind::MissingTable, font.index));
        }

        let location = LocationRef::default();
        let metrics = font_ref.metrics(Size::unscaled(), location);
        if metrics.units_per_em == 0 {
            return Err(FontError::new(FontErrorKind::InvalidData, font.index));
        }

        let glyph_metrics = font_ref.glyph_metrics(Size::unscaled(), location);
        let outlines = font_ref.outline_glyphs();
        let glyphs = (0..u32::from(metrics.glyph_count))
            .map(|glyph_id| {
                let glyph_id = GlyphId::new(glyph_id);
                let ink = outlines.get(glyph_id).and_then(|outline| {
                    let mut pen = BoundsPen::new();
                    let settings = DrawSettings::unhinted(Size::unscaled(), location);
                    outline.draw(settings, &mut pen).ok()?;
                    pen.bounds()
                });
                GlyphInfo {
                    advance: glyph_metrics.advance_width(glyph_id).unwrap_or_default(),
                    ink,
                }
            })
            .collect();

        let mut charmap = HashMap::new();
        let mut reverse_charmap = HashMap::new();
        for (code_point, glyph_id) in font_ref.charmap().mappings() {
            let glyph_id = glyph_id.to_u32();
            let Some(ch) = char::from_u32(code_point).filter(|_| glyph_id != 0) else {
                continue;
            };
            charmap.insert(ch, glyph_id);
            reverse_charmap
                .entry(glyph_id)
                .and_modify(|existing: &mut char| {
                    if ch < *existing {
                        *existing = ch;
                    }
                })
                .or_insert(ch);
        }
        log::debug!(
            "loaded font index {} with {} glyphs, {} of them mapped",
            font.index,
            metrics.glyph_count,
            reverse_charmap.len()
        );

        Ok(Self {
            font,
            units_per_em: f32::from(metrics.units_per_em),
            // skrifa reports y-up values.
            ascent: -metrics.ascent,
            descent: -metrics.descent,
            glyphs,
            charmap,
            reverse_charmap,
        })
    }

    /// Loads face `index` from an owned font file.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        Self::new(FontData::new(data.into(), index))
    }

    /// The underlying font data.
    pub fn font_data(&self) -> &FontData {
        &self.font
    }

    /// Number of glyphs in the face.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    fn scale(&self, size: f32) -> f32 {
        size / self.units_per_em
    }

    fn glyph(&self, glyph_id: u32) -> Option<&GlyphInfo> {
        self.glyphs.get(usize::try_from(glyph_id).ok()?)
    }
}

impl fmt::Debug for SkrifaFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkrifaFont")
            .field("index", &self.font.index)
            .field("units_per_em", &self.units_per_em)
            .field("glyphs", &self.glyphs.len())
            .field("mapped_glyphs", &self.reverse_charmap.len())
            .finish_non_exhaustive()
    }
}

impl FontSource for SkrifaFont {
    fn metrics(&self, size: f32) -> FontMetrics {
        let scale = self.scale(size);
        FontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
        }
    }

    fn advance_width(&self, glyph_id: u32, size: f32) -> f32 {
        self.glyph(glyph_id)
            .map_or(0.0, |glyph| glyph.advance * self.scale(size))
    }

    fn ink_bounds(&self, glyph_id: u32, size: f32) -> Option<Rect> {
        let ink = self.glyph(glyph_id)?.ink?;
        Some(ink.scale_from_origin(f64::from(self.scale(size))))
    }

    fn glyph_to_char(&self, glyph_id: u32) -> Option<char> {
        self.reverse_charmap.get(&glyph_id).copied()
    }

    fn char_to_glyph(&self, ch: char) -> Option<u32> {
        self.charmap.get(&ch).copied()
    }
}

/// Accumulates the control box of an outline, flipped to y-down.
struct BoundsPen {
    bbox: Rect,
}

impl BoundsPen {
    fn new() -> Self {
        Self {
            bbox: Rect {
                x0: f64::INFINITY,
                y0: f64::INFINITY,
                x1: f64::NEG_INFINITY,
                y1: f64::NEG_INFINITY,
            },
        }
    }

    fn add(&mut self, x: f32, y: f32) {
        self.bbox = self.bbox.union_pt((f64::from(x), -f64::from(y)));
    }

    fn bounds(&self) -> Option<Rect> {
        (self.bbox.x0 < self.bbox.x1 && self.bbox.y0 < self.bbox.y1).then_some(self.bbox)
    }
}

impl OutlinePen for BoundsPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.add(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.add(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.add(cx0, cy0);
        self.add(x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.add(cx0, cy0);
        self.add(cx1, cy1);
        self.add(x, y);
    }

    fn close(&mut self) {}
}

/// Error returned when a font cannot be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FontError {
    kind: FontErrorKind,
    index: u32,
}

impl FontError {
    fn new(kind: FontErrorKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// The category of this error.
    pub fn kind(&self) -> FontErrorKind {
        self.kind
    }

    /// The face index that was requested.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FontErrorKind::InvalidData => {
                write!(f, "font data does not contain a face at index {}", self.index)
            }
            FontErrorKind::MissingTable => write!(
                f,
                "font face {} is missing a table required for metrics",
                self.index
            ),
        }
    }
}

impl core::error::Error for FontError {}

/// The non-exhaustive category of a [`FontError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontErrorKind {
    /// The data could not be parsed as a font file, or the index is out of range.
    InvalidData,
    /// The face lacks `head` or `hmtx`.
    MissingTable,
}
