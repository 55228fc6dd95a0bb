// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel regions built from unions of rectangles.

use alloc::vec::Vec;
use core::mem;

use paint_script::IntRect;
use smallvec::SmallVec;

/// A set of pixels described by non-overlapping rectangles.
///
/// The region is stored as horizontal bands sorted top to bottom. Each band
/// holds sorted x spans that neither overlap nor touch, and vertically
/// adjacent bands never carry identical spans. This form is canonical, so two
/// regions covering the same pixels compare equal.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Region {
    bands: Vec<Band>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct Band {
    top: i32,
    bottom: i32,
    spans: SmallVec<[Span; 4]>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Span {
    left: i32,
    right: i32,
}

impl Band {
    fn new(top: i32, bottom: i32, span: Span) -> Self {
        let mut spans = SmallVec::new();
        spans.push(span);
        Self { top, bottom, spans }
    }

    fn slice(&self, top: i32, bottom: i32) -> Self {
        Self {
            top,
            bottom,
            spans: self.spans.clone(),
        }
    }

    /// Merges `span` into the band, joining any spans it overlaps or touches.
    fn add_span(&mut self, span: Span) {
        let mut merged = span;
        let mut inserted = false;
        let mut spans = SmallVec::with_capacity(self.spans.len() + 1);
        for existing in self.spans.drain(..) {
            if existing.right < merged.left {
                spans.push(existing);
            } else if existing.left > merged.right {
                if !inserted {
                    spans.push(merged);
                    inserted = true;
                }
                spans.push(existing);
            } else {
                merged = Span {
                    left: existing.left.min(merged.left),
                    right: existing.right.max(merged.right),
                };
            }
        }
        if !inserted {
            spans.push(merged);
        }
        self.spans = spans;
    }

    fn covers(&self, left: i32, right: i32) -> bool {
        self.spans
            .iter()
            .any(|span| span.left <= left && span.right >= right)
    }
}

impl Region {
    /// Creates an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region covering exactly `rect`.
    pub fn from_rect(rect: IntRect) -> Self {
        let mut region = Self::new();
        region.union(rect);
        region
    }

    /// Whether the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Removes every rectangle from the region.
    pub fn clear(&mut self) {
        self.bands.clear();
    }

    /// Adds the pixels of `rect` to the region. Empty rectangles are ignored.
    pub fn union(&mut self, rect: IntRect) {
        if rect.is_empty() {
            return;
        }
        let span = Span {
            left: rect.left,
            right: rect.right,
        };
        let mut bands = Vec::with_capacity(self.bands.len() + 3);
        // Rows of `rect` above `cursor` have been emitted.
        let mut cursor = rect.top;
        for band in mem::take(&mut self.bands) {
            if band.bottom <= cursor || cursor >= rect.bottom {
                bands.push(band);
                continue;
            }
            if band.top >= rect.bottom {
                bands.push(Band::new(cursor, rect.bottom, span));
                cursor = rect.bottom;
                bands.push(band);
                continue;
            }
            if band.top < cursor {
                bands.push(band.slice(band.top, cursor));
            } else if band.top > cursor {
                bands.push(Band::new(cursor, band.top, span));
            }
            let overlap_top = band.top.max(cursor);
            let overlap_bottom = band.bottom.min(rect.bottom);
            let mut overlap = band.slice(overlap_top, overlap_bottom);
            overlap.add_span(span);
            bands.push(overlap);
            if band.bottom > rect.bottom {
                bands.push(band.slice(rect.bottom, band.bottom));
            }
            cursor = overlap_bottom;
        }
        if cursor < rect.bottom {
            bands.push(Band::new(cursor, rect.bottom, span));
        }
        self.bands = bands;
        self.coalesce();
    }

    /// Whether every pixel of `rect` is in the region.
    ///
    /// An empty rectangle is never contained.
    pub fn contains(&self, rect: &IntRect) -> bool {
        if rect.is_empty() {
            return false;
        }
        let mut y = rect.top;
        for band in &self.bands {
            if band.bottom <= y {
                continue;
            }
            if band.top > y || !band.covers(rect.left, rect.right) {
                return false;
            }
            y = band.bottom;
            if y >= rect.bottom {
                return true;
            }
        }
        false
    }

    /// Moves the whole region by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for band in &mut self.bands {
            band.top += dy;
            band.bottom += dy;
            for span in &mut band.spans {
                span.left += dx;
                span.right += dx;
            }
        }
    }

    /// The smallest rectangle enclosing the region, or `None` if it is empty.
    pub fn bounds(&self) -> Option<IntRect> {
        let bounds = self
            .rects()
            .fold(IntRect::ZERO, |bounds, rect| bounds.union(&rect));
        (!bounds.is_empty()).then_some(bounds)
    }

    /// The disjoint rectangles making up the region, top to bottom, left to right.
    pub fn rects(&self) -> impl Iterator<Item = IntRect> + '_ {
        self.bands.iter().flat_map(|band| {
            band.spans
                .iter()
                .map(move |span| IntRect::new(span.left, band.top, span.right, band.bottom))
        })
    }

    fn coalesce(&mut self) {
        let mut bands: Vec<Band> = Vec::with_capacity(self.bands.len());
        for band in mem::take(&mut self.bands) {
            match bands.last_mut() {
                Some(previous) if previous.bottom == band.top && previous.spans == band.spans => {
                    previous.bottom = band.bottom;
                }
                _ => bands.push(band),
            }
        }
        self.bands = bands;
    }
}

impl Extend<IntRect> for Region {
    fn extend<I: IntoIterator<Item = IntRect>>(&mut self, iter: I) {
        for rect in iter {
            self.union(rect);
        }
    }
}

impl FromIterator<IntRect> for Region {
    fn from_iter<I: IntoIterator<Item = IntRect>>(iter: I) -> Self {
        let mut region = Self::new();
        region.extend(iter);
        region
    }
}
