// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the region covered by a selection.

use paint_script::kurbo::Affine;
use paint_script::{IntRect, TextPaint};

use crate::accumulator::GlyphAccumulator;
use crate::metrics::BaselineMetrics;
use crate::region::Region;

/// Adds the line boxes of every glyph between two selection handles to a
/// [`Region`].
///
/// A handle matches a glyph when the glyph's line box equals it exactly.
/// Each match toggles capturing, and the matching glyph itself is always
/// included, so the selection is inclusive at both ends regardless of which
/// handle comes first in drawing order. When both handles are the same
/// rectangle only the matching glyph is selected.
///
/// Consecutive selected glyphs on the same line are widened to meet each
/// other, so word gaps inside the selection are covered too.
#[derive(Debug)]
pub struct SelectionBuilder<'r> {
    metrics: BaselineMetrics,
    start: IntRect,
    end: IntRect,
    region: &'r mut Region,
    capturing: bool,
    matched: bool,
    previous: Option<(IntRect, i32)>,
}

impl<'r> SelectionBuilder<'r> {
    /// Creates a builder adding to `region`.
    ///
    /// `start`, `end` and the region must use the same coordinates as the
    /// glyph rectangles of the replay.
    pub fn new(start: IntRect, end: IntRect, region: &'r mut Region) -> Self {
        Self {
            metrics: BaselineMetrics::default(),
            start,
            end,
            region,
            capturing: false,
            matched: false,
            previous: None,
        }
    }

    /// Whether any glyph has matched one of the handles.
    pub fn matched(&self) -> bool {
        self.matched
    }

    fn join_previous(&self, full: &mut IntRect, base: i32) {
        let Some((previous, previous_base)) = self.previous else {
            return;
        };
        let same_line = (previous.top < base && previous.bottom >= base)
            || (previous_base <= full.bottom && previous_base > full.top);
        if !same_line {
            return;
        }
        if full.left > previous.right {
            full.left = previous.right;
        } else if full.right < previous.left {
            full.right = previous.left;
        }
    }
}

impl GlyphAccumulator for SelectionBuilder<'_> {
    fn set_up(&mut self, paint: &TextPaint, transform: Affine, baseline_y: f32) {
        self.metrics.set_up(paint, transform, baseline_y);
    }

    fn on_glyph_rect(&mut self, rect: IntRect, _glyph_id: u32) -> bool {
        let mut full = IntRect::new(
            rect.left,
            self.metrics.top(),
            rect.right,
            self.metrics.bottom(),
        );
        let mut was_capturing = false;
        if full == self.start || full == self.end {
            was_capturing = self.capturing;
            self.capturing = !self.capturing;
            self.matched = true;
        }
        if !(self.capturing || was_capturing) {
            return false;
        }
        let base = self.metrics.base();
        self.join_previous(&mut full, base);
        log::trace!("selecting {full:?}");
        self.region.union(full);
        self.previous = Some((full, base));
        if self.start == self.end {
            self.capturing = false;
        }
        false
    }
}
