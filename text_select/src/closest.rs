// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding the glyph nearest to a point.

use paint_script::kurbo::Affine;
use paint_script::{IntRect, TextPaint};

use crate::accumulator::GlyphAccumulator;
use crate::metrics::BaselineMetrics;

/// Tracks the glyph whose line box centre is closest to a focus point.
///
/// Distances are squared Euclidean distances between integer centres. A
/// candidate only replaces the current best when strictly closer, so the
/// first of several equally close glyphs wins.
#[derive(Clone, Debug)]
pub struct NearestGlyphFinder {
    metrics: BaselineMetrics,
    focus_x: i32,
    focus_y: i32,
    best: Option<(IntRect, i64)>,
}

impl NearestGlyphFinder {
    /// Creates a finder for the focus point `(x, y)` in device coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            metrics: BaselineMetrics::default(),
            focus_x: x,
            focus_y: y,
            best: None,
        }
    }

    /// The line box of the closest glyph seen so far.
    pub fn best_bounds(&self) -> Option<IntRect> {
        self.best.map(|(bounds, _)| bounds)
    }

    /// Squared distance from the focus to the centre of the best glyph.
    pub fn best_distance(&self) -> Option<i64> {
        self.best.map(|(_, distance)| distance)
    }
}

impl GlyphAccumulator for NearestGlyphFinder {
    fn set_up(&mut self, paint: &TextPaint, transform: Affine, baseline_y: f32) {
        self.metrics.set_up(paint, transform, baseline_y);
    }

    fn on_glyph_rect(&mut self, rect: IntRect, _glyph_id: u32) -> bool {
        let top = self.metrics.top();
        let bottom = self.metrics.bottom();
        let full = IntRect::new(rect.left, top, rect.right, bottom);
        let dx = i64::from(full.center_x()) - i64::from(self.focus_x);
        let dy = i64::from(full.center_y()) - i64::from(self.focus_y);
        let distance = dx * dx + dy * dy;
        if self.best.is_none_or(|(_, best)| distance < best) {
            log::trace!("closer glyph {full:?} at squared distance {distance}");
            self.best = Some((full, distance));
        }
        false
    }
}
