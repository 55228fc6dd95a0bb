// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-run vertical bounds in device space.

use paint_script::kurbo::{Affine, Point};
use paint_script::{FontMetrics, TextPaint};

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "only needed when std is not available")]
use core_maths::CoreFloat;

/// Baseline, top and bottom of the current glyph run, mapped to device pixels.
///
/// Values are computed on first use after [`set_up`](Self::set_up) and cached
/// until the next call. The top is floored and the bottom ceiled so that the
/// resulting box never cuts off glyph pixels.
#[derive(Clone, Debug, Default)]
pub struct BaselineMetrics {
    paint: Option<TextPaint>,
    transform: Affine,
    baseline_y: f32,
    font_metrics: Option<FontMetrics>,
    base: Option<i32>,
    top: Option<i32>,
    bottom: Option<i32>,
}

impl BaselineMetrics {
    /// Starts a new glyph run, discarding all cached values.
    pub fn set_up(&mut self, paint: &TextPaint, transform: Affine, baseline_y: f32) {
        self.paint = Some(paint.clone());
        self.transform = transform;
        self.baseline_y = baseline_y;
        self.font_metrics = None;
        self.base = None;
        self.top = None;
        self.bottom = None;
    }

    /// The paint of the current run, if a run has been set up.
    pub fn paint(&self) -> Option<&TextPaint> {
        self.paint.as_ref()
    }

    /// The transform of the current run.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Device y of the baseline, floored.
    pub fn base(&mut self) -> i32 {
        if let Some(base) = self.base {
            return base;
        }
        let base = to_pixel(self.map_y(self.baseline_y).floor());
        self.base = Some(base);
        base
    }

    /// Device y of the ascent line, floored.
    pub fn top(&mut self) -> i32 {
        if let Some(top) = self.top {
            return top;
        }
        let ascent = self.font_metrics().ascent;
        let top = to_pixel(self.map_y(self.baseline_y + ascent).floor());
        self.top = Some(top);
        top
    }

    /// Device y of the descent line, ceiled.
    pub fn bottom(&mut self) -> i32 {
        if let Some(bottom) = self.bottom {
            return bottom;
        }
        let descent = self.font_metrics().descent;
        let bottom = to_pixel(self.map_y(self.baseline_y + descent).ceil());
        self.bottom = Some(bottom);
        bottom
    }

    fn font_metrics(&mut self) -> FontMetrics {
        let paint = self.paint.as_ref();
        *self
            .font_metrics
            .get_or_insert_with(|| paint.map(TextPaint::metrics).unwrap_or_default())
    }

    fn map_y(&self, y: f32) -> f64 {
        (self.transform * Point::new(0.0, f64::from(y))).y
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "device coordinates are well inside the i32 range"
)]
fn to_pixel(value: f64) -> i32 {
    value as i32
}
