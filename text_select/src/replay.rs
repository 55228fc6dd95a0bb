// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a [`GlyphAccumulator`] from a recorded [`Picture`].

use paint_script::kurbo::{Affine, BezPath, Point, Rect};
use paint_script::{Canvas, DrawState, IntRect, Picture, TextRun};

use crate::accumulator::GlyphAccumulator;

/// A [`Canvas`] that ignores everything except text.
///
/// Each text run is announced to the accumulator with
/// [`GlyphAccumulator::set_up`], followed by the device bounds of every glyph
/// that intersects the current clip.
#[derive(Debug)]
pub struct TextCanvas<'a, A> {
    accumulator: &'a mut A,
    finished: bool,
}

impl<'a, A: GlyphAccumulator> TextCanvas<'a, A> {
    /// Creates a canvas feeding `accumulator`.
    pub fn new(accumulator: &'a mut A) -> Self {
        Self {
            accumulator,
            finished: false,
        }
    }

    /// Whether the accumulator asked to stop.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<A: GlyphAccumulator> Canvas for TextCanvas<'_, A> {
    fn draw_paint(&mut self, _: &DrawState) {}

    fn draw_points(&mut self, _: &[Point], _: &DrawState) {}

    fn fill_rect(&mut self, _: &Rect, _: &DrawState) {}

    fn fill_path(&mut self, _: &BezPath, _: &DrawState) {}

    fn stroke_path(&mut self, _: &BezPath, _: f64, _: &DrawState) {}

    fn draw_image(&mut self, _: &Rect, _: &DrawState) {}

    fn draw_vertices(&mut self, _: &[Point], _: &DrawState) {}

    fn draw_text(&mut self, run: &TextRun, state: &DrawState) {
        if self.finished {
            return;
        }
        self.accumulator
            .set_up(&run.paint, state.transform, run.baseline_y);
        for (rect, glyph_id) in run.glyph_bounds(state.transform) {
            if !rect.intersects(&state.clip) {
                continue;
            }
            if self.accumulator.on_glyph_rect(rect, glyph_id) {
                self.finished = true;
                return;
            }
        }
    }
}

/// Replays `picture` into `accumulator` as seen through `area`.
///
/// Picture coordinates are shifted so that the top left corner of `area`
/// becomes the device origin, and glyphs outside `area` are not reported.
pub fn replay<A: GlyphAccumulator>(picture: &Picture, area: IntRect, accumulator: &mut A) {
    let initial = DrawState::new(
        Affine::translate((-f64::from(area.left), -f64::from(area.top))),
        IntRect::from_origin_size(0, 0, area.width(), area.height()),
    );
    let mut canvas = TextCanvas::new(accumulator);
    picture.playback(initial, &mut canvas);
    if canvas.is_finished() {
        log::trace!("replay ended early at the accumulator's request");
    }
}
