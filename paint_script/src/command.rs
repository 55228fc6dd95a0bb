// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded drawing commands.
//!
//! Drawing calls are recorded into a [`PictureRecorder`] rather than being
//! executed immediately. The finished [`Picture`] is immutable and can be
//! replayed any number of times into a [`Canvas`](crate::Canvas), each replay
//! starting from a caller-chosen [`DrawState`](crate::DrawState).

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::font::TextPaint;
use crate::geometry::IntRect;
use crate::kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// How the glyphs of a [`TextRun`] are placed along the baseline.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphPositions {
    /// Glyphs start at `x` and follow each other by their advance widths.
    Advance {
        /// Pen position of the first glyph.
        x: f32,
    },
    /// One explicit x position per glyph.
    ///
    /// Glyphs without a matching position are not drawn.
    Horizontal(Vec<f32>),
}

/// A single text drawing operation: glyphs sharing a baseline and a paint.
#[derive(Clone, Debug)]
pub struct TextRun {
    /// Font and size.
    pub paint: TextPaint,
    /// Font-specific glyph identifiers, in drawing order.
    pub glyphs: Vec<u32>,
    /// Horizontal placement of the glyphs.
    pub positions: GlyphPositions,
    /// The y coordinate of the baseline, before the transform is applied.
    pub baseline_y: f32,
}

impl TextRun {
    /// Returns each glyph's pen position together with its identifier.
    pub fn pen_positions(&self) -> impl Iterator<Item = (f32, u32)> + '_ {
        let mut pen_x = match &self.positions {
            GlyphPositions::Advance { x } => *x,
            GlyphPositions::Horizontal(_) => 0.0,
        };
        self.glyphs
            .iter()
            .enumerate()
            .filter_map(move |(index, &glyph_id)| match &self.positions {
                GlyphPositions::Advance { .. } => {
                    let x = pen_x;
                    pen_x += self.paint.font.advance_width(glyph_id, self.paint.size);
                    Some((x, glyph_id))
                }
                GlyphPositions::Horizontal(xs) => xs.get(index).map(|x| (*x, glyph_id)),
            })
    }

    /// Device-space bounds of every inked glyph in the run.
    ///
    /// Each glyph's ink box is placed at its pen position on the baseline,
    /// mapped through `transform` and rounded out to whole pixels. Glyphs
    /// without ink are skipped.
    pub fn glyph_bounds(&self, transform: Affine) -> impl Iterator<Item = (IntRect, u32)> + '_ {
        let size = self.paint.size;
        let baseline_y = f64::from(self.baseline_y);
        self.pen_positions().filter_map(move |(x, glyph_id)| {
            let ink = self.paint.font.ink_bounds(glyph_id, size)?;
            let placed = ink + Vec2::new(f64::from(x), baseline_y);
            let device = IntRect::round_out(transform.transform_rect_bbox(placed));
            (!device.is_empty()).then_some((device, glyph_id))
        })
    }
}

/// A single recorded drawing command.
///
/// Only [`DrawCommand::DrawText`] carries the data needed by text queries;
/// the other primitives are recorded so that a replay sees the same sequence
/// a rasterizer would.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Push a copy of the current transform and clip.
    Save,
    /// Pop the most recently saved transform and clip.
    Restore,
    /// Pre-multiply the current transform.
    Concat(Affine),
    /// Intersect the clip with a rectangle in local coordinates.
    ClipRect(Rect),
    /// Fill the whole clip.
    DrawPaint,
    /// Draw a set of points.
    DrawPoints(Vec<Point>),
    /// Fill a rectangle.
    FillRect(Rect),
    /// Fill a path.
    FillPath(BezPath),
    /// Stroke a path with the given width.
    StrokePath(BezPath, f64),
    /// Draw an image into a destination rectangle.
    DrawImage(Rect),
    /// Draw a triangle mesh.
    DrawVertices(Vec<Point>),
    /// Draw a run of glyphs.
    DrawText(TextRun),
}

/// An immutable recording of drawing commands.
///
/// Cloning is cheap: the commands are shared.
#[derive(Clone, Debug, Default)]
pub struct Picture {
    commands: Arc<[DrawCommand]>,
}

impl Picture {
    /// The recorded commands, in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl From<Vec<DrawCommand>> for Picture {
    fn from(commands: Vec<DrawCommand>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

/// Records drawing commands into a [`Picture`].
///
/// The recorder exposes the usual immediate-mode drawing methods so that code
/// producing a picture reads like code painting directly.
#[derive(Default)]
pub struct PictureRecorder {
    commands: Vec<DrawCommand>,
}

impl PictureRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a copy of the current transform and clip.
    pub fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    /// Pop the most recently saved transform and clip.
    pub fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    /// Pre-multiply the current transform by `transform`.
    pub fn concat(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::Concat(transform));
    }

    /// Translate subsequent drawing by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.concat(Affine::translate((dx, dy)));
    }

    /// Scale subsequent drawing by `(sx, sy)`.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(Affine::scale_non_uniform(sx, sy));
    }

    /// Intersect the clip with `rect`, given in local coordinates.
    pub fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    /// Fill the whole clip.
    pub fn draw_paint(&mut self) {
        self.commands.push(DrawCommand::DrawPaint);
    }

    /// Draw a set of points.
    pub fn draw_points(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::DrawPoints(points.to_vec()));
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    /// Fill a path.
    pub fn fill_path(&mut self, path: &BezPath) {
        self.commands.push(DrawCommand::FillPath(path.clone()));
    }

    /// Stroke a path.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64) {
        self.commands
            .push(DrawCommand::StrokePath(path.clone(), width));
    }

    /// Draw an image into `dest`.
    pub fn draw_image(&mut self, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage(dest));
    }

    /// Draw a triangle mesh.
    pub fn draw_vertices(&mut self, vertices: &[Point]) {
        self.commands
            .push(DrawCommand::DrawVertices(vertices.to_vec()));
    }

    /// Draw `glyphs` starting at `(x, y)`, advancing by each glyph's width.
    pub fn draw_text(&mut self, paint: &TextPaint, glyphs: &[u32], x: f32, y: f32) {
        self.commands.push(DrawCommand::DrawText(TextRun {
            paint: paint.clone(),
            glyphs: glyphs.to_vec(),
            positions: GlyphPositions::Advance { x },
            baseline_y: y,
        }));
    }

    /// Draw `glyphs` at explicit x positions on a shared baseline `y`.
    pub fn draw_pos_text_h(&mut self, paint: &TextPaint, glyphs: &[u32], xpos: &[f32], y: f32) {
        self.commands.push(DrawCommand::DrawText(TextRun {
            paint: paint.clone(),
            glyphs: glyphs.to_vec(),
            positions: GlyphPositions::Horizontal(xpos.to_vec()),
            baseline_y: y,
        }));
    }

    /// Finishes recording.
    pub fn finish(self) -> Picture {
        self.commands.into()
    }
}

impl core::fmt::Debug for PictureRecorder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PictureRecorder")
            .field("commands", &self.commands.len())
            .finish()
    }
}
