// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replaying a [`Picture`] into a [`Canvas`].

use alloc::vec::Vec;

use crate::command::{DrawCommand, Picture, TextRun};
use crate::geometry::IntRect;
use crate::kurbo::{Affine, BezPath, Point, Rect};

/// Transform and clip in effect when a command is replayed.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DrawState {
    /// Composed transform from picture coordinates to device coordinates.
    pub transform: Affine,
    /// Device-space clip. Nothing outside it is visible.
    pub clip: IntRect,
}

impl DrawState {
    /// Creates a state with the given transform and device clip.
    pub fn new(transform: Affine, clip: IntRect) -> Self {
        Self { transform, clip }
    }

    fn clip_to(&mut self, rect: Rect) {
        let device = IntRect::round_out(self.transform.transform_rect_bbox(rect));
        self.clip = self.clip.intersect(&device).unwrap_or(IntRect::ZERO);
    }
}

/// Trait for types that can receive replayed drawing commands.
///
/// State commands (`Save`, `Restore`, `Concat`, `ClipRect`) are resolved by
/// [`Picture::playback`]; implementors only see drawing primitives, each with
/// the [`DrawState`] it is drawn under.
pub trait Canvas {
    /// Fill the whole clip.
    fn draw_paint(&mut self, state: &DrawState);
    /// Draw a set of points.
    fn draw_points(&mut self, points: &[Point], state: &DrawState);
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: &Rect, state: &DrawState);
    /// Fill a path.
    fn fill_path(&mut self, path: &BezPath, state: &DrawState);
    /// Stroke a path.
    fn stroke_path(&mut self, path: &BezPath, width: f64, state: &DrawState);
    /// Draw an image into `dest`.
    fn draw_image(&mut self, dest: &Rect, state: &DrawState);
    /// Draw a triangle mesh.
    fn draw_vertices(&mut self, vertices: &[Point], state: &DrawState);
    /// Draw a run of glyphs.
    fn draw_text(&mut self, run: &TextRun, state: &DrawState);
}

impl Picture {
    /// Replays every recorded command into `target`, starting from `initial`.
    ///
    /// A `Restore` without a matching `Save` is ignored.
    pub fn playback(&self, initial: DrawState, target: &mut impl Canvas) {
        let mut stack: Vec<DrawState> = Vec::new();
        let mut state = initial;
        for command in self.commands() {
            match command {
                DrawCommand::Save => stack.push(state),
                DrawCommand::Restore => match stack.pop() {
                    Some(saved) => state = saved,
                    None => log::warn!("ignoring restore without a matching save"),
                },
                DrawCommand::Concat(transform) => state.transform *= *transform,
                DrawCommand::ClipRect(rect) => state.clip_to(*rect),
                DrawCommand::DrawPaint => target.draw_paint(&state),
                DrawCommand::DrawPoints(points) => target.draw_points(points, &state),
                DrawCommand::FillRect(rect) => target.fill_rect(rect, &state),
                DrawCommand::FillPath(path) => target.fill_path(path, &state),
                DrawCommand::StrokePath(path, width) => target.stroke_path(path, *width, &state),
                DrawCommand::DrawImage(dest) => target.draw_image(dest, &state),
                DrawCommand::DrawVertices(vertices) => target.draw_vertices(vertices, &state),
                DrawCommand::DrawText(run) => target.draw_text(run, &state),
            }
        }
        if !stack.is_empty() {
            log::debug!("playback finished with {} unbalanced saves", stack.len());
        }
    }
}
