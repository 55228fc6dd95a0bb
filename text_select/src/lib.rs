// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text selection geometry over recorded paint scripts.
//!
//! Given a [`Picture`] that has already been laid out and recorded, this crate
//! answers the questions a selection UI asks without access to the layout
//! that produced it:
//!
//! - [`find_closest`]: the line box of the glyph nearest to a tap.
//! - [`build_selection`]: the [`Region`] covering every glyph between two
//!   selection handles, with word gaps on the same line filled in.
//! - [`extract_text`]: the characters drawn inside a region, with spaces
//!   inferred from glyph spacing and line changes.
//!
//! Each query is a single replay of the picture through a working area. Glyph
//! runs are reduced to per-glyph device rectangles whose vertical extent is
//! the run's line box (ascent to descent), so handles and regions produced by
//! one query are matched exactly by the others.
//!
//! The building blocks are public as well. A [`GlyphAccumulator`] receives the
//! glyph rectangles of a pass driven by [`replay()`], and [`NearestGlyphFinder`],
//! [`SelectionBuilder`] and [`TextExtractor`] are the accumulators behind the
//! three queries.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("text_select requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use paint_script;

mod accumulator;
mod builder;
mod closest;
mod extract;
mod metrics;
mod region;
mod replay;

#[cfg(test)]
mod testing;

pub use accumulator::GlyphAccumulator;
pub use builder::SelectionBuilder;
pub use closest::NearestGlyphFinder;
pub use extract::{ExtractOptions, ExtractedText, TextExtractor};
pub use metrics::BaselineMetrics;
pub use region::Region;
pub use replay::{TextCanvas, replay};

use paint_script::{IntRect, Picture};

/// Returns the line box of the glyph closest to `(x, y)`.
///
/// Only glyphs visible in `area` are considered. The point and the result are
/// in picture coordinates. Of several equally close glyphs the first drawn
/// wins. Returns `None` if no glyph is visible.
pub fn find_closest(picture: &Picture, area: IntRect, x: i32, y: i32) -> Option<IntRect> {
    log::debug!("find_closest area={area:?} x={x} y={y}");
    let mut finder = NearestGlyphFinder::new(x - area.left, y - area.top);
    replay(picture, area, &mut finder);
    finder
        .best_bounds()
        .map(|bounds| bounds.offset(area.left, area.top))
}

/// Adds the selection between the glyphs at `start` and `end` to `region`.
///
/// The handles are glyph line boxes as returned by [`find_closest`], in
/// picture coordinates, and may be given in either order. Both end glyphs are
/// included. Existing content of `region` is kept. If neither handle matches
/// a glyph visible in `area` the region is left unchanged.
pub fn build_selection(
    picture: &Picture,
    area: IntRect,
    start: IntRect,
    end: IntRect,
    region: &mut Region,
) {
    log::debug!("build_selection area={area:?} start={start:?} end={end:?}");
    region.translate(-area.left, -area.top);
    let mut builder = SelectionBuilder::new(
        start.offset(-area.left, -area.top),
        end.offset(-area.left, -area.top),
        region,
    );
    replay(picture, area, &mut builder);
    if !builder.matched() {
        log::debug!("no glyph matched the selection handles");
    }
    region.translate(area.left, area.top);
}

/// Returns the text drawn inside `region`, using the default [`ExtractOptions`].
///
/// The region is in picture coordinates. Only glyphs visible in `area` whose
/// line box lies entirely inside the region are read.
pub fn extract_text(picture: &Picture, area: IntRect, region: &Region) -> ExtractedText {
    extract_text_with_options(picture, area, region, &ExtractOptions::default())
}

/// Like [`extract_text`], with explicit spacing options.
pub fn extract_text_with_options(
    picture: &Picture,
    area: IntRect,
    region: &Region,
    options: &ExtractOptions,
) -> ExtractedText {
    log::debug!("extract_text area={area:?} bounds={:?}", region.bounds());
    let mut local = region.clone();
    local.translate(-area.left, -area.top);
    let mut extractor = TextExtractor::new(&local, *options);
    replay(picture, area, &mut extractor);
    extractor.finish()
}
