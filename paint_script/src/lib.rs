// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint Script records drawing commands into an immutable [`Picture`] and
//! replays them into any [`Canvas`].
//!
//! Text runs carry their font state as a [`TextPaint`], so a replay can
//! compute where each glyph lands in device space ([`TextRun::glyph_bounds`])
//! without rasterizing anything. Fonts are reached through the [`FontSource`]
//! trait; [`SkrifaFont`] implements it for OpenType data.
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
compile_error!("paint_script requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko;
pub use peniko::kurbo;

mod command;
mod font;
mod geometry;
mod replay;
mod skrifa_font;

pub use command::{DrawCommand, GlyphPositions, Picture, PictureRecorder, TextRun};
pub use font::{FontMetrics, FontSource, TextPaint};
pub use geometry::IntRect;
pub use replay::{Canvas, DrawState};
pub use skrifa_font::{FontError, FontErrorKind, SkrifaFont};
