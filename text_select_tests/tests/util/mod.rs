// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod font;
mod page;

pub(crate) use font::{NOTDEF, dejavu_mono, glyphs};
pub(crate) use page::{AREA, Page, everything, line_box};
