// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `text_select`.
//!
//! - The `util` module contains the synthetic font and the picture builders
//!   shared by the tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities are compiled once.
//! - Tests are grouped by query (`closest`, `selection`, `extract`). End to end flows that
//!   chain several queries go into `scenarios.rs`, and tests that load a real font file
//!   go into `skrifa.rs`.
//! - For test naming, put the topic of the test at the start of the name, for example
//!   `extract_gap_at_threshold` rather than `gap_at_threshold_extract`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod scenarios;
mod util;
