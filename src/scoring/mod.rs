// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents and sentences get their numbers.
//!
//! Two score families live here. Documents get a TF-IDF sum restricted to query
//! terms. Sentences get the plain IDF sum of the query terms they contain, and
//! fall back to query term density only when two sentences tie exactly.

mod core;
pub mod idf;
pub mod ranking;

pub use core::*;
pub use idf::compute_idfs;
