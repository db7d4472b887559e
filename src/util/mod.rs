// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small text helpers shared by the tokenizer and the CLI.

pub mod normalize;
