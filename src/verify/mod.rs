// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: shape wrapper and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`TallPair`) that fixes the matrix shape once at the
//!    boundary, so no stage has to re-derive which sequence runs down the rows.
//!
//! 2. **Runtime contracts** that panic in debug builds when a stage hands back
//!    a malformed matrix or trace. Zero-cost in release, but catch bugs when
//!    tests run.

mod types;
pub mod contracts;

pub use types::*;
