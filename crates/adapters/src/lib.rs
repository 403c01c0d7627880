// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for recipe conversion and build task execution

pub mod converter;
pub mod tasks;
pub mod traced;

pub use converter::{
    ConversionRequest, ConversionResult, ConvertError, CopyConverter, RecipeConverter, ResultMode,
};
pub use tasks::{GradleTaskExecutor, NoOpTaskExecutor, TaskError, TaskExecutor};
pub use traced::{TracedConverter, TracedTaskExecutor};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use converter::FakeConverter;
#[cfg(any(test, feature = "test-support"))]
pub use tasks::{FakeTaskExecutor, TaskCall};
