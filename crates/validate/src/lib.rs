// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Recipe validation
//!
//! - [`SourceValidator`] materializes a source recipe as release copies for
//!   each AGP version of interest and runs the recipe's tasks in them.
//! - [`WorkingCopyValidator`] converts a release copy back to source mode and
//!   validates the result, proving the conversion round-trips.

mod context;
mod error;
mod report;
mod source;
mod working_copy;

pub use context::{ConfigError, Context, VersionMapping};
pub use error::ValidateError;
pub use report::{ValidationReport, VersionOutcome};
pub use source::SourceValidator;
pub use working_copy::WorkingCopyValidator;
