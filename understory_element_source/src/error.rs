// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors reported by [`DataSource::get`](crate::DataSource::get).
///
/// Both variants surface on the first lazy load and are not retried
/// internally. Reconfiguring the source is the only recovery path.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum DataError {
    /// A required input was not configured when it was first needed.
    #[error("element source is missing its {missing}")]
    Configuration {
        /// Human-readable name of the missing input.
        missing: &'static str,
    },
    /// The text asset is present but contains no usable fragments.
    #[error("text asset contains no fragments after splitting")]
    EmptyData,
}
