// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use understory_element_source::DataError;

/// Errors surfaced by [`InfiniteScroll::tick`](crate::InfiniteScroll::tick)
/// and [`InfiniteScroll::scroll_moved`](crate::InfiniteScroll::scroll_moved).
///
/// Apart from [`ScrollError::Data`], every variant is a broken precondition
/// in the caller's setup. They are checked before any state changes.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ScrollError {
    /// Generating a new item failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// An item re-entered from the top before its height was ever recorded.
    #[error("height of item {index} was read before it was recorded")]
    UnrecordedHeight {
        /// Index into the data log.
        index: usize,
    },
    /// A relocation was requested while the view pool is empty.
    #[error("cannot relocate views: the pool is empty")]
    EmptyPool,
}
