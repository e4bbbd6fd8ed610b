// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_element_source --heading-base-level=0

//! Understory Element Source: item payloads for infinite lists.
//!
//! This crate supplies the values an infinite list binds onto its views. It is
//! deliberately tiny and knows nothing about views, layout, or scrolling:
//!
//! - [`ElementData`]: an immutable payload for one list item (text, a primary
//!   tint and its complement, and up to three optional image handles).
//! - [`ImageHandle`]: an opaque handle to an image owned by the host.
//! - [`DataSource`]: produces a fresh [`ElementData`] on every call to
//!   [`DataSource::get`], sampling with replacement from a text asset that is
//!   split into fragments on first use, plus optional color and image pools.
//! - [`DataError`]: the two ways the lazy load can fail.
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use understory_element_source::DataSource;
//!
//! let mut source = DataSource::new()
//!     .with_asset("first paragraph\nsecond paragraph\n\nthird paragraph")
//!     .with_colors([Color::from_rgba8(255, 0, 0, 255)])
//!     .with_seed(7);
//!
//! let data = source.get().unwrap();
//! assert!(data.text().ends_with("paragraph"));
//! assert_eq!(source.fragment_count(), Some(3));
//!
//! // The secondary tint is always the complement of the primary one.
//! let secondary = data.secondary_color().to_rgba8();
//! assert_eq!((secondary.r, secondary.g, secondary.b), (0, 255, 255));
//! ```
//!
//! The fragment cache is populated once, on the first [`DataSource::get`]. A
//! missing asset reports [`DataError::Configuration`]; an asset that yields no
//! fragments reports [`DataError::EmptyData`] and keeps doing so until the
//! source is reconfigured with [`DataSource::set_asset`].

mod element;
mod error;
mod source;

pub use element::{ElementData, ImageHandle, complementary};
pub use error::DataError;
pub use source::DataSource;
