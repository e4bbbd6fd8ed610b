// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_infinite_scroll --heading-base-level=0

//! Understory Infinite Scroll: an unbounded list over a fixed-size viewport.
//!
//! This crate keeps a logically endless, lazily generated list of items on
//! screen while holding only a small working set of views. It is renderer
//! agnostic: the surface that owns the viewport, the content container, and
//! the views is abstracted as a [`ScrollHost`].
//!
//! The pieces:
//!
//! - [`ScrollCore`]: host, [`DataSource`](understory_element_source::DataSource),
//!   and [`ScrollConfig`], plus the three predicates every policy is built on:
//!   [`ScrollCore::should_generate_element`], [`ScrollCore::within_range_top`],
//!   and [`ScrollCore::within_range_bottom`].
//! - [`ScrollStrategy`]: the per-tick and per-scroll-event policy. Three are
//!   provided:
//!   - [`SimpleGrowStrategy`]: append at the bottom, nothing else.
//!   - [`HideShowStrategy`]: append at the bottom and toggle every element's
//!     [`Visibility`] by viewport overlap.
//!   - [`RecyclePoolStrategy`]: keep a fixed pool of views and slide it over an
//!     append-only data log, compensating the content offset with recorded
//!     item heights.
//! - [`EagerFill`]: the shared fill phase that generates elements each tick
//!   until the content is taller than the viewport plus margins.
//! - [`InfiniteScroll`]: ties a core and a strategy together and manages the
//!   scroll listener registration.
//! - [`HeadlessHost`]: an in-memory host used by tests, demos, and benchmarks.
//!
//! ## Driving a list
//!
//! Hosts call [`InfiniteScroll::tick`] once per frame and
//! [`InfiniteScroll::scroll_moved`] once per scroll-position change:
//!
//! ```rust
//! use understory_element_source::DataSource;
//! use understory_infinite_scroll::{
//!     HeadlessHost, InfiniteScroll, RecyclePoolStrategy, ScrollConfig,
//! };
//!
//! let source = DataSource::new()
//!     .with_asset("one\ntwo\nthree\nfour")
//!     .with_seed(3);
//! let mut list = InfiniteScroll::new(
//!     HeadlessHost::new(200.0),
//!     source,
//!     ScrollConfig::default().with_margin(0.1),
//!     RecyclePoolStrategy::new(),
//! );
//! list.activate();
//!
//! // Frames: fill until the content covers the viewport and margins.
//! for _ in 0..16 {
//!     list.tick().unwrap();
//! }
//! let pool_len = list.strategy().pool().len();
//!
//! // Drag to the bottom and deliver the event: the pool slides down one item.
//! list.host_mut().scroll_to_bottom();
//! list.scroll_moved().unwrap();
//! assert_eq!(list.strategy().top_index(), 1);
//! assert_eq!(list.strategy().pool().len(), pool_len);
//! ```
//!
//! ## Coordinates
//!
//! The normalized scroll position is `1.0` at the top and `0.0` at the
//! bottom. World-space rectangles are y-up. See [`geometry`] for the exact
//! predicates.

mod binder;
mod eager;
mod engine;
mod error;
pub mod geometry;
mod headless;
mod hide_show;
mod host;
mod recycle;
mod simple;

pub use binder::{ElementView, ImageSlot, ViewBinder};
pub use eager::EagerFill;
pub use engine::{GeneratedElement, InfiniteScroll, ScrollCore, ScrollStrategy};
pub use error::ScrollError;
pub use geometry::{MarginZones, ScrollConfig};
pub use headless::{HeadlessHost, RowMetrics};
pub use hide_show::HideShowStrategy;
pub use host::{ScrollHost, SubscriptionId, ViewId, Visibility};
pub use recycle::RecyclePoolStrategy;
pub use simple::SimpleGrowStrategy;
