// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the infinite scroll demos.
//!
//! Run:
//! - `cargo run -p understory_scroll_demos --example recycle_pool`
//! - `cargo run -p understory_scroll_demos --example hide_show`
//!
//! Set `RUST_LOG=understory_infinite_scroll=trace` to watch every recycle.

use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_element_source::DataSource;

/// Line-separated paragraphs used as the text asset.
pub const PARAGRAPHS: &str = include_str!("../assets/paragraphs.txt");

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// A data source over [`PARAGRAPHS`] with a small palette.
#[must_use]
pub fn demo_source(seed: u64) -> DataSource {
    DataSource::new()
        .with_asset(PARAGRAPHS)
        .with_colors([
            Color::from_rgb8(0xe0, 0x4f, 0x5f),
            Color::from_rgb8(0x3a, 0x86, 0xff),
            Color::from_rgb8(0x2a, 0x9d, 0x8f),
        ])
        .with_seed(seed)
}
