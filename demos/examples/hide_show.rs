// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hide/show walkthrough.
//!
//! Every generated row stays alive; only the ones overlapping the viewport
//! are visible. Compare the element count here with `recycle_pool`.
//!
//! Run:
//! - `cargo run -p understory_scroll_demos --example hide_show`

use understory_infinite_scroll::{
    HeadlessHost, HideShowStrategy, InfiniteScroll, ScrollConfig, ScrollError, ScrollHost,
    Visibility,
};
use understory_scroll_demos::{demo_source, init_tracing};

fn main() -> Result<(), ScrollError> {
    init_tracing();

    let mut list = InfiniteScroll::new(
        HeadlessHost::new(480.0),
        demo_source(11),
        ScrollConfig::default(),
        HideShowStrategy::new(),
    );
    list.activate();

    while list.core().should_generate_element() {
        list.tick()?;
    }

    for round in 1..=5 {
        for _ in 0..12 {
            list.host_mut().scroll_to_bottom();
            list.scroll_moved()?;
        }
        let elements = list.strategy().elements();
        let visible = elements
            .iter()
            .filter(|&&id| list.host().visibility(id) == Visibility::Visible)
            .count();
        println!(
            "round {round}: {} elements, {visible} visible, content {:.0}",
            elements.len(),
            list.host().content_height(),
        );
    }
    Ok(())
}
