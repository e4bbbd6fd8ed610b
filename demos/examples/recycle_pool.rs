// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycle pool walkthrough.
//!
//! Fill a headless list, then scroll far down and back up. The pool never
//! grows past its fill size while the data log keeps every item seen.
//!
//! Run:
//! - `cargo run -p understory_scroll_demos --example recycle_pool`

use understory_infinite_scroll::{
    HeadlessHost, InfiniteScroll, RecyclePoolStrategy, RowMetrics, ScrollConfig, ScrollError,
    ScrollHost,
};
use understory_scroll_demos::{demo_source, init_tracing};

fn main() -> Result<(), ScrollError> {
    init_tracing();

    let host = HeadlessHost::new(480.0).with_metrics(RowMetrics {
        chars_per_line: 48,
        ..RowMetrics::default()
    });
    let mut list = InfiniteScroll::new(
        host,
        demo_source(7),
        ScrollConfig::default().with_margin(0.15),
        RecyclePoolStrategy::new(),
    );
    list.activate();

    while list.core().should_generate_element() {
        list.tick()?;
    }
    println!(
        "filled: {} views, content {:.0} over a {:.0} viewport",
        list.strategy().pool().len(),
        list.host().content_height(),
        list.host().viewport_height(),
    );

    for step in 0..40 {
        list.host_mut().scroll_by(90.0);
        list.scroll_moved()?;
        if step % 10 == 9 {
            report("down", &list);
        }
    }
    for step in 0..40 {
        list.host_mut().scroll_by(-90.0);
        list.scroll_moved()?;
        if step % 10 == 9 {
            report("up", &list);
        }
    }

    if let Some(first) = list.strategy().bound_data(0) {
        println!("top row: {:?}", first.text());
    }
    list.deactivate();
    Ok(())
}

fn report(direction: &str, list: &InfiniteScroll<HeadlessHost, RecyclePoolStrategy>) {
    let strategy = list.strategy();
    println!(
        "{direction:>4}: top index {:>3}, pool {}, logged {}, position {:.2}",
        strategy.top_index(),
        strategy.pool().len(),
        strategy.data_log().len(),
        list.host().normalized_position(),
    );
}
