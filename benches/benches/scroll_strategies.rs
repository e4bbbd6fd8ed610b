// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_element_source::DataSource;
use understory_infinite_scroll::{
    HeadlessHost, HideShowStrategy, InfiniteScroll, RecyclePoolStrategy, ScrollConfig,
    ScrollStrategy, SimpleGrowStrategy,
};

const ASSET: &str = include_str!("../../demos/assets/paragraphs.txt");

/// Builds an active list whose fill phase is complete, then scrolls it down
/// `history` times so strategies that never release views carry that many
/// extra elements.
fn prepared<S: ScrollStrategy<HeadlessHost>>(
    strategy: S,
    viewport: f64,
    history: usize,
) -> InfiniteScroll<HeadlessHost, S> {
    let source = DataSource::new().with_asset(ASSET).with_seed(1);
    let config = ScrollConfig::default().with_fill_per_tick(usize::MAX);
    let mut list = InfiniteScroll::new(HeadlessHost::new(viewport), source, config, strategy);
    list.activate();
    while list.core().should_generate_element() {
        list.tick().unwrap();
    }
    for _ in 0..history {
        list.host_mut().scroll_to_bottom();
        list.scroll_moved().unwrap();
    }
    list.host_mut().scroll_to_bottom();
    list
}

fn bench_bottom_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll/bottom_event");

    // Hypothesis: the recycle pool stays flat as history grows, hide/show
    // grows linearly with every element it has ever generated.
    for history in [0_usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("simple_grow", history), &history, |b, &h| {
            b.iter_batched(
                || prepared(SimpleGrowStrategy, 600.0, h),
                |mut list| {
                    list.scroll_moved().unwrap();
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("hide_show", history), &history, |b, &h| {
            b.iter_batched(
                || prepared(HideShowStrategy::new(), 600.0, h),
                |mut list| {
                    list.scroll_moved().unwrap();
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("recycle_pool", history), &history, |b, &h| {
            b.iter_batched(
                || prepared(RecyclePoolStrategy::new(), 600.0, h),
                |mut list| {
                    list.scroll_moved().unwrap();
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll/fill");

    for viewport in [600.0_f64, 2_400.0, 9_600.0] {
        group.bench_with_input(
            BenchmarkId::new("recycle_pool", viewport),
            &viewport,
            |b, &viewport| {
                b.iter(|| black_box(prepared(RecyclePoolStrategy::new(), viewport, 0)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bottom_event, bench_fill);
criterion_main!(benches);
