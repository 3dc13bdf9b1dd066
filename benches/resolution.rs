// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for topmost-surface resolution and queue operations.
//!
//! Measures the performance of:
//! - Resolving the topmost surface through deep container chains
//! - Resolving through a realistic tab / navigation / modal tree
//! - Appending to and draining the alert queue with deduplication

use alert_queue::alert::{AlertQueue, AlertRequest, QueueItem};
use alert_queue::host::{resolve_topmost, Scene};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Builds a chain of single-child containers `depth` levels deep.
fn container_chain(depth: usize) -> Scene {
    let mut scene = Scene::new();
    let mut top = scene.add_screen("leaf");
    for level in 0..depth {
        top = scene.add_container(format!("level {level}"), vec![top]);
    }
    scene.set_root(top);
    scene
}

fn bench_resolve_deep_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    for depth in [10, 100, 1_000, 10_000] {
        let scene = container_chain(depth);
        group.bench_with_input(BenchmarkId::new("container_chain", depth), &scene, |b, scene| {
            b.iter(|| black_box(resolve_topmost(scene)));
        });
    }

    group.finish();
}

/// Tab bar with a navigation stack per tab and a sheet over the selected one.
fn bench_resolve_app_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let mut scene = Scene::new();
    let mut tabs = Vec::new();
    for tab in 0..5 {
        let entries = (0..8)
            .map(|entry| scene.add_screen(format!("tab {tab} screen {entry}")))
            .collect();
        tabs.push(scene.add_navigation(format!("tab {tab}"), entries));
    }
    let sheet = scene.add_screen("sheet");
    scene.set_modal(tabs[2], sheet);
    let bar = scene.add_tabs("tab bar", tabs, Some(2));
    scene.set_root(bar);

    group.bench_function("tabs_navigation_modal", |b| {
        b.iter(|| black_box(resolve_topmost(&scene)));
    });

    group.finish();
}

/// Fills a queue with distinct alerts, including rejected duplicates, then
/// drains it last-in first-out.
fn bench_queue_fill_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for size in [8, 64, 256] {
        group.bench_with_input(BenchmarkId::new("fill_and_drain", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = AlertQueue::new();
                for n in 0..size {
                    let _ = queue.append(QueueItem::new(AlertRequest::titled(format!("alert {n}")), true));
                    let _ = queue.append(QueueItem::new(AlertRequest::titled(format!("alert {n}")), true));
                }
                while let Some(item) = queue.pop_last() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_deep_tree,
    bench_resolve_app_shape,
    bench_queue_fill_and_drain
);
criterion_main!(benches);
