// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::app::history::History;
use gallery_lens::domain::gallery::{GalleryImage, State, View};
use std::hint::black_box;

fn gallery_state(images: usize) -> State {
    State::new(View::Gallery {
        name: "summer".to_string(),
        images: (0..images)
            .map(|n| GalleryImage {
                thumbnail_path: format!("summer/thumbs/{n}.jpg"),
                webview_path: format!("summer/web/{n}.jpg"),
                original_path: format!("/srv/photos/summer/{n}.jpg"),
            })
            .collect(),
    })
}

fn history_navigation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_navigation");

    let small = gallery_state(10);
    let large = gallery_state(1_000);

    group.bench_function("push_small_gallery", |b| {
        let mut history = History::new(100);
        b.iter(|| history.push(black_box(&small)));
    });

    group.bench_function("push_large_gallery", |b| {
        let mut history = History::new(100);
        b.iter(|| history.push(black_box(&large)));
    });

    group.bench_function("back_forward_large_gallery", |b| {
        let mut history = History::new(100);
        history.push(&large);
        let mut current = State::default();
        b.iter(|| {
            if let Some(previous) = history.back(black_box(&current)) {
                current = previous;
            }
            if let Some(next) = history.forward(black_box(&current)) {
                current = next;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, history_navigation_benchmark);
criterion_main!(benches);
