// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throughput of the gesture engine and the pinch detector over synthetic touch streams.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use zoomview_gesture::{PointerEvent, ScaleDetector, ScaleGesture, ZoomEngine};

const SURFACE: Size = Size::new(1920.0, 1080.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }

    fn point(&mut self) -> Point {
        Point::new(self.next_f64() * SURFACE.width, self.next_f64() * SURFACE.height)
    }
}

/// A repeating drag / pinch / drag cycle with random positions and factors.
fn build_stream(cycles: usize, seed: u64) -> Vec<PointerEvent> {
    let mut rng = Lcg::new(seed);
    let mut events = Vec::with_capacity(cycles * 24);
    for _ in 0..cycles {
        let start = rng.point();
        events.push(PointerEvent::down(start));
        events.push(PointerEvent::pointer_down(start));
        for _ in 0..8 {
            let focus = rng.point();
            let factor = 0.5 + rng.next_f64() * 1.5;
            events.push(PointerEvent::moved(focus).with_scale(ScaleGesture::new(factor, focus)));
        }
        events.push(PointerEvent::pointer_up(start));
        for _ in 0..10 {
            events.push(PointerEvent::moved(rng.point()));
        }
        events.push(PointerEvent::up(start));
    }
    events
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomview_gesture");

    for cycles in [16_usize, 256, 4096] {
        let events = build_stream(cycles, 0x5eed);
        group.bench_function(format!("engine_events(n={})", events.len()), |b| {
            b.iter_batched(
                || ZoomEngine::new(SURFACE),
                |mut engine| {
                    for event in &events {
                        black_box(engine.handle_pointer_event(event));
                    }
                    black_box(engine.save_scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    let mut rng = Lcg::new(7);
    let frames: Vec<[Point; 2]> = (0..1024).map(|_| [rng.point(), rng.point()]).collect();
    group.bench_function("scale_detector(frames=1024)", |b| {
        b.iter(|| {
            let mut detector = ScaleDetector::new();
            let mut product = 1.0_f64;
            for frame in &frames {
                if let Some(gesture) = detector.update(frame) {
                    product *= gesture.factor;
                }
            }
            black_box(product);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_gesture_stream);
criterion_main!(benches);
