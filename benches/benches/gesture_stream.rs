// Copyright 2026 the Touchform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use touchform_arbiter::TransformArbiter;
use touchform_gesture::{GestureEvent, MotionLock};

/// A plausible interactive session: drag, pinch, squeeze, fade, lift,
/// repeated. Deltas are small and per-event, like a real recognizer emits.
fn session(events_per_stream: usize) -> Vec<GestureEvent> {
    let mut events = Vec::new();
    for stream in 0..4 {
        for i in 0..events_per_stream {
            let wobble = (i % 7) as f64 - 3.0;
            events.push(match stream {
                0 => GestureEvent::pan(4.0, wobble),
                1 => GestureEvent::PinchRotate {
                    scale: 1.0 + wobble / 200.0,
                    angle: wobble / 100.0,
                },
                2 => GestureEvent::two_finger_pan(5.0, wobble),
                _ => GestureEvent::two_finger_pan(wobble, -6.0),
            });
        }
        events.push(GestureEvent::StreamEnd);
    }
    events
}

fn bench_handle_and_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbiter/handle_compose");

    // The per-touch-update cost a UI thread pays: one event in, one
    // composed transform out.
    for len in [64usize, 512, 4_096] {
        let events = session(len);
        group.throughput(Throughput::Elements(events.len() as u64));

        group.bench_with_input(BenchmarkId::new("session", len), &events, |b, events| {
            b.iter(|| {
                let mut arbiter = TransformArbiter::new(Size::new(300.0, 300.0));
                let mut lock = MotionLock::new();
                for &event in events {
                    if let GestureEvent::Move { pointers: 2, delta } = event {
                        lock.observe(delta);
                    }
                    arbiter.handle(event, &mut lock);
                    black_box(arbiter.compose());
                }
                black_box(arbiter);
            });
        });
    }

    group.finish();
}

fn bench_compose_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbiter/compose");

    let mut arbiter = TransformArbiter::new(Size::new(300.0, 300.0));
    let mut lock = MotionLock::new();
    for event in session(64) {
        arbiter.handle(event, &mut lock);
    }

    group.bench_function("warm_state", |b| {
        b.iter(|| black_box(arbiter.compose()));
    });

    group.finish();
}

criterion_group!(benches, bench_handle_and_compose, bench_compose_only);
criterion_main!(benches);
