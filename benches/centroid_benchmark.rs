use std::time::Duration;

use centrack_rs::{centroid_tracker::CentroidTracker, rect::Rect};
use criterion::{criterion_group, criterion_main, Criterion};

const NUM_FRAMES: usize = 100;
const NUM_OBJECTS: usize = 32;
const BOX_SIZE: i64 = 40;
const STEP: i64 = 6;
const LANE_PITCH: i64 = 200;

/* ----------------------------------------------------------------------------
 * Synthetic detection sequence
 * ----------------------------------------------------------------------------*/

/// One box per lane, all drifting diagonally by STEP px per frame. Lanes are
/// spaced far enough apart that every object stays inside its own matching
/// radius.
fn synthetic_frames() -> Vec<Vec<Rect<i64>>> {
    let mut frames = Vec::with_capacity(NUM_FRAMES);
    for frame_id in 0..NUM_FRAMES {
        let offset = frame_id as i64 * STEP;
        let mut rects = Vec::with_capacity(NUM_OBJECTS);
        for lane in 0..NUM_OBJECTS {
            let x = lane as i64 * LANE_PITCH + offset;
            let y = offset;
            rects.push(Rect::new(x, y, x + BOX_SIZE, y + BOX_SIZE));
        }
        frames.push(rects);
    }
    frames
}

fn bench_centroid_track(c: &mut Criterion) {
    let frames = synthetic_frames();

    c.bench_function("centroid_track", |b| {
        b.iter(|| {
            let mut tracker = CentroidTracker::new(50.0, 5);
            for rects in frames.iter() {
                let _ = tracker.update(rects);
            }
        });
    });
}

fn bench_predict_next_position(c: &mut Criterion) {
    let frames = synthetic_frames();
    let mut tracker = CentroidTracker::new(50.0, 5);
    for rects in frames.iter() {
        let _ = tracker.update(rects);
    }
    let track_ids = tracker.track_ids();

    c.bench_function("predict_next_position", |b| {
        b.iter(|| {
            for track_id in track_ids.iter() {
                let _ = tracker.predict_next_position(*track_id);
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3));
    targets = bench_centroid_track, bench_predict_next_position
}
criterion_main!(benches);
