use std::collections::HashMap;

use centrack_rs::{centroid_tracker::CentroidTracker, rect::Rect};
use serde::Deserialize;

const SCENARIO_JSON_PATH: &str = "data/jsons/tracking_scenario.json";

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ScenarioJson {
    name: String,
    max_distance: String,
    max_history: String,
    detections: Vec<DetectionJson>,
}

#[derive(Debug, Deserialize, Clone)]
struct DetectionJson {
    frame_id: String,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

impl From<DetectionJson> for Rect<i64> {
    fn from(det: DetectionJson) -> Self {
        Rect::new(
            det.x1.parse().unwrap(),
            det.y1.parse().unwrap(),
            det.x2.parse().unwrap(),
            det.y2.parse().unwrap(),
        )
    }
}

fn read_scenario_json(path: &str) -> ScenarioJson {
    let file = std::fs::File::open(path).unwrap();
    serde_json::from_reader(file).unwrap()
}

fn load_detections() -> Vec<(usize, Vec<Rect<i64>>)> {
    let scenario = read_scenario_json(SCENARIO_JSON_PATH);
    let mut detections = HashMap::<usize, Vec<Rect<i64>>>::new();
    for det in scenario.detections {
        let frame_id = det.frame_id.parse::<usize>().unwrap();
        let rect = Rect::from(det);

        if let Some(rects) = detections.get_mut(&frame_id) {
            rects.push(rect);
        } else {
            detections.insert(frame_id, vec![rect]);
        }
    }
    let mut detections = detections
        .into_iter()
        .collect::<Vec<(usize, Vec<Rect<i64>>)>>();
    detections.sort_by(|a, b| a.0.cmp(&b.0));
    detections
}

fn run(
    label: &str,
    mut tracker: CentroidTracker,
    frames: &[(usize, Vec<Rect<i64>>)],
) {
    let mut max_track_count = 0usize;
    let mut total_track_count = 0usize;
    let mut seen = std::collections::HashSet::<usize>::new();
    let mut highest_id = None::<usize>;

    for (_, rects) in frames.iter() {
        let outputs = tracker.update(rects).unwrap();
        let count = tracker.track_count();
        total_track_count += count;
        max_track_count = max_track_count.max(count);
        for output in outputs {
            let id = output.get_track_id();
            if seen.insert(id) {
                // a fresh id is always larger than every id seen before it
                assert!(highest_id.map_or(true, |h| id > h));
                highest_id = Some(id);
            }
        }
    }

    println!("{}:", label);
    println!("  Final track count: {}", tracker.track_count());
    println!("  Max track count:   {}", max_track_count);
    println!(
        "  Avg track count:   {:.2}",
        total_track_count as f64 / frames.len() as f64
    );
    println!(
        "  Ids allocated:     {}",
        highest_id.map_or(0, |h| h + 1)
    );
    println!();
}

fn main() {
    let frames = load_detections();

    println!("=== Track Id Verification ===");
    println!("Total frames: {}", frames.len());
    println!();

    run("CentroidTracker (default)", CentroidTracker::default(), &frames);
    run(
        "CentroidTracker (tight radius)",
        CentroidTracker::new(10.0, 5),
        &frames,
    );
    run(
        "CentroidTracker (long history)",
        CentroidTracker::new(50.0, 16),
        &frames,
    );
}
