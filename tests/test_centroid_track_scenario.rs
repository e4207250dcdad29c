use std::collections::HashMap;

use centrack_rs::centroid_tracker::CentroidTracker;
use centrack_rs::rect::Rect;
use nearly_eq::assert_nearly_eq;
use serde::Deserialize;
use serde_json;

const SCENARIO_JSON_PATH: &str = "data/jsons/tracking_scenario.json";

/*----------------------------------------------------------------------------
Json schema for the tracking scenario
----------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
struct ScenarioJson {
    name: String,
    max_distance: String,
    max_history: String,
    detections: Vec<DetectionJson>,
    expected_tracks: Vec<ExpectedTrackJson>,
    expected_predictions: Vec<ExpectedPredictionJson>,
}

#[derive(Debug, Deserialize, Clone)]
struct DetectionJson {
    frame_id: String,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

#[derive(Debug, Deserialize, Clone)]
struct ExpectedTrackJson {
    frame_id: String,
    track_id: String,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

#[derive(Debug, Deserialize, Clone)]
struct ExpectedPredictionJson {
    frame_id: String,
    track_id: String,
    x: String,
    y: String,
}

impl DetectionJson {
    fn rect(&self) -> Rect<i64> {
        Rect::new(
            self.x1.parse().unwrap(),
            self.y1.parse().unwrap(),
            self.x2.parse().unwrap(),
            self.y2.parse().unwrap(),
        )
    }
}

impl ExpectedTrackJson {
    fn rect(&self) -> Rect<i64> {
        Rect::new(
            self.x1.parse().unwrap(),
            self.y1.parse().unwrap(),
            self.x2.parse().unwrap(),
            self.y2.parse().unwrap(),
        )
    }
}

fn read_scenario_json(path: &str) -> ScenarioJson {
    let file = std::fs::File::open(path).unwrap();
    serde_json::from_reader(file).unwrap()
}

fn group_by_frame<T, F>(items: &[T], frame_of: F) -> HashMap<usize, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    let mut grouped: HashMap<usize, Vec<T>> = HashMap::new();
    for item in items {
        grouped
            .entry(frame_of(item))
            .or_insert_with(Vec::new)
            .push(item.clone());
    }
    grouped
}

#[test]
fn test_centroid_track_scenario() {
    let scenario = read_scenario_json(SCENARIO_JSON_PATH);
    assert!(!scenario.name.is_empty());

    let max_distance: f64 = scenario.max_distance.parse().unwrap();
    let max_history: usize = scenario.max_history.parse().unwrap();
    let mut tracker = CentroidTracker::new(max_distance, max_history);

    let detections =
        group_by_frame(&scenario.detections, |d| d.frame_id.parse().unwrap());
    let expected_tracks = group_by_frame(&scenario.expected_tracks, |t| {
        t.frame_id.parse().unwrap()
    });
    let expected_predictions =
        group_by_frame(&scenario.expected_predictions, |p| {
            p.frame_id.parse().unwrap()
        });

    for frame_id in 0..detections.len() {
        let rects: Vec<Rect<i64>> = detections
            .get(&frame_id)
            .unwrap()
            .iter()
            .map(DetectionJson::rect)
            .collect();
        let outputs = tracker.update(&rects).unwrap();

        let expected = expected_tracks.get(&frame_id).unwrap();
        assert_eq!(
            outputs.len(),
            expected.len(),
            "output length mismatch in frame_id: {}",
            frame_id
        );

        for (output, expected) in outputs.iter().zip(expected.iter()) {
            let expected_track_id: usize =
                expected.track_id.parse().unwrap();
            assert_eq!(
                output.get_track_id(),
                expected_track_id,
                "track_id mismatch in frame_id: {}",
                frame_id
            );
            assert_eq!(
                output.get_rect(),
                expected.rect(),
                "rect mismatch in frame_id: {}",
                frame_id
            );
        }

        // the live-track set is exactly the ids emitted this frame
        let mut emitted: Vec<usize> =
            outputs.iter().map(|o| o.get_track_id()).collect();
        emitted.sort_unstable();
        emitted.dedup();
        let mut live = tracker.track_ids();
        live.sort_unstable();
        assert_eq!(
            live, emitted,
            "live set mismatch in frame_id: {}",
            frame_id
        );

        if let Some(predictions) = expected_predictions.get(&frame_id) {
            #[allow(non_snake_case)]
            let EPS = 1.0e-6;
            for expected in predictions {
                let track_id: usize = expected.track_id.parse().unwrap();
                let prediction =
                    tracker.predict_next_position(track_id).unwrap();
                assert_nearly_eq!(
                    prediction[(0, 0)],
                    expected.x.parse::<f64>().unwrap(),
                    EPS
                );
                assert_nearly_eq!(
                    prediction[(0, 1)],
                    expected.y.parse::<f64>().unwrap(),
                    EPS
                );
            }
        }
    }
}
