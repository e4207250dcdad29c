use centrack_rs::{centroid_tracker::CentroidTracker, rect::Rect};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    env,
    error::Error,
    fs,
    path::PathBuf,
};

#[derive(Debug, Deserialize, Clone)]
struct DetectionJson {
    frame_id: String,
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

#[derive(Debug, Deserialize)]
struct ScenarioJson {
    name: String,
    max_distance: String,
    max_history: String,
    detections: Vec<DetectionJson>,
}

#[derive(Debug, Serialize)]
struct TrackedJson {
    frame_id: usize,
    track_id: usize,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    predicted_x: Option<f64>,
    predicted_y: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    let input_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/jsons/tracking_scenario.json"));
    let output_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/jsons/tracking_output.json"));
    let max_frames = args
        .get(3)
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);

    let scenario: ScenarioJson =
        serde_json::from_str(&fs::read_to_string(&input_path)?)?;
    let max_distance: f64 = scenario.max_distance.parse()?;
    let max_history: usize = scenario.max_history.parse()?;
    let frames = group_frames(&scenario.detections);

    if frames.is_empty() {
        return Err(format!(
            "No detections found in {}",
            input_path.display()
        )
        .into());
    }

    let total_frames = if max_frames > 0 && max_frames < frames.len() {
        max_frames
    } else {
        frames.len()
    };
    let progress = ProgressBar::new(total_frames as u64);
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
    )?
    .progress_chars("=>-");
    progress.set_style(style);
    progress.set_message(scenario.name.clone());

    let mut tracker = CentroidTracker::new(max_distance, max_history);
    let mut records = Vec::new();

    for (frame_id, rects) in frames.iter().take(total_frames) {
        let tracked = tracker.update(rects)?;
        for output in tracked {
            let [x1, y1, x2, y2] = output.get_rect().get_xyxy();
            let prediction =
                tracker.predict_next_position(output.get_track_id());
            records.push(TrackedJson {
                frame_id: *frame_id,
                track_id: output.get_track_id(),
                x1,
                y1,
                x2,
                y2,
                predicted_x: prediction.map(|p| p[(0, 0)]),
                predicted_y: prediction.map(|p| p[(0, 1)]),
            });
        }
        progress.inc(1);
    }

    progress.finish_with_message("done");

    fs::write(&output_path, serde_json::to_string_pretty(&records)?)?;
    println!("Saved tracking output to {}", output_path.display());

    Ok(())
}

fn print_usage() {
    println!(
        "Usage: cargo run --example demo_centroid_tracker [input_json] [output_json] [max_frames]\n\
Defaults:\n\
  input_json: data/jsons/tracking_scenario.json\n\
  output_json: data/jsons/tracking_output.json\n\
  max_frames: 0 (all)"
    );
}

fn group_frames(detections: &[DetectionJson]) -> Vec<(usize, Vec<Rect<i64>>)> {
    let mut grouped = HashMap::<usize, Vec<Rect<i64>>>::new();
    for det in detections {
        let frame_id = det.frame_id.parse::<usize>().unwrap();
        let rect = Rect::new(
            det.x1.parse().unwrap(),
            det.y1.parse().unwrap(),
            det.x2.parse().unwrap(),
            det.y2.parse().unwrap(),
        );
        grouped.entry(frame_id).or_default().push(rect);
    }
    let mut frames = grouped.into_iter().collect::<Vec<_>>();
    frames.sort_by(|a, b| a.0.cmp(&b.0));
    frames
}
