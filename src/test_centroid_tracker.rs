use crate::centroid_tracker::CentroidTracker;
use crate::error::TrackError;
use crate::object::TrackedBox;
use crate::rect::Rect;
use nearly_eq::assert_nearly_eq;

const EPS: f64 = 1.0e-9;

fn ids(tracked: &[TrackedBox<i64>]) -> Vec<usize> {
    tracked.iter().map(|t| t.get_track_id()).collect()
}

#[test]
fn test_first_update_assigns_fresh_ids() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    let out = tracker
        .update(&[
            Rect::new(10, 10, 30, 30),
            Rect::new(200, 200, 220, 220),
        ])
        .unwrap();

    assert_eq!(ids(&out), vec![0, 1]);
    assert_eq!(out[0].get_rect(), Rect::new(10, 10, 30, 30));
    assert_eq!(tracker.track_count(), 2);
    assert_eq!(tracker.frame_count(), 1);
}

#[test]
fn test_nearby_detection_keeps_id() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    let out = tracker.update(&[Rect::new(14, 14, 34, 34)]).unwrap();

    assert_eq!(ids(&out), vec![0]);
    let track = tracker.get_track(0).unwrap();
    assert_eq!(track.history_len(), 2);
    let history: Vec<(i64, i64)> = track
        .history()
        .map(|c| (c[(0, 0)], c[(0, 1)]))
        .collect();
    assert_eq!(history, vec![(20, 20), (24, 24)]);
}

#[test]
fn test_matching_radius_is_strict() {
    // centers exactly max_distance apart must not match
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(0, 0, 40, 40)]).unwrap();
    let out = tracker.update(&[Rect::new(50, 0, 90, 40)]).unwrap();

    assert_eq!(ids(&out), vec![1]);
    assert_eq!(tracker.track_ids(), vec![1]);
}

#[test]
fn test_greedy_rematch_within_one_frame() {
    // The second box is 80 px from the track's pre-frame center but only
    // 40 px from the center the first box just moved it to, so both boxes
    // resolve to the same id.
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(0, 0, 40, 40)]).unwrap();
    let out = tracker
        .update(&[Rect::new(40, 0, 80, 40), Rect::new(80, 0, 120, 40)])
        .unwrap();

    assert_eq!(ids(&out), vec![0, 0]);
    assert_eq!(tracker.track_count(), 1);

    let track = tracker.get_track(0).unwrap();
    assert_eq!(track.history_len(), 3);

    // both observations landed in the history this frame
    let prediction = tracker.predict_next_position(0).unwrap();
    assert_nearly_eq!(prediction[(0, 0)], 140.0, EPS);
    assert_nearly_eq!(prediction[(0, 1)], 20.0, EPS);
}

#[test]
fn test_unmatched_track_dropped_immediately() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    tracker.update(&[Rect::new(14, 14, 34, 34)]).unwrap();

    // far-away detection: track 0 receives nothing and dies this frame
    let out = tracker.update(&[Rect::new(200, 200, 220, 220)]).unwrap();
    assert_eq!(ids(&out), vec![1]);
    assert_eq!(tracker.track_ids(), vec![1]);
    assert!(tracker.get_track(0).is_none());

    // a detection back at the old position becomes a new, larger id
    let out = tracker.update(&[Rect::new(11, 11, 31, 31)]).unwrap();
    assert_eq!(ids(&out), vec![2]);
    assert_eq!(tracker.track_ids(), vec![2]);
}

#[test]
fn test_empty_update_drops_all_tracks() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    assert_eq!(tracker.track_count(), 1);

    let out = tracker.update(&[]).unwrap();
    assert!(out.is_empty());
    assert_eq!(tracker.track_count(), 0);

    let out = tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn test_track_ids_never_reused() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker
        .update(&[Rect::new(0, 0, 20, 20), Rect::new(100, 0, 120, 20)])
        .unwrap();
    tracker.update(&[]).unwrap();
    let out = tracker
        .update(&[Rect::new(0, 0, 20, 20), Rect::new(100, 0, 120, 20)])
        .unwrap();

    assert_eq!(ids(&out), vec![2, 3]);
}

#[test]
fn test_history_is_bounded() {
    let mut tracker = CentroidTracker::new(50.0, 3);
    for step in 0..8i64 {
        let offset = step * 4;
        tracker
            .update(&[Rect::new(offset, 0, offset + 20, 20)])
            .unwrap();
        assert!(tracker.get_track(0).unwrap().history_len() <= 3);
    }
    assert_eq!(tracker.get_track(0).unwrap().history_len(), 3);
}

#[test]
fn test_prediction_matches_mean_velocity() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    tracker.update(&[Rect::new(14, 14, 34, 34)]).unwrap();

    // history [(20, 20), (24, 24)], mean step (4, 4)
    let prediction = tracker.predict_next_position(0).unwrap();
    assert_nearly_eq!(prediction[(0, 0)], 28.0, EPS);
    assert_nearly_eq!(prediction[(0, 1)], 28.0, EPS);
}

#[test]
fn test_prediction_mean_is_real_valued() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    // centroids (0, 0) -> (10, 0) -> (12, 6)
    tracker.update(&[Rect::new(-10, -10, 10, 10)]).unwrap();
    tracker.update(&[Rect::new(0, -10, 20, 10)]).unwrap();
    tracker.update(&[Rect::new(2, -4, 22, 16)]).unwrap();

    let prediction = tracker.predict_next_position(0).unwrap();
    assert_nearly_eq!(prediction[(0, 0)], 18.0, EPS);
    assert_nearly_eq!(prediction[(0, 1)], 9.0, EPS);
}

#[test]
fn test_prediction_absent_for_short_history_or_unknown_id() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    assert!(tracker.predict_next_position(0).is_none());

    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();
    // one observation is not enough for a velocity estimate
    assert!(tracker.predict_next_position(0).is_none());
    assert!(tracker.predict_next_position(7).is_none());
}

#[test]
fn test_invalid_detection_rejected_atomically() {
    let mut tracker = CentroidTracker::new(50.0, 5);
    tracker.update(&[Rect::new(10, 10, 30, 30)]).unwrap();

    let err = tracker
        .update(&[Rect::new(14, 14, 34, 34), Rect::new(5, 5, 5, 25)])
        .unwrap_err();
    assert_eq!(
        err,
        TrackError::InvalidDetection {
            x1: 5,
            y1: 5,
            x2: 5,
            y2: 25
        }
    );

    // nothing was mutated, not even by the valid detection ahead of the
    // malformed one
    assert_eq!(tracker.frame_count(), 1);
    assert_eq!(tracker.track_ids(), vec![0]);
    assert_eq!(tracker.get_track(0).unwrap().history_len(), 1);
}

#[test]
fn test_default_configuration() {
    let tracker = CentroidTracker::default();
    assert_eq!(tracker.max_distance(), 50.0);
    assert_eq!(tracker.max_history(), 5);
    assert_eq!(tracker.track_count(), 0);
}
