//! End-to-end trial flows: raw input events in, one result record out.
//!
//! Drives the collectors the way a host view layer would — forwarding
//! pointer and key events, then confirming submission — and checks the
//! emitted records against the scoring definitions.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::Instant;

use cardlab_core::{
    BoardRect, CardId, Event, KeyCode, KeyEvent, Modifiers, NormPoint, PointerEvent,
    PointerEventKind, ScreenPoint,
};
use cardlab_widgets::{
    CardView, RankingCollector, RankingConfig, SpatialCollector, SpatialConfig, SubmitError,
};

const EVENTS: [&str; 5] = [
    "the storm forms offshore",
    "the crew ignores the warning",
    "the engine fails",
    "the ship drifts toward the rocks",
    "the hull breaches",
];

const BOARD: BoardRect = BoardRect::new(0.0, 0.0, 1000.0, 500.0);
const LIST: BoardRect = BoardRect::new(0.0, 0.0, 400.0, 500.0);

fn id(n: u32) -> CardId {
    CardId::from_index(n)
}

#[derive(Default)]
struct RecordingView {
    rendered: Vec<(CardId, NormPoint)>,
}

impl CardView for RecordingView {
    fn render_card(&mut self, card: CardId, pos: NormPoint) {
        self.rendered.push((card, pos));
    }
}

/// A scripted pointer gesture: down on a card, a few moves, up.
fn pointer_gesture(positions: &[(f64, f64)]) -> Vec<Event> {
    let mut events = Vec::new();
    if let Some(&(x, y)) = positions.first() {
        events.push(Event::Pointer(PointerEvent::new(
            PointerEventKind::Down,
            ScreenPoint::new(x, y),
        )));
    }
    for &(x, y) in &positions[1..] {
        events.push(Event::Pointer(PointerEvent::new(
            PointerEventKind::Move,
            ScreenPoint::new(x, y),
        )));
    }
    events.push(Event::Pointer(PointerEvent::new(
        PointerEventKind::Up,
        ScreenPoint::default(),
    )));
    events
}

#[test]
fn ranking_trial_full_flow() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let t0 = Instant::now();
    let mut collector = RankingCollector::new(EVENTS, RankingConfig::default(), &mut rng, t0);

    // The initial order is a non-identity permutation.
    let canonical: Vec<CardId> = (0..5).map(CardId::from_index).collect();
    assert_ne!(collector.display_order(), canonical);

    // Drag whichever card is displayed first down to the last slot. The
    // host resolves the hit target; the collector gets the card id plus raw
    // pointer positions.
    let dragged = collector.display_order()[0];
    for event in pointer_gesture(&[(50.0, 30.0), (50.0, 250.0), (50.0, 490.0)]) {
        match event {
            Event::Pointer(p) => match p.kind {
                PointerEventKind::Down => {
                    assert!(collector.grab(dragged));
                }
                PointerEventKind::Move => {
                    assert!(collector.drag_to(p.pos, LIST).is_some());
                }
                PointerEventKind::Up => {
                    assert!(collector.release());
                }
            },
            _ => unreachable!(),
        }
    }
    assert_eq!(collector.display_order()[4], dragged);
    assert_eq!(collector.move_count(), 1);

    // Keyboard path feeds the same reorder machinery.
    let second = collector.display_order()[1];
    let alt_up = KeyEvent::new(KeyCode::Up).with_modifiers(Modifiers::ALT);
    assert!(collector.handle_key(second, alt_up));
    assert_eq!(collector.display_order()[0], second);

    let outcome = collector.submit(t0 + Duration::from_secs(3));
    assert_eq!(outcome.total_moves, 2);
    assert_eq!(outcome.reaction_time_ms, 3000);
    assert!((-1.0..=1.0).contains(&outcome.kendall_tau));

    let mut sorted = outcome.submitted_order.clone();
    sorted.sort();
    assert_eq!(sorted, canonical);
}

#[test]
fn spatial_trial_full_flow() {
    let mut rng = SmallRng::seed_from_u64(7);
    let t0 = Instant::now();
    let mut collector = SpatialCollector::new(EVENTS, SpatialConfig::default(), &mut rng, t0);
    let mut view = RecordingView::default();

    // Premature confirm: refused, nothing lost.
    let rejected = collector.submit(BOARD).unwrap_err();
    assert_eq!(
        rejected.error,
        SubmitError::IncompletePlacement { unplaced: 5 }
    );
    let mut collector = rejected.collector;

    // Drag four cards onto the board.
    let corners = [
        (150.0, 100.0),
        (850.0, 100.0),
        (150.0, 400.0),
        (850.0, 400.0),
    ];
    let mut t = t0;
    for (n, &(x, y)) in corners.iter().enumerate() {
        t += Duration::from_millis(500);
        let card = id(n as u32);
        collector
            .place_by_drag(&mut view, card, ScreenPoint::new(x, y), BOARD, t)
            .unwrap();
        assert_eq!(collector.release(t), Some(card));
    }

    // The last card is placed with the keyboard fallback.
    t += Duration::from_millis(500);
    assert!(collector.handle_key(&mut view, id(4), KeyEvent::new(KeyCode::Enter), t));
    assert!(collector.is_fully_placed());

    // The view was asked to render every placement.
    assert_eq!(view.rendered.len(), 5);
    assert_eq!(view.rendered[4], (id(4), NormPoint::CENTER));

    let outcome = collector.submit(BOARD).unwrap();
    assert_eq!(outcome.final_positions.len(), 5);

    // Distances are normalized-space, symmetric, zero-diagonal.
    let d = &outcome.pairwise_distances;
    for i in 0..5 {
        assert_eq!(d[i][i], 0.0);
        for j in 0..5 {
            assert_eq!(d[i][j], d[j][i]);
            assert!((0.0..=std::f64::consts::SQRT_2).contains(&d[i][j]));
        }
    }

    // Log: 4 gestures of (start, move, end) plus one keyboard place, with
    // non-decreasing timestamps.
    assert_eq!(outcome.interaction_log.len(), 13);
    assert!(
        outcome
            .interaction_log
            .windows(2)
            .all(|w| w[0].elapsed_ms <= w[1].elapsed_ms)
    );

    // The record is plain and serializable.
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"interaction_log\""));
    assert!(json.contains("\"board_dimensions\""));
}

#[test]
fn drag_capture_is_exclusive_across_the_gesture() {
    let mut rng = SmallRng::seed_from_u64(1);
    let t0 = Instant::now();
    let mut collector = SpatialCollector::new(EVENTS, SpatialConfig::default(), &mut rng, t0);
    let mut view = RecordingView::default();

    collector
        .place_by_drag(&mut view, id(0), ScreenPoint::new(200.0, 200.0), BOARD, t0)
        .unwrap();

    // A second card's grab-start mid-gesture is swallowed.
    assert!(
        collector
            .place_by_drag(&mut view, id(1), ScreenPoint::new(800.0, 300.0), BOARD, t0)
            .is_none()
    );
    assert_eq!(collector.dragged_card(), Some(id(0)));

    // After release, the other card can start its own gesture.
    collector.release(t0);
    assert!(
        collector
            .place_by_drag(&mut view, id(1), ScreenPoint::new(800.0, 300.0), BOARD, t0)
            .is_some()
    );
}

#[test]
fn teardown_mid_gesture_emits_nothing_further() {
    let mut rng = SmallRng::seed_from_u64(1);
    let t0 = Instant::now();
    let mut collector = SpatialCollector::new(EVENTS, SpatialConfig::default(), &mut rng, t0);
    let mut view = RecordingView::default();

    collector
        .place_by_drag(&mut view, id(0), ScreenPoint::new(200.0, 200.0), BOARD, t0)
        .unwrap();
    let renders_before = view.rendered.len();

    // Dropping the collector discards the live session with it; the view
    // receives nothing afterward.
    drop(collector);
    assert_eq!(view.rendered.len(), renders_before);
}
