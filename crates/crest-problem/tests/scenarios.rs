use crest_core::{Direction, HeightOrder, Position, PositionError};
use crest_landscape::{LoadConfig, LoadError};
use crest_problem::{LandscapeProblem, PathTrace, SurfaceExport};
use crest_test_utils::{constant, cone, twin_peaks, TempImage};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::thread;

fn pos(x: i64, y: i64, z: i32) -> Position {
    Position::new(x, y, z).unwrap()
}

// ── Position contract ───────────────────────────────────────────

#[test]
fn position_boundaries() {
    assert!(matches!(
        Position::new(-1, 0, 0),
        Err(PositionError::NegativeCoordinate { .. })
    ));
    assert!(matches!(
        Position::new(0, 0, 256),
        Err(PositionError::ValueOutOfRange { value: 256 })
    ));
    assert!(Position::new(0, 0, 0).is_ok());
    assert!(Position::new(0, 0, 255).is_ok());
}

// ── End-to-end scenarios ────────────────────────────────────────

#[test]
fn flat_interior_offers_all_eight_moves() {
    let problem = LandscapeProblem::new(constant(4, 4, 100));
    let acts: Vec<_> = problem.actions(&pos(1, 1, 100)).collect();
    let dirs: Vec<_> = acts.iter().map(|(d, _)| *d).collect();
    assert_eq!(dirs, Direction::ALL);
    assert!(acts.iter().all(|(_, p)| p.z() == 100));
}

#[test]
fn flat_corner_offers_r_u_ru() {
    let problem = LandscapeProblem::new(constant(4, 4, 100));
    let acts: Vec<_> = problem.actions(&pos(0, 0, 100)).collect();
    assert_eq!(
        acts,
        vec![
            (Direction::R, pos(1, 0, 100)),
            (Direction::U, pos(0, 1, 100)),
            (Direction::RU, pos(1, 1, 100)),
        ]
    );
}

#[test]
fn missing_image_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let result = LandscapeProblem::load(dir.path().join("absent.png"));
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn non_image_fails_to_decode() {
    let file = TempImage::raw_bytes("notes.png", b"plain text");
    assert!(matches!(
        LandscapeProblem::load(file.path()),
        Err(LoadError::Decode { .. })
    ));
}

#[test]
fn raw_load_reproduces_the_grid() {
    let source = cone(12, 8, 4, 5, 15);
    let file = TempImage::from_landscape(&source);
    let problem = LandscapeProblem::load_with(file.path(), &LoadConfig::raw()).unwrap();
    assert_eq!(problem.landscape(), &source);
    assert_eq!((problem.width(), problem.height()), (12, 8));
}

#[test]
fn default_load_quarters_resolution() {
    let file = TempImage::uniform(48, 32, 60);
    let problem = LandscapeProblem::load(file.path()).unwrap();
    assert_eq!((problem.width(), problem.height()), (12, 8));
    assert_eq!(problem.objective_value(5, 5), 60);
}

// ── Driver-style usage ──────────────────────────────────────────

/// Steepest ascent using the descending-height key.
fn climb(problem: &LandscapeProblem, start: Position) -> PathTrace {
    let mut trace = PathTrace::new();
    let mut current = start;
    trace.push(current);
    while let Some(best) = problem.next(&current).min_by_key(Position::descending_key) {
        if best.z() <= current.z() {
            break;
        }
        current = best;
        trace.push(current);
    }
    trace
}

#[test]
fn steepest_ascent_reaches_the_cone_peak() {
    let problem = LandscapeProblem::new(cone(15, 11, 10, 7, 12));
    let start = problem.position(0, 0).unwrap();
    let trace = climb(&problem, start);
    assert_eq!(trace.last().map(Position::to_tuple3), Some((10, 7, 255)));
    assert!(trace.is_monotone_ascending());
    assert!(trace.directions().is_some());
}

#[test]
fn steepest_ascent_can_stop_on_a_local_peak() {
    let problem = LandscapeProblem::new(twin_peaks(30, 10, (25, 5), (4, 4)));
    let start = problem.position(2, 2).unwrap();
    let end = *climb(&problem, start).last().unwrap();
    assert_eq!(end.to_tuple3(), (4, 4, 200));
}

#[test]
fn best_first_frontier_pops_highest() {
    let problem = LandscapeProblem::new(cone(9, 9, 4, 4, 20));
    let start = problem.position(0, 0).unwrap();
    let mut frontier: BinaryHeap<_> = problem
        .next(&start)
        .map(|p| Reverse(HeightOrder(p)))
        .collect();
    let Reverse(HeightOrder(first)) = frontier.pop().unwrap();
    assert_eq!(first.to_tuple3(), (1, 1, 255 - 3 * 20));
}

#[test]
fn problem_is_shared_across_threads() {
    let problem = Arc::new(LandscapeProblem::new(cone(16, 16, 8, 8, 10)));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let problem = Arc::clone(&problem);
            thread::spawn(move || {
                let start = problem.position(i * 5, 15 - i * 5).unwrap();
                climb(&problem, start).last().map(Position::to_tuple3)
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Some((8, 8, 255)));
    }
}

#[test]
fn surface_export_carries_the_climb() {
    let problem = LandscapeProblem::new(cone(6, 6, 5, 5, 30));
    let trace = climb(&problem, problem.position(0, 0).unwrap());
    let json = SurfaceExport::new(problem.landscape())
        .with_path(&trace)
        .to_json_string()
        .unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["path"].as_array().unwrap().len(), trace.len());
    assert_eq!(v["values"].as_array().unwrap().len(), 6);
}
