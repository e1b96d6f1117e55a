//! Move-enumeration compliance helpers.
//!
//! These functions check the enumeration contract of a
//! [`LandscapeProblem`] exhaustively over every cell of its landscape.
//! Reused across the problem test modules.

use crate::problem::LandscapeProblem;
use crest_core::Position;
use indexmap::IndexSet;

fn all_positions(problem: &LandscapeProblem) -> Vec<Position> {
    let mut out = Vec::with_capacity(problem.landscape().cell_count());
    for y in 0..problem.height() as i64 {
        for x in 0..problem.width() as i64 {
            out.push(
                problem
                    .position(x, y)
                    .expect("every grid cell forms a position"),
            );
        }
    }
    out
}

/// Assert that every cell validates and every candidate validates.
pub fn assert_candidates_valid(problem: &LandscapeProblem) {
    for p in all_positions(problem) {
        assert!(problem.validate(&p), "{p} should be valid");
        for (d, n) in problem.actions(&p) {
            assert!(problem.validate(&n), "{d} from {p} produced invalid {n}");
        }
    }
}

/// Assert at most 8 candidates, no repeated labels, no repeated targets.
pub fn assert_labels_unique(problem: &LandscapeProblem) {
    for p in all_positions(problem) {
        let acts: Vec<_> = problem.actions(&p).collect();
        assert!(acts.len() <= 8, "{} candidates from {p}", acts.len());
        let labels: IndexSet<_> = acts.iter().map(|(d, _)| *d).collect();
        assert_eq!(labels.len(), acts.len(), "duplicate labels from {p}");
        let targets: IndexSet<_> = acts.iter().map(|(_, n)| n.to_tuple3()).collect();
        assert_eq!(targets.len(), acts.len(), "duplicate targets from {p}");
    }
}

/// Assert that enumeration follows the fixed direction order.
pub fn assert_direction_order(problem: &LandscapeProblem) {
    for p in all_positions(problem) {
        let dirs: Vec<_> = problem.actions(&p).map(|(d, _)| d).collect();
        let mut sorted = dirs.clone();
        sorted.sort();
        assert_eq!(dirs, sorted, "out-of-order directions from {p}");
    }
}

/// Assert that every move from `a` to `b` is undone by the opposite move
/// from `b`.
pub fn assert_neighbours_symmetric(problem: &LandscapeProblem) {
    for p in all_positions(problem) {
        for (d, n) in problem.actions(&p) {
            assert_eq!(
                problem.step(&n, d.opposite()),
                Some(p),
                "neighbour symmetry violated: {d} reaches {n} from {p} but {} does not return",
                d.opposite()
            );
        }
    }
}

/// Assert that two enumerations of the same position agree.
pub fn assert_enumeration_deterministic(problem: &LandscapeProblem) {
    for p in all_positions(problem) {
        let a: Vec<_> = problem.actions(&p).collect();
        let b: Vec<_> = problem.actions(&p).collect();
        assert_eq!(a, b, "enumeration from {p} is non-deterministic");
    }
}

/// Run all compliance checks on a problem.
pub fn run_full_compliance(problem: &LandscapeProblem) {
    assert_candidates_valid(problem);
    assert_labels_unique(problem);
    assert_direction_order(problem);
    assert_neighbours_symmetric(problem);
    assert_enumeration_deterministic(problem);
}
