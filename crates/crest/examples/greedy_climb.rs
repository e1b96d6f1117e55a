//! Greedy hill climbing over an image-derived landscape.
//!
//! Demonstrates:
//!   1. Loading a landscape from an image (or building a synthetic one)
//!   2. Enumerating moves with `LandscapeProblem::next`
//!   3. Ranking positions with the descending-height ordering
//!   4. Recording the climb in a `PathTrace` and exporting it as JSON
//!
//! Run with:
//!   cargo run --example greedy_climb -- [IMAGE] [OUT.json]
//!
//! Without IMAGE a synthetic two-peak landscape is used. Set
//! `RUST_LOG=debug` to see the preprocessing steps.

use crest::prelude::*;
use crest_test_utils::twin_peaks;
use log::info;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;

// ─── Steepest ascent ────────────────────────────────────────────

fn climb(problem: &LandscapeProblem, start: Position) -> PathTrace {
    let mut trace = PathTrace::new();
    let mut current = start;
    trace.push(current);
    loop {
        let Some(best) = problem.next(&current).min_by_key(Position::descending_key) else {
            break;
        };
        if best.z() <= current.z() {
            break;
        }
        current = best;
        trace.push(current);
    }
    trace
}

// ─── Restart points: corners, edge midpoints, centre ────────────

fn starts(problem: &LandscapeProblem) -> Vec<Position> {
    let w = problem.width() as i64;
    let h = problem.height() as i64;
    let xs = [0, w / 2, w - 1];
    let ys = [0, h / 2, h - 1];
    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
        .filter_map(|(x, y)| problem.position(x, y))
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let mut args = std::env::args().skip(1);

    let problem = match args.next() {
        Some(path) => LandscapeProblem::load(&path)?,
        None => LandscapeProblem::new(twin_peaks(64, 48, (48, 30), (12, 10))),
    };
    info!(
        "landscape {}x{} (range {:?})",
        problem.width(),
        problem.height(),
        problem.landscape().min_max()
    );

    // Rank every climb's summit; the heap pops the highest first.
    let mut summits = BinaryHeap::new();
    let mut traces = Vec::new();
    for (i, start) in starts(&problem).into_iter().enumerate() {
        let trace = climb(&problem, start);
        let summit = *trace.last().ok_or("empty trace")?;
        println!(
            "climb {i}: {start} -> {summit} in {} steps",
            trace.len() - 1
        );
        summits.push(Reverse((HeightOrder(summit), i)));
        traces.push(trace);
    }

    let Some(Reverse((HeightOrder(best), idx))) = summits.pop() else {
        return Err("landscape has no start positions".into());
    };
    let trace = &traces[idx];
    println!("best summit {best} via {:?}", trace.directions().unwrap_or_default());
    for (x, y, z) in trace.to_tuples() {
        println!("  {x:>4} {y:>4} {z:>4}");
    }

    if let Some(out) = args.next() {
        SurfaceExport::new(problem.landscape())
            .with_path(trace)
            .write_json(&out)?;
        println!("wrote {out}");
    }
    Ok(())
}
