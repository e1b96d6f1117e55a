//! The [`SearchProblem`] trait.

use smallvec::SmallVec;

/// A problem formulation traversed by local-search drivers.
///
/// Drivers (hill climbing, simulated annealing, beam search, ...) program
/// against this trait; they never see the concrete landscape. Every method
/// is side-effect free and deterministic, so a `&dyn SearchProblem` may be
/// shared freely across threads.
pub trait SearchProblem: Send + Sync {
    /// A point in the search space.
    type State: Copy;

    /// A labelled move between states.
    type Action: Copy;

    /// Objective value of `state`. Larger is better.
    fn objective(&self, state: &Self::State) -> f64;

    /// Enumerate the valid `(action, successor)` pairs of `state`.
    ///
    /// The order is fixed and the sequence is re-derivable: two calls with
    /// the same state yield the same items.
    fn actions<'a>(
        &'a self,
        state: &Self::State,
    ) -> Box<dyn Iterator<Item = (Self::Action, Self::State)> + 'a>;

    /// Whether `state` is admissible in this problem.
    fn is_valid(&self, state: &Self::State) -> bool;

    /// Successor states without their action labels.
    ///
    /// The `SmallVec<[_; 8]>` covers 8-connected grids without heap
    /// allocation.
    fn successors(&self, state: &Self::State) -> SmallVec<[Self::State; 8]> {
        self.actions(state).map(|(_, next)| next).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integers on `[0, 10]`, objective `-|x - 7|`.
    struct Line;

    impl SearchProblem for Line {
        type State = i32;
        type Action = i32;

        fn objective(&self, state: &i32) -> f64 {
            -f64::from((state - 7).abs())
        }

        fn actions<'a>(&'a self, state: &i32) -> Box<dyn Iterator<Item = (i32, i32)> + 'a> {
            let s = *state;
            Box::new(
                [-1, 1]
                    .into_iter()
                    .map(move |d| (d, s + d))
                    .filter(move |(_, n)| self.is_valid(n)),
            )
        }

        fn is_valid(&self, state: &i32) -> bool {
            (0..=10).contains(state)
        }
    }

    #[test]
    fn successors_strip_labels() {
        assert_eq!(Line.successors(&0).as_slice(), &[1]);
        assert_eq!(Line.successors(&5).as_slice(), &[4, 6]);
    }

    #[test]
    fn usable_as_trait_object() {
        let p: &dyn SearchProblem<State = i32, Action = i32> = &Line;
        let best = p
            .successors(&6)
            .into_iter()
            .max_by(|a, b| p.objective(a).total_cmp(&p.objective(b)));
        assert_eq!(best, Some(7));
    }
}
