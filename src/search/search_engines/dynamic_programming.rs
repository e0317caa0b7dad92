//! Dynamic programming over future costs.
//!
//! The future cost of a state is 0 if it is a goal, and otherwise the minimum
//! over its transitions of the transition cost plus the future cost of the
//! state reached. Future costs are memoized together with the transition
//! achieving them, so every state is expanded at most once, and the solution
//! is read off the memo by walking forward from the start state.
//!
//! The evaluation uses an explicit work stack instead of recursion. A state
//! whose future cost depends on itself is reported as
//! [`SearchError::CyclicDependency`], so the problem must be acyclic over the
//! states reachable from the start.

use crate::search::{
    search_engines::{describe, expand, SearchEngine, SearchResult, TerminationCondition},
    Cost, ProblemTransition, SearchError, SearchLimits, SearchProblem, SearchStatistics,
    Solution, Transition,
};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};
use tracing::debug;

/// Memoized future cost of a state, with the transition achieving it. Dead
/// ends have infinite cost and no transition.
#[derive(Debug, Clone)]
struct FutureCost<S, A> {
    cost: Cost,
    best: Option<Transition<S, A>>,
}

/// A state whose future cost is being computed.
struct Frame<S, A> {
    state: S,
    transitions: Vec<Transition<S, A>>,
    /// Index of the next transition to evaluate.
    next: usize,
    /// Best candidate so far, as future cost via transition and its index.
    best: Option<(Cost, usize)>,
}

impl<S: Ord, A: Ord> Frame<S, A> {
    fn new(state: S, transitions: Vec<Transition<S, A>>) -> Self {
        Self {
            state,
            transitions,
            next: 0,
            best: None,
        }
    }

    /// Offer the current transition, whose target has the given future cost,
    /// as a candidate and move on to the next transition.
    fn offer_current(&mut self, future_cost: Cost) {
        let index = self.next;
        self.next += 1;
        let cost = self.transitions[index].cost + future_cost;
        if cost.into_inner().is_infinite() {
            return;
        }
        let improves = match self.best {
            None => true,
            Some((best_cost, best_index)) => {
                compare_candidates(
                    (cost, &self.transitions[index]),
                    (best_cost, &self.transitions[best_index]),
                ) == Ordering::Less
            }
        };
        if improves {
            self.best = Some((cost, index));
        }
    }

    fn into_future_cost(mut self) -> (S, FutureCost<S, A>) {
        let future_cost = match self.best {
            Some((cost, index)) => FutureCost {
                cost,
                best: Some(self.transitions.swap_remove(index)),
            },
            None => FutureCost {
                cost: OrderedFloat(f64::INFINITY),
                best: None,
            },
        };
        (self.state, future_cost)
    }
}

/// The tie-breaking order on candidate transitions: lower future cost first,
/// then the smaller action label, then the smaller next state, then the
/// smaller step cost. Any deterministic order would do; this one is only
/// relied upon for reproducible results.
pub fn compare_candidates<S: Ord, A: Ord>(
    (cost, transition): (Cost, &Transition<S, A>),
    (other_cost, other_transition): (Cost, &Transition<S, A>),
) -> Ordering {
    cost.cmp(&other_cost)
        .then_with(|| transition.action.cmp(&other_transition.action))
        .then_with(|| transition.state.cmp(&other_transition.state))
        .then_with(|| transition.cost.cmp(&other_transition.cost))
}

#[derive(Debug)]
pub struct DynamicProgramming {
    limits: SearchLimits,
    statistics: SearchStatistics,
}

impl DynamicProgramming {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            statistics: SearchStatistics::new(),
        }
    }

    /// Compute the future cost of `start` and of every state it depends on.
    fn evaluate<P: SearchProblem>(
        &mut self,
        problem: &P,
        start: P::State,
        termination_condition: &mut TerminationCondition,
    ) -> Result<HashMap<P::State, FutureCost<P::State, P::Action>>, SearchError> {
        let mut memo: HashMap<P::State, FutureCost<P::State, P::Action>> = HashMap::new();
        let mut in_progress: HashSet<P::State> = HashSet::new();

        let transitions = expand(problem, &start, &mut self.statistics, termination_condition)?;
        in_progress.insert(start.clone());
        let mut stack: Vec<Frame<P::State, P::Action>> = vec![Frame::new(start, transitions)];

        loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let Some(transition) = frame.transitions.get(frame.next) else {
                let frame = stack.pop().expect("stack is not empty");
                in_progress.remove(&frame.state);
                let (state, future_cost) = frame.into_future_cost();
                memo.insert(state, future_cost);
                continue;
            };

            let next_state = &transition.state;
            if problem.is_end(next_state) {
                frame.offer_current(OrderedFloat(0.));
                continue;
            }
            if let Some(known) = memo.get(next_state) {
                self.statistics.increment_cache_hits();
                frame.offer_current(known.cost);
                continue;
            }
            if in_progress.contains(next_state) {
                return Err(SearchError::CyclicDependency {
                    state: describe(next_state),
                });
            }
            if depth >= self.limits.max_depth {
                return Err(SearchError::DepthLimitExceeded {
                    limit: self.limits.max_depth,
                    state: describe(next_state),
                });
            }

            let next_state = next_state.clone();
            let transitions =
                expand(problem, &next_state, &mut self.statistics, termination_condition)?;
            in_progress.insert(next_state.clone());
            stack.push(Frame::new(next_state, transitions));
        }

        Ok(memo)
    }

    fn solve<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination_condition: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let start = problem.start_state();
        if problem.is_end(&start) {
            self.statistics.register_solution_cost(OrderedFloat(0.));
            return Ok(Solution::new(vec![]));
        }

        let memo = self.evaluate(problem, start.clone(), termination_condition)?;
        debug!(memoized_states = memo.len(), "future costs computed");

        let mut history: Vec<ProblemTransition<P>> = vec![];
        let mut state = start;
        while !problem.is_end(&state) {
            match memo.get(&state).and_then(|entry| entry.best.as_ref()) {
                Some(transition) => {
                    history.push(transition.clone());
                    state = transition.state.clone();
                }
                None => return Ok(Solution::unsolved()),
            }
        }

        let solution = Solution::new(history);
        self.statistics
            .register_solution_cost(solution.total_cost());
        Ok(solution)
    }
}

impl SearchEngine for DynamicProgramming {
    fn search<P: SearchProblem>(&mut self, problem: &P) -> SearchResult<P> {
        self.statistics.start_search();
        let mut termination_condition = TerminationCondition::new(&self.limits);
        let result = self.solve(problem, &mut termination_condition);
        self.statistics.finalise_search();
        termination_condition.finalise();
        result
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{GraphProblem, Symbol, TransportAction, TransportationProblem};
    use crate::test_utils::*;

    fn solve<P: SearchProblem>(problem: &P) -> SearchResult<P> {
        DynamicProgramming::new(SearchLimits::default()).search(problem)
    }

    fn states<S: Clone, A>(solution: &Solution<S, A>) -> Vec<S> {
        solution
            .history()
            .unwrap()
            .iter()
            .map(|transition| transition.state.clone())
            .collect()
    }

    #[test]
    fn transportation_ten_blocks() {
        let solution = solve(&TransportationProblem::new(10)).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(6.));
        // At block 2 walking and the tram tie, "tram" sorts first.
        assert_eq!(states(&solution), vec![2, 4, 5, 10]);
        assert_eq!(
            solution.history().unwrap()[1].action,
            TransportAction::Tram
        );
    }

    #[test]
    fn transportation_six_blocks() {
        let solution = solve(&TransportationProblem::new(6)).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(4.));
    }

    #[test]
    fn each_state_expanded_once() {
        let mut engine = DynamicProgramming::new(SearchLimits::default());
        engine.search(&TransportationProblem::new(10)).unwrap();
        // Blocks 1 to 9 are expanded, block 10 is the goal.
        assert_eq!(engine.statistics().expanded_nodes(), 9);
        assert!(engine.statistics().cache_hits() > 0);
    }

    #[test]
    fn large_problem_does_not_overflow_stack() {
        let solution = solve(&TransportationProblem::new(50_000)).unwrap();
        assert!(solution.is_solved());
        let total: f64 = solution
            .history()
            .unwrap()
            .iter()
            .map(|transition| transition.cost.into_inner())
            .sum();
        assert_eq!(solution.total_cost().into_inner(), total);
    }

    #[test]
    fn start_is_goal() {
        let solution = solve(&TransportationProblem::new(1)).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(0.));
        assert!(solution.is_solved());
        assert!(solution.is_empty());
    }

    #[test]
    fn ties_broken_by_action_label() {
        let problem = GraphProblem::from_text(TIE_GRAPH_TEXT).unwrap();
        let solution = solve(&problem).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(2.));
        assert_eq!(solution.history().unwrap()[0].action, Symbol::new("bike"));
    }

    #[test]
    fn dead_ends_are_skipped() {
        let problem = GraphProblem::from_text(DEAD_END_GRAPH_TEXT).unwrap();
        let solution = solve(&problem).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(3.));
        assert_eq!(
            states(&solution),
            vec![Symbol::new("yard"), Symbol::new("garden")]
        );
    }

    #[test]
    fn unreachable_goal() {
        let problem = GraphProblem::from_text(UNREACHABLE_GRAPH_TEXT).unwrap();
        let solution = solve(&problem).unwrap();
        assert!(!solution.is_solved());
        assert!(solution.total_cost().into_inner().is_infinite());
    }

    #[test]
    fn cycle_detected() {
        let problem = GraphProblem::from_text(CYCLIC_GRAPH_TEXT).unwrap();
        assert_eq!(
            solve(&problem),
            Err(SearchError::CyclicDependency {
                state: "\"a\"".to_string()
            })
        );
    }

    #[test]
    fn depth_limit() {
        let limits = SearchLimits {
            max_depth: 5,
            ..SearchLimits::default()
        };
        let result = DynamicProgramming::new(limits).search(&TransportationProblem::new(100));
        assert!(matches!(
            result,
            Err(SearchError::DepthLimitExceeded { limit: 5, .. })
        ));
    }

    #[test]
    fn comparator_orders_by_cost_then_action() {
        let walk = Transition::new(TransportAction::Walk, 3u64, 1.);
        let tram = Transition::new(TransportAction::Tram, 4u64, 2.);
        assert_eq!(
            compare_candidates((OrderedFloat(4.), &walk), (OrderedFloat(5.), &tram)),
            Ordering::Less
        );
        assert_eq!(
            compare_candidates((OrderedFloat(5.), &walk), (OrderedFloat(5.), &tram)),
            Ordering::Greater
        );
        assert_eq!(
            compare_candidates((OrderedFloat(5.), &walk), (OrderedFloat(5.), &walk)),
            Ordering::Equal
        );
    }
}
