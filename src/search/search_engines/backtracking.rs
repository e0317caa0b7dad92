//! Exhaustive backtracking search. Every path from the start state is
//! enumerated depth first, so this is exponential in the path length and only
//! suitable for small problems.
//!
//! There is no cycle detection: on a problem with a cycle reachable from the
//! start the search fails once a path exceeds
//! [`SearchLimits::max_depth`](crate::search::SearchLimits).

use crate::search::{
    search_engines::{describe, expand, SearchEngine, SearchResult, TerminationCondition},
    Cost, ProblemTransition, SearchError, SearchLimits, SearchProblem, SearchStatistics,
    Solution, Transition,
};
use ordered_float::OrderedFloat;
use tracing::debug;

/// The best solution found so far.
struct BestSolution<S, A> {
    cost: Cost,
    history: Option<Vec<Transition<S, A>>>,
}

impl<S: Clone, A: Clone> BestSolution<S, A> {
    fn new() -> Self {
        Self {
            cost: OrderedFloat(f64::INFINITY),
            history: None,
        }
    }

    /// Replace the best solution if `cost` is strictly better, so that among
    /// equally good solutions the first one found is kept.
    fn consider(&mut self, cost: Cost, history: &[Transition<S, A>]) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.history = Some(history.to_vec());
            true
        } else {
            false
        }
    }

    fn into_solution(self) -> Solution<S, A> {
        match self.history {
            Some(history) => Solution::new(history),
            None => Solution::unsolved(),
        }
    }
}

#[derive(Debug)]
pub struct Backtracking {
    limits: SearchLimits,
    statistics: SearchStatistics,
}

impl Backtracking {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            statistics: SearchStatistics::new(),
        }
    }

    fn explore<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination_condition: &mut TerminationCondition,
    ) -> Result<BestSolution<P::State, P::Action>, SearchError> {
        let mut best = BestSolution::new();
        let start = problem.start_state();
        if problem.is_end(&start) {
            best.consider(OrderedFloat(0.), &[]);
            self.statistics.register_solution_cost(OrderedFloat(0.));
            return Ok(best);
        }

        // One frame per state on the current path, holding the transitions
        // that remain to be explored from it. `path_costs[i]` is the cost of
        // the first `i` transitions of `history`.
        let mut stack: Vec<std::vec::IntoIter<ProblemTransition<P>>> = vec![expand(
            problem,
            &start,
            &mut self.statistics,
            termination_condition,
        )?
        .into_iter()];
        let mut history: Vec<ProblemTransition<P>> = vec![];
        let mut path_costs: Vec<Cost> = vec![OrderedFloat(0.)];

        while let Some(frame) = stack.last_mut() {
            let Some(transition) = frame.next() else {
                stack.pop();
                history.pop();
                path_costs.pop();
                continue;
            };

            if history.len() >= self.limits.max_depth {
                return Err(SearchError::DepthLimitExceeded {
                    limit: self.limits.max_depth,
                    state: describe(&transition.state),
                });
            }

            let total_cost = path_costs[history.len()] + transition.cost;
            if problem.is_end(&transition.state) {
                history.push(transition);
                self.statistics.register_solution_cost(total_cost);
                if best.consider(total_cost, &history) {
                    debug!(
                        cost = total_cost.into_inner(),
                        length = history.len(),
                        "improved solution"
                    );
                }
                history.pop();
                continue;
            }

            let successors = expand(
                problem,
                &transition.state,
                &mut self.statistics,
                termination_condition,
            )?;
            history.push(transition);
            path_costs.push(total_cost);
            stack.push(successors.into_iter());
        }

        Ok(best)
    }
}

impl SearchEngine for Backtracking {
    fn search<P: SearchProblem>(&mut self, problem: &P) -> SearchResult<P> {
        self.statistics.start_search();
        let mut termination_condition = TerminationCondition::new(&self.limits);
        let result = self.explore(problem, &mut termination_condition);
        self.statistics.finalise_search();
        termination_condition.finalise();
        Ok(result?.into_solution())
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
        Backtracking::new(SearchLimits::default()).search(problem)
    }

    #[test]
    fn transportation_ten_blocks() {
        let solution = solve(&TransportationProblem::new(10)).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(6.));
        // Walking first means the all-walk prefix is explored first, and the
        // first cost 6 path found is kept.
        let actions: Vec<TransportAction> = solution
            .history()
            .unwrap()
            .iter()
            .map(|transition| transition.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                TransportAction::Walk,
                TransportAction::Walk,
                TransportAction::Walk,
                TransportAction::Walk,
                TransportAction::Tram,
            ]
        );
    }

    #[test]
    fn start_is_goal() {
        let solution = solve(&TransportationProblem::new(1)).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(0.));
        assert_eq!(solution.history(), Some(&[][..]));
    }

    #[test]
    fn ties_keep_first_found() {
        let problem = GraphProblem::from_text(TIE_GRAPH_TEXT).unwrap();
        let solution = solve(&problem).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(2.));
        assert_eq!(solution.history().unwrap()[0].state, Symbol::new("a"));
    }

    #[test]
    fn dead_ends_are_skipped() {
        let problem = GraphProblem::from_text(DEAD_END_GRAPH_TEXT).unwrap();
        let mut engine = Backtracking::new(SearchLimits::default());
        let solution = engine.search(&problem).unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(3.));
        assert_eq!(engine.statistics().dead_ends(), 1);
    }

    #[test]
    fn unreachable_goal() {
        let problem = GraphProblem::from_text(UNREACHABLE_GRAPH_TEXT).unwrap();
        let solution = solve(&problem).unwrap();
        assert!(!solution.is_solved());
        assert!(solution.total_cost().into_inner().is_infinite());
    }

    #[test]
    fn cycles_hit_depth_limit() {
        let problem = GraphProblem::from_text(CYCLIC_GRAPH_TEXT).unwrap();
        let limits = SearchLimits {
            max_depth: 20,
            ..SearchLimits::default()
        };
        let result = Backtracking::new(limits).search(&problem);
        assert!(matches!(
            result,
            Err(SearchError::DepthLimitExceeded { limit: 20, .. })
        ));
    }

    #[test]
    fn path_at_depth_limit_allowed() {
        let limits = SearchLimits {
            max_depth: 3,
            ..SearchLimits::default()
        };
        // 1 -> 2 -> 3 -> 4 by walking is the longest path.
        let solution = Backtracking::new(limits)
            .search(&TransportationProblem::new(4))
            .unwrap();
        assert_eq!(solution.total_cost(), OrderedFloat(3.));
    }

    #[test]
    fn negative_cost_rejected() {
        struct Downhill;
        impl SearchProblem for Downhill {
            type State = u8;
            type Action = Symbol;

            fn start_state(&self) -> u8 {
                0
            }

            fn is_end(&self, state: &u8) -> bool {
                *state == 2
            }

            fn succ_and_cost(&self, state: &u8) -> Vec<Transition<u8, Symbol>> {
                vec![Transition::new(Symbol::new("slide"), state + 1, -1.)]
            }
        }

        assert!(matches!(
            solve(&Downhill),
            Err(SearchError::NegativeCost { .. })
        ));
    }
}
