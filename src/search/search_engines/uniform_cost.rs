//! Uniform-cost search, i.e. Dijkstra's algorithm on the implicit graph of
//! the problem. States are finalised in order of their cost from the start,
//! so the first goal removed from the frontier is reached optimally, provided
//! costs are non-negative.

use crate::search::{
    search_engines::{expand, SearchEngine, SearchResult, TerminationCondition},
    PriorityFrontier, SearchLimits, SearchNodeStatus, SearchProblem, SearchSpace,
    SearchStatistics, Solution,
};
use ordered_float::OrderedFloat;
use tracing::{info, trace};

#[derive(Debug)]
pub struct UniformCostSearch {
    limits: SearchLimits,
    statistics: SearchStatistics,
}

impl UniformCostSearch {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            statistics: SearchStatistics::new(),
        }
    }

    fn solve<P: SearchProblem>(
        &mut self,
        problem: &P,
        termination_condition: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let mut search_space: SearchSpace<P::State, P::Action> =
            SearchSpace::new(problem.start_state());
        let mut frontier = PriorityFrontier::new();

        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.));
        frontier.update(root_node.get_node_id(), root_node.get_g());

        while let Some((node_id, past_cost)) = frontier.remove_min() {
            search_space.get_node_mut(node_id).close();
            let state = search_space.get_state(node_id).clone();
            trace!(?state, cost = past_cost.into_inner(), "expanding");

            if problem.is_end(&state) {
                self.statistics.register_solution_cost(past_cost);
                return Ok(search_space.extract_solution(node_id));
            }

            let transitions = expand(problem, &state, &mut self.statistics, termination_condition)?;
            for transition in transitions {
                let cost = past_cost + transition.cost;
                let child_node = search_space.insert_or_get_node(&transition.state);
                if child_node.get_status() == SearchNodeStatus::Closed
                    || cost >= child_node.get_g()
                {
                    continue;
                }
                let child_node_id = child_node.get_node_id();
                child_node.open_from(cost, node_id, transition);
                frontier.update(child_node_id, cost);
                self.statistics.increment_frontier_updates();
            }
        }

        info!(
            discovered_states = search_space.len(),
            "frontier exhausted without reaching a goal"
        );
        Ok(Solution::unsolved())
    }
}

impl SearchEngine for UniformCostSearch {
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
