use crate::search::{
    is_valid_cost,
    search_engines::{Backtracking, DynamicProgramming, TerminationCondition, UniformCostSearch},
    ProblemTransition, SearchError, SearchLimits, SearchProblem, SearchStatistics, Solution,
};
use serde::Deserialize;
use strum_macros::{Display, EnumIter};

/// Result of a search: the optimal solution, which is
/// [`Solution::unsolved`] if no goal is reachable, or the reason the problem
/// could not be solved.
pub type SearchResult<P> =
    Result<Solution<<P as SearchProblem>::State, <P as SearchProblem>::Action>, SearchError>;

pub trait SearchEngine {
    /// Find a minimum cost path from the start state of `problem` to one of
    /// its goal states.
    fn search<P: SearchProblem>(&mut self, problem: &P) -> SearchResult<P>;

    /// Statistics of the most recent search.
    fn statistics(&self) -> &SearchStatistics;
}

#[derive(clap::ValueEnum, Deserialize, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Exhaustive depth-first enumeration of all paths.")]
    Backtracking,
    #[clap(help = "Memoized future costs, requires an acyclic problem.")]
    DynamicProgramming,
    #[clap(help = "Uniform-cost search, i.e. Dijkstra's algorithm.")]
    UniformCost,
}

impl SearchEngineName {
    /// Run the named search engine on `problem`.
    pub fn search<P: SearchProblem>(&self, problem: &P, limits: SearchLimits) -> SearchResult<P> {
        match self {
            SearchEngineName::Backtracking => Backtracking::new(limits).search(problem),
            SearchEngineName::DynamicProgramming => {
                DynamicProgramming::new(limits).search(problem)
            }
            SearchEngineName::UniformCost => UniformCostSearch::new(limits).search(problem),
        }
    }
}

/// Expand `state`: count the expansion against the limits and generate its
/// transitions, rejecting any with a negative or NaN cost.
pub(crate) fn expand<P: SearchProblem>(
    problem: &P,
    state: &P::State,
    statistics: &mut SearchStatistics,
    termination_condition: &mut TerminationCondition,
) -> Result<Vec<ProblemTransition<P>>, SearchError> {
    termination_condition.register_expansion()?;
    statistics.increment_expanded_nodes();

    let transitions = problem.succ_and_cost(state);
    statistics.increment_generated_transitions(transitions.len());
    if transitions.is_empty() {
        statistics.increment_dead_ends();
    }
    if let Some(transition) = transitions
        .iter()
        .find(|transition| !is_valid_cost(transition.cost))
    {
        return Err(SearchError::NegativeCost {
            state: describe(state),
            action: transition.action.to_string(),
            next_state: describe(&transition.state),
            cost: transition.cost.into_inner(),
        });
    }
    Ok(transitions)
}

/// Render a state for error messages.
pub(crate) fn describe<S: std::fmt::Debug>(state: &S) -> String {
    format!("{:?}", state)
}
