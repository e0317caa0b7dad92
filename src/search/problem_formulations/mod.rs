mod graph_problem;
mod search_problem;
mod transportation_problem;

pub use graph_problem::{GraphEdge, GraphProblem};
pub use search_problem::{ProblemTransition, SearchProblem};
pub use transportation_problem::{TransportAction, TransportationProblem};
