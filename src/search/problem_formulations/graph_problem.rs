//! A search problem given by an explicit labelled directed graph, read from a
//! TOML description such as:
//!
//! ```toml
//! start = "home"
//! goals = ["work"]
//!
//! [[edges]]
//! from = "home"
//! to = "station"
//! action = "walk"
//! cost = 1.0
//! ```

use crate::search::{is_valid_cost, Cost, ProblemLoadError, SearchProblem, Symbol, Transition};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    path::Path,
};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct GraphDescription {
    start: Symbol,
    goals: Vec<Symbol>,
    #[serde(default)]
    nodes: Vec<Symbol>,
    #[serde(default)]
    edges: Vec<EdgeDescription>,
}

#[derive(Debug, Deserialize)]
struct EdgeDescription {
    from: Symbol,
    to: Symbol,
    action: Symbol,
    cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    pub action: Symbol,
    pub cost: Cost,
}

#[derive(Debug)]
pub struct GraphProblem {
    graph: DiGraph<Symbol, GraphEdge>,
    node_indices: HashMap<Symbol, NodeIndex>,
    start: Symbol,
    goals: HashSet<Symbol>,
}

impl GraphProblem {
    pub fn from_path(path: &Path) -> Result<Self, ProblemLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemLoadError> {
        let description: GraphDescription = toml::from_str(text)?;
        Self::from_description(description)
    }

    fn from_description(description: GraphDescription) -> Result<Self, ProblemLoadError> {
        if description.goals.is_empty() {
            return Err(ProblemLoadError::InvalidProblem(
                "at least one goal node is required".to_string(),
            ));
        }

        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut add_node = |graph: &mut DiGraph<Symbol, GraphEdge>, name: Symbol| {
            *node_indices
                .entry(name)
                .or_insert_with(|| graph.add_node(name))
        };

        add_node(&mut graph, description.start);
        for &goal in &description.goals {
            add_node(&mut graph, goal);
        }
        for &node in &description.nodes {
            add_node(&mut graph, node);
        }
        for edge in &description.edges {
            let cost = Cost::from(edge.cost);
            if !is_valid_cost(cost) {
                return Err(ProblemLoadError::InvalidProblem(format!(
                    "edge {} from {} to {} has cost {}, costs must be non-negative",
                    edge.action, edge.from, edge.to, edge.cost
                )));
            }
            let from = add_node(&mut graph, edge.from);
            let to = add_node(&mut graph, edge.to);
            graph.add_edge(
                from,
                to,
                GraphEdge {
                    action: edge.action,
                    cost,
                },
            );
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph problem"
        );
        Ok(Self {
            graph,
            node_indices,
            start: description.start,
            goals: description.goals.into_iter().collect(),
        })
    }

    pub fn graph(&self) -> &DiGraph<Symbol, GraphEdge> {
        &self.graph
    }

    pub fn node_index(&self, name: Symbol) -> Option<NodeIndex> {
        self.node_indices.get(&name).copied()
    }

    pub fn goals(&self) -> &HashSet<Symbol> {
        &self.goals
    }
}

impl SearchProblem for GraphProblem {
    type State = Symbol;
    type Action = Symbol;

    fn start_state(&self) -> Symbol {
        self.start
    }

    fn is_end(&self, state: &Symbol) -> bool {
        self.goals.contains(state)
    }

    fn succ_and_cost(&self, state: &Symbol) -> Vec<Transition<Symbol, Symbol>> {
        let Some(&node) = self.node_indices.get(state) else {
            return vec![];
        };
        // petgraph walks outgoing edges newest first, sort them back into
        // declaration order.
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| {
                let weight = edge.weight();
                Transition::new(weight.action, self.graph[edge.target()], weight.cost)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn successors_in_declaration_order() {
        let problem = GraphProblem::from_text(CITY_GRAPH_TEXT).unwrap();
        let actions: Vec<String> = problem
            .succ_and_cost(&Symbol::new("home"))
            .iter()
            .map(|transition| transition.action.to_string())
            .collect();
        assert_eq!(actions, vec!["walk", "bus", "taxi"]);
    }

    #[test]
    fn goals_and_start() {
        let problem = GraphProblem::from_text(CITY_GRAPH_TEXT).unwrap();
        assert_eq!(problem.start_state(), Symbol::new("home"));
        assert!(problem.is_end(&Symbol::new("office")));
        assert!(!problem.is_end(&Symbol::new("home")));
    }

    #[test]
    fn dead_end_has_no_successors() {
        let problem = GraphProblem::from_text(DEAD_END_GRAPH_TEXT).unwrap();
        assert!(problem.succ_and_cost(&Symbol::new("cellar")).is_empty());
        assert!(problem.succ_and_cost(&Symbol::new("unknown")).is_empty());
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let problem = GraphProblem::from_text(UNREACHABLE_GRAPH_TEXT).unwrap();
        assert!(problem.node_index(Symbol::new("island")).is_some());
    }

    #[test]
    fn negative_cost_rejected() {
        let text = r#"
        start = "a"
        goals = ["b"]

        [[edges]]
        from = "a"
        to = "b"
        action = "jump"
        cost = -1.0
        "#;
        assert!(matches!(
            GraphProblem::from_text(text),
            Err(ProblemLoadError::InvalidProblem(_))
        ));
    }

    #[test]
    fn missing_goals_rejected() {
        let text = r#"
        start = "a"
        goals = []
        "#;
        assert!(matches!(
            GraphProblem::from_text(text),
            Err(ProblemLoadError::InvalidProblem(_))
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            GraphProblem::from_text("start = "),
            Err(ProblemLoadError::Toml(_))
        ));
    }

    #[test]
    fn from_path_works() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CITY_GRAPH_TEXT.as_bytes()).unwrap();
        let problem = GraphProblem::from_path(file.path()).unwrap();
        assert_eq!(problem.graph().edge_count(), 7);
    }

    #[test]
    fn from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GraphProblem::from_path(&dir.path().join("missing.toml")),
            Err(ProblemLoadError::Io(_))
        ));
    }
}
