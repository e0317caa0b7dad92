//! A solution is the optimal total cost of a search problem together with the
//! transitions that achieve it. This module provides the [`Solution`] struct
//! and a serialisable [`SolutionReport`].

use crate::search::{Cost, Transition};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt::{Debug, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A> {
    total_cost: Cost,
    history: Option<Vec<Transition<S, A>>>,
}

impl<S, A> Solution<S, A> {
    /// A solution following `history`, whose total cost is the sum of the
    /// transition costs.
    pub fn new(history: Vec<Transition<S, A>>) -> Self {
        let total_cost = history
            .iter()
            .fold(OrderedFloat(0.), |total, transition| total + transition.cost);
        Self {
            total_cost,
            history: Some(history),
        }
    }

    /// The outcome of a search that did not reach a goal: infinite cost and
    /// no history.
    pub fn unsolved() -> Self {
        Self {
            total_cost: OrderedFloat(f64::INFINITY),
            history: None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.history.is_some()
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn history(&self) -> Option<&[Transition<S, A>]> {
        self.history.as_deref()
    }

    pub fn into_history(self) -> Option<Vec<Transition<S, A>>> {
        self.history
    }

    pub fn len(&self) -> usize {
        self.history.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Debug, A: Display> Solution<S, A> {
    pub fn to_report(&self) -> SolutionReport {
        SolutionReport {
            solved: self.is_solved(),
            total_cost: self.total_cost.into_inner(),
            history: self
                .history()
                .unwrap_or_default()
                .iter()
                .map(|transition| StepReport {
                    action: transition.action.to_string(),
                    state: format!("{:?}", transition.state),
                    cost: transition.cost.into_inner(),
                })
                .collect(),
        }
    }
}

impl<S: Debug, A: Display> Display for Solution<S, A> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.history {
            None => write!(f, "no solution"),
            Some(history) => {
                write!(f, "totalCost: {}", self.total_cost)?;
                if !history.is_empty() {
                    let steps = history
                        .iter()
                        .map(|transition| {
                            format!(
                                "({}, {:?}, {})",
                                transition.action, transition.state, transition.cost
                            )
                        })
                        .join("\n");
                    write!(f, "\n{}", steps)?;
                }
                Ok(())
            }
        }
    }
}

/// A flat, serialisable view of a [`Solution`]. Unsolved problems report an
/// infinite cost, which JSON renders as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    pub solved: bool,
    pub total_cost: f64,
    pub history: Vec<StepReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub action: String,
    pub state: String,
    pub cost: f64,
}
