use ordered_float::OrderedFloat;

/// Cumulative or per-transition cost. Costs are non-negative, with infinity
/// standing for "no path".
pub type Cost = OrderedFloat<f64>;

/// Returns `true` if the cost is usable by the solvers, i.e. neither negative
/// nor NaN.
pub fn is_valid_cost(cost: Cost) -> bool {
    !cost.into_inner().is_nan() && cost.into_inner() >= 0.
}
