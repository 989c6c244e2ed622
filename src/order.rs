//! Degree sort (spec.md component D). Grounded on `sequential.cc`'s
//! `degree_sort`: orders a vector of vertex indices by descending degree,
//! stable on ties so original index order is preserved among equal degrees.

use crate::graph::Graph;

/// Reorders `order` in place by descending `graph.degree(v)`, preferring
/// higher-degree vertices at lower positions. Only used on the target side;
/// it does not affect correctness, only domain-filtering locality.
pub fn degree_sort(graph: &impl Graph, order: &mut [usize]) {
    order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
}
