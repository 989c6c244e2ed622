
//! **subiso** is a bit-parallel constraint-satisfaction search engine for
//! subgraph isomorphism: given a pattern graph `P` and a target graph `T`,
//! it finds an injective mapping `f: V(P) -> V(T)` that preserves adjacency
//! (and self-loops), or proves none exists.
//!
//! The entry point is [`solve`] (infallible) or [`solve_with_bucket`]
//! (checks target size and parameters up front, returning a [`SolverError`]
//! instead of running an oversized or misconfigured search). Callers supply
//! their own [`Graph`] implementation, or use the bundled [`EdgeListGraph`].

pub use crate::error::SolverError;
pub use crate::graph::{EdgeListGraph, Graph};
pub use crate::solver::{solve, solve_with_bucket, Params, SolveResult, TARGET_SIZE_BUCKETS};

pub mod bitgraph;
pub mod bitset;
pub mod domains;
mod error;
pub mod graph;
mod order;
pub mod propagate;
pub mod reader;
pub mod search;
mod solver;
mod supplemental;
