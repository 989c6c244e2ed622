//! Entry point: `Params`, `SolveResult`, and `solve()` (spec.md §6).
//! Grounded on `sequential.cc::run`/`save_result` and on
//! `examples/original_source/glasgow/result.hh`'s `Result` struct, which
//! `SolveResult` mirrors field for field.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::bitgraph::BitGraph;
use crate::domains::initialise_domains;
use crate::error::SolverError;
use crate::graph::Graph;
use crate::order::degree_sort;
use crate::propagate::cheap_all_different;
use crate::search::{search, Outcome, SearchContext};
use crate::supplemental::{build_supplemental_graphs, max_graphs};

/// Tuning + cancellation (spec.md §6). `k` bounds the supplemental-graph
/// band depth (`1..=5`), `l` the number of banding passes (`1` or `2` --
/// larger values are documented as unimplemented, spec.md §9). `abort` is
/// polled at every search node (spec.md §5).
pub struct Params {
    pub k: usize,
    pub l: usize,
    pub abort: Arc<AtomicBool>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            k: 4,
            l: 2,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(1..=5).contains(&self.k) {
            return Err(SolverError::InvalidParams {
                reason: format!("k must be in 1..=5, got {}", self.k),
            });
        }
        if !(1..=2).contains(&self.l) {
            return Err(SolverError::InvalidParams {
                reason: format!("l must be 1 or 2 (l > 2 is unimplemented), got {}", self.l),
            });
        }
        Ok(())
    }
}

/// Mirrors `glasgow/result.hh`'s `Result` struct field for field.
#[derive(Debug, Clone, Default)]
pub struct SolveResult {
    /// Empty if none found or the search aborted.
    pub isomorphism: BTreeMap<usize, usize>,
    pub nodes: u64,
    pub propagations: u64,
    /// Always 0 or 1: enumeration is out of scope (spec.md §1).
    pub solution_count: u32,
    /// True iff the search concluded (Satisfiable or Unsatisfiable).
    pub complete: bool,
    pub extra_stats: Vec<String>,
}

/// The reordered, bit-encoded working copy of both graphs plus the
/// once-computed tiebreak key. Built fresh per `solve()` call, so there is
/// no cross-call state to corrupt (spec.md §9 Open Question).
struct PreparedInstance {
    pattern_graphs: Vec<BitGraph>,
    target_graphs: Vec<BitGraph>,
    pattern_order: Vec<usize>,
    target_order: Vec<usize>,
    isolated_vertices: Vec<usize>,
    pattern_size: usize,
    target_size: usize,
    tiebreak: Vec<(u32, u32)>,
}

impl PreparedInstance {
    fn build(pattern: &dyn Graph, target: &dyn Graph) -> Self {
        let full_pattern_size = pattern.size();
        let target_size = target.size();

        let mut pattern_order = Vec::with_capacity(full_pattern_size);
        let mut isolated_vertices = Vec::new();
        for v in 0..full_pattern_size {
            if pattern.degree(v) == 0 {
                isolated_vertices.push(v);
            } else {
                pattern_order.push(v);
            }
        }
        let pattern_size = pattern_order.len();

        let mut pattern0 = BitGraph::new(pattern_size);
        for i in 0..pattern_size {
            for j in 0..pattern_size {
                if pattern.adjacent(pattern_order[i], pattern_order[j]) {
                    pattern0.add_edge(i, j);
                }
            }
        }

        let mut target_order: Vec<usize> = (0..target_size).collect();
        degree_sort(target, &mut target_order);

        let mut target0 = BitGraph::new(target_size);
        for i in 0..target_size {
            for j in 0..target_size {
                if target.adjacent(target_order[i], target_order[j]) {
                    target0.add_edge(i, j);
                }
            }
        }

        let mut tiebreak = vec![(0u32, 0u32); pattern_size];
        for j in 0..pattern_size {
            tiebreak[j].0 = pattern0.degree(j);
        }
        for i in 0..pattern_size {
            for j in 0..pattern_size {
                if pattern0.adjacent(i, j) {
                    tiebreak[j].1 += tiebreak[i].0;
                }
            }
        }

        PreparedInstance {
            pattern_graphs: vec![pattern0],
            target_graphs: vec![target0],
            pattern_order,
            target_order,
            isolated_vertices,
            pattern_size,
            target_size,
            tiebreak,
        }
    }

    fn build_supplemental(&mut self, k: usize, l: usize) -> usize {
        self.pattern_graphs = build_supplemental_graphs(&self.pattern_graphs[0], k, l);
        self.target_graphs = build_supplemental_graphs(&self.target_graphs[0], k, l);
        max_graphs(k, l)
    }

    /// Rebuilds `{pattern_label -> target_label}` from a reordered-index
    /// assignment vector, then appends isolated pattern vertices, each
    /// mapped to the lowest unused target label -- scanning forward and
    /// never backward, matching `sequential.cc::save_result`.
    fn reconstruct(&self, assignments: &[usize]) -> BTreeMap<usize, usize> {
        let mut isomorphism = BTreeMap::new();
        let mut used = vec![false; self.target_size];
        for v in 0..self.pattern_size {
            let target_label = self.target_order[assignments[v]];
            used[target_label] = true;
            isomorphism.insert(self.pattern_order[v], target_label);
        }

        let mut t = 0usize;
        for &iso_v in &self.isolated_vertices {
            while t < self.target_size && used[t] {
                t += 1;
            }
            used[t] = true;
            isomorphism.insert(iso_v, t);
        }

        isomorphism
    }
}

/// `solve(pattern, target, params) -> SolveResult` (spec.md §6).
///
/// Returns an empty, incomplete result immediately if `|V(P)| > |V(T)|`.
/// Otherwise builds supplemental graphs, initial domains, and runs the
/// cheap all-different check before falling back to backtracking search;
/// every one of those stages can conclude Unsatisfiable without entering
/// `search` at all, in which case `nodes` stays `0` but `complete` is still
/// `true` (spec.md §9 / SPEC_FULL.md "resolved details").
pub fn solve(pattern: &dyn Graph, target: &dyn Graph, params: &Params) -> SolveResult {
    if pattern.size() > target.size() {
        log::debug!(
            "pattern has {} vertices, target only {}: skipping",
            pattern.size(),
            target.size()
        );
        return SolveResult::default();
    }

    let mut instance = PreparedInstance::build(pattern, target);
    let g_end = instance.build_supplemental(params.k, params.l);
    log::debug!(
        "built {} supplemental layers for pattern_size={} target_size={}",
        g_end,
        instance.pattern_size,
        instance.target_size
    );

    let mut result = SolveResult::default();

    let mut domains = match initialise_domains(
        &instance.pattern_graphs,
        &instance.target_graphs,
        instance.pattern_size,
        instance.target_size,
        g_end,
    ) {
        Some(domains) => domains,
        None => {
            log::trace!("hall necessary condition failed during domain initialisation");
            result.complete = true;
            return result;
        }
    };

    if !cheap_all_different(&mut domains, &instance.tiebreak) {
        log::trace!("top-level cheap_all_different found a Hall violation");
        result.complete = true;
        return result;
    }

    let ctx = SearchContext {
        pattern_graphs: &instance.pattern_graphs,
        target_graphs: &instance.target_graphs,
        g_end,
        tiebreak: &instance.tiebreak,
        abort: &params.abort,
    };

    let mut assignments = vec![usize::MAX; instance.pattern_size];
    let mut nodes = 0u64;
    let mut propagations = 0u64;
    let outcome = search(&ctx, &mut assignments, domains, &mut nodes, &mut propagations);

    result.nodes = nodes;
    result.propagations = propagations;

    match outcome {
        Outcome::Satisfiable => {
            result.isomorphism = instance.reconstruct(&assignments);
            result.solution_count = 1;
            result.complete = true;
        }
        Outcome::Unsatisfiable => {
            result.complete = true;
        }
        Outcome::Aborted => {
            result.complete = false;
        }
    }

    log::debug!(
        "solve finished: outcome={:?} nodes={} propagations={}",
        outcome,
        result.nodes,
        result.propagations
    );

    result
}

/// Bitset capacity buckets reproducing the reference's monomorphised widths
/// (spec.md §6/§9, design note (b)); our `BitSet` is dynamically sized, so
/// these buckets only bound memory use and surface a configuration error
/// for targets that exceed the largest one, rather than selecting a type.
pub const TARGET_SIZE_BUCKETS: [usize; 5] = [64, 128, 256, 512, 1024];

/// Same as [`solve`], but first checks `target.size()` against
/// [`TARGET_SIZE_BUCKETS`] and `params` against [`Params::validate`],
/// returning a `SolverError` instead of running an oversized or
/// misconfigured search (spec.md §7: "a target exceeding the largest bucket
/// should be reported as a configuration error by the caller").
pub fn solve_with_bucket(
    pattern: &dyn Graph,
    target: &dyn Graph,
    params: &Params,
) -> Result<SolveResult, SolverError> {
    params.validate()?;

    let max_supported = *TARGET_SIZE_BUCKETS.last().unwrap();
    if target.size() > max_supported {
        return Err(SolverError::TargetTooLarge {
            target_size: target.size(),
            max_supported,
        });
    }

    Ok(solve(pattern, target, params))
}
