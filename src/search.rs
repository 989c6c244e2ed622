//! Backtracking search (spec.md component H). Grounded on
//! `sequential.cc::search`/`assign`; the stack-free plain recursion with an
//! owned domain clone per branch follows spec.md §9's "domain copy on
//! branch" design note. The depth-bounded, poll-at-every-node abort check
//! mirrors the push/pop discipline of petgraph's `isomorphism.rs`
//! `Vf2State`, reworked here as ordinary recursion since the core's
//! recursion depth is bounded by `pattern_size`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::bitgraph::BitGraph;
use crate::domains::Domain;
use crate::propagate::cheap_all_different;

/// Outcome of one `search` invocation (spec.md §1/§7): a positive mapping,
/// an exhausted search, or cooperative cancellation mid-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Satisfiable,
    Unsatisfiable,
    Aborted,
}

/// Everything `assign`/`search` need that does not change across the
/// recursion: the (already reordered) supplemental graph layers, how many
/// layers to consult, the once-computed tiebreak key, and the abort flag.
pub struct SearchContext<'a> {
    pub pattern_graphs: &'a [BitGraph],
    pub target_graphs: &'a [BitGraph],
    pub g_end: usize,
    pub tiebreak: &'a [(u32, u32)],
    pub abort: &'a AtomicBool,
}

/// Assigns `branch_v <- f_v` into `domains` (which must already exclude the
/// branched domain), narrows every remaining domain by injectivity and
/// cross-layer adjacency, then runs `cheap_all_different`. Returns `false`
/// as soon as any domain is emptied or the propagator finds a Hall
/// violation.
pub fn assign(ctx: &SearchContext, domains: &mut Vec<Domain>, branch_v: usize, f_v: usize) -> bool {
    for d in domains.iter_mut() {
        d.values.unset(f_v);

        for g in 0..ctx.g_end {
            if ctx.pattern_graphs[g].adjacent(branch_v, d.v) {
                ctx.target_graphs[g].intersect_with_row(f_v, &mut d.values);
            }
        }

        d.popcount = d.values.popcount();
        if d.popcount == 0 {
            return false;
        }
    }

    cheap_all_different(domains, ctx.tiebreak)
}

/// Smallest-domain-first branching with the pattern-degree tiebreak,
/// ascending value ordering within the chosen domain, recursive
/// assign-and-propagate, and abort polling at every node entry.
pub fn search(
    ctx: &SearchContext,
    assignments: &mut Vec<usize>,
    domains: Vec<Domain>,
    nodes: &mut u64,
    propagations: &mut u64,
) -> Outcome {
    if ctx.abort.load(Ordering::Relaxed) {
        return Outcome::Aborted;
    }
    *nodes += 1;

    let mut branch_idx: Option<usize> = None;
    for (i, d) in domains.iter().enumerate() {
        let better = match branch_idx {
            None => true,
            Some(bi) => {
                let b = &domains[bi];
                d.popcount < b.popcount
                    || (d.popcount == b.popcount && ctx.tiebreak[d.v] > ctx.tiebreak[b.v])
            }
        };
        if better {
            branch_idx = Some(i);
        }
    }

    let branch_idx = match branch_idx {
        None => return Outcome::Satisfiable,
        Some(i) => i,
    };
    let branch_v = domains[branch_idx].v;
    let remaining = domains[branch_idx].values.clone();

    for f_v in remaining.iter_ones() {
        assignments[branch_v] = f_v;

        let mut new_domains: Vec<Domain> = domains
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != branch_idx)
            .map(|(_, d)| d.clone())
            .collect();

        *propagations += 1;
        if !assign(ctx, &mut new_domains, branch_v, f_v) {
            continue;
        }

        match search(ctx, assignments, new_domains, nodes, propagations) {
            Outcome::Satisfiable => return Outcome::Satisfiable,
            Outcome::Aborted => return Outcome::Aborted,
            Outcome::Unsatisfiable => continue,
        }
    }

    Outcome::Unsatisfiable
}
