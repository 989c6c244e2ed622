//! The "cheap all-different" propagator (spec.md component G). Grounded
//! directly on `sequential.cc::cheap_all_different`: a Hall-interval sweep
//! over domains ordered by scarcity, without building a full bipartite
//! matching (contrast petgraph's `matching.rs`, which does build one).

use crate::bitset::BitSet;
use crate::domains::Domain;

/// Orders domains by ascending popcount, tiebreaking by descending
/// `tiebreak[d.v]` (larger key = more local pattern structure = branch
/// first), sweeps them accumulating Hall sets, and prunes/locks values.
/// Returns `false` on a Hall violation (some domain becomes empty, or a
/// group's union undershoots its size).
pub fn cheap_all_different(domains: &mut [Domain], tiebreak: &[(u32, u32)]) -> bool {
    let mut order: Vec<usize> = (0..domains.len()).collect();
    order.sort_by(|&a, &b| {
        let da = &domains[a];
        let db = &domains[b];
        da.popcount
            .cmp(&db.popcount)
            .then_with(|| tiebreak[db.v].cmp(&tiebreak[da.v]))
    });

    let capacity = domains.first().map(|d| d.values.capacity()).unwrap_or(0);
    let mut hall = BitSet::with_capacity(capacity);
    let mut domains_so_far = BitSet::with_capacity(capacity);
    let mut neighbours_so_far: u32 = 0;

    for idx in order {
        let d = &mut domains[idx];

        d.values.intersect_with_complement(&hall);
        d.popcount = d.values.popcount();
        if d.popcount == 0 {
            return false;
        }

        domains_so_far.union_with(&d.values);
        neighbours_so_far += 1;

        let union_popcount = domains_so_far.popcount();
        if union_popcount < neighbours_so_far {
            return false;
        } else if union_popcount == neighbours_so_far {
            neighbours_so_far = 0;
            hall.union_with(&domains_so_far);
            domains_so_far.unset_all();
        }
    }

    true
}
