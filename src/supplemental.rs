//! Supplemental graph builder (spec.md component E). Grounded directly on
//! `sequential.cc::build_supplemental_graphs`: layer 0 is the base graph;
//! layers `1..max_graphs` are cumulative common-neighbour bands, built by
//! walking every length-2 path `v -> c -> w` (`w <= v`) and promoting the
//! pair `(v, w)` by exactly one band, testing the highest held band first so
//! a single path never cascades more than one level.

use crate::bitgraph::BitGraph;

/// `max_graphs = 1 + (l - 1) * k`, per spec.md §3/§4.E.
pub fn max_graphs(k: usize, l: usize) -> usize {
    1 + (l.saturating_sub(1)) * k
}

/// Builds `max_graphs(k, l)` layers from `base` (layer 0). `l` must be `1`
/// or `2` — larger `l` is rejected by `Params` validation before this runs
/// (spec.md §9 design note: `l > 2` is documented as unimplemented, not
/// guessed at).
pub fn build_supplemental_graphs(base: &BitGraph, k: usize, l: usize) -> Vec<BitGraph> {
    let n = base.size();
    let total = max_graphs(k, l);
    let mut layers: Vec<BitGraph> = (0..total).map(|_| BitGraph::new(n)).collect();
    layers[0] = base.clone();

    if l >= 2 {
        for v in 0..n {
            let mut nv = base.neighbourhood(v);
            loop {
                let c = nv.first_set_bit();
                if c < 0 {
                    break;
                }
                let c = c as usize;
                nv.unset(c);

                let mut nc = base.neighbourhood(c);
                loop {
                    let w = nc.first_set_bit();
                    if w < 0 || w as usize > v {
                        break;
                    }
                    let w = w as usize;
                    nc.unset(w);

                    // Promote (v, w) by exactly one band: find the highest
                    // band it already belongs to and bump it to the next.
                    let mut promoted = false;
                    for band in (1..k).rev() {
                        if layers[band].adjacent(v, w) {
                            layers[band + 1].add_edge(v, w);
                            promoted = true;
                            break;
                        }
                    }
                    if !promoted && k >= 1 {
                        layers[1].add_edge(v, w);
                    }
                }
            }
        }
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_graphs_matches_reference_defaults() {
        assert_eq!(max_graphs(4, 2), 5);
        assert_eq!(max_graphs(4, 1), 1);
    }

    #[test]
    fn triangle_common_neighbour_band() {
        // Triangle: every pair has exactly one common neighbour.
        let mut base = BitGraph::new(3);
        base.add_edge(0, 1);
        base.add_edge(1, 2);
        base.add_edge(0, 2);

        let layers = build_supplemental_graphs(&base, 4, 2);
        assert_eq!(layers.len(), 5);
        // layer 1: >=1 common neighbour -- every pair qualifies
        assert!(layers[1].adjacent(0, 1));
        assert!(layers[1].adjacent(1, 2));
        assert!(layers[1].adjacent(0, 2));
        // layer 2: >=2 common neighbours -- none qualify in a triangle
        assert!(!layers[2].adjacent(0, 1));
    }

    #[test]
    fn l1_produces_only_base_layer() {
        let mut base = BitGraph::new(3);
        base.add_edge(0, 1);
        let layers = build_supplemental_graphs(&base, 4, 1);
        assert_eq!(layers.len(), 1);
        assert!(layers[0].adjacent(0, 1));
    }

    #[test]
    fn star_centre_accumulates_many_common_neighbours() {
        // Star K_{1,4}: leaves all share the centre as a common neighbour,
        // so every pair of leaves should reach band 1 but not band 2.
        let mut base = BitGraph::new(5);
        for leaf in 1..5 {
            base.add_edge(0, leaf);
        }
        let layers = build_supplemental_graphs(&base, 4, 2);
        assert!(layers[1].adjacent(1, 2));
        assert!(layers[1].adjacent(3, 4));
        assert!(!layers[2].adjacent(1, 2));
    }
}
