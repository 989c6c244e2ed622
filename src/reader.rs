//! Thin edge-list text format reader (SPEC_FULL.md §10.E). Deliberately
//! minimal: parsing is glue, not a module the core depends on.
//!
//! Format:
//! ```text
//! n m
//! u0 v0
//! u1 v1
//! ...
//! loop w      (optional, one per self-loop)
//! ```
//! `n` is the vertex count, `m` the edge count, all indices `0`-based.

use crate::error::SolverError;
use crate::graph::EdgeListGraph;

pub fn parse(input: &str) -> Result<EdgeListGraph, SolverError> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines.next().ok_or_else(|| SolverError::Parse {
        message: "empty input: expected an \"n m\" header line".to_string(),
    })?;
    let mut header_fields = header.split_whitespace();
    let n = parse_usize(header_fields.next(), "n")?;
    let m = parse_usize(header_fields.next(), "m")?;

    let mut graph = EdgeListGraph::new(n);
    let mut edges_read = 0;
    for line in lines {
        let mut fields = line.split_whitespace();
        let first = fields.next().ok_or_else(|| SolverError::Parse {
            message: "unexpected blank edge line".to_string(),
        })?;

        if first == "loop" {
            let w = parse_usize(fields.next(), "loop vertex")?;
            check_vertex(w, n)?;
            graph.add_edge(w, w);
            continue;
        }

        let u: usize = first.parse().map_err(|_| SolverError::Parse {
            message: format!("expected a vertex index, got {first:?}"),
        })?;
        let v = parse_usize(fields.next(), "v")?;
        check_vertex(u, n)?;
        check_vertex(v, n)?;
        graph.add_edge(u, v);
        edges_read += 1;
    }

    if edges_read != m {
        return Err(SolverError::Parse {
            message: format!("header promised {m} edges, but {edges_read} were read"),
        });
    }

    Ok(graph)
}

fn parse_usize(field: Option<&str>, what: &str) -> Result<usize, SolverError> {
    let field = field.ok_or_else(|| SolverError::Parse {
        message: format!("missing {what}"),
    })?;
    field.parse().map_err(|_| SolverError::Parse {
        message: format!("expected a non-negative integer for {what}, got {field:?}"),
    })
}

fn check_vertex(v: usize, n: usize) -> Result<(), SolverError> {
    if v >= n {
        return Err(SolverError::Parse {
            message: format!("vertex {v} is out of range for a graph of size {n}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn parses_triangle() {
        let g = parse("3 3\n0 1\n1 2\n0 2\n").unwrap();
        assert_eq!(g.size(), 3);
        for v in 0..3 {
            assert_eq!(g.degree(v), 2);
        }
    }

    #[test]
    fn parses_self_loop_marker() {
        let g = parse("2 1\n0 1\nloop 1\n").unwrap();
        assert!(g.adjacent(1, 1));
        assert!(g.adjacent(0, 1));
    }

    #[test]
    fn rejects_edge_count_mismatch() {
        let err = parse("2 2\n0 1\n").unwrap_err();
        assert!(matches!(err, SolverError::Parse { .. }));
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let err = parse("2 1\n0 5\n").unwrap_err();
        assert!(matches!(err, SolverError::Parse { .. }));
    }

    #[test]
    fn rejects_missing_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, SolverError::Parse { .. }));
    }
}
