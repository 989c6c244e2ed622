//! Ambient error taxonomy (SPEC_FULL.md §10.B/§12). Grounded on
//! `relateby-pattern-rs`'s CLI crates (`relateby-pato`), which use
//! `thiserror` for exactly this kind of config/parse error surface; kept
//! separate from the core's `Satisfiable`/`Unsatisfiable`/`Aborted` outcome,
//! which spec.md §7 says is never an exception.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("target graph has {target_size} vertices, but the largest supported bitset bucket holds {max_supported}")]
    TargetTooLarge {
        target_size: usize,
        max_supported: usize,
    },

    #[error("invalid solver parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("failed to parse graph: {message}")]
    Parse { message: String },
}
