//! Levenshtein distance with a traceable alignment.
//!
//! Beyond the distance itself, this crate reconstructs one deterministic
//! minimum-cost alignment through the DP matrix, turns it into an ordered edit
//! script with a stepwise transformation of the source into the target, and
//! derives a normalized similarity ratio.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  matrix.rs  │────▶│ backtrack.rs │────▶│   script.rs   │
//! │  (compute)  │     │ (backtrack)  │     │ (build_trace) │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  ratio.rs   │   weights (1, 1, 2)
//! │  (ratio)    │
//! └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    verify/                          │
//! │  (TallPair shape wrapper, debug-mode contracts)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage is a pure function over its inputs. Matrices are built once and
//! never mutated afterwards, so concurrent calls need no coordination.
//!
//! # Usage
//!
//! ```
//! use levtrace::{align, CostWeights, TallPair};
//!
//! let pair = TallPair::new("lawn", "flaw");
//! let alignment = align(&pair, CostWeights::UNIT).unwrap();
//!
//! assert_eq!(alignment.distance, 2);
//! assert_eq!(alignment.trace.final_text(), Some("flaw"));
//! assert_eq!(alignment.ratio, Some(0.75));
//! ```

// Module declarations
mod backtrack;
pub mod error;
mod matrix;
mod ratio;
mod script;
pub mod testing;
mod types;
pub mod verify;

use serde::Serialize;

// Re-exports for public API
pub use backtrack::{backtrack, choose_step, Step};
pub use error::{AlignError, Result};
pub use matrix::{compute, distance};
pub use ratio::ratio;
pub use script::{build_trace, Splice};
pub use types::{
    CostWeights, DistanceMatrix, Edit, EditOp, EditTrace, Grid, OperationMatrix, Sequence,
    SparsePathMatrix, TraceStep,
};
pub use verify::TallPair;

/// Everything the pipeline produces for one pair.
#[derive(Debug, Clone, Serialize)]
pub struct Alignment {
    pub source: Sequence,
    pub target: Sequence,
    /// The inputs were given shorter-first and have been swapped.
    pub swapped: bool,
    pub weights: CostWeights,
    pub distance: usize,
    /// `None` when both sequences are empty.
    pub ratio: Option<f64>,
    pub distances: DistanceMatrix,
    pub path: SparsePathMatrix,
    pub operations: OperationMatrix,
    pub trace: EditTrace,
}

/// Run the full pipeline on a tall pair.
///
/// With an empty target the three matrices are empty and the trace holds only
/// the untouched source; no backtracking is attempted.
pub fn align(pair: &TallPair, weights: CostWeights) -> Result<Alignment> {
    let source = pair.source().as_slice();
    let target = pair.target().as_slice();

    let (distance, distances) = compute(source, target, weights);

    let (path, operations, trace) = if distances.is_empty() {
        (Grid::empty(), Grid::empty(), EditTrace::starting_from(source))
    } else {
        let path = backtrack(source, target, &distances)?;
        let (trace, operations) = build_trace(source, target, &path)?;
        (path, operations, trace)
    };

    let similarity = match ratio(source, target) {
        Ok(r) => Some(r),
        Err(AlignError::UndefinedRatio) => None,
        Err(e) => return Err(e),
    };

    Ok(Alignment {
        source: pair.source().clone(),
        target: pair.target().clone(),
        swapped: pair.swapped(),
        weights,
        distance,
        ratio: similarity,
        distances,
        path,
        operations,
        trace,
    })
}
