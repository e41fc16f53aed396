//! The [Smith Waterman algorithm](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm) performs local sequence alignment, finding the best-scoring matching subregion between two sequences while allowing the match to start and end anywhere.
//!
//! Here the "characters" are opaque items (e.g. chunk embeddings of two proteins) and the substitution score of a pair is read from a precomputed [`SimilarityMatrix`](crate::SimilarityMatrix), shifted down by [`Scoring::threshold`](crate::Scoring::threshold) so only similarities above it push the score up.
//!
//! Gaps are affine: each cell records which move produced it ([`TraceTag`]), and a gap leaving a cell that was itself produced by a gap in the same direction pays the extend penalty instead of the open penalty. This is the single-table approximation rather than the three-table Gotoh formulation, so full `O(n1 * n2)` score and tag tables are kept.
//!
//! ```text
//! similarity (threshold 0.5, gap open -0.2, gap extend -0.1):
//!        b0   b1   b2
//! a0  [ 0.9  0.8  0.3 ]
//! a1  [ 0.7  0.9  0.4 ]
//! a2  [ 0.3  0.5  0.8 ]
//!
//! score matrix (boundary row/column omitted), tags: D diagonal, U up, L left, . stop
//!        b0      b1      b2
//! a0  [ 0.4 D  0.3 D  0.1 L ]
//! a1  [ 0.2 D  0.8 D  0.6 L ]
//! a2  [ 0.0 .  0.6 U  1.1 D ]
//!
//! traceback from 1.1: (2,2) <- (1,1) <- (0,0)
//! ```

mod algorithm;
mod matrix;
mod traceback;

pub use algorithm::SmithWaterman;
pub use matrix::{ScoreMatrix, Table, TraceTag};
pub use traceback::{Step, TracebackIter};

use crate::{Alignment, Scoring, SimilarityMatrix};

/// Result of a single local alignment.
#[derive(Debug, Clone)]
pub struct LocalAlignment {
    /// Best local score, 0 when no cell scores above 0
    pub score: f64,
    /// Matched item pairs in increasing order, empty when `score` is 0
    pub alignment: Alignment,
    /// Full `(n1 + 1) x (n2 + 1)` score table, kept for diagnostics
    pub score_matrix: ScoreMatrix,
}

/// Finds the single best local alignment in `similarity`.
///
/// Never fails: degenerate inputs (no rows, no columns, nothing above the threshold) produce a
/// score of 0 and an empty alignment.
pub fn smith_waterman(similarity: &SimilarityMatrix, scoring: &Scoring) -> LocalAlignment {
    let mut sw = SmithWaterman::new(scoring);
    let (score, alignment) = sw.align(similarity);
    LocalAlignment {
        score,
        alignment,
        score_matrix: sw.into_score_matrix(),
    }
}

/// [`smith_waterman`] with the scoring parameters given positionally.
pub fn align(
    similarity: &SimilarityMatrix,
    gap_open: f64,
    gap_extend: f64,
    threshold: f64,
) -> LocalAlignment {
    smith_waterman(
        similarity,
        &Scoring {
            gap_open,
            gap_extend,
            threshold,
        },
    )
}
