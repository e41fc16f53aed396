//! Chunkwise finds regions of high similarity between two ordered sequences of feature vectors, such as the chunk embeddings of two proteins. The core is Smith-Waterman local alignment with affine gaps, run over a precomputed similarity matrix instead of a substitution scheme, followed by an extractor that masks each accepted alignment and re-runs the dynamic program to find ranked, non-overlapping matches.
//!
//! Both stages are pure, synchronous functions of their inputs. The only failures are malformed inputs rejected when a [`SimilarityMatrix`] is built; finding nothing is reported as a score of 0 and an empty alignment.
//!
//! # Example: single alignment
//!
//! ```rust
//! use chunkwise::{Scoring, SimilarityMatrix, smith_waterman};
//!
//! let similarity = SimilarityMatrix::from_rows(&[
//!     [0.9, 0.8, 0.3],
//!     [0.7, 0.9, 0.4],
//!     [0.3, 0.5, 0.8],
//! ])
//! .unwrap();
//!
//! let result = smith_waterman(&similarity, &Scoring::default());
//! assert_eq!(result.alignment, vec![(0, 0), (1, 1), (2, 2)]);
//! assert!((result.score - 1.1).abs() < 1e-9);
//! ```
//!
//! # Example: multiple non-overlapping alignments
//!
//! ```rust
//! use chunkwise::{ExtractConfig, SimilarityMatrix, find_alignments};
//!
//! // Two diagonal runs: a strong one in the top rows, a weaker one in the bottom rows
//! let mut similarity = SimilarityMatrix::zeros(8, 8);
//! for i in 0..4 {
//!     similarity.set(i, i, 0.9).unwrap();
//!     similarity.set(i + 4, i, 0.8).unwrap();
//! }
//!
//! let alignments = find_alignments(&similarity, &ExtractConfig::default());
//! assert_eq!(alignments.len(), 2);
//! assert_eq!(alignments[0].alignment, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
//! assert_eq!(alignments[1].alignment, vec![(4, 0), (5, 1), (6, 2), (7, 3)]);
//! ```
//!
//! # Example: from embeddings to residue ranges
//!
//! ```rust
//! use chunkwise::{
//!     AlignedRegion, ChunkConfig, ExtractConfig, chunk_spans, cosine_similarity, find_alignments,
//! };
//!
//! // One embedding per chunk, as produced by an external model
//! let first: Vec<Vec<f32>> = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
//! let second: Vec<Vec<f32>> = vec![vec![1.0, 0.1], vec![0.1, 1.0], vec![0.9, 1.0]];
//!
//! let similarity = cosine_similarity(&first, &second).unwrap();
//! let first_spans = chunk_spans(20, &ChunkConfig::default()).unwrap();
//! let second_spans = chunk_spans(20, &ChunkConfig::default()).unwrap();
//!
//! for scored in find_alignments(&similarity, &ExtractConfig::default()) {
//!     if let Some(region) = AlignedRegion::from_alignment(&scored, &first_spans, &second_spans).unwrap() {
//!         println!("{:?} ~ {:?}", region.first, region.second);
//!     }
//! }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod chunk;
mod r#const;
mod error;
pub mod extract;
mod matrix;
pub mod similarity;
pub mod smith_waterman;

pub use chunk::{AlignedRegion, ChunkConfig, ChunkSpan, chunk_spans};
pub use error::{Error, Result};
pub use extract::{
    AlignmentIter, Extractor, find_alignments, find_alignments_parallel, find_multiple_alignments,
};
pub use matrix::SimilarityMatrix;
pub use r#const::*;
pub use similarity::cosine_similarity;
pub use smith_waterman::{LocalAlignment, ScoreMatrix, SmithWaterman, align, smith_waterman};

/// Matched item pairs `(i, j)`, 0-indexed and strictly increasing in both coordinates
pub type Alignment = Vec<(usize, usize)>;

/// Accepted alignments in discovery order
pub type AlignmentSet = Vec<ScoredAlignment>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredAlignment {
    pub score: f64,
    pub alignment: Alignment,
}

impl ScoredAlignment {
    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.alignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }
}

impl From<ScoredAlignment> for (f64, Alignment) {
    fn from(scored: ScoredAlignment) -> Self {
        (scored.score, scored.alignment)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoring {
    /// Added to the score when a gap starts. Typically negative.
    pub gap_open: f64,
    /// Added to the score when a gap continues in the same direction. Typically negative and
    /// smaller in magnitude than `gap_open`.
    pub gap_extend: f64,
    /// Subtracted from every similarity before it is used, so only similarities above it raise
    /// the score of a match
    pub threshold: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring {
            gap_open: GAP_OPEN,
            gap_extend: GAP_EXTEND,
            threshold: SCORE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractConfig {
    pub scoring: Scoring,
    /// Alignments scoring below this end the extraction
    pub min_score: f64,
    /// Alignments with fewer matched pairs than this end the extraction
    pub min_length: usize,
    /// Upper bound on the number of alignments returned
    pub max_alignments: usize,
}

impl ExtractConfig {
    /// Whether a masked cell can never be matched again. A zeroed cell contributes
    /// `-threshold` to a diagonal step, while stepping around it costs at most two gap opens.
    pub fn masking_is_exclusive(&self) -> bool {
        self.scoring.threshold > -2.0 * self.scoring.gap_open.min(self.scoring.gap_extend)
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            scoring: Scoring::default(),
            min_score: MIN_SCORE,
            min_length: MIN_LENGTH,
            max_alignments: MAX_ALIGNMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.scoring.gap_open, -0.2);
        assert_eq!(config.scoring.gap_extend, -0.1);
        assert_eq!(config.scoring.threshold, 0.5);
        assert_eq!(config.min_score, 1.0);
        assert_eq!(config.min_length, 3);
        assert_eq!(config.max_alignments, 10);
        assert!(config.masking_is_exclusive());
    }

    #[test]
    fn test_masking_not_exclusive() {
        let config = ExtractConfig {
            scoring: Scoring {
                gap_open: -1.0,
                ..Scoring::default()
            },
            ..ExtractConfig::default()
        };
        assert!(!config.masking_is_exclusive());
    }

    #[test]
    fn test_scored_alignment_into_tuple() {
        let scored = ScoredAlignment {
            score: 2.5,
            alignment: vec![(0, 1), (2, 3)],
        };
        assert_eq!(scored.len(), 2);
        let (score, alignment): (f64, Alignment) = scored.into();
        assert_eq!(score, 2.5);
        assert_eq!(alignment, vec![(0, 1), (2, 3)]);
    }
}
