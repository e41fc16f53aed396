use log::warn;

use crate::{AlignmentSet, ExtractConfig, SCORE_THRESHOLD, Scoring, SimilarityMatrix, SmithWaterman};

mod iter;
mod parallel;

pub use iter::AlignmentIter;
pub use parallel::find_alignments_parallel;

/// Finds ranked, non-overlapping local alignments by repeatedly aligning a masked copy of a
/// similarity matrix. Reuse one extractor across matrices to reuse its score tables.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
    smith_waterman: SmithWaterman,
}

impl Extractor {
    pub fn new(config: &ExtractConfig) -> Self {
        if !config.masking_is_exclusive() {
            warn!(
                "threshold {} does not outweigh gap penalties ({}, {}): masked cells may be realigned",
                config.scoring.threshold, config.scoring.gap_open, config.scoring.gap_extend
            );
        }
        Self {
            config: config.clone(),
            smith_waterman: SmithWaterman::new(&config.scoring),
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Alignments of `similarity` in discovery order, yielded lazily. The matrix is cloned, so the
    /// caller's copy is never masked.
    pub fn iter(&mut self, similarity: &SimilarityMatrix) -> AlignmentIter<'_> {
        AlignmentIter::new(&mut self.smith_waterman, &self.config, similarity.clone())
    }

    pub fn find(&mut self, similarity: &SimilarityMatrix) -> AlignmentSet {
        self.iter(similarity).collect()
    }

    /// Like [`Extractor::find`], appending to `alignments` instead of allocating.
    pub fn find_into(&mut self, similarity: &SimilarityMatrix, alignments: &mut AlignmentSet) {
        alignments.extend(self.iter(similarity));
    }
}

pub fn find_alignments(similarity: &SimilarityMatrix, config: &ExtractConfig) -> AlignmentSet {
    Extractor::new(config).find(similarity)
}

/// [`find_alignments`] with the parameters given positionally. The similarity threshold is
/// fixed to [`SCORE_THRESHOLD`], the same one a default single alignment uses.
pub fn find_multiple_alignments(
    similarity: &SimilarityMatrix,
    gap_open: f64,
    gap_extend: f64,
    min_score: f64,
    min_length: usize,
    max_alignments: usize,
) -> AlignmentSet {
    let config = ExtractConfig {
        scoring: Scoring {
            gap_open,
            gap_extend,
            threshold: SCORE_THRESHOLD,
        },
        min_score,
        min_length,
        max_alignments,
    };
    find_alignments(similarity, &config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::r#const::*;
    use crate::smith_waterman;

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> SimilarityMatrix {
        let data = (0..rows * cols).map(|_| rng.random_range(0.0..1.0)).collect();
        SimilarityMatrix::from_vec(rows, cols, data).unwrap()
    }

    /// Two diagonal runs that cannot be joined into one increasing path
    fn two_runs() -> SimilarityMatrix {
        let mut similarity = SimilarityMatrix::zeros(10, 10);
        for i in 0..5 {
            similarity.set(i, i + 5, 0.9).unwrap();
            similarity.set(i + 5, i, 0.8).unwrap();
        }
        similarity
    }

    #[test]
    fn test_two_regions() {
        let alignments = find_alignments(&two_runs(), &ExtractConfig::default());

        assert_eq!(alignments.len(), 2);
        assert_eq!(
            alignments[0].alignment,
            (0..5).map(|i| (i, i + 5)).collect::<Vec<_>>()
        );
        assert!((alignments[0].score - 2.0).abs() < 1e-9);
        assert_eq!(
            alignments[1].alignment,
            (0..5).map(|i| (i + 5, i)).collect::<Vec<_>>()
        );
        assert!((alignments[1].score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_concrete_single() {
        let similarity =
            SimilarityMatrix::from_rows(&[[0.9, 0.8, 0.3], [0.7, 0.9, 0.4], [0.3, 0.5, 0.8]])
                .unwrap();
        let alignments = find_multiple_alignments(
            &similarity,
            GAP_OPEN,
            GAP_EXTEND,
            MIN_SCORE,
            MIN_LENGTH,
            MAX_ALIGNMENTS,
        );
        assert_eq!(alignments.len(), 1);
        assert_eq!(alignments[0].alignment, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_first_pass_fails() {
        let similarity = SimilarityMatrix::from_rows(&[[0.4; 3]; 3]).unwrap();
        assert!(find_alignments(&similarity, &ExtractConfig::default()).is_empty());

        // scores well but too short
        let similarity = SimilarityMatrix::from_rows(&[[5.0, 0.0], [0.0, 5.0]]).unwrap();
        assert!(find_alignments(&similarity, &ExtractConfig::default()).is_empty());

        for shape in [(0, 0), (0, 5), (5, 0)] {
            let similarity = SimilarityMatrix::zeros(shape.0, shape.1);
            assert!(find_alignments(&similarity, &ExtractConfig::default()).is_empty());
        }
    }

    #[test]
    fn test_max_alignments_cap() {
        let config = ExtractConfig {
            max_alignments: 1,
            ..ExtractConfig::default()
        };
        let alignments = find_alignments(&two_runs(), &config);
        assert_eq!(alignments.len(), 1);
        assert_eq!(alignments[0].alignment[0], (0, 5));
    }

    #[test]
    fn test_original_untouched() {
        let similarity = two_runs();
        let before = similarity.clone();
        let mut extractor = Extractor::new(&ExtractConfig::default());
        extractor.find(&similarity);
        assert_eq!(similarity, before);
        assert_eq!(extractor.config(), &ExtractConfig::default());
    }

    #[test]
    fn test_disjoint() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = ExtractConfig {
            min_length: 1,
            min_score: 0.1,
            max_alignments: 25,
            ..ExtractConfig::default()
        };
        let mut extractor = Extractor::new(&config);

        for _ in 0..30 {
            let rows = rng.random_range(1..25);
            let cols = rng.random_range(1..25);
            let similarity = random_matrix(&mut rng, rows, cols);
            let alignments = extractor.find(&similarity);

            assert!(alignments.len() <= config.max_alignments);

            let mut seen = HashSet::new();
            for pair in alignments.iter().flat_map(|scored| &scored.alignment) {
                assert!(seen.insert(*pair), "pair {pair:?} reused");
            }

            for scored in &alignments {
                assert!(scored.score >= config.min_score);
                assert!(scored.len() >= config.min_length);
            }
        }
    }

    #[test]
    fn test_masking_idempotent() {
        let mut rng = StdRng::seed_from_u64(99);
        let one = ExtractConfig {
            max_alignments: 1,
            min_length: 2,
            min_score: 0.5,
            ..ExtractConfig::default()
        };
        let two = ExtractConfig {
            max_alignments: 2,
            ..one.clone()
        };

        for _ in 0..30 {
            let similarity = random_matrix(&mut rng, 15, 15);
            let full = find_alignments(&similarity, &two);

            let first = find_alignments(&similarity, &one);
            assert_eq!(first.first(), full.first());
            let Some(first) = first.first() else {
                continue;
            };

            let mut masked = similarity.clone();
            for &(row, col) in &first.alignment {
                masked.set(row, col, 0.0).unwrap();
            }
            let second = find_alignments(&masked, &one);
            assert_eq!(second.first(), full.get(1));
        }
    }

    #[test]
    fn test_iter_prefix_matches_find() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = ExtractConfig {
            min_length: 1,
            min_score: 0.2,
            ..ExtractConfig::default()
        };
        let similarity = random_matrix(&mut rng, 20, 20);

        let mut extractor = Extractor::new(&config);
        let all = extractor.find(&similarity);
        let prefix = extractor.iter(&similarity).take(2).collect::<Vec<_>>();
        assert_eq!(prefix.as_slice(), &all[..all.len().min(2)]);

        let mut appended = vec![];
        extractor.find_into(&similarity, &mut appended);
        assert_eq!(appended, all);
    }

    #[test]
    fn test_first_matches_single_alignment() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = ExtractConfig {
            min_length: 1,
            min_score: 0.0,
            ..ExtractConfig::default()
        };
        for _ in 0..20 {
            let similarity = random_matrix(&mut rng, 12, 9);
            let single = smith_waterman(&similarity, &config.scoring);
            let alignments = find_alignments(&similarity, &config);
            if single.alignment.is_empty() {
                assert!(alignments.is_empty());
            } else {
                assert_eq!(alignments[0].score, single.score);
                assert_eq!(alignments[0].alignment, single.alignment);
            }
        }
    }
}
