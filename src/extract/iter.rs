use std::iter::FusedIterator;

use log::debug;

use crate::{ExtractConfig, ScoredAlignment, SimilarityMatrix, SmithWaterman};

/// Lazily extracts alignments from a private copy of the similarity matrix, masking each
/// accepted alignment before the next pass.
///
/// Ends after `max_alignments` alignments, or at the first pass whose best alignment scores
/// below `min_score` or has fewer than `min_length` pairs. That pass is not yielded.
pub struct AlignmentIter<'a> {
    smith_waterman: &'a mut SmithWaterman,
    working: SimilarityMatrix,
    min_score: f64,
    min_length: usize,
    remaining: usize,
    pass: usize,
}

impl<'a> AlignmentIter<'a> {
    pub(crate) fn new(
        smith_waterman: &'a mut SmithWaterman,
        config: &ExtractConfig,
        working: SimilarityMatrix,
    ) -> Self {
        Self {
            smith_waterman,
            working,
            min_score: config.min_score,
            min_length: config.min_length,
            remaining: config.max_alignments,
            pass: 0,
        }
    }

    /// The working matrix with every alignment yielded so far zeroed out
    pub fn masked(&self) -> &SimilarityMatrix {
        &self.working
    }
}

impl Iterator for AlignmentIter<'_> {
    type Item = ScoredAlignment;

    fn next(&mut self) -> Option<ScoredAlignment> {
        if self.remaining == 0 {
            return None;
        }
        self.pass += 1;

        let (score, alignment) = self.smith_waterman.align(&self.working);
        if score < self.min_score || alignment.len() < self.min_length {
            debug!(
                "pass {}: rejected score {:.4} with {} pairs, stopping",
                self.pass,
                score,
                alignment.len()
            );
            self.remaining = 0;
            return None;
        }

        debug!(
            "pass {}: accepted score {:.4} with {} pairs",
            self.pass,
            score,
            alignment.len()
        );
        self.remaining -= 1;
        self.working.mask(&alignment);

        Some(ScoredAlignment { score, alignment })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for AlignmentIter<'_> {}
