use log::trace;

use super::matrix::{ScoreMatrix, Table, TraceMatrix, TraceTag};
use super::traceback::TracebackIter;
use crate::{Alignment, Scoring, SimilarityMatrix};

/// Reusable aligner. Holds the score and trace tables of the last run so the path can be walked
/// (or the scores inspected) after [`SmithWaterman::fill`], and so repeated runs reuse the
/// allocations.
#[derive(Debug, Clone)]
pub struct SmithWaterman {
    scoring: Scoring,
    scores: ScoreMatrix,
    trace: TraceMatrix,
    max_score: f64,
    max_pos: (usize, usize),
}

impl SmithWaterman {
    pub fn new(scoring: &Scoring) -> Self {
        Self {
            scoring: scoring.clone(),
            scores: Table::new(1, 1, 0.0),
            trace: Table::new(1, 1, TraceTag::Stop),
            max_score: 0.0,
            max_pos: (0, 0),
        }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Runs the dynamic program over `similarity` and returns the best local score.
    ///
    /// Cells are filled row by row, each depending only on its diagonal, upper and left
    /// neighbours. A gap step pays `gap_extend` when the neighbour it leaves was itself reached by
    /// a gap in the same direction, and `gap_open` otherwise. Exact ties resolve in [`TraceTag`]
    /// declaration order, and the first maximum in row-major order is kept.
    pub fn fill(&mut self, similarity: &SimilarityMatrix) -> f64 {
        let (rows, cols) = similarity.shape();
        self.scores.reset(rows + 1, cols + 1, 0.0);
        self.trace.reset(rows + 1, cols + 1, TraceTag::Stop);
        self.max_score = 0.0;
        self.max_pos = (0, 0);

        let Scoring {
            gap_open,
            gap_extend,
            threshold,
        } = self.scoring;

        for i in 1..=rows {
            let similarities = similarity.row(i - 1);
            for j in 1..=cols {
                let diag = self.scores.get(i - 1, j - 1) + (similarities[j - 1] - threshold);

                let up_penalty = if self.trace.get(i - 1, j) == TraceTag::Up {
                    gap_extend
                } else {
                    gap_open
                };
                let up = self.scores.get(i - 1, j) + up_penalty;

                let left_penalty = if self.trace.get(i, j - 1) == TraceTag::Left {
                    gap_extend
                } else {
                    gap_open
                };
                let left = self.scores.get(i, j - 1) + left_penalty;

                let (score, tag) = [
                    (diag, TraceTag::Diagonal),
                    (up, TraceTag::Up),
                    (left, TraceTag::Left),
                ]
                .into_iter()
                .fold((0.0, TraceTag::Stop), |best, candidate| {
                    if candidate.0 > best.0 { candidate } else { best }
                });

                self.scores.set(i, j, score);
                self.trace.set(i, j, tag);

                if score > self.max_score {
                    self.max_score = score;
                    self.max_pos = (i, j);
                }
            }
        }

        trace!(
            "smith-waterman {}x{}: max score {:.4} at {:?}",
            rows, cols, self.max_score, self.max_pos
        );

        self.max_score
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Cell of the best score in score-table coordinates (offset by the boundary row/column),
    /// `(0, 0)` when nothing scored above 0
    pub fn max_position(&self) -> (usize, usize) {
        self.max_pos
    }

    pub fn score_matrix(&self) -> &ScoreMatrix {
        &self.scores
    }

    pub fn into_score_matrix(self) -> ScoreMatrix {
        self.scores
    }

    /// Steps of the optimal path of the last [`SmithWaterman::fill`], from its end to its start.
    pub fn iter_alignment_path(&self) -> TracebackIter<'_> {
        TracebackIter::new(&self.scores, &self.trace, self.max_pos)
    }

    /// Matched pairs of the optimal path of the last [`SmithWaterman::fill`], in increasing order.
    pub fn alignment(&self) -> Alignment {
        let mut alignment = self
            .iter_alignment_path()
            .filter_map(|step| step.pair())
            .collect::<Alignment>();
        alignment.reverse();
        alignment
    }

    pub fn align(&mut self, similarity: &SimilarityMatrix) -> (f64, Alignment) {
        let score = self.fill(similarity);
        (score, self.alignment())
    }
}
