use std::iter::FusedIterator;

use super::matrix::{ScoreMatrix, TraceMatrix, TraceTag};

/// A single move of the traceback, carrying the 0-indexed item pair of the cell being left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Items of both sequences matched
    Diagonal((usize, usize)),
    /// Item of the first sequence aligned against a gap
    Up((usize, usize)),
    /// Item of the second sequence aligned against a gap
    Left((usize, usize)),
}

impl Step {
    pub fn pos(&self) -> (usize, usize) {
        match self {
            Step::Diagonal(pos) | Step::Up(pos) | Step::Left(pos) => *pos,
        }
    }

    /// The matched pair, for diagonal steps only
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self {
            Step::Diagonal(pos) => Some(*pos),
            Step::Up(_) | Step::Left(_) => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        !matches!(self, Step::Diagonal(_))
    }
}

/// Walks the trace table from the best cell back toward the origin, yielding steps in reverse
/// alignment order. Ends on a zero score, a `Stop` tag or the boundary row/column.
pub struct TracebackIter<'a> {
    scores: &'a ScoreMatrix,
    trace: &'a TraceMatrix,
    row_idx: usize,
    col_idx: usize,
}

impl<'a> TracebackIter<'a> {
    pub(crate) fn new(
        scores: &'a ScoreMatrix,
        trace: &'a TraceMatrix,
        (row_idx, col_idx): (usize, usize),
    ) -> Self {
        Self {
            scores,
            trace,
            row_idx,
            col_idx,
        }
    }
}

impl Iterator for TracebackIter<'_> {
    type Item = Step;

    #[inline(always)]
    fn next(&mut self) -> Option<Step> {
        if self.row_idx == 0
            || self.col_idx == 0
            || self.scores.get(self.row_idx, self.col_idx) <= 0.0
        {
            return None;
        }

        let pos = (self.row_idx - 1, self.col_idx - 1);
        match self.trace.get(self.row_idx, self.col_idx) {
            TraceTag::Stop => None,
            TraceTag::Diagonal => {
                self.row_idx -= 1;
                self.col_idx -= 1;
                Some(Step::Diagonal(pos))
            }
            TraceTag::Up => {
                self.row_idx -= 1;
                Some(Step::Up(pos))
            }
            TraceTag::Left => {
                self.col_idx -= 1;
                Some(Step::Left(pos))
            }
        }
    }
}

impl FusedIterator for TracebackIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smith_waterman::matrix::Table;

    #[test]
    fn test_walks_tags() {
        // (2,2) gaps left into (2,1), which gaps up into the match at (1,1)
        let mut scores = Table::new(3, 3, 0.0);
        let mut trace = Table::new(3, 3, TraceTag::Stop);
        scores.set(1, 1, 0.5);
        trace.set(1, 1, TraceTag::Diagonal);
        scores.set(2, 1, 0.3);
        trace.set(2, 1, TraceTag::Up);
        scores.set(2, 2, 0.2);
        trace.set(2, 2, TraceTag::Left);

        let steps = TracebackIter::new(&scores, &trace, (2, 2)).collect::<Vec<_>>();
        assert_eq!(
            steps,
            vec![Step::Left((1, 1)), Step::Up((1, 0)), Step::Diagonal((0, 0))]
        );
        assert_eq!(
            steps.iter().map(Step::pos).collect::<Vec<_>>(),
            vec![(1, 1), (1, 0), (0, 0)]
        );
        assert_eq!(steps.iter().filter(|step| step.is_gap()).count(), 2);
        assert_eq!(
            steps.iter().filter_map(Step::pair).collect::<Vec<_>>(),
            vec![(0, 0)]
        );
    }

    #[test]
    fn test_zero_start_is_empty() {
        let scores = Table::new(2, 2, 0.0);
        let trace = Table::new(2, 2, TraceTag::Stop);
        let mut iter = TracebackIter::new(&scores, &trace, (0, 0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
