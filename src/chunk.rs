//! Overlapping chunk layout of a sequence, and mapping of aligned chunk indices back to residue
//! ranges.
//!
//! Positions are 1-indexed and inclusive, as residue numbering usually is.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::r#const::{CHUNK_LEN, CHUNK_STRIDE};
use crate::{Error, Result, ScoredAlignment};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkConfig {
    /// Residues per chunk
    pub chunk_len: usize,
    /// Residues between the starts of consecutive chunks
    pub stride: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        ChunkConfig {
            chunk_len: CHUNK_LEN,
            stride: CHUNK_STRIDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkSpan {
    pub index: usize,
    /// First residue, 1-indexed
    pub start: usize,
    /// Last residue, inclusive. `start - 1` for the single chunk of an empty sequence.
    pub end: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// The residues of this chunk in `sequence`, or `None` when the sequence is shorter than the
    /// span.
    pub fn slice<'a>(&self, sequence: &'a [u8]) -> Option<&'a [u8]> {
        sequence.get(self.start - 1..self.end)
    }
}

/// Lays out chunks of `chunk_len` residues every `stride` residues over a sequence of `len`
/// residues. The last chunk is the first one to reach the end of the sequence, so it may be
/// shorter; a stride longer than the chunk can leave residues uncovered. Sequences no longer
/// than one chunk produce a single chunk covering all of it.
pub fn chunk_spans(len: usize, config: &ChunkConfig) -> Result<Vec<ChunkSpan>> {
    let ChunkConfig { chunk_len, stride } = *config;
    if chunk_len == 0 || stride == 0 {
        return Err(Error::InvalidChunking { chunk_len, stride });
    }

    if len <= chunk_len {
        return Ok(vec![ChunkSpan {
            index: 0,
            start: 1,
            end: len,
        }]);
    }

    let mut spans = Vec::with_capacity((len - chunk_len).div_ceil(stride) + 1);
    let mut start = 0;
    while start < len {
        let end = (start + chunk_len).min(len);
        spans.push(ChunkSpan {
            index: spans.len(),
            start: start + 1,
            end,
        });
        if end == len {
            break;
        }
        start += stride;
    }
    Ok(spans)
}

/// An accepted alignment expressed as residue ranges of the two sequences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignedRegion {
    pub score: f64,
    /// Number of aligned chunk pairs
    pub chunks: usize,
    /// From the start of the first aligned chunk to the end of the last, in the first sequence
    pub first: RangeInclusive<usize>,
    pub second: RangeInclusive<usize>,
}

impl AlignedRegion {
    /// Maps `scored` onto the chunk layouts of both sequences. Returns `None` for an empty
    /// alignment.
    pub fn from_alignment(
        scored: &ScoredAlignment,
        first_spans: &[ChunkSpan],
        second_spans: &[ChunkSpan],
    ) -> Result<Option<Self>> {
        let (Some(&(first_lo, second_lo)), Some(&(first_hi, second_hi))) =
            (scored.alignment.first(), scored.alignment.last())
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            score: scored.score,
            chunks: scored.alignment.len(),
            first: span(first_spans, first_lo)?.start..=span(first_spans, first_hi)?.end,
            second: span(second_spans, second_lo)?.start..=span(second_spans, second_hi)?.end,
        }))
    }
}

fn span(spans: &[ChunkSpan], index: usize) -> Result<&ChunkSpan> {
    spans.get(index).ok_or(Error::ChunkOutOfRange {
        index,
        len: spans.len(),
    })
}
