use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Row-major `rows x cols` table of similarities between the items of two sequences. Row `i`
/// holds the similarities of item `i` of the first sequence against every item of the second.
///
/// Either dimension may be zero. Every entry is finite.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSimilarityMatrix"))]
pub struct SimilarityMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unchecked serialized form, validated through [`SimilarityMatrix::from_vec`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSimilarityMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSimilarityMatrix> for SimilarityMatrix {
    type Error = Error;

    fn try_from(raw: RawSimilarityMatrix) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl SimilarityMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from a row-major buffer of exactly `rows * cols` finite values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        if let Some(idx) = data.iter().position(|value| !value.is_finite()) {
            return Err(Error::NonFinite {
                row: idx / cols,
                col: idx % cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from nested rows. Every row must have the length of the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: row_idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Overwrites a single cell. Fails on a cell outside the matrix or a non-finite value.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !value.is_finite() {
            return Err(Error::NonFinite { row, col });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Zeroes every cell named by `pairs`, removing that evidence from later alignment passes.
    ///
    /// # Panics
    ///
    /// When a pair lies outside the matrix.
    pub fn mask(&mut self, pairs: &[(usize, usize)]) {
        for &(row, col) in pairs {
            self.data[row * self.cols + col] = 0.0;
        }
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}
