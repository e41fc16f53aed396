/// Decision recorded for each cell of the dynamic program.
///
/// The declaration order is also the tie-break precedence: when candidates score equally, the
/// earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceTag {
    /// Score reset to 0, no alignment continues through this cell
    #[default]
    Stop,
    /// Consumed one item from each sequence
    Diagonal,
    /// Consumed one item from the first sequence only (gap in the second)
    Up,
    /// Consumed one item from the second sequence only (gap in the first)
    Left,
}

/// Dense row-major table including the zero boundary row and column, so cell `(i, j)` refers to
/// item pair `(i - 1, j - 1)`.
#[derive(Debug, Clone, Default)]
pub struct Table<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

pub type ScoreMatrix = Table<f64>;
pub(crate) type TraceMatrix = Table<TraceTag>;

impl<T: Copy> Table<T> {
    pub(crate) fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Resizes to `rows x cols` and overwrites every cell, reusing the allocation.
    pub(crate) fn reset(&mut self, rows: usize, cols: usize, fill: T) {
        self.cells.clear();
        self.cells.resize(rows * cols, fill);
        self.rows = rows;
        self.cols = cols;
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl ScoreMatrix {
    /// Largest score in the table, 0 for an empty table
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_overwrites() {
        let mut table = Table::new(2, 2, TraceTag::Stop);
        table.set(1, 1, TraceTag::Left);
        table.reset(3, 2, TraceTag::Stop);
        assert_eq!(table.rows(), 3);
        assert!(table.as_slice().iter().all(|tag| *tag == TraceTag::Stop));
    }

    #[test]
    fn test_row_access() {
        let mut table: ScoreMatrix = Table::new(2, 3, 0.0);
        table.set(1, 2, 1.5);
        assert_eq!(table.row(1), &[0.0, 0.0, 1.5]);
        assert_eq!(table.max(), 1.5);
    }
}
