//! Rectangular 2-D grid stored row-major in a single `Vec`.
//!
//! Indexing with `grid[(row, col)]` treats an out-of-range index as a broken
//! precondition and panics.  Use [`Array2D::get`] when the index is untrusted.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::error::CollectionError;

/// A `rows × cols` grid of `T`.
///
/// ```rust
/// use amortized_collections::Array2D;
///
/// let mut grid = Array2D::new(3, 4, 0);
/// grid[(2, 1)] = 9;
/// assert_eq!(grid[(2, 1)], 9);
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Array2D<T> {
    /// Creates a grid with every cell set to `initial`.
    pub fn new(rows: usize, cols: usize, initial: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![initial; rows * cols],
        }
    }
}

impl<T> Array2D<T> {
    /// Builds a grid from nested rows.
    ///
    /// Fails with [`CollectionError::EmptyGrid`] when there are no rows or the rows are
    /// empty, and with [`CollectionError::RaggedRows`] when a row's length differs from
    /// the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CollectionError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(CollectionError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(CollectionError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(|i| &mut self.cells[i])
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// If `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        self.check_row(row);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the rows, top to bottom.
    pub fn iter_rows(&self) -> slice::ChunksExact<'_, T> {
        // `chunks_exact(0)` panics; a zero-column grid has no cells anyway.
        self.cells.chunks_exact(self.cols.max(1))
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    #[inline]
    #[track_caller]
    fn check_row(&self, row: usize) {
        assert!(
            row < self.rows,
            "row index {row} out of range: 0 to {}",
            self.rows.saturating_sub(1)
        );
    }

    #[inline]
    #[track_caller]
    fn check_index(&self, row: usize, col: usize) -> usize {
        self.check_row(row);
        assert!(
            col < self.cols,
            "column index {col} out of range: 0 to {}",
            self.cols.saturating_sub(1)
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        let i = self.check_index(row, col);
        &self.cells[i]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let i = self.check_index(row, col);
        &mut self.cells[i]
    }
}

/// Tab-separated cells, one line per row.
impl<T: fmt::Display> fmt::Display for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_and_index() {
        let mut grid = Array2D::new(3, 4, 0);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        grid[(2, 1)] = 9;
        assert_eq!(grid[(2, 1)], 9);
        assert_eq!(grid[(1, 2)], 0);
        assert_eq!(grid.row(2), &[0, 9, 0, 0]);
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Array2D::from_rows(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[(1, 0)], "d");
        assert_eq!(grid.get(0, 2), Some(&"c"));
    }

    #[test]
    fn test_grid_from_rows_errors() {
        assert_eq!(
            Array2D::<i32>::from_rows(vec![]),
            Err(CollectionError::EmptyGrid)
        );
        assert_eq!(
            Array2D::<i32>::from_rows(vec![vec![]]),
            Err(CollectionError::EmptyGrid)
        );
        assert_eq!(
            Array2D::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]),
            Err(CollectionError::RaggedRows {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_grid_get_out_of_range() {
        let mut grid = Array2D::new(2, 2, 'x');
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(grid.get_mut(5, 5).is_none());
        *grid.get_mut(1, 1).unwrap() = 'y';
        assert_eq!(grid[(1, 1)], 'y');
    }

    #[test]
    #[should_panic(expected = "row index 3 out of range: 0 to 2")]
    fn test_grid_index_row_out_of_range_panics() {
        let grid = Array2D::new(3, 4, 0);
        let _ = grid[(3, 0)];
    }

    #[test]
    #[should_panic(expected = "column index 4 out of range: 0 to 3")]
    fn test_grid_index_col_out_of_range_panics() {
        let mut grid = Array2D::new(3, 4, 0);
        grid[(0, 4)] = 1;
    }

    #[test]
    fn test_grid_display_dump() {
        let grid = Array2D::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.to_string(), "1\t2\n3\t4\n");
        assert_eq!(format!("{:?}", grid), "[[1, 2], [3, 4]]");
    }
}
