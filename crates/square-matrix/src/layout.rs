/// Storage shape of a [`SquareMatrix`](crate::SquareMatrix).
///
/// Indices passed to a layout are always in range.
pub trait Layout {
    /// Number of stored elements for a matrix with `size` rows.
    fn storage_len(size: usize) -> usize;

    /// Storage slot backing `(row, column)`.
    ///
    /// `None` marks a position that always reads as the default value and cannot be set.
    fn slot(size: usize, row: usize, column: usize) -> Option<usize>;

    /// Position that changes together with `(row, column)`, if any.
    fn mirror(_row: usize, _column: usize) -> Option<(usize, usize)> {
        None
    }
}

/// Every element stored independently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct General;

/// Only the main diagonal is stored; everything else is the default value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Diagonal;

/// `(i, j)` and `(j, i)` share one slot in a packed lower triangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Symmetric;

impl Layout for General {
    fn storage_len(size: usize) -> usize {
        size * size
    }

    fn slot(size: usize, row: usize, column: usize) -> Option<usize> {
        Some(row * size + column)
    }
}

impl Layout for Diagonal {
    fn storage_len(size: usize) -> usize {
        size
    }

    fn slot(_size: usize, row: usize, column: usize) -> Option<usize> {
        (row == column).then_some(row)
    }
}

impl Layout for Symmetric {
    fn storage_len(size: usize) -> usize {
        size * (size + 1) / 2
    }

    fn slot(_size: usize, row: usize, column: usize) -> Option<usize> {
        let (row, column) = if row >= column {
            (row, column)
        } else {
            (column, row)
        };
        Some(row * (row + 1) / 2 + column)
    }

    fn mirror(row: usize, column: usize) -> Option<(usize, usize)> {
        (row != column).then_some((column, row))
    }
}
