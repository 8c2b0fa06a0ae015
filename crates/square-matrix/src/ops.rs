use std::ops::Add;

use snafu::prelude::*;

use crate::{Layout, MatrixError, SquareMatrix, error::SizeMismatchSnafu};

impl<T, L: Layout> SquareMatrix<T, L> {
    /// Combines two equal-sized matrices element by element into a general matrix.
    ///
    /// The layouts of the operands may differ.
    pub fn zip_with<U, V, R, F>(
        &self,
        other: &SquareMatrix<U, R>,
        mut combine: F,
    ) -> Result<SquareMatrix<V>, MatrixError>
    where
        R: Layout,
        V: Default,
        F: FnMut(&T, &U) -> V,
    {
        ensure!(self.size() == other.size(), SizeMismatchSnafu {
            left: self.size(),
            right: other.size()
        });

        let size = self.size();
        let elements = (0..size)
            .flat_map(|row| (0..size).map(move |column| (row, column)))
            .map(|(row, column)| combine(self.element(row, column), other.element(row, column)))
            .collect();

        Ok(SquareMatrix::from_storage(size, elements))
    }

    pub fn add<R: Layout>(&self, other: &SquareMatrix<T, R>) -> Result<SquareMatrix<T>, MatrixError>
    where
        T: Add<Output = T> + Clone + Default,
    {
        self.zip_with(other, |lhs, rhs| lhs.clone() + rhs.clone())
    }
}
