use snafu::prelude::*;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum MatrixError {
    #[snafu(display("index ({row}, {column}) is outside a {size}x{size} matrix"))]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
    #[snafu(display("element ({row}, {column}) is not stored by this layout and cannot be set"))]
    ReadOnly { row: usize, column: usize },
    #[snafu(display("cannot combine a {left}x{left} matrix with a {right}x{right} matrix"))]
    SizeMismatch { left: usize, right: usize },
}
