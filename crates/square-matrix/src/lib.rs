//! Square matrices whose storage shape is chosen by a layout tag.
//!
//! [`SquareMatrix`] stores every element, [`DiagonalMatrix`] only the main diagonal and
//! [`SymmetricMatrix`] one triangle. All of them share the same element access and
//! notify subscribers after every successful write.

use std::{fmt, marker::PhantomData, ops::Index};

use snafu::prelude::*;
use tracing::trace;

mod error;
mod layout;
mod ops;

pub use error::MatrixError;
use error::{OutOfBoundsSnafu, ReadOnlySnafu};
pub use layout::{Diagonal, General, Layout, Symmetric};

pub type DiagonalMatrix<T> = SquareMatrix<T, Diagonal>;
pub type SymmetricMatrix<T> = SquareMatrix<T, Symmetric>;

/// Position passed to subscribers after an element was set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementChange {
    pub row: usize,
    pub column: usize,
}

/// Handle returned by [`SquareMatrix::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&ElementChange)>;

pub struct SquareMatrix<T, L = General> {
    size: usize,
    elements: Box<[T]>,
    // read for positions the layout does not store
    fill: T,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
    layout: PhantomData<L>,
}

impl<T: Default + Clone, L: Layout> SquareMatrix<T, L> {
    /// Creates a `size` x `size` matrix filled with `T::default()`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let elements = vec![T::default(); L::storage_len(size)].into_boxed_slice();
        Self::from_storage(size, elements)
    }
}

impl<T: Default, L: Layout> SquareMatrix<T, L> {
    pub(crate) fn from_storage(size: usize, elements: Box<[T]>) -> Self {
        debug_assert_eq!(elements.len(), L::storage_len(size));
        Self {
            size,
            elements,
            fill: T::default(),
            observers: Vec::new(),
            next_subscription: 0,
            layout: PhantomData,
        }
    }
}

impl<T, L: Layout> SquareMatrix<T, L> {
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> Result<&T, MatrixError> {
        self.check_bounds(row, column)?;
        Ok(self.element(row, column))
    }

    /// Stores `value` at `(row, column)` and notifies every subscriber.
    ///
    /// A symmetric matrix also reports the mirrored position. Nobody is notified when the
    /// write is rejected.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        self.check_bounds(row, column)?;
        let slot = L::slot(self.size, row, column).context(ReadOnlySnafu { row, column })?;

        self.elements[slot] = value;

        self.notify(ElementChange { row, column });
        if let Some((row, column)) = L::mirror(row, column) {
            self.notify(ElementChange { row, column });
        }

        Ok(())
    }

    /// Registers `observer` to be called after every successful [`SquareMatrix::set`].
    pub fn subscribe(&mut self, observer: impl FnMut(&ElementChange) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Returns `false` if `subscription` was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        ensure!(row < self.size && column < self.size, OutOfBoundsSnafu {
            row,
            column,
            size: self.size
        });
        Ok(())
    }

    pub(crate) fn element(&self, row: usize, column: usize) -> &T {
        L::slot(self.size, row, column).map_or(&self.fill, |slot| &self.elements[slot])
    }

    fn notify(&mut self, change: ElementChange) {
        trace!(
            row = change.row,
            column = change.column,
            observers = self.observers.len(),
            "element changed"
        );

        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}

impl<T, L: Layout> Index<(usize, usize)> for SquareMatrix<T, L> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.get(row, column) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Subscriptions are not carried over to the clone.
impl<T: Clone, L> Clone for SquareMatrix<T, L> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            elements: self.elements.clone(),
            fill: self.fill.clone(),
            observers: Vec::new(),
            next_subscription: 0,
            layout: PhantomData,
        }
    }
}

impl<T, L, R> PartialEq<SquareMatrix<T, R>> for SquareMatrix<T, L>
where
    T: PartialEq,
    L: Layout,
    R: Layout,
{
    fn eq(&self, other: &SquareMatrix<T, R>) -> bool {
        self.size == other.size
            && (0..self.size).all(|row| {
                (0..self.size).all(|column| self.element(row, column) == other.element(row, column))
            })
    }
}

impl<T: fmt::Debug, L: Layout> fmt::Debug for SquareMatrix<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<&T>> = (0..self.size)
            .map(|row| (0..self.size).map(|column| self.element(row, column)).collect())
            .collect();

        f.debug_struct("SquareMatrix")
            .field("size", &self.size)
            .field("rows", &rows)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recorder<T, L: Layout>(matrix: &mut SquareMatrix<T, L>) -> Rc<RefCell<Vec<ElementChange>>> {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        matrix.subscribe(move |change| sink.borrow_mut().push(*change));
        changes
    }

    #[test]
    fn test_new_is_default_filled() {
        let matrix: SquareMatrix<i32> = SquareMatrix::new(3);
        assert_eq!(matrix.size(), 3);
        for row in 0..3 {
            for column in 0..3 {
                assert_eq!(matrix.get(row, column), Ok(&0));
            }
        }
    }

    #[test]
    fn test_empty_matrix() {
        let matrix: SquareMatrix<i32> = SquareMatrix::new(0);
        assert_eq!(matrix.size(), 0);
        assert!(matrix.get(0, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix: SquareMatrix<i32> = SquareMatrix::new(2);
        assert_eq!(matrix.set(1, 5, 0), Err(MatrixError::OutOfBounds {
            row: 1,
            column: 5,
            size: 2
        }));
        assert!(matrix.get(2, 0).is_err());
    }

    #[test]
    fn test_set_then_get() {
        let mut matrix: SquareMatrix<i32> = SquareMatrix::new(4);
        matrix.set(1, 3, 7).unwrap();
        assert_eq!(matrix[(1, 3)], 7);
        assert_eq!(matrix[(3, 1)], 0);
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 matrix")]
    fn test_index_panics_out_of_bounds() {
        let matrix: SquareMatrix<i32> = SquareMatrix::new(2);
        let _element = &matrix[(2, 2)];
    }

    #[test]
    fn test_symmetric_mirrors() {
        let mut matrix: SymmetricMatrix<i32> = SymmetricMatrix::new(5);
        matrix.set(3, 4, 10).unwrap();
        assert_eq!(matrix[(3, 4)], matrix[(4, 3)]);

        matrix.set(4, 3, -2).unwrap();
        assert_eq!(matrix[(3, 4)], -2);
    }

    #[test]
    fn test_diagonal_rejects_off_diagonal() {
        let mut matrix: DiagonalMatrix<i32> = DiagonalMatrix::new(5);
        matrix.set(1, 1, 10).unwrap();
        assert_eq!(matrix[(1, 1)], 10);

        assert_eq!(
            matrix.set(0, 1, -1),
            Err(MatrixError::ReadOnly { row: 0, column: 1 })
        );
        assert_eq!(matrix[(0, 1)], 0);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let mut matrix: SquareMatrix<u8> = SquareMatrix::new(3);
        let changes = recorder(&mut matrix);

        matrix.set(0, 2, 1).unwrap();
        matrix.set(1, 1, 1).unwrap();

        assert_eq!(*changes.borrow(), vec![
            ElementChange { row: 0, column: 2 },
            ElementChange { row: 1, column: 1 },
        ]);
    }

    #[test]
    fn test_symmetric_reports_both_positions() {
        let mut matrix: SymmetricMatrix<u8> = SymmetricMatrix::new(3);
        let changes = recorder(&mut matrix);

        matrix.set(0, 2, 1).unwrap();
        matrix.set(1, 1, 1).unwrap();

        assert_eq!(*changes.borrow(), vec![
            ElementChange { row: 0, column: 2 },
            ElementChange { row: 2, column: 0 },
            ElementChange { row: 1, column: 1 },
        ]);
    }

    #[test]
    fn test_rejected_write_is_silent() {
        let mut matrix: DiagonalMatrix<u8> = DiagonalMatrix::new(3);
        let changes = recorder(&mut matrix);

        matrix.set(0, 1, 1).unwrap_err();
        matrix.set(3, 3, 1).unwrap_err();

        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut matrix: SquareMatrix<u8> = SquareMatrix::new(2);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let subscription = matrix.subscribe(move |_| *sink.borrow_mut() += 1);

        matrix.set(0, 0, 1).unwrap();
        assert!(matrix.unsubscribe(subscription));
        assert!(!matrix.unsubscribe(subscription));
        matrix.set(0, 0, 2).unwrap();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_clone_drops_subscriptions() {
        let mut matrix: SquareMatrix<u8> = SquareMatrix::new(2);
        let changes = recorder(&mut matrix);
        matrix.set(1, 0, 4).unwrap();

        let mut copy = matrix.clone();
        assert_eq!(copy, matrix);

        copy.set(1, 1, 4).unwrap();
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_eq_across_layouts() {
        let mut diagonal: DiagonalMatrix<i32> = DiagonalMatrix::new(2);
        diagonal.set(0, 0, 1).unwrap();

        let mut general: SquareMatrix<i32> = SquareMatrix::new(2);
        general.set(0, 0, 1).unwrap();
        assert_eq!(diagonal, general);

        general.set(0, 1, 1).unwrap();
        assert_ne!(diagonal, general);
    }
}
