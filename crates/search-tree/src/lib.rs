//! An unbalanced binary search tree ordered by a comparator chosen at construction.

use std::{cmp::Ordering, fmt};

mod traverse;

pub use traverse::{Inorder, Postorder, Preorder};

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    const fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }
}

/// Comparator used when none is given.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Elements comparing less than a node go to its left; equal or greater go right, so
/// duplicates are kept in insertion order.
pub struct BinarySearchTree<T, C = NaturalOrder<T>> {
    root: Link<T>,
    len: usize,
    compare: C,
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            compare: Ord::cmp,
        }
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            len: 0,
            compare,
        }
    }

    pub fn from_iter_with_comparator<I>(iter: I, compare: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_comparator(compare);
        tree.extend(iter);
        tree
    }

    pub fn insert(&mut self, element: T) {
        let compare = &self.compare;
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = if compare(&element, &node.element) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Box::new(Node::leaf(element)));
        self.len += 1;
    }

    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            link = match (self.compare)(element, &node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }
}

impl<T, C> BinarySearchTree<T, C> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node, then left subtree, then right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Left subtree, then node, then right subtree; ascending by the comparator.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Left subtree, then right subtree, then node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }
}

impl<T, C> Drop for BinarySearchTree<T, C> {
    fn drop(&mut self) {
        // unlink nodes one at a time so a degenerate tree does not recurse
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}
