use std::iter::FusedIterator;

use crate::Node;

#[must_use]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // right first so the left subtree is popped next
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());

        Some(&node.element)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

#[must_use]
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    pending: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) const fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            pending: root,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.pending.take() {
            self.stack.push(node);
            self.pending = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.pending = node.right.as_deref();

        Some(&node.element)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

#[must_use]
pub struct Postorder<'a, T> {
    // the flag marks nodes whose children are already on the stack
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.element);
            }

            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }

        None
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}
