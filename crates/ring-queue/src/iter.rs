use std::iter::FusedIterator;

use crate::Queue;

#[must_use]
pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    offset: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(queue: &'a Queue<T>) -> Self {
        Self { queue, offset: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.get(self.offset)?;
        self.offset += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            offset: self.offset,
        }
    }
}

/// Owning iterator that dequeues from the front.
#[must_use]
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(queue: Queue<T>) -> Self {
        Self { queue }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
