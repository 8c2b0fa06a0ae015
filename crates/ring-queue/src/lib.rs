//! A growable FIFO queue backed by a ring buffer.
//!
//! Elements live in a boxed slice of optional slots that is reused circularly. When an
//! enqueue finds the buffer full, the buffer doubles and the live elements are moved to
//! the front of the new buffer in FIFO order.
//!
//! Every structural change perturbs a mutation stamp. A [`Cursor`] snapshots the stamp
//! when it is created and refuses to advance once the queue it walks has changed.

use std::fmt;

use tracing::trace;

mod cursor;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serialize;

pub use cursor::Cursor;
pub use error::{ErrorKind, QueueError};
pub use iter::{IntoIter, Iter};

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 4;

#[derive(Clone)]
pub struct Queue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    stamp: u64,
}

fn empty_slots<T>(capacity: usize) -> Result<Box<[Option<T>]>, QueueError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue backed by `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        Ok(Self::from_slots(empty_slots(capacity)?))
    }

    #[must_use]
    pub fn with_default_capacity() -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(DEFAULT_CAPACITY)
            .collect();
        Self::from_slots(slots)
    }

    /// Creates a queue holding every element of `source` in order.
    ///
    /// Starts at [`DEFAULT_CAPACITY`] and grows as needed. `None` is rejected with
    /// [`QueueError::Absent`].
    pub fn try_from_source<I>(source: Option<I>) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(QueueError::Absent { argument: "source" })?;

        let mut queue = Self::with_default_capacity();
        for item in source {
            queue.enqueue(item)?;
        }

        trace!(len = queue.len, capacity = queue.capacity(), "queue filled from source");
        Ok(queue)
    }

    const fn from_slots(slots: Box<[Option<T>]>) -> Self {
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
            stamp: 0,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `item` at the tail, doubling the buffer first if it is full.
    ///
    /// If growing fails the queue is left untouched.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.len == self.capacity() {
            self.grow()?;
        }

        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        self.touch();

        Ok(())
    }

    /// Like [`Queue::enqueue`], but for callers whose value may be missing.
    ///
    /// `None` is rejected with [`QueueError::Absent`] and nothing is stored.
    pub fn enqueue_nullable(&mut self, item: Option<T>) -> Result<(), QueueError> {
        let item = item.ok_or(QueueError::Absent { argument: "item" })?;
        self.enqueue(item)
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.len == 0 {
            return Err(QueueError::Empty);
        }

        // the slot is cleared so the queue no longer owns the element
        let Some(item) = self.slots[self.head].take() else {
            unreachable!("slot at head of a non-empty queue should be occupied");
        };

        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        self.touch();

        Ok(item)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the element `offset` positions behind the head.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }

        self.slots[self.physical(offset)].as_ref()
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        for offset in 0..self.len {
            let idx = self.physical(offset);
            self.slots[idx] = None;
        }

        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.touch();
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Detached cursor that fails once the queue is changed behind its back.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.stamp)
    }

    pub(crate) const fn check_stamp(&self, snapshot: u64) -> Result<(), QueueError> {
        if self.stamp == snapshot {
            Ok(())
        } else {
            Err(QueueError::ConcurrentModification {
                expected: snapshot,
                found: self.stamp,
            })
        }
    }

    pub(crate) fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    const fn touch(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }

    fn grow(&mut self) -> Result<(), QueueError> {
        let capacity = self.capacity();
        let new_capacity = capacity
            .checked_mul(2)
            .ok_or(QueueError::CapacityOverflow { capacity })?;

        let mut slots = empty_slots(new_capacity)?;
        for (offset, slot) in slots.iter_mut().take(self.len).enumerate() {
            *slot = self.slots[(self.head + offset) % capacity].take();
        }

        trace!(from = capacity, to = new_capacity, len = self.len, "growing queue");

        self.slots = slots;
        self.head = 0;
        self.tail = self.len;

        Ok(())
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    /// # Panics
    /// If the buffer cannot grow to fit the new elements.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.enqueue(item) {
                panic!("{err}");
            }
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::with_default_capacity();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for Queue<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
