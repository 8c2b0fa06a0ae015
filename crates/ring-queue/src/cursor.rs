use crate::{Queue, QueueError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Position {
    NotStarted,
    At(usize),
    Exhausted,
}

/// A stamp-checked position in a [`Queue`].
///
/// The cursor holds no borrow, so the queue can be changed between steps. Every step
/// compares the queue's mutation stamp with the one captured by [`Queue::cursor`] and
/// fails with [`QueueError::ConcurrentModification`] if they differ.
///
/// ```
/// use ring_queue::Queue;
///
/// let mut queue: Queue<i32> = (1..=3).collect();
/// let mut cursor = queue.cursor();
///
/// assert!(cursor.move_next(&queue).unwrap());
/// assert_eq!(cursor.current(&queue).unwrap(), Some(&1));
///
/// queue.enqueue(4).unwrap();
/// assert!(cursor.move_next(&queue).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Cursor {
    stamp: u64,
    position: Position,
}

impl Cursor {
    pub(crate) const fn new(stamp: u64) -> Self {
        Self {
            stamp,
            position: Position::NotStarted,
        }
    }

    /// Steps to the next element.
    ///
    /// Returns `Ok(false)` once every element has been visited. Fails without moving if
    /// `queue` changed since this cursor was created.
    pub fn move_next<T>(&mut self, queue: &Queue<T>) -> Result<bool, QueueError> {
        queue.check_stamp(self.stamp)?;

        let next = match self.position {
            Position::NotStarted => 0,
            Position::At(offset) => offset + 1,
            Position::Exhausted => return Ok(false),
        };

        if next < queue.len() {
            self.position = Position::At(next);
            Ok(true)
        } else {
            self.position = Position::Exhausted;
            Ok(false)
        }
    }

    /// The element under the cursor, or `None` before the first step and after the last.
    pub fn current<'q, T>(&self, queue: &'q Queue<T>) -> Result<Option<&'q T>, QueueError> {
        queue.check_stamp(self.stamp)?;

        match self.position {
            Position::At(offset) => Ok(queue.get(offset)),
            Position::NotStarted | Position::Exhausted => Ok(None),
        }
    }

    /// Moves back before the first element.
    ///
    /// The stamp snapshot is kept, so a cursor over a queue that changed since
    /// [`Queue::cursor`] still fails on its next step.
    pub const fn reset(&mut self) {
        self.position = Position::NotStarted;
    }
}
