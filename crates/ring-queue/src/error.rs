use std::collections::TryReserveError;

use thiserror::Error;

/// Coarse classification of a [`QueueError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A capacity argument was outside the accepted range.
    OutOfRange,
    /// A required argument was absent.
    NullArgument,
    /// The operation is not valid for the queue's current state.
    InvalidState,
    /// The backing storage could not be allocated.
    Allocation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("capacity cannot be less than one")]
    ZeroCapacity,
    #[error("cannot grow past a capacity of {capacity}")]
    CapacityOverflow { capacity: usize },
    #[error("{argument} cannot be absent")]
    Absent { argument: &'static str },
    #[error("cannot dequeue an element when the queue is empty")]
    Empty,
    #[error("the queue has been changed since the cursor was created (stamp {expected}, now {found})")]
    ConcurrentModification { expected: u64, found: u64 },
    #[error("failed to allocate queue storage: {0}")]
    Allocation(#[from] TryReserveError),
}

impl QueueError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroCapacity | Self::CapacityOverflow { .. } => ErrorKind::OutOfRange,
            Self::Absent { .. } => ErrorKind::NullArgument,
            Self::Empty | Self::ConcurrentModification { .. } => ErrorKind::InvalidState,
            Self::Allocation(_) => ErrorKind::Allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        assert_eq!(QueueError::ZeroCapacity.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            QueueError::CapacityOverflow { capacity: 8 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            QueueError::Absent { argument: "item" }.kind(),
            ErrorKind::NullArgument
        );
        assert_eq!(QueueError::Empty.kind(), ErrorKind::InvalidState);
        assert_eq!(
            QueueError::ConcurrentModification {
                expected: 1,
                found: 2
            }
            .kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn test_display_names_argument() {
        let err = QueueError::Absent { argument: "source" };
        assert_eq!(err.to_string(), "source cannot be absent");
    }

    #[test]
    fn test_allocation_from_try_reserve() {
        let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = QueueError::from(err);
        assert_eq!(err.kind(), ErrorKind::Allocation);
    }
}
