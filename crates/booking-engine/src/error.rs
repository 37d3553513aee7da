//! Error types for booking operations.

use thiserror::Error;

use crate::conflict::ConflictVerdict;

/// Errors surfaced by the admission gates, the conflict checker, and the
/// front-desk reservation flow.
///
/// Only [`StartNotInFuture`](BookingError::StartNotInFuture),
/// [`EndNotAfterStart`](BookingError::EndNotAfterStart), and
/// [`Conflict`](BookingError::Conflict) originate from the core checker; the
/// remaining variants belong to the front desk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Proposed start day is today or earlier.
    #[error("startDate cannot be in the past")]
    StartNotInFuture,

    /// Proposed end day is on or before the proposed start day.
    #[error("endDate cannot be on or before startDate")]
    EndNotAfterStart,

    /// The proposed range overlaps or touches at least one existing booking.
    #[error("Sorry, this spot is already booked for the specified dates")]
    Conflict(ConflictVerdict),

    /// No booking with the requested id.
    #[error("Booking couldn't be found")]
    NotFound,

    /// The acting user does not own the booking.
    #[error("Forbidden")]
    Forbidden,

    /// The booking's end day has passed; it can no longer be rescheduled.
    #[error("Past bookings can't be modified")]
    BookingOver,

    /// The booking's start day has arrived; it can no longer be cancelled.
    #[error("Bookings that have been started can't be deleted")]
    BookingStarted,
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
