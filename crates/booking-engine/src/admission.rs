//! Temporal admission gates that run before any conflict checking.
//!
//! These are caller-side preconditions, not part of the conflict verdict: a
//! rejection here short-circuits the request before the candidate set is
//! ever fetched.

use chrono::NaiveDate;

use crate::calendar::DateRange;
use crate::error::{BookingError, Result};

/// Accept or reject a proposed stay on purely temporal grounds.
///
/// The start day must be strictly after `today` and the end day strictly
/// after the start day.
pub fn admit_proposal(proposed: &DateRange, today: NaiveDate) -> Result<()> {
    if proposed.start <= today {
        return Err(BookingError::StartNotInFuture);
    }
    if proposed.end <= proposed.start {
        return Err(BookingError::EndNotAfterStart);
    }
    Ok(())
}

/// A stay whose end day has passed is frozen; it can no longer be
/// rescheduled. A stay checking out today is still live.
pub fn admit_reschedule(current: &DateRange, today: NaiveDate) -> Result<()> {
    if current.end < today {
        return Err(BookingError::BookingOver);
    }
    Ok(())
}

/// A stay that has started (check-in day reached) can no longer be
/// cancelled.
pub fn admit_cancel(current: &DateRange, today: NaiveDate) -> Result<()> {
    if current.start <= today {
        return Err(BookingError::BookingStarted);
    }
    Ok(())
}
