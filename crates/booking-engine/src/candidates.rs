//! Candidate-set selection for conflict checking.
//!
//! The checker never queries storage; its caller supplies exactly the ranges
//! that matter for the operation at hand. The selection rules live here so
//! every caller scopes the same way.

use serde::{Deserialize, Serialize};

use crate::calendar::DateRange;

pub type BookingId = u64;
pub type SpotId = u64;
pub type UserId = u64;

/// A stored reservation of a spot by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(rename = "spotId")]
    pub spot_id: SpotId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(flatten)]
    pub range: DateRange,
}

/// Ranges a new stay for `spot` by `user` must clear: every booking on the
/// same spot, plus the user's own bookings anywhere. The second arm guards
/// against a guest holding two overlapping stays across different spots.
pub fn candidates_for_create(bookings: &[Booking], spot: SpotId, user: UserId) -> Vec<DateRange> {
    bookings
        .iter()
        .filter(|b| b.spot_id == spot || b.user_id == user)
        .map(|b| b.range)
        .collect()
}

/// Ranges a rescheduled stay must clear: the other bookings on the same
/// spot, excluding the booking being moved.
pub fn candidates_for_update(bookings: &[Booking], booking: &Booking) -> Vec<DateRange> {
    bookings
        .iter()
        .filter(|b| b.spot_id == booking.spot_id && b.id != booking.id)
        .map(|b| b.range)
        .collect()
}
