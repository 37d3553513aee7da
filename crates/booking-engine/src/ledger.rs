//! Booking storage seam and the serialized reservation flow.
//!
//! The fetch-candidates -> check -> write sequence is not atomic on its own:
//! two concurrent requests could both see a clear verdict and both persist
//! overlapping stays. [`FrontDesk`] closes that gap with a lock registry
//! keyed by spot id, so writes for one spot serialize around the check.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::admission;
use crate::availability::{self, OpenWindow};
use crate::calendar::DateRange;
use crate::candidates::{self, Booking, BookingId, SpotId, UserId};
use crate::conflict;
use crate::error::{BookingError, Result};

/// Repository of stored bookings, supplied by the persistence collaborator.
///
/// Implementations return point-in-time snapshots that already exclude
/// deleted rows. Scoping a snapshot down to an operation's candidate set is
/// the job of [`crate::candidates`], not the store.
pub trait BookingStore {
    fn get(&self, id: BookingId) -> Option<Booking>;

    /// All bookings for one spot.
    fn for_spot(&self, spot: SpotId) -> Vec<Booking>;

    /// All bookings held by one user, across spots.
    fn for_user(&self, user: UserId) -> Vec<Booking>;

    /// Bookings touching either the spot or the user -- the create-time
    /// candidate pool.
    fn for_spot_or_user(&self, spot: SpotId, user: UserId) -> Vec<Booking>;

    /// Persist a new stay, assigning its id.
    fn insert(&self, spot: SpotId, user: UserId, range: DateRange) -> Booking;

    /// Replace the stored range of an existing booking.
    fn update_range(&self, id: BookingId, range: DateRange) -> Option<Booking>;

    /// Delete a booking, reporting whether it existed.
    fn remove(&self, id: BookingId) -> bool;
}

/// In-memory [`BookingStore`] backing tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    next_id: BookingId,
    bookings: HashMap<BookingId, Booking>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing bookings (ids are preserved).
    pub fn seeded(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            for booking in bookings {
                inner.next_id = inner.next_id.max(booking.id);
                inner.bookings.insert(booking.id, booking);
            }
        }
        store
    }

    fn select(&self, keep: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let inner = self.inner.lock().unwrap();
        let mut out: Vec<Booking> = inner.bookings.values().filter(|b| keep(b)).cloned().collect();
        out.sort_by_key(|b| b.id);
        out
    }
}

impl BookingStore for InMemoryStore {
    fn get(&self, id: BookingId) -> Option<Booking> {
        self.inner.lock().unwrap().bookings.get(&id).cloned()
    }

    fn for_spot(&self, spot: SpotId) -> Vec<Booking> {
        self.select(|b| b.spot_id == spot)
    }

    fn for_user(&self, user: UserId) -> Vec<Booking> {
        self.select(|b| b.user_id == user)
    }

    fn for_spot_or_user(&self, spot: SpotId, user: UserId) -> Vec<Booking> {
        self.select(|b| b.spot_id == spot || b.user_id == user)
    }

    fn insert(&self, spot: SpotId, user: UserId, range: DateRange) -> Booking {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let booking = Booking {
            id: inner.next_id,
            spot_id: spot,
            user_id: user,
            range,
        };
        inner.bookings.insert(booking.id, booking.clone());
        booking
    }

    fn update_range(&self, id: BookingId, range: DateRange) -> Option<Booking> {
        let mut inner = self.inner.lock().unwrap();
        let booking = inner.bookings.get_mut(&id)?;
        booking.range = range;
        Some(booking.clone())
    }

    fn remove(&self, id: BookingId) -> bool {
        self.inner.lock().unwrap().bookings.remove(&id).is_some()
    }
}

/// Serializes the check-then-write path per spot over a pluggable store.
///
/// Admission gates run before the lock is taken; everything that reads the
/// candidate set runs under the spot's lock, so a clear verdict cannot be
/// invalidated by a concurrent write to the same spot between check and
/// persist.
pub struct FrontDesk<S> {
    store: S,
    locks: Mutex<HashMap<SpotId, Arc<Mutex<()>>>>,
}

impl<S: BookingStore> FrontDesk<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Shared handle to the serialization lock for one spot.
    fn spot_lock(&self, spot: SpotId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks.entry(spot).or_default().clone()
    }

    /// Reserve `spot` for `user` over `proposed`.
    ///
    /// # Errors
    ///
    /// [`BookingError::StartNotInFuture`] / [`BookingError::EndNotAfterStart`]
    /// when the proposal fails the temporal gate, or
    /// [`BookingError::Conflict`] when it collides with an existing booking
    /// on the spot or one of the user's own stays elsewhere.
    pub fn reserve(
        &self,
        spot: SpotId,
        user: UserId,
        proposed: DateRange,
        today: NaiveDate,
    ) -> Result<Booking> {
        admission::admit_proposal(&proposed, today)?;

        let lock = self.spot_lock(spot);
        let _guard = lock.lock().unwrap();

        let pool = self.store.for_spot_or_user(spot, user);
        let ranges = candidates::candidates_for_create(&pool, spot, user);
        let verdict = conflict::check_booking_conflict(&proposed, &ranges);
        if !verdict.is_clear() {
            return Err(BookingError::Conflict(verdict));
        }

        Ok(self.store.insert(spot, user, proposed))
    }

    /// Move an existing booking to `proposed`.
    ///
    /// Only the booking's owner may reschedule, the current stay must not
    /// already be over, and the proposed range must clear the same spot's
    /// other bookings (the booking being moved never conflicts with itself).
    pub fn reschedule(
        &self,
        id: BookingId,
        user: UserId,
        proposed: DateRange,
        today: NaiveDate,
    ) -> Result<Booking> {
        let booking = self.store.get(id).ok_or(BookingError::NotFound)?;
        if booking.user_id != user {
            return Err(BookingError::Forbidden);
        }
        admission::admit_reschedule(&booking.range, today)?;
        admission::admit_proposal(&proposed, today)?;

        let lock = self.spot_lock(booking.spot_id);
        let _guard = lock.lock().unwrap();

        let pool = self.store.for_spot(booking.spot_id);
        let ranges = candidates::candidates_for_update(&pool, &booking);
        let verdict = conflict::check_booking_conflict(&proposed, &ranges);
        if !verdict.is_clear() {
            return Err(BookingError::Conflict(verdict));
        }

        // The row can vanish between the ownership read and here; surface
        // that as NotFound rather than resurrecting it.
        self.store
            .update_range(id, proposed)
            .ok_or(BookingError::NotFound)
    }

    /// Cancel a stay that has not started. Removal only frees space, so no
    /// spot lock is needed.
    pub fn cancel(&self, id: BookingId, user: UserId, today: NaiveDate) -> Result<()> {
        let booking = self.store.get(id).ok_or(BookingError::NotFound)?;
        if booking.user_id != user {
            return Err(BookingError::Forbidden);
        }
        admission::admit_cancel(&booking.range, today)?;

        if self.store.remove(id) {
            Ok(())
        } else {
            Err(BookingError::NotFound)
        }
    }

    /// Open windows for a spot within `window`.
    pub fn open_windows(&self, spot: SpotId, window: &DateRange) -> Vec<OpenWindow> {
        let booked: Vec<DateRange> = self
            .store
            .for_spot(spot)
            .iter()
            .map(|b| b.range)
            .collect();
        availability::open_windows(&booked, window)
    }
}
