//! # booking-engine
//!
//! Date-range conflict checking for whole-day spot bookings.
//!
//! The heart of the crate is a pure checker: given the date ranges already
//! booked for a spot (and, on create, by the guest) and a proposed stay, it
//! reports which boundary of the proposal collides. Overlap and adjacency
//! both count -- a stay may not start the day another one ends. Around the
//! checker sit the temporal admission gates, candidate-set selection, an
//! open-window view, and a front desk that serializes check-then-write per
//! spot over a pluggable booking store.
//!
//! ## Quick start
//!
//! ```rust
//! use booking_engine::{check_booking_conflict, DateRange};
//! use chrono::NaiveDate;
//!
//! let existing = vec![DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
//! )];
//! let proposed = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//! );
//!
//! let verdict = check_booking_conflict(&proposed, &existing);
//! assert!(verdict.start_date && !verdict.end_date);
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — calendar-day normalization and `DateRange`
//! - [`conflict`] — the overlap predicate and `ConflictVerdict`
//! - [`admission`] — temporal gates that run before any checking
//! - [`candidates`] — candidate-set selection per operation
//! - [`availability`] — open windows between a spot's bookings
//! - [`ledger`] — booking store trait and the serialized front desk
//! - [`rejection`] — status + body shapes for the transport boundary
//! - [`error`] — error types

pub mod admission;
pub mod availability;
pub mod calendar;
pub mod candidates;
pub mod conflict;
pub mod error;
pub mod ledger;
pub mod rejection;

pub use calendar::{CalendarDay, DateRange};
pub use candidates::{Booking, BookingId, SpotId, UserId};
pub use conflict::{check_booking_conflict, ConflictVerdict};
pub use error::BookingError;
pub use ledger::{BookingStore, FrontDesk, InMemoryStore};
pub use rejection::Rejection;
