//! Tests for the temporal admission gates.

use booking_engine::admission::{admit_cancel, admit_proposal, admit_reschedule};
use booking_engine::{BookingError, DateRange};
use chrono::NaiveDate;

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(day(start), day(end))
}

const TODAY: &str = "2024-06-01";

#[test]
fn future_proposal_is_admitted() {
    let proposed = range("2024-06-02", "2024-06-05");
    assert_eq!(admit_proposal(&proposed, day(TODAY)), Ok(()));
}

#[test]
fn start_today_is_rejected() {
    // "Strictly in the future" — checking in today is already too late.
    let proposed = range("2024-06-01", "2024-06-05");
    assert_eq!(
        admit_proposal(&proposed, day(TODAY)),
        Err(BookingError::StartNotInFuture)
    );
}

#[test]
fn start_in_past_is_rejected() {
    let proposed = range("2024-05-20", "2024-06-05");
    assert_eq!(
        admit_proposal(&proposed, day(TODAY)),
        Err(BookingError::StartNotInFuture)
    );
}

#[test]
fn end_equal_to_start_is_rejected() {
    let proposed = range("2024-06-10", "2024-06-10");
    assert_eq!(
        admit_proposal(&proposed, day(TODAY)),
        Err(BookingError::EndNotAfterStart)
    );
}

#[test]
fn end_before_start_is_rejected() {
    let proposed = range("2024-06-10", "2024-06-08");
    assert_eq!(
        admit_proposal(&proposed, day(TODAY)),
        Err(BookingError::EndNotAfterStart)
    );
}

#[test]
fn start_violation_reported_before_end_violation() {
    // Both fields are bad; the start-day check fires first.
    let proposed = range("2024-05-20", "2024-05-18");
    assert_eq!(
        admit_proposal(&proposed, day(TODAY)),
        Err(BookingError::StartNotInFuture)
    );
}

#[test]
fn reschedule_allowed_while_stay_is_live() {
    // Checking out today still counts as live.
    assert_eq!(
        admit_reschedule(&range("2024-05-28", "2024-06-01"), day(TODAY)),
        Ok(())
    );
}

#[test]
fn reschedule_rejected_after_stay_is_over() {
    assert_eq!(
        admit_reschedule(&range("2024-05-20", "2024-05-25"), day(TODAY)),
        Err(BookingError::BookingOver)
    );
}

#[test]
fn cancel_allowed_before_check_in() {
    assert_eq!(
        admit_cancel(&range("2024-06-02", "2024-06-05"), day(TODAY)),
        Ok(())
    );
}

#[test]
fn cancel_rejected_on_check_in_day() {
    assert_eq!(
        admit_cancel(&range("2024-06-01", "2024-06-05"), day(TODAY)),
        Err(BookingError::BookingStarted)
    );
}

#[test]
fn cancel_rejected_after_check_in() {
    assert_eq!(
        admit_cancel(&range("2024-05-28", "2024-06-05"), day(TODAY)),
        Err(BookingError::BookingStarted)
    );
}
