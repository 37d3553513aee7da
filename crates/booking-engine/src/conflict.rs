//! Detect date conflicts between a proposed stay and existing bookings.
//!
//! Boundary-to-boundary adjacency IS a conflict: a stay may not start the day
//! another one ends (no same-day turnover), and identical boundaries always
//! collide.

use crate::calendar::DateRange;

/// Reason attached to a flagged start boundary.
pub const START_CONFLICT: &str = "Start date conflicts with an existing booking";
/// Reason attached to a flagged end boundary.
pub const END_CONFLICT: &str = "End date conflicts with an existing booking";

/// Which boundaries of a proposed range collided with existing bookings.
///
/// Flags only accumulate as more existing ranges are inspected -- a later
/// range never clears a flag set by an earlier one. An empty verdict means
/// the proposal is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictVerdict {
    pub start_date: bool,
    pub end_date: bool,
}

impl ConflictVerdict {
    /// No boundary collided.
    pub fn is_clear(&self) -> bool {
        !self.start_date && !self.end_date
    }

    /// Union of two verdicts.
    pub fn merge(self, other: ConflictVerdict) -> ConflictVerdict {
        ConflictVerdict {
            start_date: self.start_date || other.start_date,
            end_date: self.end_date || other.end_date,
        }
    }

    /// `(field, reason)` pairs for every flagged boundary.
    pub fn reasons(&self) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        if self.start_date {
            out.push(("startDate", START_CONFLICT));
        }
        if self.end_date {
            out.push(("endDate", END_CONFLICT));
        }
        out
    }

    fn saturated(&self) -> bool {
        self.start_date && self.end_date
    }
}

/// Check one proposed range against a single existing range.
///
/// A boundary is flagged when it lands exactly on either boundary of the
/// existing range or falls strictly inside it. A proposal that fully
/// surrounds the existing range conflicts at both ends even though neither
/// of its endpoints is interior, so that case is checked separately.
pub fn conflicts_with(proposed: &DateRange, existing: &DateRange) -> ConflictVerdict {
    let (ps, pe) = (proposed.start, proposed.end);
    let (es, ee) = (existing.start, existing.end);

    let mut verdict = ConflictVerdict::default();

    if ps == es || ps == ee || (es < ps && ps < ee) {
        verdict.start_date = true;
    }
    if pe == es || pe == ee || (es < pe && pe < ee) {
        verdict.end_date = true;
    }
    // Strict containment of the existing stay.
    if ps < es && pe > ee {
        verdict.start_date = true;
        verdict.end_date = true;
    }

    verdict
}

/// Check a proposed range against every range in the candidate set,
/// accumulating the union of boundary flags.
///
/// The candidate set must already be scoped to the operation (see
/// [`crate::candidates`]) and reflect a consistent point-in-time snapshot.
/// The result does not depend on the order of `existing`.
pub fn check_booking_conflict(proposed: &DateRange, existing: &[DateRange]) -> ConflictVerdict {
    let mut verdict = ConflictVerdict::default();
    for range in existing {
        verdict = verdict.merge(conflicts_with(proposed, range));
        if verdict.saturated() {
            break;
        }
    }
    verdict
}
