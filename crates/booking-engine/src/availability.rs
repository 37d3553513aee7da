//! Compute a spot's open windows from its booked date ranges.
//!
//! Booked ranges are merged into non-overlapping blocks, then the gaps
//! between blocks inside a query window fall out. Because a stay may not
//! start the day another one ends, a gap bordered by a booking loses the
//! boundary day on that side: the earliest check-in after a block is the day
//! after its checkout, and the latest checkout before a block is the day
//! before its check-in.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::calendar::DateRange;

/// An open run of nights a new stay could occupy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenWindow {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
    pub nights: i64,
}

/// Merge overlapping or touching booked ranges, keeping only those that
/// reach into the window.
///
/// Returns a sorted, non-overlapping list of (check-in, check-out) blocks.
/// Blocks are not clipped on the left -- a checkout day inside the window
/// still forbids a check-in on that day even when the stay began earlier.
fn merge_booked_blocks(
    booked: &[DateRange],
    window: &DateRange,
) -> Vec<(NaiveDate, NaiveDate)> {
    let mut blocks: Vec<(NaiveDate, NaiveDate)> = booked
        .iter()
        .filter(|r| r.end >= window.start && r.start <= window.end)
        .map(|r| (r.start, r.end))
        .collect();

    if blocks.is_empty() {
        return Vec::new();
    }

    blocks.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(NaiveDate, NaiveDate)> = Vec::new();
    for (start, end) in blocks {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or sharing a turnover day -- extend the block.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Find the open windows within `window`, given a spot's booked ranges.
///
/// Booked ranges may overlap (snapshots can contain stays from several
/// sources) -- they are merged before the gaps are computed. Returned
/// windows are sorted by start day and each spans at least one night.
pub fn open_windows(booked: &[DateRange], window: &DateRange) -> Vec<OpenWindow> {
    let blocks = merge_booked_blocks(booked, window);

    let mut windows = Vec::new();
    // Earliest permissible check-in; the window start itself carries no
    // adjacency penalty, only booked boundaries do.
    let mut cursor = window.start;

    for (block_start, block_end) in &blocks {
        let latest_checkout = *block_start - Days::new(1);
        if latest_checkout > cursor {
            windows.push(OpenWindow {
                start: cursor,
                end: latest_checkout,
                nights: (latest_checkout - cursor).num_days(),
            });
        }
        let next_checkin = *block_end + Days::new(1);
        cursor = cursor.max(next_checkin);
    }

    // Trailing window after the last block.
    if window.end > cursor {
        windows.push(OpenWindow {
            start: cursor,
            end: window.end,
            nights: (window.end - cursor).num_days(),
        });
    }

    windows
}

/// First open window of at least `min_nights` within the window.
pub fn first_open_window(
    booked: &[DateRange],
    window: &DateRange,
    min_nights: i64,
) -> Option<OpenWindow> {
    open_windows(booked, window)
        .into_iter()
        .find(|w| w.nights >= min_nights)
}
