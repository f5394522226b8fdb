//! Deterministic tariff slot validation.
//!
//! Pure functions over in-memory slot records — no I/O, no clock access, no
//! shared state. The pipeline is: normalize each slot to minutes-of-day
//! ([`normalize_slot`]), check each span is positive, then check pairwise
//! overlap within the same vehicle type ([`find_overlap`]). The composite
//! [`validate_day`] is the gate the save flow calls before issuing any
//! persistence request; on failure nothing is persisted.
//!
//! # Functions
//!
//! - [`minutes_of_day`] — Parse an `HH:mm` wall-clock string to minutes past midnight
//! - [`normalize_slot`] — Normalize a slot's interval, applying the overnight rule
//! - [`find_overlap`] — First overlapping same-vehicle-type pair, if any
//! - [`validate_day`] — Composite validation for one day bucket
//! - [`validate_schedule`] — Validate all five buckets of a schedule

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{Result, TariffError};
use crate::slot::{DayBucket, TariffSchedule, TariffSlot};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

// ── Normalization ───────────────────────────────────────────────────────────

/// A slot's interval in minutes past midnight, after the overnight rule.
///
/// `from_minutes` is in `[0, 1439]`. `to_minutes` is strictly greater than
/// `from_minutes` and may exceed 1440 when the slot crosses midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSlot {
    /// Vehicle-type partition key, carried through for overlap checks.
    pub vehicle_type: String,
    /// Start, minutes past midnight.
    pub from_minutes: u32,
    /// End, minutes past midnight of the start day (exclusive).
    pub to_minutes: u32,
}

impl NormalizedSlot {
    /// Effective length of the slot in minutes. Positive by construction.
    pub fn duration_minutes(&self) -> u32 {
        self.to_minutes - self.from_minutes
    }

    /// Whether the slot runs past midnight into the next calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.to_minutes > MINUTES_PER_DAY
    }
}

/// Parse an `HH:mm` wall-clock string to minutes past midnight.
///
/// Times are civil wall-clock values in the site's fixed local calendar;
/// there is no timezone handling anywhere in this crate.
///
/// # Errors
///
/// Returns [`TariffError::InvalidTimeFormat`] for anything that is not a
/// valid 24-hour `HH:mm` time (seconds, out-of-range fields, trailing text).
///
/// # Examples
///
/// ```
/// use tariff_engine::validate::minutes_of_day;
///
/// assert_eq!(minutes_of_day("08:30").unwrap(), 510);
/// assert_eq!(minutes_of_day("00:00").unwrap(), 0);
/// assert!(minutes_of_day("24:00").is_err());
/// ```
pub fn minutes_of_day(time: &str) -> Result<u32> {
    let t = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
        TariffError::InvalidTimeFormat {
            value: time.to_string(),
        }
    })?;
    Ok(t.hour() * 60 + t.minute())
}

/// Normalize a slot's interval to minutes past midnight.
///
/// Applies the overnight rule: when `to` resolves to a point at or before
/// `from`, the slot is read as crossing midnight and 1440 is added to the
/// end. A slot with `from == to` therefore means a full 24-hour span, not an
/// empty one.
///
/// # Errors
///
/// Returns [`TariffError::InvalidTimeFormat`] if either time string is
/// malformed.
///
/// # Examples
///
/// ```
/// use tariff_engine::{TariffSlot, validate::normalize_slot};
///
/// let overnight = normalize_slot(&TariffSlot::new("MC", "22:00", "02:00")).unwrap();
/// assert_eq!((overnight.from_minutes, overnight.to_minutes), (1320, 1560));
/// assert!(overnight.crosses_midnight());
/// ```
pub fn normalize_slot(slot: &TariffSlot) -> Result<NormalizedSlot> {
    let from_minutes = minutes_of_day(&slot.from)?;
    let mut to_minutes = minutes_of_day(&slot.to)?;
    if to_minutes <= from_minutes {
        // Crosses midnight; from == to reads as a full 24-hour slot.
        to_minutes += MINUTES_PER_DAY;
    }
    Ok(NormalizedSlot {
        vehicle_type: slot.vehicle_type.clone(),
        from_minutes,
        to_minutes,
    })
}

// ── Overlap detection ───────────────────────────────────────────────────────

/// Find the first pair of overlapping slots within the same vehicle type.
///
/// Pairs `(i, j)` with `i < j` are tested in ascending `i`, then ascending
/// `j`; the first intersecting pair by that enumeration is returned. The
/// order is part of the contract — user-facing messages name the colliding
/// indices and must stay stable.
///
/// Intervals are half-open `[from, to)` and intersection is strict
/// (`a.from < b.to && a.to > b.from`), so slots that merely touch at a
/// boundary do not overlap. Slots of different vehicle types never conflict,
/// whatever their times.
///
/// O(n²), acceptable on the single-digit slot counts a day bucket carries.
pub fn find_overlap(slots: &[NormalizedSlot]) -> Option<(usize, usize)> {
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            if slots[i].vehicle_type != slots[j].vehicle_type {
                continue;
            }
            if slots[i].from_minutes < slots[j].to_minutes
                && slots[i].to_minutes > slots[j].from_minutes
            {
                return Some((i, j));
            }
        }
    }
    None
}

// ── Composite validation ────────────────────────────────────────────────────

/// Validate all slots configured for one day bucket.
///
/// Checks run in order and the first failure wins:
///
/// 1. Every slot carries `from`, `to`, and a vehicle type
///    ([`TariffError::MissingField`], before any time is parsed).
/// 2. Every time parses as `HH:mm` ([`TariffError::InvalidTimeFormat`]).
/// 3. Every normalized span is positive ([`TariffError::InvalidOrdering`]).
/// 4. No two same-vehicle-type slots intersect
///    ([`TariffError::OverlapDetected`], naming both indices).
///
/// The caller persists the day only when this returns `Ok`; there is no
/// partial save.
///
/// # Examples
///
/// ```
/// use tariff_engine::{DayBucket, TariffSlot, validate::validate_day};
///
/// let slots = vec![
///     TariffSlot::new("Car/HGV", "08:00", "18:00"),
///     TariffSlot::new("MC", "08:00", "18:00"),
/// ];
/// // Same window, different vehicle types: fine.
/// assert!(validate_day(DayBucket::MonFri, &slots).is_ok());
/// ```
pub fn validate_day(day: DayBucket, slots: &[TariffSlot]) -> Result<()> {
    for (index, slot) in slots.iter().enumerate() {
        if let Some(field) = slot.missing_field() {
            return Err(TariffError::MissingField { day, index, field });
        }
    }

    let normalized = slots
        .iter()
        .map(normalize_slot)
        .collect::<Result<Vec<_>>>()?;

    // The overnight rule makes every normalized span positive (from == to
    // yields a full day), so this only trips if normalization changes.
    for (index, slot) in normalized.iter().enumerate() {
        if slot.duration_minutes() == 0 {
            return Err(TariffError::InvalidOrdering {
                day,
                index,
                vehicle_type: slot.vehicle_type.clone(),
            });
        }
    }

    if let Some((index_a, index_b)) = find_overlap(&normalized) {
        return Err(TariffError::OverlapDetected {
            day,
            index_a,
            index_b,
            vehicle_type: normalized[index_a].vehicle_type.clone(),
        });
    }

    Ok(())
}

/// Validate every bucket of a schedule, in [`DayBucket::ALL`] order.
///
/// Buckets are independent: overlap is never checked across buckets. The
/// first failing bucket's error is returned.
pub fn validate_schedule(schedule: &TariffSchedule) -> Result<()> {
    for (day, slots) in schedule.iter() {
        validate_day(day, slots)?;
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
