//! # tariff-engine
//!
//! Deterministic validation of car-park tariff time slots.
//!
//! A tariff is configured as a set of time-of-day charging slots per
//! day-of-week bucket (All day, Mon-Fri, Sat, Sun, PH) and vehicle type. This
//! crate is the pure gate in front of the persistence layer: it normalizes
//! each slot's `HH:mm` window to minutes past midnight (reading `to <= from`
//! as crossing midnight), checks every span is positive, and rejects any two
//! slots of the same vehicle type whose windows intersect. Slots of different
//! vehicle types may share a window; different day buckets never interact.
//!
//! All functions are synchronous, side-effect-free, and reentrant — callers
//! supply the slot lists, nothing here touches the network or the clock.
//!
//! ## Modules
//!
//! - [`slot`] — Slot, schedule, and day-bucket record shapes
//! - [`validate`] — Normalization, overlap detection, and composite validation
//! - [`error`] — Error types

pub mod error;
pub mod slot;
pub mod validate;

pub use error::TariffError;
pub use slot::{ChargeParams, DayBucket, TariffSchedule, TariffSlot};
pub use validate::{
    find_overlap, minutes_of_day, normalize_slot, validate_day, validate_schedule,
    NormalizedSlot, MINUTES_PER_DAY,
};
