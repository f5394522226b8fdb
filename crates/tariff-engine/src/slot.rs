//! Tariff slot record shapes.
//!
//! A [`TariffSlot`] is one time-of-day charging interval for one vehicle type,
//! exactly as the back office exchanges it: `HH:mm` wall-clock strings in a
//! fixed local civil time (never UTC-converted), a vehicle-type category, and
//! an opaque bundle of charge parameters that validation never inspects.
//!
//! Slots are grouped into five independent day-of-week buckets ([`DayBucket`]);
//! overlap is only ever checked within one bucket.

use serde::{Deserialize, Serialize};

/// One of the five independent day-of-week partitions a tariff is configured
/// for. Slots in different buckets never conflict with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayBucket {
    /// Every day, no weekday distinction.
    AllDay,
    /// Monday through Friday.
    MonFri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
    /// Public holiday.
    PublicHoliday,
}

impl DayBucket {
    /// All buckets, in the order the back office lists them.
    pub const ALL: [DayBucket; 5] = [
        DayBucket::AllDay,
        DayBucket::MonFri,
        DayBucket::Sat,
        DayBucket::Sun,
        DayBucket::PublicHoliday,
    ];

    /// The back-office display label.
    pub fn label(&self) -> &'static str {
        match self {
            DayBucket::AllDay => "All day",
            DayBucket::MonFri => "Mon-Fri",
            DayBucket::Sat => "Sat",
            DayBucket::Sun => "Sun",
            DayBucket::PublicHoliday => "PH",
        }
    }
}

impl std::fmt::Display for DayBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Charging parameters attached to a slot.
///
/// Opaque to validation: these travel with the slot to the persistence layer
/// but play no part in ordering or overlap checks. All fields are optional
/// because different rate types populate different subsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeParams {
    /// Rate scheme identifier (e.g. per-block, per-entry).
    pub rate_type: Option<String>,
    /// Charge per billing block, in the tariff currency.
    pub block_charge: Option<f64>,
    /// Minimum fee for any stay in this slot.
    pub min_fee: Option<f64>,
    /// Grace period in minutes before charging starts.
    pub grace_minutes: Option<u32>,
    /// Fee for the first billing block when it differs from later blocks.
    pub first_block_fee: Option<f64>,
    /// Lower bound on the total charge.
    pub min_charge: Option<f64>,
    /// Upper bound (cap) on the total charge.
    pub max_charge: Option<f64>,
}

/// One time-of-day charging interval for one vehicle type.
///
/// `from` and `to` are `HH:mm` wall-clock strings. A slot whose `to` is
/// numerically less than or equal to its `from` crosses midnight into the
/// next calendar day (see [`crate::validate::normalize_slot`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSlot {
    /// Vehicle-type category, e.g. "Car/HGV", "MC", "Car/HGV/MC". Slots of
    /// different vehicle types never conflict regardless of time overlap.
    pub vehicle_type: String,
    /// Start of the slot, `HH:mm`.
    pub from: String,
    /// End of the slot, `HH:mm` (exclusive).
    pub to: String,
    /// Charge parameters; not involved in validation.
    #[serde(flatten)]
    pub charge: ChargeParams,
}

impl TariffSlot {
    /// A slot with just the fields validation cares about.
    pub fn new(
        vehicle_type: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        TariffSlot {
            vehicle_type: vehicle_type.into(),
            from: from.into(),
            to: to.into(),
            charge: ChargeParams::default(),
        }
    }

    /// The first required field that is absent (empty or blank), if any.
    /// Checked in `from`, `to`, `vehicle_type` order.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.from.trim().is_empty() {
            Some("from")
        } else if self.to.trim().is_empty() {
            Some("to")
        } else if self.vehicle_type.trim().is_empty() {
            Some("vehicleType")
        } else {
            None
        }
    }
}

/// A full tariff configuration: one slot list per [`DayBucket`].
///
/// This is the unit the save flow persists. Each bucket is validated
/// independently; an error in one bucket aborts the whole save (no partial
/// persistence).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSchedule {
    #[serde(default)]
    pub all_day: Vec<TariffSlot>,
    #[serde(default)]
    pub mon_fri: Vec<TariffSlot>,
    #[serde(default)]
    pub sat: Vec<TariffSlot>,
    #[serde(default)]
    pub sun: Vec<TariffSlot>,
    #[serde(default)]
    pub public_holiday: Vec<TariffSlot>,
}

impl TariffSchedule {
    /// The slot list for one bucket.
    pub fn day(&self, day: DayBucket) -> &[TariffSlot] {
        match day {
            DayBucket::AllDay => &self.all_day,
            DayBucket::MonFri => &self.mon_fri,
            DayBucket::Sat => &self.sat,
            DayBucket::Sun => &self.sun,
            DayBucket::PublicHoliday => &self.public_holiday,
        }
    }

    /// All buckets with their slot lists, in [`DayBucket::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (DayBucket, &[TariffSlot])> {
        DayBucket::ALL.into_iter().map(move |d| (d, self.day(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bucket_labels() {
        assert_eq!(DayBucket::AllDay.to_string(), "All day");
        assert_eq!(DayBucket::MonFri.to_string(), "Mon-Fri");
        assert_eq!(DayBucket::PublicHoliday.to_string(), "PH");
    }

    #[test]
    fn test_slot_deserializes_camel_case_with_flat_charge_fields() {
        let json = r#"{
            "vehicleType": "Car/HGV",
            "from": "08:00",
            "to": "18:00",
            "rateType": "per-block",
            "blockCharge": 1.2,
            "graceMinutes": 10
        }"#;
        let slot: TariffSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.vehicle_type, "Car/HGV");
        assert_eq!(slot.from, "08:00");
        assert_eq!(slot.charge.rate_type.as_deref(), Some("per-block"));
        assert_eq!(slot.charge.block_charge, Some(1.2));
        assert_eq!(slot.charge.grace_minutes, Some(10));
        assert_eq!(slot.charge.max_charge, None);
    }

    #[test]
    fn test_schedule_buckets_default_empty() {
        let schedule: TariffSchedule = serde_json::from_str(r#"{"sat": []}"#).unwrap();
        assert!(schedule.mon_fri.is_empty());
        assert_eq!(schedule.iter().count(), 5);
    }

    #[test]
    fn test_missing_field_order() {
        let slot = TariffSlot::new("", "", "");
        assert_eq!(slot.missing_field(), Some("from"));
        let slot = TariffSlot::new("", "08:00", "");
        assert_eq!(slot.missing_field(), Some("to"));
        let slot = TariffSlot::new("  ", "08:00", "10:00");
        assert_eq!(slot.missing_field(), Some("vehicleType"));
        let slot = TariffSlot::new("MC", "08:00", "10:00");
        assert_eq!(slot.missing_field(), None);
    }
}
