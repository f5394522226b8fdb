//! Error types for tariff-engine operations.

use thiserror::Error;

use crate::slot::DayBucket;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TariffError {
    #[error("Missing field: slot {index} ({day}) has no '{field}'")]
    MissingField {
        day: DayBucket,
        index: usize,
        field: &'static str,
    },

    #[error("Invalid time: '{value}' is not a valid HH:mm time")]
    InvalidTimeFormat { value: String },

    #[error("Invalid ordering: slot {index} ({day}, {vehicle_type}) has a non-positive duration")]
    InvalidOrdering {
        day: DayBucket,
        index: usize,
        vehicle_type: String,
    },

    #[error("Overlap detected: slots {index_a} and {index_b} ({day}) overlap for vehicle type '{vehicle_type}'")]
    OverlapDetected {
        day: DayBucket,
        index_a: usize,
        index_b: usize,
        vehicle_type: String,
    },
}

pub type Result<T> = std::result::Result<T, TariffError>;
