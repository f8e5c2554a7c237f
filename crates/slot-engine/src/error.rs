//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown day of week: '{0}'")]
    InvalidDayOfWeek(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid slot step: {0}")]
    InvalidStep(String),

    #[error("Invalid availability window: {0}")]
    InvalidWindow(String),

    #[error("Unknown barber: {0}")]
    UnknownBarber(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
