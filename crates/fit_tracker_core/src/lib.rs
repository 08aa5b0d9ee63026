//! Step-log and training-log parsing with distance, speed and calorie
//! estimates.
//!
//! The two entry points mirror the two log formats:
//!
//! - [`daily_step_summary`] for `"<steps>,<duration>"` step-counter records
//! - [`training_summary`] for `"<steps>,<label>,<duration>"` training records

use thiserror::Error;

pub mod calculator;
pub mod config;
pub mod duration;
pub mod labels;
pub mod parser;
pub mod summary;

pub use config::Biometrics;
pub use labels::{ActivityKind, ActivityLabels};
pub use parser::{ActivityRecord, RecordShape};
pub use summary::{
    DailyReport, TrainingOutcome, WorkoutReport, daily_step_summary, evaluate_daily,
    evaluate_training, training_summary, try_daily_step_summary,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FitTrackerError {
    #[error("invalid data format: {0}")]
    Format(String),
    #[error("invalid data: {0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`FitTrackerError`] for callers that branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Validation,
    Config,
}

impl FitTrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FitTrackerError::Format(_) => ErrorKind::Format,
            FitTrackerError::Validation(_) => ErrorKind::Validation,
            FitTrackerError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<duration::DurationError> for FitTrackerError {
    fn from(err: duration::DurationError) -> Self {
        FitTrackerError::Format(err.to_string())
    }
}

pub type FitTrackerResult<T> = Result<T, FitTrackerError>;
