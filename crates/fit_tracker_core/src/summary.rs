//! Summary rendering for daily step logs and training logs.
//!
//! The `evaluate_*` functions return structured results; their `Display`
//! output is the text summary. Every number is printed with two decimals.

use std::fmt;

use serde::Serialize;

use crate::FitTrackerResult;
use crate::calculator::{average_speed, distance, running_calories, walking_calories};
use crate::config::Biometrics;
use crate::duration::hours;
use crate::labels::{ActivityKind, ActivityLabels};
use crate::parser::{ActivityRecord, parse_daily, parse_training};

const UNKNOWN_ACTIVITY_MESSAGE: &str = "unrecognized activity type";
const PROCESSING_ERROR_MESSAGE: &str = "data processing error";

/// Metrics for one recognized training session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub kind: ActivityKind,
    pub label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity type: {}", self.label)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrainingOutcome {
    Report(WorkoutReport),
    UnknownActivity { label: String },
    Invalid { error: String },
}

impl fmt::Display for TrainingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingOutcome::Report(report) => fmt::Display::fmt(report, f),
            TrainingOutcome::UnknownActivity { .. } => writeln!(f, "{UNKNOWN_ACTIVITY_MESSAGE}"),
            TrainingOutcome::Invalid { error } => {
                writeln!(f, "{PROCESSING_ERROR_MESSAGE}: {error}")
            }
        }
    }
}

/// Step-counter summary for one daily record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyReport {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2} kcal.", self.calories)
    }
}

/// Metrics for a parsed record, or `None` when its activity is unknown.
pub fn workout_report(record: &ActivityRecord, profile: &Biometrics) -> Option<WorkoutReport> {
    let calories = match record.kind {
        ActivityKind::Running => running_calories(record.steps, profile.weight_kg, record.duration),
        ActivityKind::Walking => walking_calories(
            record.steps,
            profile.weight_kg,
            profile.height_cm,
            record.duration,
        ),
        ActivityKind::Unknown => return None,
    };
    Some(WorkoutReport {
        kind: record.kind,
        label: record.label.clone().unwrap_or_default(),
        duration_hours: hours(record.duration),
        distance_km: distance(record.steps),
        speed_kmh: average_speed(record.steps, record.duration),
        calories,
    })
}

pub fn evaluate_training(
    data: &str,
    profile: &Biometrics,
    labels: &ActivityLabels,
) -> TrainingOutcome {
    let record = match parse_training(data, labels) {
        Ok(record) => record,
        Err(err) => {
            return TrainingOutcome::Invalid {
                error: err.to_string(),
            };
        }
    };
    match workout_report(&record, profile) {
        Some(report) => TrainingOutcome::Report(report),
        None => {
            let label = record.label.unwrap_or_default();
            tracing::debug!(label = %label, "activity label not recognized");
            TrainingOutcome::UnknownActivity { label }
        }
    }
}

pub fn evaluate_daily(data: &str, profile: &Biometrics) -> FitTrackerResult<DailyReport> {
    let record = parse_daily(data)?;
    Ok(DailyReport {
        steps: record.steps,
        distance_km: distance(record.steps),
        calories: walking_calories(
            record.steps,
            profile.weight_kg,
            profile.height_cm,
            record.duration,
        ),
    })
}

/// Summary of a `"<steps>,<label>,<duration>"` training record.
///
/// Unknown labels and malformed records produce a one-line message instead
/// of metrics.
pub fn training_summary(data: &str, weight_kg: f64, height_cm: f64) -> String {
    evaluate_training(
        data,
        &Biometrics::new(weight_kg, height_cm),
        &ActivityLabels::default(),
    )
    .to_string()
}

pub fn try_daily_step_summary(
    data: &str,
    weight_kg: f64,
    height_cm: f64,
) -> FitTrackerResult<String> {
    evaluate_daily(data, &Biometrics::new(weight_kg, height_cm)).map(|report| report.to_string())
}

/// Summary of a `"<steps>,<duration>"` step record; empty when the record
/// does not parse. Use [`try_daily_step_summary`] to see the error.
pub fn daily_step_summary(data: &str, weight_kg: f64, height_cm: f64) -> String {
    try_daily_step_summary(data, weight_kg, height_cm).unwrap_or_default()
}
