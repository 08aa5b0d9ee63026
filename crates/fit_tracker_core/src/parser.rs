//! Comma-delimited activity record parsing.

use chrono::TimeDelta;

use crate::duration::parse_duration;
use crate::labels::{ActivityKind, ActivityLabels};
use crate::{FitTrackerError, FitTrackerResult};

const DELIMITER: char = ',';

/// Field layout of an input record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape {
    /// `<steps>,<duration>` from the step counter.
    Daily,
    /// `<steps>,<label>,<duration>` from the training log.
    Training,
}

impl RecordShape {
    pub fn field_count(self) -> usize {
        match self {
            RecordShape::Daily => 2,
            RecordShape::Training => 3,
        }
    }
}

/// One validated input line. `steps` is always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub kind: ActivityKind,
    /// Raw label text; `None` for daily records.
    pub label: Option<String>,
    pub duration: TimeDelta,
}

/// Parse a record of the given shape.
///
/// Daily records are step-counter walking data and always classify as
/// [`ActivityKind::Walking`].
pub fn parse_record(
    data: &str,
    shape: RecordShape,
    labels: &ActivityLabels,
) -> FitTrackerResult<ActivityRecord> {
    let fields: Vec<&str> = data.split(DELIMITER).collect();
    if fields.len() != shape.field_count() {
        return Err(FitTrackerError::Format(format!(
            "expected {} fields, got {}",
            shape.field_count(),
            fields.len()
        )));
    }

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[fields.len() - 1])?;
    let (kind, label) = match shape {
        RecordShape::Daily => (ActivityKind::Walking, None),
        RecordShape::Training => {
            let label = fields[1];
            (labels.classify(label), Some(label.to_string()))
        }
    };

    tracing::trace!(steps, ?kind, ?duration, "parsed activity record");
    Ok(ActivityRecord {
        steps,
        kind,
        label,
        duration,
    })
}

pub fn parse_daily(data: &str) -> FitTrackerResult<ActivityRecord> {
    parse_record(data, RecordShape::Daily, &ActivityLabels::default())
}

pub fn parse_training(data: &str, labels: &ActivityLabels) -> FitTrackerResult<ActivityRecord> {
    parse_record(data, RecordShape::Training, labels)
}

fn parse_steps(field: &str) -> FitTrackerResult<i64> {
    let steps: i64 = field
        .parse()
        .map_err(|_| FitTrackerError::Validation(format!("steps {field:?} is not an integer")))?;
    if steps <= 0 {
        return Err(FitTrackerError::Validation(format!(
            "steps must be positive, got {steps}"
        )));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parses_daily_record() {
        let record = parse_daily("1000,40m").unwrap();
        assert_eq!(record.steps, 1000);
        assert_eq!(record.duration, TimeDelta::minutes(40));
        assert_eq!(record.kind, ActivityKind::Walking);
        assert_eq!(record.label, None);
    }

    #[test]
    fn parses_training_record() {
        let record = parse_training("3456,Бег,45m", &ActivityLabels::default()).unwrap();
        assert_eq!(record.steps, 3456);
        assert_eq!(record.kind, ActivityKind::Running);
        assert_eq!(record.label.as_deref(), Some("Бег"));
        assert_eq!(record.duration, TimeDelta::minutes(45));
    }

    #[test]
    fn unknown_label_is_not_an_error() {
        let record = parse_training("1000,Катание,10m", &ActivityLabels::default()).unwrap();
        assert_eq!(record.kind, ActivityKind::Unknown);
        assert_eq!(record.label.as_deref(), Some("Катание"));
    }

    #[test]
    fn wrong_arity_is_format_error() {
        let err = parse_daily("1000").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err.to_string(),
            "invalid data format: expected 2 fields, got 1"
        );

        let err = parse_daily("1000,Бег,40m").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = parse_training("1000,40m", &ActivityLabels::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        assert_eq!(parse_daily("").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn bad_steps_are_validation_errors() {
        for data in ["abc,40m", "0,40m", "-5,40m", " 100,40m", "1.5,40m", ",40m"] {
            let err = parse_daily(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {data:?}");
        }
    }

    #[test]
    fn bad_duration_is_format_error() {
        for data in ["1000,40", "1000,", "1000,abc", "1000,40 m"] {
            let err = parse_daily(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "input {data:?}");
        }
    }

    #[test]
    fn steps_are_checked_before_duration() {
        let err = parse_daily("abc,xyz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn negative_duration_is_accepted() {
        let record = parse_daily("1000,-30m").unwrap();
        assert_eq!(record.duration, TimeDelta::minutes(-30));
    }
}
