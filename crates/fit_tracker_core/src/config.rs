use crate::FitTrackerError;

/// Weight and height of the user a summary is computed for.
///
/// Non-positive values are accepted; the calculator reports zero for any
/// metric that depends on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Biometrics {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }

    pub fn from_env() -> Result<Self, FitTrackerError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, FitTrackerError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight_kg = read_number(&mut get, "FIT_TRACKER_WEIGHT_KG")?;
        let height_cm = read_number(&mut get, "FIT_TRACKER_HEIGHT_CM")?;
        Ok(Self::new(weight_kg, height_cm))
    }
}

fn read_number<F>(get: &mut F, key: &str) -> Result<f64, FitTrackerError>
where
    F: FnMut(&str) -> Option<String>,
{
    let raw = get(key).ok_or_else(|| FitTrackerError::Config(format!("{key} missing")))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FitTrackerError::Config(format!("{key} is not a number: {raw:?}")))?;
    if !value.is_finite() {
        return Err(FitTrackerError::Config(format!(
            "{key} must be finite, got {raw:?}"
        )));
    }
    Ok(value)
}
