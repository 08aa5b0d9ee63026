//! Distance, speed and calorie estimates.
//!
//! Every function returns `0.0` when one of its required inputs is not
//! positive instead of failing.

use chrono::TimeDelta;

use crate::duration::hours;

/// Assumed length of one step, in meters.
pub const STRIDE_LENGTH_M: f64 = 0.65;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_HEIGHT_MULTIPLIER: f64 = 0.029;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Distance covered in kilometers.
pub fn distance(steps: i64) -> f64 {
    if steps <= 0 {
        return 0.0;
    }
    steps as f64 * STRIDE_LENGTH_M / METERS_PER_KM
}

/// Average speed in km/h.
pub fn average_speed(steps: i64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps) / hours(duration)
}

/// Calories burned while running.
///
/// Not clamped: speeds below 20/18 km/h give a negative estimate.
pub fn running_calories(steps: i64, weight_kg: f64, duration: TimeDelta) -> f64 {
    if steps <= 0 || duration <= TimeDelta::zero() || !is_positive(weight_kg) {
        return 0.0;
    }
    let speed = average_speed(steps, duration);
    (RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * weight_kg
}

/// Calories burned while walking.
pub fn walking_calories(steps: i64, weight_kg: f64, height_cm: f64, duration: TimeDelta) -> f64 {
    if steps <= 0
        || duration <= TimeDelta::zero()
        || !is_positive(weight_kg)
        || !is_positive(height_cm)
    {
        return 0.0;
    }
    let speed = average_speed(steps, duration);
    (WALKING_WEIGHT_MULTIPLIER * weight_kg + (speed * speed / height_cm) * WALKING_HEIGHT_MULTIPLIER)
        * hours(duration)
        * MINUTES_PER_HOUR
}
