use bon::Builder;
use chrono::TimeDelta;

use crate::error::ScheduleError;

/// Signal minimised when the caller does not ask for anything else:
/// consumption-based carbon intensity, traced through the grid flows.
pub const DEFAULT_OPTIMIZATION_METRIC: &str = "flow-traced_carbon_intensity";

/// Where the work will draw its power from.
#[derive(Copy, Clone, Debug, PartialEq, derive_more::Constructor)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// How long a step is willing to wait, and what for.
///
/// Created once at step-definition time and never mutated afterwards.
#[derive(Builder, Clone, Debug)]
pub struct WaitPolicy {
    /// Maximum time the step may spend waiting for a greener window.
    pub patience: TimeDelta,

    /// Expected run time of the downstream work.
    pub expected_duration: TimeDelta,

    pub location: Location,

    /// Optimization signal understood by the provider.
    #[builder(into, default = DEFAULT_OPTIMIZATION_METRIC.to_owned())]
    pub metric: String,
}

impl WaitPolicy {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.patience <= TimeDelta::zero() {
            return Err(ScheduleError::InvalidPolicy("patience must be positive"));
        }
        if self.expected_duration <= TimeDelta::zero() {
            return Err(ScheduleError::InvalidPolicy("expected duration must be positive"));
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ScheduleError::InvalidPolicy("latitude must be within ±90°"));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ScheduleError::InvalidPolicy("longitude must be within ±180°"));
        }
        if self.metric.is_empty() {
            return Err(ScheduleError::InvalidPolicy("the optimization metric must not be empty"));
        }
        Ok(())
    }
}
