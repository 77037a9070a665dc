//! Carbon-aware optimizer interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{core::OptimizationRequest, error::ScheduleError};

/// The one question this tool asks: «when, within this window, is the grid
/// greenest?»
///
/// Deliberately narrow so that the scheduler can be driven by a
/// deterministic test double instead of a real network stack.
#[async_trait]
pub trait CarbonOptimizer: Sync {
    /// Perform one fresh optimization call.
    ///
    /// Never cached and never retried: forecasts are time-sensitive, and
    /// retry policy belongs to the surrounding engine.
    async fn query(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, ScheduleError>;
}

/// The provider's answer for the one requested location.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult {
    /// The recommended start instant.
    pub recommended_start: DateTime<Utc>,

    pub output: OptimizationOutput,
}

/// Forecast figures returned alongside the recommendation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOutput {
    /// Metric value if the work started right away.
    pub metric_value_immediate_execution: f64,

    /// Metric value at the recommended start.
    pub metric_value_optimal_execution: f64,

    /// Metric value at the start of the window.
    pub metric_value_start_window_execution: f64,

    /// For example, `gCO2eq/kWh`.
    pub metric_unit: String,

    pub optimization_metric: String,

    /// The grid zone the coordinates resolved to.
    pub zone_key: String,
}
