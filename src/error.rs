use reqwest::StatusCode;
use thiserror::Error;

/// Why a step could not be scheduled.
///
/// Every variant is fatal for the step: either the optimal-time contract is
/// honoured, or the step fails outright. Retrying, if wanted, is the
/// surrounding engine's business.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Rejected before any network call is made.
    #[error("invalid wait policy: {0}")]
    InvalidPolicy(&'static str),

    /// The API token was rejected. The message never echoes the token.
    #[error("the optimizer rejected the API token")]
    Authentication,

    /// The zone is not supported, or the subscription has no forecast
    /// access. A real-time-only plan cannot schedule ahead.
    #[error("no forecast for the requested location: {0}")]
    ForecastUnavailable(String),

    /// The response carried no parseable recommendation.
    #[error("unexpected optimizer response: {0}")]
    MalformedResponse(String),

    #[error("failed to reach the optimizer")]
    Transport(#[from] reqwest::Error),

    #[error("the optimizer responded with HTTP {0}")]
    UnexpectedStatus(StatusCode),
}
