//! [ElectricityMaps](https://portal.electricitymaps.com/) optimizer client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{
    Client,
    StatusCode,
    header::{HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};

use crate::{
    api::optimizer::{CarbonOptimizer, OptimizationOutput, OptimizationResult},
    core::OptimizationRequest,
    error::ScheduleError,
    prelude::*,
};

const OPTIMIZER_URL: &str = "https://api.electricitymap.org/v3/carbon-aware-optimizer";

pub struct Api {
    client: Client,
}

impl Api {
    /// Build a client with the token installed once.
    ///
    /// The header is marked sensitive so the token never shows up in logs.
    pub fn try_new(api_token: &str) -> Result<Self> {
        let mut token = HeaderValue::from_str(api_token).context("invalid API token")?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("auth-token", token);
        let client = Client::builder()
            .user_agent("dormouse")
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CarbonOptimizer for Api {
    #[instrument(
        skip_all,
        fields(start_window = %request.start_window, end_window = %request.end_window),
    )]
    async fn query(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, ScheduleError> {
        info!("querying the optimizer…");
        let response = self
            .client
            .post(OPTIMIZER_URL)
            .json(&OptimizeRequest::from(request))
            .send()
            .await?;
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(ScheduleError::Authentication),
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                let detail = response.text().await.unwrap_or_default();
                Err(ScheduleError::ForecastUnavailable(detail))
            }
            status if !status.is_success() => Err(ScheduleError::UnexpectedStatus(status)),
            _ => {
                let body = response.text().await?;
                let response: OptimizeResponse = serde_json::from_str(&body)
                    .map_err(|error| ScheduleError::MalformedResponse(error.to_string()))?;
                info!(
                    recommended_start = %response.optimal_start_time,
                    zone = response.output.zone_key,
                    "received the recommendation",
                );
                Ok(OptimizationResult {
                    recommended_start: response.optimal_start_time,
                    output: response.output,
                })
            }
        }
    }
}

/// Wire shape of the optimization request.
#[derive(Serialize)]
struct OptimizeRequest<'a> {
    /// Whole hours the work is expected to run.
    duration: i64,

    #[serde(rename = "startWindow")]
    start_window: DateTime<Utc>,

    #[serde(rename = "endWindow")]
    end_window: DateTime<Utc>,

    /// Exactly one pair, and the provider wants it as
    /// `[longitude, latitude]`, reversed from the policy's
    /// latitude-first convention.
    locations: [[f64; 2]; 1],

    #[serde(rename = "optimizationMetric")]
    metric: &'a str,
}

impl<'a> From<&'a OptimizationRequest> for OptimizeRequest<'a> {
    fn from(request: &'a OptimizationRequest) -> Self {
        Self {
            duration: request.duration_hours,
            start_window: request.start_window,
            end_window: request.end_window,
            locations: [[request.location.longitude, request.location.latitude]],
            metric: &request.metric,
        }
    }
}

#[derive(Deserialize)]
struct OptimizeResponse {
    #[serde(rename = "optimalStartTime")]
    optimal_start_time: DateTime<Utc>,

    #[serde(rename = "optimizationOutput")]
    output: OptimizationOutput,
}
