use chrono::TimeDelta;
use clap::Parser;

use crate::core::{DEFAULT_OPTIMIZATION_METRIC, Location, WaitPolicy};

#[derive(Parser)]
pub struct PolicyArgs {
    /// How long the step may wait for a greener window.
    #[clap(long, env = "DORMOUSE_PATIENCE", default_value = "6h")]
    patience: humantime::Duration,

    /// Expected run time of the downstream work.
    #[clap(long, env = "DORMOUSE_EXPECTED_DURATION", default_value = "1h")]
    expected_duration: humantime::Duration,

    /// Latitude of the place where the work draws its power.
    #[clap(long, env = "DORMOUSE_LATITUDE", allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude of the place where the work draws its power.
    #[clap(long, env = "DORMOUSE_LONGITUDE", allow_hyphen_values = true)]
    longitude: f64,

    /// Optimization signal understood by the provider.
    #[clap(long, env = "DORMOUSE_METRIC", default_value = DEFAULT_OPTIMIZATION_METRIC)]
    metric: String,
}

impl PolicyArgs {
    pub fn to_policy(&self) -> WaitPolicy {
        WaitPolicy::builder()
            .patience(TimeDelta::from_std(self.patience.into()).unwrap())
            .expected_duration(TimeDelta::from_std(self.expected_duration.into()).unwrap())
            .location(Location::new(self.latitude, self.longitude))
            .metric(self.metric.clone())
            .build()
    }
}
