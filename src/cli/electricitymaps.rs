use clap::Parser;

use crate::{api::ElectricityMaps, prelude::*};

#[derive(Parser)]
pub struct ElectricityMapsArgs {
    /// ElectricityMaps API token with forecast access.
    #[clap(long = "api-token", env = "ELECTRICITY_MAPS_API_TOKEN", hide_env_values = true)]
    pub api_token: String,
}

impl ElectricityMapsArgs {
    pub fn try_new_client(&self) -> Result<ElectricityMaps> {
        ElectricityMaps::try_new(&self.api_token)
    }
}
