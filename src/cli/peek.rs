use chrono::Utc;
use clap::Parser;

use crate::{
    api::CarbonOptimizer,
    cli::{electricitymaps::ElectricityMapsArgs, policy::PolicyArgs},
    core::plan,
    prelude::*,
    tables::build_forecast_table,
};

#[derive(Parser)]
pub struct PeekArgs {
    #[clap(flatten)]
    pub policy: PolicyArgs,

    #[clap(flatten)]
    pub electricity_maps: ElectricityMapsArgs,
}

/// Show what a nap would do, without taking one.
#[instrument(skip_all)]
pub async fn peek(args: &PeekArgs) -> Result {
    let policy = args.policy.to_policy();
    let request = plan(Utc::now(), &policy)?;
    let result = args.electricity_maps.try_new_client()?.query(&request).await?;
    println!("{}", build_forecast_table(&request, &result));
    Ok(())
}
