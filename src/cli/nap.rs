use chrono::Utc;
use clap::Parser;

use crate::{
    cli::{electricitymaps::ElectricityMapsArgs, heartbeat::HeartbeatArgs, policy::PolicyArgs},
    core::{DeferralController, TokioTimer},
    prelude::*,
};

#[derive(Parser)]
pub struct NapArgs {
    #[clap(flatten)]
    pub policy: PolicyArgs,

    #[clap(flatten)]
    pub electricity_maps: ElectricityMapsArgs,

    #[clap(flatten)]
    pub heartbeat: HeartbeatArgs,
}

/// Ask for the greenest start and sleep until it, then hand control back.
///
/// Composes in shell pipelines: `dormouse nap … && make train`.
#[instrument(skip_all)]
pub async fn nap(args: &NapArgs) -> Result {
    let policy = args.policy.to_policy();
    let client = args.electricity_maps.try_new_client()?;
    let mut controller = DeferralController::new(client);
    controller.run(Utc::now(), &policy, &TokioTimer).await?;
    debug!(state = ?controller.state(), "the nap is over");
    args.heartbeat.send().await;
    Ok(())
}
