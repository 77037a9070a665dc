//! Suspend/resume protocol around the optimizer's recommendation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    api::CarbonOptimizer,
    core::{policy::WaitPolicy, window},
    error::ScheduleError,
    prelude::*,
};

/// What a step instance is currently doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepState {
    /// No decision has been made yet.
    Start,

    /// Suspended without holding a worker. The only way out is the wake-up.
    Waiting { wake_at: DateTime<Utc> },

    /// The step may run. Terminal.
    Done,
}

/// The controller's verdict for one evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The optimal instant is now, or has already passed.
    Proceed,

    /// Park the step until `wake_at`.
    Defer { wake_at: DateTime<Utc> },
}

/// One-shot wake-up registration: the suspension primitive of whatever
/// engine hosts the step.
///
/// Cancellation while parked is the engine's concern; the controller holds
/// no cleanup obligation for an abandoned registration.
#[async_trait]
pub trait WakeTimer {
    /// Register a wake-up at `wake_at` and yield until it fires.
    async fn park_until(&self, wake_at: DateTime<Utc>) -> Result;
}

/// Timer for standalone runs, backed by the tokio clock.
pub struct TokioTimer;

#[async_trait]
impl WakeTimer for TokioTimer {
    async fn park_until(&self, wake_at: DateTime<Utc>) -> Result {
        let delay = (wake_at - Utc::now()).to_std().unwrap_or_default();
        info!(%wake_at, "parking…");
        tokio::time::sleep(delay).await;
        Ok(())
    }
}

/// Per-step state machine: `Start → Done` directly, or
/// `Start → Waiting → Done` through exactly one suspension.
///
/// Each step instance owns its controller; nothing is shared between
/// concurrently waiting steps.
pub struct DeferralController<C> {
    client: C,
    state: StepState,
}

impl<C: CarbonOptimizer> DeferralController<C> {
    pub const fn new(client: C) -> Self {
        Self { client, state: StepState::Start }
    }

    pub const fn state(&self) -> StepState {
        self.state
    }

    /// Evaluate the step once: plan the window, ask the optimizer, and
    /// decide between running now and parking.
    ///
    /// Every failure leaves the machine in [`StepState::Start`]: a step is
    /// never parked on the basis of an error, and there is no «proceed
    /// anyway» fallback, since running at an arbitrary time would defeat
    /// the point of asking.
    pub async fn begin(
        &mut self,
        now: DateTime<Utc>,
        policy: &WaitPolicy,
    ) -> Result<Decision, ScheduleError> {
        debug_assert_eq!(self.state, StepState::Start);
        let request = window::plan(now, policy)?;
        let result = self.client.query(&request).await?;
        if result.recommended_start <= now {
            // Covers recommendations from the past, e.g. due to call latency.
            info!(recommended_start = %result.recommended_start, "proceeding immediately");
            self.state = StepState::Done;
            Ok(Decision::Proceed)
        } else {
            let wake_at = result.recommended_start;
            info!(%wake_at, "deferring");
            self.state = StepState::Waiting { wake_at };
            Ok(Decision::Defer { wake_at })
        }
    }

    /// Complete after the wake-up fired.
    ///
    /// Trusts the previously recommended instant unconditionally: the
    /// optimizer is not asked again after the wait.
    pub fn resume(&mut self) {
        self.state = StepState::Done;
    }

    /// Drive the machine to completion against the given timer.
    pub async fn run(
        &mut self,
        now: DateTime<Utc>,
        policy: &WaitPolicy,
        timer: &impl WakeTimer,
    ) -> Result {
        match self.begin(now, policy).await? {
            Decision::Proceed => {}
            Decision::Defer { wake_at } => {
                timer.park_until(wake_at).await?;
                self.resume();
            }
        }
        Ok(())
    }
}
