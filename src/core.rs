mod deferral;
mod policy;
mod window;

pub use self::{
    deferral::{Decision, DeferralController, StepState, TokioTimer, WakeTimer},
    policy::{DEFAULT_OPTIMIZATION_METRIC, Location, WaitPolicy},
    window::{OptimizationRequest, plan},
};
