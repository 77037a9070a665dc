mod electricitymaps;
mod optimizer;

pub use self::{
    electricitymaps::Api as ElectricityMaps,
    optimizer::{CarbonOptimizer, OptimizationOutput, OptimizationResult},
};
