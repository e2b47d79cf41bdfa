pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{samples::SamplePackages, toml_config::PackagesFile};
pub use crate::core::{
    dispatch::read_package,
    engine::{process_workout, FailurePolicy, ReportPipeline, TrackerEngine},
    report::OutputFormat,
};
pub use crate::domain::model::{AreaType, Package, RawValue, Workout, WorkoutSummary, WorkoutType};
pub use crate::utils::error::{Result, WorkoutError};
