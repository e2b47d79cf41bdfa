pub mod dispatch;
pub mod engine;
pub mod formulas;
pub mod report;

pub use crate::domain::model::{Package, RawValue, Workout, WorkoutSummary, WorkoutType};
pub use crate::domain::ports::{BatchOutcome, PackageFailure, PackageSource, Pipeline};
pub use crate::utils::error::Result;
