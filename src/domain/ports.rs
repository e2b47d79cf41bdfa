use crate::domain::model::{Package, WorkoutSummary};
use crate::utils::error::{Result, WorkoutError};

/// Where a batch of packages comes from.
pub trait PackageSource {
    fn packages(&self) -> Result<Vec<Package>>;
}

/// A package that could not be processed under the skip policy.
#[derive(Debug)]
pub struct PackageFailure {
    pub index: usize,
    pub code: String,
    pub error: WorkoutError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub summaries: Vec<WorkoutSummary>,
    pub failures: Vec<PackageFailure>,
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Package>>;
    fn transform(&self, packages: Vec<Package>) -> Result<BatchOutcome>;
    fn load(&self, outcome: &BatchOutcome) -> Result<String>;
}
