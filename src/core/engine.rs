use crate::core::dispatch::read_package;
use crate::core::report::{render, OutputFormat};
use crate::domain::model::{Package, RawValue};
use crate::domain::ports::{BatchOutcome, PackageFailure, PackageSource, Pipeline};
use crate::utils::error::Result;

/// What to do when one package in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FailurePolicy {
    /// Stop at the first failing package and return its error.
    #[default]
    Abort,
    /// Log the failure, record it in the outcome and carry on.
    Skip,
}

/// Dispatch a single package and render its report line.
pub fn process_workout(code: &str, data: &[RawValue]) -> Result<String> {
    let workout = read_package(code, data)?;
    Ok(workout.show_training_info().message())
}

pub struct ReportPipeline<S: PackageSource> {
    source: S,
    policy: FailurePolicy,
    format: OutputFormat,
}

impl<S: PackageSource> ReportPipeline<S> {
    pub fn new(source: S, policy: FailurePolicy, format: OutputFormat) -> Self {
        Self {
            source,
            policy,
            format,
        }
    }
}

impl<S: PackageSource> Pipeline for ReportPipeline<S> {
    fn extract(&self) -> Result<Vec<Package>> {
        self.source.packages()
    }

    fn transform(&self, packages: Vec<Package>) -> Result<BatchOutcome> {
        let mut outcome = BatchOutcome::default();

        for (index, package) in packages.into_iter().enumerate() {
            match read_package(&package.code, &package.data) {
                Ok(workout) => outcome.summaries.push(workout.show_training_info()),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => {
                        tracing::error!("Package #{} ({}) failed, aborting batch: {}", index, package.code, e);
                        return Err(e);
                    }
                    FailurePolicy::Skip => {
                        tracing::warn!("Skipping package #{} ({}): {}", index, package.code, e);
                        outcome.failures.push(PackageFailure {
                            index,
                            code: package.code,
                            error: e,
                        });
                    }
                },
            }
        }

        Ok(outcome)
    }

    fn load(&self, outcome: &BatchOutcome) -> Result<String> {
        render(&outcome.summaries, self.format)
    }
}

/// Result of a full engine run.
#[derive(Debug)]
pub struct BatchReport {
    pub output: String,
    pub outcome: BatchOutcome,
}

pub struct TrackerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrackerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<BatchReport> {
        tracing::info!("Reading packages...");
        let packages = self.pipeline.extract()?;
        tracing::info!("Read {} packages", packages.len());

        let outcome = self.pipeline.transform(packages)?;
        tracing::info!(
            "Processed {} workouts, {} skipped",
            outcome.summaries.len(),
            outcome.failures.len()
        );

        let output = self.pipeline.load(&outcome)?;
        Ok(BatchReport { output, outcome })
    }
}
