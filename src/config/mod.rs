pub mod samples;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::engine::FailurePolicy;
#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Computes distance, speed and calories for sensor workout packages")]
pub struct CliConfig {
    /// TOML file with [[package]] entries; the built-in sample batch is used when omitted
    #[arg(long)]
    pub packages: Option<String>,

    /// What to do when a package fails
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_error: FailurePolicy,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        if let Some(path) = &self.packages {
            crate::utils::validation::validate_non_empty_string("packages", path)?;
        }
        Ok(())
    }
}
