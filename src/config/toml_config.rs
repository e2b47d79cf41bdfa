use crate::domain::model::{Package, WorkoutType};
use crate::domain::ports::PackageSource;
use crate::utils::error::{Result, WorkoutError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// A batch of packages loaded from a TOML file.
///
/// ```toml
/// [[package]]
/// code = "RUN"
/// data = [15000, 1, 75]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackagesFile {
    #[serde(default, rename = "package")]
    pub packages: Vec<Package>,
}

impl PackagesFile {
    /// Load a batch from a TOML file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WorkoutError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WorkoutError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WorkoutError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for PackagesFile {
    /// Structural checks only; unknown codes and bad readings are left to the batch policy.
    fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(WorkoutError::ConfigError {
                message: "packages file contains no [[package]] entries".to_string(),
            });
        }

        for (i, package) in self.packages.iter().enumerate() {
            validate_non_empty_string(&format!("package[{}].code", i), &package.code)?;
            if package.code.parse::<WorkoutType>().is_err() {
                tracing::warn!("package[{}] uses unknown code '{}'", i, package.code);
            }
        }

        Ok(())
    }
}

impl PackageSource for PackagesFile {
    fn packages(&self) -> Result<Vec<Package>> {
        Ok(self.packages.clone())
    }
}
