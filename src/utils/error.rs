use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    #[error("Invalid reading for '{field}': {reason}")]
    InvalidReading { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl WorkoutError {
    pub fn invalid_reading(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WorkoutError::InvalidReading {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            WorkoutError::UnknownWorkoutType { .. } | WorkoutError::InvalidReading { .. } => {
                ErrorCategory::Input
            }
            WorkoutError::ConfigError { .. } | WorkoutError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            WorkoutError::IoError(_)
            | WorkoutError::SerializationError(_)
            | WorkoutError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a bad value the user can fix in place
            WorkoutError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            _ => match self.category() {
                ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
                ErrorCategory::System => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WorkoutError::UnknownWorkoutType { .. } => {
                "Use one of the supported codes: SWM, RUN, WLK, CYC".to_string()
            }
            WorkoutError::InvalidReading { field, .. } => {
                format!("Check the sensor value for '{}' and its position in the package", field)
            }
            WorkoutError::ConfigError { .. } => {
                "Make sure the packages file exists and is valid TOML".to_string()
            }
            WorkoutError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the packages file", field)
            }
            WorkoutError::IoError(_) => "Check file paths and permissions".to_string(),
            WorkoutError::SerializationError(_) | WorkoutError::CsvError(_) => {
                "Try the plain text output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WorkoutError::UnknownWorkoutType { code } => {
                format!("Workout type '{}' is not supported", code)
            }
            WorkoutError::InvalidReading { field, reason } => {
                format!("Sensor reading '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
