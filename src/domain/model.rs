use crate::utils::error::{Result, WorkoutError};
use crate::utils::validation::{validate_non_negative, validate_positive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single positional value as delivered by the sensor block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    fn kind(&self) -> &'static str {
        match self {
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
        }
    }

    /// Numeric view; integers widen to floats.
    pub fn as_f64(&self, field: &str) -> Result<f64> {
        match self {
            RawValue::Int(v) => Ok(*v as f64),
            RawValue::Float(v) => Ok(*v),
            RawValue::Text(_) => Err(WorkoutError::invalid_reading(
                field,
                format!("expected a number, got {}", self.kind()),
            )),
        }
    }

    pub fn as_count(&self, field: &str) -> Result<u64> {
        match self {
            RawValue::Int(v) => u64::try_from(*v).map_err(|_| {
                WorkoutError::invalid_reading(field, format!("count cannot be negative, got {}", v))
            }),
            _ => Err(WorkoutError::invalid_reading(
                field,
                format!("expected an integer, got {}", self.kind()),
            )),
        }
    }

    pub fn as_text(&self, field: &str) -> Result<&str> {
        match self {
            RawValue::Text(v) => Ok(v),
            _ => Err(WorkoutError::invalid_reading(
                field,
                format!("expected text, got {}", self.kind()),
            )),
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

/// Workout code paired with its positional readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<RawValue>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<RawValue>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
    Cycling,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
        WorkoutType::Cycling,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Cycling => "CYC",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Cycling => "Cycling",
        }
    }

    /// Number of positional values the package must carry.
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking | WorkoutType::Cycling => 4,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self> {
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terrain for cycling. Only the exact string `trail` selects the trail branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaType {
    Trail,
    Other(String),
}

impl AreaType {
    pub fn parse(raw: &str) -> Self {
        if raw == "trail" {
            AreaType::Trail
        } else {
            AreaType::Other(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AreaType::Trail => "trail",
            AreaType::Other(raw) => raw,
        }
    }
}

/// Readings every workout carries.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseReading {
    action: u64,
    duration: f64,
    weight: f64,
}

impl BaseReading {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
        validate_positive("duration", duration)?;
        validate_positive("weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub(crate) base: BaseReading,
    pub(crate) pool_length: f64,
    pub(crate) pool_count: u64,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_count: u64,
    ) -> Result<Self> {
        validate_non_negative("pool_length", pool_length)?;
        Ok(Self {
            base: BaseReading::new(action, duration, weight)?,
            pool_length,
            pool_count,
        })
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn pool_count(&self) -> u64 {
        self.pool_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub(crate) base: BaseReading,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            base: BaseReading::new(action, duration, weight)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub(crate) base: BaseReading,
    pub(crate) height: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self> {
        validate_positive("height", height)?;
        Ok(Self {
            base: BaseReading::new(action, duration, weight)?,
            height,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cycling {
    pub(crate) base: BaseReading,
    pub(crate) area_type: AreaType,
}

impl Cycling {
    pub fn new(action: u64, duration: f64, weight: f64, area_type: AreaType) -> Result<Self> {
        Ok(Self {
            base: BaseReading::new(action, duration, weight)?,
            area_type,
        })
    }

    pub fn area_type(&self) -> &AreaType {
        &self.area_type
    }
}

/// A validated workout, one variant per activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
    Cycling(Cycling),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Swimming(_) => WorkoutType::Swimming,
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
            Workout::Cycling(_) => WorkoutType::Cycling,
        }
    }

    pub fn base(&self) -> &BaseReading {
        match self {
            Workout::Swimming(w) => &w.base,
            Workout::Running(w) => &w.base,
            Workout::SportsWalking(w) => &w.base,
            Workout::Cycling(w) => &w.base,
        }
    }
}

/// Derived statistics for one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}
