use crate::domain::model::{
    AreaType, Cycling, RawValue, Running, SportsWalking, Swimming, Workout, WorkoutType,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_arity;

/// Build a typed workout from a code and its positional sensor values.
///
/// Value order per code:
/// - `SWM`: action, duration, weight, pool length, pool count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `CYC`: action, duration, weight, area type
pub fn read_package(code: &str, data: &[RawValue]) -> Result<Workout> {
    let workout_type: WorkoutType = code.parse()?;
    validate_arity(code, workout_type.arity(), data.len())?;

    tracing::debug!("Reading {} package with {} values", workout_type, data.len());

    let action = data[0].as_count("action")?;
    let duration = data[1].as_f64("duration")?;
    let weight = data[2].as_f64("weight")?;

    let workout = match workout_type {
        WorkoutType::Swimming => Workout::Swimming(Swimming::new(
            action,
            duration,
            weight,
            data[3].as_f64("pool_length")?,
            data[4].as_count("pool_count")?,
        )?),
        WorkoutType::Running => Workout::Running(Running::new(action, duration, weight)?),
        WorkoutType::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action,
            duration,
            weight,
            data[3].as_f64("height")?,
        )?),
        WorkoutType::Cycling => Workout::Cycling(Cycling::new(
            action,
            duration,
            weight,
            AreaType::parse(data[3].as_text("area_type")?),
        )?),
    };

    Ok(workout)
}
