use crate::domain::model::{
    AreaType, BaseReading, Cycling, Running, SportsWalking, Swimming, Workout, WorkoutSummary,
};

pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;

pub const STEP_LENGTH_WALK: f64 = 0.65;
pub const STEP_LENGTH_CYCLE: f64 = 1.40;
pub const STEP_LENGTH_SWIM: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const CYCLE_TRAIL_COEFF: f64 = 6.0;
const CYCLE_CLASSIC_COEFF: f64 = 2.5;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

fn distance_for(base: &BaseReading, step_length: f64) -> f64 {
    base.action() as f64 * step_length / M_IN_KM
}

/// Floored quotient taken from the remainder, so a quotient that rounds up to a
/// whole number while a positive remainder is left still floors down.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn minutes(base: &BaseReading) -> f64 {
    base.duration() * MINUTES_IN_HOUR
}

impl Workout {
    fn step_length(&self) -> f64 {
        match self {
            Workout::Swimming(_) => STEP_LENGTH_SWIM,
            Workout::Cycling(_) => STEP_LENGTH_CYCLE,
            Workout::Running(_) | Workout::SportsWalking(_) => STEP_LENGTH_WALK,
        }
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        distance_for(self.base(), self.step_length())
    }

    /// Mean speed in km/h. Swimming measures it from the pool rather than strokes.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Swimming(swim) => swim.mean_speed(),
            _ => self.distance() / self.base().duration(),
        }
    }

    /// Spent kcal.
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        match self {
            Workout::Swimming(swim) => swim.calories(speed),
            Workout::Running(run) => run.calories(speed),
            Workout::SportsWalking(walk) => walk.calories(speed),
            Workout::Cycling(cycle) => cycle.calories(speed),
        }
    }

    pub fn show_training_info(&self) -> WorkoutSummary {
        WorkoutSummary {
            training_type: self.workout_type().name().to_string(),
            duration: self.base().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

impl Swimming {
    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_count as f64 / M_IN_KM / self.base.duration()
    }

    fn calories(&self, speed: f64) -> f64 {
        (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.base.weight()
    }
}

impl Running {
    fn calories(&self, speed: f64) -> f64 {
        let per_minute = (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * self.base.weight();
        per_minute / M_IN_KM * minutes(&self.base)
    }
}

impl SportsWalking {
    /// The speed/height term is floor-divided, not truly divided.
    fn calories(&self, speed: f64) -> f64 {
        let floored = floor_div(speed.powi(2), self.height);
        (WALK_WEIGHT_MULTIPLIER * self.base.weight()
            + floored * WALK_SPEED_HEIGHT_MULTIPLIER * self.base.weight())
            * minutes(&self.base)
    }
}

impl Cycling {
    fn calories(&self, speed: f64) -> f64 {
        let coeff = match self.area_type {
            AreaType::Trail => CYCLE_TRAIL_COEFF,
            AreaType::Other(_) => CYCLE_CLASSIC_COEFF,
        };
        let per_minute = coeff * speed * self.base.weight();
        per_minute / M_IN_KM * minutes(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_swimming_scenario() {
        let w = Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap());
        assert!(close(w.distance(), 0.9936));
        assert!(close(w.mean_speed(), 1.0));
        assert!(close(w.spent_calories(), 336.0));
    }

    #[test]
    fn test_running_scenario() {
        let w = Workout::Running(Running::new(15000, 1.0, 75.0).unwrap());
        assert!(close(w.distance(), 9.75));
        assert!(close(w.mean_speed(), 9.75));
        assert!(close(w.spent_calories(), 699.75));
    }

    #[test]
    fn test_walking_floor_division() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        let w = Workout::SportsWalking(walk);
        let speed = w.mean_speed();
        assert!(close(speed, 5.85));

        // 5.85^2 / 180 has a remainder, so the floored term drops to zero
        assert!(close(w.spent_calories(), 157.5));
        let true_division = (0.035 * 75.0 + speed.powi(2) / 180.0 * 0.029 * 75.0) * 60.0;
        assert!((w.spent_calories() - true_division).abs() > 1.0);
    }

    #[test]
    fn test_walking_floor_keeps_whole_part() {
        // speed 13.0 km/h, 169 / 100 floors to 1
        let w = Workout::SportsWalking(SportsWalking::new(20000, 1.0, 70.0, 100.0).unwrap());
        assert!(close(w.mean_speed(), 13.0));
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 60.0;
        assert!(close(w.spent_calories(), expected));
    }

    #[test]
    fn test_floor_div_uses_true_quotient() {
        // 1.0 / 0.1 rounds to 10.0, but 0.1 is slightly above one tenth
        assert_eq!(1.0_f64 / 0.1, 10.0);
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(169.0, 100.0), 1.0);
        assert_eq!(floor_div(7.0, 3.5), 2.0);
        assert_eq!(floor_div(-1.0, 3.0), -1.0);
    }

    #[test]
    fn test_walking_floor_with_rounded_up_quotient() {
        // speed 1.0 km/h, height 0.1: the floored term is 9, not 10
        let w = Workout::SportsWalking(SportsWalking::new(1000, 0.65, 75.0, 0.1).unwrap());
        assert!(close(w.mean_speed(), 1.0));
        let expected = (0.035 * 75.0 + 9.0 * 0.029 * 75.0) * (0.65 * 60.0);
        assert!((w.spent_calories() - expected).abs() < 1e-6);
        assert!((w.spent_calories() - 865.8).abs() < 1e-6);
    }

    #[test]
    fn test_cycling_coefficients() {
        let classic =
            Workout::Cycling(Cycling::new(10000, 1.0, 75.0, AreaType::parse("trial")).unwrap());
        let trail =
            Workout::Cycling(Cycling::new(10000, 1.0, 75.0, AreaType::parse("trail")).unwrap());

        assert!(close(classic.distance(), 14.0));
        assert!(close(classic.spent_calories(), 2.5 * 14.0 * 75.0 / 1000.0 * 60.0));
        assert!(close(classic.spent_calories(), 157.5));
        assert!(close(trail.spent_calories(), 378.0));
    }

    #[test]
    fn test_mean_speed_is_distance_over_duration() {
        let workouts = [
            Workout::Running(Running::new(12345, 1.5, 70.0).unwrap()),
            Workout::SportsWalking(SportsWalking::new(777, 0.25, 60.0, 170.0).unwrap()),
            Workout::Cycling(Cycling::new(3000, 2.0, 90.0, AreaType::Trail).unwrap()),
        ];
        for w in &workouts {
            assert!(close(w.mean_speed(), w.distance() / w.base().duration()));
        }
    }

    #[test]
    fn test_distance_non_negative() {
        let workouts = [
            Workout::Swimming(Swimming::new(0, 1.0, 80.0, 25.0, 0).unwrap()),
            Workout::Running(Running::new(0, 1.0, 75.0).unwrap()),
            Workout::SportsWalking(SportsWalking::new(1, 1.0, 75.0, 180.0).unwrap()),
            Workout::Cycling(Cycling::new(5, 1.0, 75.0, AreaType::Trail).unwrap()),
        ];
        assert!(workouts.iter().all(|w| w.distance() >= 0.0));
    }

    #[test]
    fn test_slow_running_burns_negative_calories() {
        let w = Workout::Running(Running::new(100, 1.0, 75.0).unwrap());
        assert!(w.spent_calories() < 0.0);
    }

    #[test]
    fn test_summary_fields() {
        let w = Workout::Running(Running::new(15000, 1.0, 75.0).unwrap());
        let summary = w.show_training_info();
        assert_eq!(summary.training_type, "Running");
        assert!(close(summary.duration, 1.0));
        assert!(close(summary.speed, 9.75));
    }
}
