use workout_tracker::core::PackageSource;
use workout_tracker::{
    process_workout, read_package, FailurePolicy, OutputFormat, RawValue, ReportPipeline,
    SamplePackages, TrackerEngine, WorkoutError,
};

fn ints(raw: &[i64]) -> Vec<RawValue> {
    raw.iter().map(|v| RawValue::Int(*v)).collect()
}

#[test]
fn test_sample_batch_end_to_end() {
    let pipeline = ReportPipeline::new(SamplePackages, FailurePolicy::Abort, OutputFormat::Text);
    let report = TrackerEngine::new(pipeline).run().unwrap();

    let lines: Vec<&str> = report.output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories: 336.000.",
            "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories: 699.750.",
            "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories: 157.500.",
            "Activity type: Cycling; Duration: 1.000 h; Distance: 14.000 km; Mean speed: 14.000 km/h; Calories: 157.500.",
        ]
    );
    assert!(report.outcome.failures.is_empty());
}

#[test]
fn test_walking_uses_floor_division() {
    let workout = read_package("WLK", &ints(&[9000, 1, 75, 180])).unwrap();
    let speed = workout.mean_speed();
    let true_division = (0.035 * 75.0 + (speed * speed / 180.0) * 0.029 * 75.0) * 60.0;

    assert!((workout.spent_calories() - 157.5).abs() < 1e-9);
    assert!((true_division - 182.31).abs() < 0.01);
    assert_ne!(format!("{:.3}", workout.spent_calories()), format!("{:.3}", true_division));
}

#[test]
fn test_cycling_typo_area_uses_classic_coefficient() {
    let mut trial = ints(&[10000, 1, 75]);
    trial.push(RawValue::Text("trial".to_string()));
    let mut trail = ints(&[10000, 1, 75]);
    trail.push(RawValue::Text("trail".to_string()));

    let classic = read_package("CYC", &trial).unwrap();
    let speed = classic.mean_speed();
    assert!((classic.spent_calories() - 2.5 * speed * 75.0 / 1000.0 * 60.0).abs() < 1e-9);

    let trail = read_package("CYC", &trail).unwrap();
    assert!((trail.spent_calories() - 6.0 * speed * 75.0 / 1000.0 * 60.0).abs() < 1e-9);
}

#[test]
fn test_unknown_code_and_bad_arity() {
    assert!(matches!(
        process_workout("XYZ", &ints(&[1, 1, 1])),
        Err(WorkoutError::UnknownWorkoutType { .. })
    ));
    assert!(matches!(
        process_workout("RUN", &ints(&[15000, 1, 75, 1])),
        Err(WorkoutError::InvalidReading { .. })
    ));
    assert!(matches!(
        process_workout("SWM", &ints(&[720, 1, 80])),
        Err(WorkoutError::InvalidReading { .. })
    ));
}

#[test]
fn test_report_is_idempotent() {
    let workout = read_package("SWM", &ints(&[720, 1, 80, 25, 40])).unwrap();
    let first = workout.show_training_info().message();
    let second = workout.show_training_info().message();
    assert_eq!(first, second);
}

#[test]
fn test_sample_batch_as_json() {
    let pipeline = ReportPipeline::new(SamplePackages, FailurePolicy::Abort, OutputFormat::Json);
    let report = TrackerEngine::new(pipeline).run().unwrap();

    let count = SamplePackages.packages().unwrap().len();
    assert_eq!(report.output.lines().count(), count);

    let first: serde_json::Value = serde_json::from_str(report.output.lines().next().unwrap()).unwrap();
    assert_eq!(first["training_type"], "Swimming");
    assert_eq!(first["calories"], 336.0);
}
