use clap::Parser;
use workout_tracker::core::Pipeline;
use workout_tracker::utils::{logger, validation::Validate};
use workout_tracker::{
    CliConfig, PackagesFile, ReportPipeline, SamplePackages, TrackerEngine, WorkoutError,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting workout-tracker");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }
    let policy = config.on_error;
    let format = config.format;

    let result = match &config.packages {
        Some(path) => {
            tracing::info!("Loading packages from: {}", path);
            let file = match PackagesFile::from_file(path).and_then(|f| f.validate().map(|_| f)) {
                Ok(file) => file,
                Err(e) => fail(&e),
            };
            run(ReportPipeline::new(file, policy, format))
        }
        None => {
            tracing::info!("No packages file given, processing the sample batch");
            run(ReportPipeline::new(SamplePackages, policy, format))
        }
    };

    if let Err(e) = result {
        fail(&e);
    }

    Ok(())
}

fn run<P: Pipeline>(pipeline: P) -> workout_tracker::Result<()> {
    let report = TrackerEngine::new(pipeline).run()?;
    print!("{}", report.output);

    for failure in &report.outcome.failures {
        eprintln!(
            "⚠️  package #{} ({}) skipped: {}",
            failure.index,
            failure.code,
            failure.error.user_friendly_message()
        );
    }

    Ok(())
}

fn fail(e: &WorkoutError) -> ! {
    tracing::error!(
        "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = e.severity().exit_code();
    std::process::exit(exit_code);
}
