use crate::domain::model::WorkoutSummary;
use crate::utils::error::{Result, WorkoutError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl WorkoutSummary {
    pub fn message(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// CSV row with numbers fixed to 3 decimals. JSON keeps full precision.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    training_type: &'a str,
    duration: String,
    distance: String,
    speed: String,
    calories: String,
}

impl<'a> From<&'a WorkoutSummary> for SummaryRow<'a> {
    fn from(s: &'a WorkoutSummary) -> Self {
        Self {
            training_type: &s.training_type,
            duration: format!("{:.3}", s.duration),
            distance: format!("{:.3}", s.distance),
            speed: format!("{:.3}", s.speed),
            calories: format!("{:.3}", s.calories),
        }
    }
}

pub fn render(summaries: &[WorkoutSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|s| s.message() + "\n")
            .collect()),
        OutputFormat::Json => {
            let mut out = String::new();
            for summary in summaries {
                out.push_str(&serde_json::to_string(summary)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for summary in summaries {
                writer.serialize(SummaryRow::from(summary))?;
            }
            let bytes = writer.into_inner().map_err(|e| WorkoutError::IoError(e.into_error()))?;
            String::from_utf8(bytes).map_err(|e| WorkoutError::ConfigError {
                message: format!("CSV output is not valid UTF-8: {}", e),
            })
        }
    }
}
