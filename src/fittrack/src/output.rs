use clap::ValueEnum;
use fittrack_algos::ReportBuilder;
use fittrack_types::SummaryReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per workout
    #[default]
    Text,
    /// One JSON object per workout, values unrounded
    Json,
}

impl OutputFormat {
    pub fn render(self, report: &SummaryReport) -> anyhow::Result<String> {
        match self {
            OutputFormat::Text => Ok(ReportBuilder::format(report)),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }
}
