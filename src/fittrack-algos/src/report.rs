use fittrack_types::SummaryReport;

use crate::Workout;

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(workout: &Workout) -> SummaryReport {
        SummaryReport {
            activity_label: workout.tag().label().to_owned(),
            duration_hours: workout.duration_hours(),
            distance_km: workout.distance_km(),
            mean_speed_kmh: workout.mean_speed_kmh(),
            calories_kcal: workout.calories_kcal(),
        }
    }

    /// Renders every number with exactly three decimals.
    pub fn format(report: &SummaryReport) -> String {
        report.to_string()
    }
}
