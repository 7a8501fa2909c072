use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Rounded summary of a finished workout. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Display for SummaryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Activity: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        ))
    }
}
