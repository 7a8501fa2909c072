use fittrack_types::{ActivityTag, WorkoutError};

use crate::workout::{M_IN_KM, Training, WorkoutBase, check_finite, positive, sealed};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: WorkoutBase,
    pool_length_m: f64,
    pool_lap_count: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        let swimming = Self {
            base: WorkoutBase::new(action, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lap_count,
        };
        if !(pool_length_m * f64::from(pool_lap_count)).is_finite() {
            return Err(WorkoutError::InvalidInput {
                field: "pool_length_m",
                value: pool_length_m,
            });
        }
        check_finite(&swimming)?;
        Ok(swimming)
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> u32 {
        self.pool_lap_count
    }
}

impl sealed::Sealed for Swimming {}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;
    const TAG: ActivityTag = ActivityTag::Swimming;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    /// Pool based: laps swum, not strokes counted.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count) / M_IN_KM / self.base.duration_hours()
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg()
    }
}
