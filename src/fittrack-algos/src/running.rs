use fittrack_types::{ActivityTag, WorkoutError};

use crate::workout::{M_IN_KM, MIN_IN_H, Training, WorkoutBase, check_finite, sealed};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: WorkoutBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        let running = Self {
            base: WorkoutBase::new(action, duration_hours, weight_kg)?,
        };
        check_finite(&running)?;
        Ok(running)
    }
}

impl sealed::Sealed for Running {}

impl Training for Running {
    const TAG: ActivityTag = ActivityTag::Running;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    /// Goes negative below 20/18 km/h; the formula is applied unclamped.
    fn calories_kcal(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg()
            / M_IN_KM
            * self.base.duration_hours()
            * MIN_IN_H
    }
}
