use fittrack_types::{ActivityTag, WorkoutError};

use crate::workout::{MIN_IN_H, Training, WorkoutBase, check_finite, positive, sealed};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    base: WorkoutBase,
    height_cm: f64,
}

impl Walking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let walking = Self {
            base: WorkoutBase::new(action, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        };
        check_finite(&walking)?;
        Ok(walking)
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl sealed::Sealed for Walking {}

impl Training for Walking {
    const TAG: ActivityTag = ActivityTag::Walking;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    /// The squared speed is floor-divided by the height, so the second term
    /// only contributes once speed^2 reaches the height in centimeters.
    fn calories_kcal(&self) -> f64 {
        let weight = self.base.weight_kg();
        let speed_height = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_hours()
            * MIN_IN_H
    }
}

/// Floor division derived from the remainder, so a quotient that only rounds
/// up to a whole number is not floored past it (`1.0 / 0.1` floors to 9).
/// Both operands are non-negative here.
fn floor_div(x: f64, y: f64) -> f64 {
    let div = (x - x % y) / y;
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_walk() {
        let walk = Walking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(walk.distance_km(), 5.85);
        assert_close(walk.mean_speed_kmh(), 5.85);
        // floor(5.85^2 / 180) == 0, only the weight term remains
        assert_close(walk.calories_kcal(), 157.5);
    }

    #[test]
    fn speed_term_is_floored() {
        // 30000 steps in 1 h -> 19.5 km/h, 19.5^2 / 10 = 38.025 -> 38
        let walk = Walking::new(30000, 1.0, 70.0, 10.0).unwrap();
        assert_close(walk.mean_speed_kmh(), 19.5);
        assert_close(walk.calories_kcal(), (0.035 * 70.0 + 38.0 * 0.029 * 70.0) * 60.0);
    }

    #[test]
    fn floor_div_uses_remainder() {
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(380.25, 10.0), 38.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(360.0, 180.0), 2.0);
        assert_eq!(floor_div(0.0, 180.0), 0.0);
    }

    #[test]
    fn quotient_rounding_up_is_not_counted() {
        // 1000 steps in 0.65 h -> 1 km/h, 1.0 / 0.1 floors to 9, not 10
        let walk = Walking::new(1000, 0.65, 70.0, 0.1).unwrap();
        assert_eq!(walk.height_cm(), 0.1);
        assert_close(walk.mean_speed_kmh(), 1.0);
        assert_close(
            walk.calories_kcal(),
            (0.035 * 70.0 + 9.0 * 0.029 * 70.0) * 0.65 * 60.0,
        );
        assert!((walk.calories_kcal() - 808.08).abs() < 1e-6);
    }

    #[test]
    fn rejects_overflowing_calories() {
        assert_eq!(
            Walking::new(1000, 100.0, 1e308, 180.0),
            Err(WorkoutError::InvalidInput {
                field: "weight_kg",
                value: 1e308
            })
        );
    }

    #[test]
    fn rejects_non_positive_height() {
        assert_eq!(
            Walking::new(9000, 1.0, 75.0, 0.0),
            Err(WorkoutError::InvalidInput {
                field: "height_cm",
                value: 0.0
            })
        );
        assert!(Walking::new(9000, 1.0, 75.0, -180.0).is_err());
    }

    #[test]
    fn base_validation_runs_first() {
        assert_eq!(
            Walking::new(9000, 0.0, 75.0, 0.0),
            Err(WorkoutError::InvalidInput {
                field: "duration_hours",
                value: 0.0
            })
        );
    }
}
