use std::str::FromStr;

use fittrack_types::{ActivityTag, WorkoutError};

use crate::{Running, Swimming, Walking, Workout, workout::count};

/// Builds workouts from the flat `(tag, values)` packages sent by the sensors.
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Values are positional, in field order:
    /// action, duration, weight, then height (`WLK`) or pool length and lap
    /// count (`SWM`).
    pub fn create(tag: &str, raw_args: &[f64]) -> Result<Workout, WorkoutError> {
        let tag = ActivityTag::from_str(tag)
            .map_err(|_| WorkoutError::UnknownActivityType(tag.to_owned()))?;
        Self::create_tagged(tag, raw_args)
    }

    pub fn create_tagged(tag: ActivityTag, raw_args: &[f64]) -> Result<Workout, WorkoutError> {
        if raw_args.len() != tag.arity() {
            return Err(WorkoutError::ArityMismatch {
                tag,
                expected: tag.arity(),
                actual: raw_args.len(),
            });
        }

        let action = count("action", raw_args[0])?;
        let duration = raw_args[1];
        let weight = raw_args[2];

        let workout = match tag {
            ActivityTag::Swimming => Swimming::new(
                action,
                duration,
                weight,
                raw_args[3],
                count("pool_lap_count", raw_args[4])?,
            )?
            .into(),
            ActivityTag::Running => Running::new(action, duration, weight)?.into(),
            ActivityTag::Walking => Walking::new(action, duration, weight, raw_args[3])?.into(),
        };

        Ok(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_variant() {
        let swim = WorkoutFactory::create("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            swim,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap())
        );

        let run = WorkoutFactory::create("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run, Workout::Running(Running::new(15000, 1.0, 75.0).unwrap()));

        let walk = WorkoutFactory::create("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            walk,
            Workout::Walking(Walking::new(9000, 1.0, 75.0, 180.0).unwrap())
        );
    }

    #[test]
    fn unknown_tag() {
        for tag in ["XYZ", "swm", "", "RUNNING"] {
            assert_eq!(
                WorkoutFactory::create(tag, &[15000.0, 1.0, 75.0]),
                Err(WorkoutError::UnknownActivityType(tag.to_owned()))
            );
        }
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            WorkoutFactory::create("RUN", &[15000.0, 1.0]),
            Err(WorkoutError::ArityMismatch {
                tag: ActivityTag::Running,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            WorkoutFactory::create("WLK", &[9000.0, 1.0, 75.0]),
            Err(WorkoutError::ArityMismatch {
                tag: ActivityTag::Walking,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            WorkoutFactory::create("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]),
            Err(WorkoutError::ArityMismatch {
                tag: ActivityTag::Swimming,
                expected: 5,
                actual: 6
            })
        );
        assert!(WorkoutFactory::create("RUN", &[]).is_err());
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            WorkoutFactory::create("RUN", &[15000.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidInput {
                field: "action",
                value: 15000.5
            })
        );
        assert_eq!(
            WorkoutFactory::create("RUN", &[15000.0, 0.0, 75.0]),
            Err(WorkoutError::InvalidInput {
                field: "duration_hours",
                value: 0.0
            })
        );
        assert_eq!(
            WorkoutFactory::create("RUN", &[15000.0, 1e-310, 75.0]),
            Err(WorkoutError::InvalidInput {
                field: "duration_hours",
                value: 1e-310
            })
        );
        assert_eq!(
            WorkoutFactory::create("WLK", &[9000.0, 1.0, 75.0, -1.0]),
            Err(WorkoutError::InvalidInput {
                field: "height_cm",
                value: -1.0
            })
        );
        assert_eq!(
            WorkoutFactory::create("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]),
            Err(WorkoutError::InvalidInput {
                field: "pool_lap_count",
                value: -40.0
            })
        );
    }
}
