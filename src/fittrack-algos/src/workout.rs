use fittrack_types::{ActivityTag, SummaryReport, WorkoutError};

use crate::{ReportBuilder, Running, Swimming, Walking};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Raw sensor values shared by every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutBase {
    pub(crate) fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Shared workout contract. Only the activities in this crate implement it,
/// so every calorie formula is known at compile time.
pub trait Training: sealed::Sealed {
    /// Distance covered by one step or stroke, in meters.
    const LEN_STEP: f64 = 0.65;
    const TAG: ActivityTag;

    fn base(&self) -> &WorkoutBase;

    fn distance_km(&self) -> f64 {
        f64::from(self.base().action) * Self::LEN_STEP / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    fn calories_kcal(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    Walking(Walking),
}

impl Workout {
    pub fn tag(&self) -> ActivityTag {
        match self {
            Workout::Swimming(_) => Swimming::TAG,
            Workout::Running(_) => Running::TAG,
            Workout::Walking(_) => Walking::TAG,
        }
    }

    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Swimming(w) => w.base(),
            Workout::Running(w) => w.base(),
            Workout::Walking(w) => w.base(),
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.base().duration_hours
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Swimming(w) => w.distance_km(),
            Workout::Running(w) => w.distance_km(),
            Workout::Walking(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Swimming(w) => w.mean_speed_kmh(),
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::Walking(w) => w.mean_speed_kmh(),
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        match self {
            Workout::Swimming(w) => w.calories_kcal(),
            Workout::Running(w) => w.calories_kcal(),
            Workout::Walking(w) => w.calories_kcal(),
        }
    }

    pub fn report(&self) -> SummaryReport {
        ReportBuilder::build(self)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<Walking> for Workout {
    fn from(value: Walking) -> Self {
        Self::Walking(value)
    }
}

/// Accepts finite values strictly above zero.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput { field, value })
    }
}

/// Rejects workouts whose speed or calories overflow to a non-finite value,
/// naming the duration for speed and the weight for calories.
pub(crate) fn check_finite<T: Training>(workout: &T) -> Result<(), WorkoutError> {
    let base = workout.base();
    if !workout.mean_speed_kmh().is_finite() {
        return Err(WorkoutError::InvalidInput {
            field: "duration_hours",
            value: base.duration_hours,
        });
    }
    if !workout.calories_kcal().is_finite() {
        return Err(WorkoutError::InvalidInput {
            field: "weight_kg",
            value: base.weight_kg,
        });
    }
    Ok(())
}

/// Accepts whole, non-negative numbers that fit a `u32` counter.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput { field, value })
    }
}
