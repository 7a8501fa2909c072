pub(crate) mod workout;
pub use workout::{M_IN_KM, MIN_IN_H, Training, Workout, WorkoutBase};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::Walking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod factory;
pub use factory::WorkoutFactory;

pub(crate) mod report;
pub use report::ReportBuilder;

pub use fittrack_types::{ActivityTag, SummaryReport, WorkoutError};
