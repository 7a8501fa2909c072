pub mod activity;
pub use activity::ActivityTag;

mod error;
pub use error::WorkoutError;

pub mod report;
pub use report::SummaryReport;
