#[macro_use]
extern crate log;

mod package;
pub use package::{Package, demo_packages};

mod batch;
pub use batch::{BatchOutcome, PackageFailure, process_packages};

mod output;
pub use output::OutputFormat;
