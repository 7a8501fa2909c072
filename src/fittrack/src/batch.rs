use std::fmt::Display;

use fittrack_algos::WorkoutFactory;
use fittrack_types::{SummaryReport, WorkoutError};

use crate::Package;

#[derive(Debug, Clone, PartialEq)]
pub struct PackageFailure {
    pub index: usize,
    pub tag: String,
    pub error: WorkoutError,
}

impl Display for PackageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Package #{} ({}): {}", self.index, self.tag, self.error)
    }
}

/// Per-package results, in input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<Result<SummaryReport, PackageFailure>>,
}

impl BatchOutcome {
    pub fn reports(&self) -> impl Iterator<Item = &SummaryReport> {
        self.records.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PackageFailure> {
        self.records.iter().filter_map(|r| r.as_ref().err())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Builds and reports every package independently; a bad package is
/// recorded as a failure and the rest of the batch still runs.
pub fn process_packages(packages: &[Package]) -> BatchOutcome {
    let records = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            WorkoutFactory::create(&package.tag, &package.args)
                .map(|workout| {
                    debug!("Package #{} ({}) -> {:?}", index, package, workout);
                    workout.report()
                })
                .map_err(|error| PackageFailure {
                    index,
                    tag: package.tag.clone(),
                    error,
                })
        })
        .collect();

    BatchOutcome { records }
}
