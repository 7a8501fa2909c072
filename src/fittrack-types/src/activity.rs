use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Short sensor code selecting the workout variant a package describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ActivityTag {
    #[serde(rename = "SWM")]
    #[strum(serialize = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    #[strum(serialize = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    #[strum(serialize = "WLK")]
    Walking,
}

impl ActivityTag {
    /// Label shown in the summary report.
    pub fn label(self) -> &'static str {
        match self {
            ActivityTag::Swimming => "Swimming",
            ActivityTag::Running => "Running",
            ActivityTag::Walking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this activity carries:
    /// action, duration, weight, then height (walking) or pool length and
    /// lap count (swimming).
    pub fn arity(self) -> usize {
        match self {
            ActivityTag::Swimming => 5,
            ActivityTag::Running => 3,
            ActivityTag::Walking => 4,
        }
    }
}
