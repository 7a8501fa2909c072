use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;

/// One raw sensor package: an activity tag and its positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub tag: String,
    pub args: Vec<f64>,
}

impl Package {
    pub fn new(tag: impl Into<String>, args: Vec<f64>) -> Self {
        Self {
            tag: tag.into(),
            args,
        }
    }
}

/// Parses `TAG:v1,v2,...`, e.g. `RUN:15000,1,75`.
impl FromStr for Package {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, values) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Package `{}` must look like TAG:v1,v2,...", s))?;

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(anyhow!("Package `{}` has no activity tag", s));
        }

        let values = values.trim();
        let args = if values.is_empty() {
            Vec::new()
        } else {
            values
                .split(',')
                .map(|v| {
                    v.trim()
                        .parse::<f64>()
                        .map_err(|e| anyhow!("Invalid value `{}` in package `{}`: {}", v, s, e))
                })
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        Ok(Self::new(tag, args))
    }
}

impl Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .args
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}:{}", self.tag, values)
    }
}

/// Reference readings: one swim, one run, one walk.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
