//! Configuration options for a pipes session.
//!
//! Options deserialize from the same camelCase JSON object the screensaver
//! has always accepted as page parameters, e.g.
//! `{"multiple": false, "joints": "ball", "interval": [5, 10]}`. Missing
//! keys take their defaults; unknown keys are ignored.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PipesError, Result};
use crate::grid::GridBounds;
use crate::joint::JointStyle;

/// Session options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Spawn two or three pipes per cohort instead of one.
    pub multiple: bool,

    /// Texture forced onto every pipe, instead of random colors.
    pub texture_path: Option<String>,

    /// Joint style for new cohorts.
    pub joints: JointStyle,

    /// Range of seconds between automatic clears.
    pub interval: ClearInterval,

    /// The grid the pipes grow in.
    pub bounds: GridBounds,

    /// Hide the host's controls. Carried for the host shell only.
    #[serde(alias = "hideUI")]
    pub hide_ui: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            multiple: true,
            texture_path: None,
            joints: JointStyle::Cycle,
            interval: ClearInterval::default(),
            bounds: GridBounds::default(),
            hide_ui: false,
        }
    }
}

impl Options {
    /// Parses options from a JSON object and validates them.
    ///
    /// An empty or whitespace-only string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(PipesError::InvalidOptions(
                "top-level value must be an object".to_string(),
            ));
        }
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks the parts serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()
    }
}

/// The range automatic clear timers are drawn from, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct ClearInterval {
    min: f64,
    max: f64,
}

impl ClearInterval {
    /// Creates a range from `min` to `max` seconds.
    ///
    /// Both ends must be non-negative and fit in a [`Duration`].
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let representable = |secs: f64| Duration::try_from_secs_f64(secs).is_ok();
        if !representable(min) || !representable(max) || min > max {
            return Err(PipesError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound in seconds.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in seconds.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws a uniformly random delay within the range.
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        let seconds = if self.min < self.max {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        };
        Duration::from_secs_f64(seconds)
    }
}

impl Default for ClearInterval {
    fn default() -> Self {
        Self {
            min: 16.0,
            max: 24.0,
        }
    }
}

impl TryFrom<[f64; 2]> for ClearInterval {
    type Error = PipesError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<ClearInterval> for [f64; 2] {
    fn from(interval: ClearInterval) -> Self {
        [interval.min, interval.max]
    }
}
