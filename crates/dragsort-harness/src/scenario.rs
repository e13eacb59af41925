//! Replay scenarios.
//!
//! A scenario is a JSON document with an optional list configuration, the
//! initial tasks, and a script of steps:
//!
//! ```json
//! {
//!   "name": "drag first below third",
//!   "config": { "motion": "instant" },
//!   "tasks": [{ "title": "a" }, { "title": "b" }, { "title": "c" }],
//!   "steps": [
//!     { "op": "down", "y": 145 },
//!     { "op": "move", "y": 325 },
//!     { "op": "up", "y": 325 },
//!     { "op": "settle" }
//!   ]
//! }
//! ```

use std::path::Path;

use dragsort_list::{ListConfig, SettleMotion};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::task::{TaskDraft, TaskEdit};
use crate::util::ensure_exists;

/// Frame length used by `settle` steps when the scenario does not set one.
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Upper bound on frames a single `settle` step may run.
pub const MAX_SETTLE_FRAMES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: ListConfig,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default)]
    pub tasks: Vec<TaskDraft>,
    pub steps: Vec<Step>,
}

fn default_frame_ms() -> u64 {
    DEFAULT_FRAME_MS
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down {
        y: f32,
        #[serde(default)]
        x: f32,
    },
    Move {
        y: f32,
        #[serde(default)]
        x: f32,
    },
    Up {
        y: f32,
        #[serde(default)]
        x: f32,
    },
    /// Platform cancelled the pointer.
    Cancel,
    /// Window lost focus.
    Blur,
    /// User scrolled the container.
    Scroll { offset: f32 },
    /// Advance time.
    Tick { ms: u64 },
    /// Tick frames until nothing moves.
    Settle,
    Add {
        #[serde(flatten)]
        draft: TaskDraft,
    },
    Toggle { id: u64 },
    Edit {
        id: u64,
        #[serde(flatten)]
        edit: TaskEdit,
    },
    Delete { id: u64 },
    /// Make the task store accept or reject reorders from now on.
    RejectReorders { reject: bool },
}

impl Step {
    /// Name used in trace records.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Move { .. } => "move",
            Self::Up { .. } => "up",
            Self::Cancel => "cancel",
            Self::Blur => "blur",
            Self::Scroll { .. } => "scroll",
            Self::Tick { .. } => "tick",
            Self::Settle => "settle",
            Self::Add { .. } => "add",
            Self::Toggle { .. } => "toggle",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::RejectReorders { .. } => "reject_reorders",
        }
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self> {
        ensure_exists(path)?;
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&content)?;
        if scenario.name.is_empty() {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(Self {
                name: stem,
                ..scenario
            });
        }
        Ok(scenario)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        let config = &self.config;
        if !(config.item_height.is_finite() && config.item_height > 0.0) {
            return Err(HarnessError::invalid_scenario(format!(
                "item_height must be positive, got {}",
                config.item_height
            )));
        }
        if !config.top_inset.is_finite() {
            return Err(HarnessError::invalid_scenario("top_inset must be finite"));
        }
        if let SettleMotion::Spring { stiffness, damping } = config.motion
            && !(stiffness > 0.0 && damping > 0.0)
        {
            return Err(HarnessError::invalid_scenario(format!(
                "spring stiffness and damping must be positive, got {stiffness} and {damping}"
            )));
        }
        if self.frame_ms == 0 {
            return Err(HarnessError::invalid_scenario("frame_ms must be positive"));
        }
        for (index, step) in self.steps.iter().enumerate() {
            let finite = match step {
                Step::Down { x, y } | Step::Move { x, y } | Step::Up { x, y } => {
                    x.is_finite() && y.is_finite()
                }
                Step::Scroll { offset } => offset.is_finite(),
                _ => true,
            };
            if !finite {
                return Err(HarnessError::invalid_scenario(format!(
                    "step {index} ({}) has a non-finite coordinate",
                    step.op()
                )));
            }
        }
        Ok(())
    }
}
