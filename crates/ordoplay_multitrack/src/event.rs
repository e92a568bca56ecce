// SPDX-License-Identifier: MIT OR Apache-2.0
//! Update events and stop events.

use serde::{Deserialize, Serialize};

/// Lifecycle marker carried by every time update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntervalEvent {
    /// The timeline is (re)starting at the given time
    Init,
    /// Ordinary cursor movement
    #[default]
    Intermediate,
    /// The timeline is finishing at the given time
    Done,
}

impl IntervalEvent {
    /// `Init` and `Done` mark lifecycle boundaries every child must observe
    pub fn is_lifecycle(self) -> bool {
        matches!(self, Self::Init | Self::Done)
    }

    /// Get the display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Intermediate => "intermediate",
            Self::Done => "done",
        }
    }
}

/// A named trigger point on a timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopEvent {
    /// Event name delivered when the cursor crosses `time`
    pub name: String,
    /// Time of the trigger, relative to the owning timeline
    pub time: f64,
}

impl StopEvent {
    /// Create a new stop event
    pub fn new(name: impl Into<String>, time: f64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }
}
