// SPDX-License-Identifier: MPL-2.0
//! Conflict-resolution policies applied when alerts compete for the screen.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a show or dismiss request treats the presented alert and the queue.
///
/// | Behavior     | show while an alert is up                    | dismiss                              |
/// |--------------|----------------------------------------------|--------------------------------------|
/// | `Default`    | re-queue the presented alert, show the new one | show the most recently queued alert |
/// | `DiscardAll` | clear the queue, drop the presented alert, show the new one | clear the queue          |
/// | `Passive`    | queue the new alert                          | queue the dismissed alert            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBehavior {
    #[default]
    Default,
    DiscardAll,
    Passive,
}

impl DisplayBehavior {
    /// All behaviors, in declaration order.
    pub const ALL: [DisplayBehavior; 3] = [
        DisplayBehavior::Default,
        DisplayBehavior::DiscardAll,
        DisplayBehavior::Passive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayBehavior::Default => "default",
            DisplayBehavior::DiscardAll => "discard_all",
            DisplayBehavior::Passive => "passive",
        }
    }
}

impl fmt::Display for DisplayBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(DisplayBehavior::Default),
            "discard_all" | "discardall" => Ok(DisplayBehavior::DiscardAll),
            "passive" => Ok(DisplayBehavior::Passive),
            _ => Err(Error::InvalidBehavior(s.to_string())),
        }
    }
}
