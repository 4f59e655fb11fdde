//! Status enum for schedule records.
//!
//! Uses `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the persisted JSON form matches the CLI argument form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Completion status of a schedule slot.
///
/// Unlike a strict state machine, any status may be set at any time: the
/// operator is the source of truth, the tool only records it. `Postponed`
/// is also set automatically when a slot is extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Completed,
    InProgress,
    #[default]
    NotStarted,
    Shelved,
    Postponed,
}

impl ScheduleStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 5] = [
        Self::Completed,
        Self::InProgress,
        Self::NotStarted,
        Self::Shelved,
        Self::Postponed,
    ];

    /// Return the string representation used in the persisted JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::NotStarted => "not_started",
            Self::Shelved => "shelved",
            Self::Postponed => "postponed",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = CoreError;

    /// Parse the snake_case wire form; hyphens are accepted as an alias.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.replace('-', "_").as_str() {
            "completed" => Ok(Self::Completed),
            "in_progress" => Ok(Self::InProgress),
            "not_started" => Ok(Self::NotStarted),
            "shelved" => Ok(Self::Shelved),
            "postponed" => Ok(Self::Postponed),
            _ => Err(CoreError::InvalidStatus {
                input: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: ScheduleStatus = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(status_completed, ScheduleStatus::Completed, "completed");
    test_serde_roundtrip!(status_in_progress, ScheduleStatus::InProgress, "in_progress");
    test_serde_roundtrip!(status_not_started, ScheduleStatus::NotStarted, "not_started");
    test_serde_roundtrip!(status_shelved, ScheduleStatus::Shelved, "shelved");
    test_serde_roundtrip!(status_postponed, ScheduleStatus::Postponed, "postponed");

    #[test]
    fn default_is_not_started() {
        assert_eq!(ScheduleStatus::default(), ScheduleStatus::NotStarted);
    }

    #[test]
    fn from_str_accepts_hyphenated_alias() {
        let status: ScheduleStatus = "in-progress".parse().unwrap();
        assert_eq!(status, ScheduleStatus::InProgress);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let result = "done".parse::<ScheduleStatus>();
        assert!(matches!(result, Err(CoreError::InvalidStatus { .. })));
    }

    #[test]
    fn display_matches_as_str() {
        for status in ScheduleStatus::ALL {
            assert_eq!(format!("{status}"), status.as_str());
        }
    }
}
