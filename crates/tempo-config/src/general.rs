//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit for list/search commands.
const fn default_limit() -> u32 {
    20
}

/// Default window for `schedule history`, in days.
const fn default_history_days() -> u32 {
    7
}

/// Default slot length offered by the plan workflow, in minutes.
const fn default_slot_minutes() -> u32 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    #[serde(default = "default_history_days")]
    pub history_days: u32,

    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            history_days: default_history_days(),
            slot_minutes: default_slot_minutes(),
        }
    }
}
