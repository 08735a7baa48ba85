//! Burn-time policies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SnipError;

/// How burn times are enforced on reads and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// A snippet burns once `burn_at <= now`. Applied to `get` and
    /// `list_visible` alike.
    #[default]
    Clock,

    /// Legacy rule: listings keep a snippet while `burn_at > created_at`
    /// and direct lookups ignore `burn_at` entirely.
    CreationRelative,
}

impl ExpiryPolicy {
    /// Whether `get` should refuse this snippet at `now`.
    pub fn is_burned(
        &self,
        _created_at: DateTime<Utc>,
        burn_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        match (self, burn_at) {
            (_, None) => false,
            (ExpiryPolicy::Clock, Some(burn_at)) => burn_at <= now,
            (ExpiryPolicy::CreationRelative, Some(_)) => false,
        }
    }

    /// Whether `list_visible` should include this snippet at `now`.
    pub fn is_listed(
        &self,
        created_at: DateTime<Utc>,
        burn_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        match (self, burn_at) {
            (_, None) => true,
            (ExpiryPolicy::Clock, Some(burn_at)) => burn_at > now,
            (ExpiryPolicy::CreationRelative, Some(burn_at)) => burn_at > created_at,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryPolicy::Clock => "clock",
            ExpiryPolicy::CreationRelative => "creation_relative",
        }
    }
}

impl fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpiryPolicy {
    type Err = SnipError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "clock" => Ok(ExpiryPolicy::Clock),
            "creation_relative" => Ok(ExpiryPolicy::CreationRelative),
            other => Err(SnipError::Validation(format!(
                "Unknown expiry policy: {} (use clock or creation_relative)",
                other
            ))),
        }
    }
}
