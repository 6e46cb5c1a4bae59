//! Notification permission status.

// Rust guideline compliant 2026-02

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a notification permission query or request.
///
/// Mirrors the three values browsers report for `Notification.permission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// The user allowed notifications.
    Granted,
    /// The user blocked notifications.
    Denied,
    /// The user has not decided yet.
    #[default]
    Default,
}

impl PermissionStatus {
    /// The host's string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Default => "default",
        }
    }

    /// Whether notifications may be shown and push subscriptions created.
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission string the host should never report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notification permission: {0:?}")]
pub struct ParsePermissionError(pub String);

impl FromStr for PermissionStatus {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "default" => Ok(Self::Default),
            other => Err(ParsePermissionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_strings() {
        assert_eq!("granted".parse(), Ok(PermissionStatus::Granted));
        assert_eq!("denied".parse(), Ok(PermissionStatus::Denied));
        assert_eq!("default".parse(), Ok(PermissionStatus::Default));
        assert_eq!(
            "Granted".parse::<PermissionStatus>(),
            Err(ParsePermissionError("Granted".to_string()))
        );
    }

    #[test]
    fn test_only_granted_is_granted() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());
        assert!(!PermissionStatus::Default.is_granted());
        assert_eq!(PermissionStatus::default(), PermissionStatus::Default);
    }

    #[test]
    fn test_serde_uses_host_strings() {
        let json = serde_json::to_string(&PermissionStatus::Denied).expect("serialize");
        assert_eq!(json, "\"denied\"");
        let status: PermissionStatus = serde_json::from_str("\"granted\"").expect("deserialize");
        assert_eq!(status, PermissionStatus::Granted);
    }
}
