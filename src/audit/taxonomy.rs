//! Audit taxonomy values.

use std::fmt;

use serde::{Serialize, Serializer};

/// Sentinel for any value that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Action recorded for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    List,
    Update,
    /// `update/<verb>`, where the verb is the first key of an action body.
    UpdateWith(String),
    Delete,
    Unknown,
    /// Action configured in the audit map's `custom_actions` section.
    Custom(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => f.write_str("create"),
            Action::Read => f.write_str("read"),
            Action::List => f.write_str("list"),
            Action::Update => f.write_str("update"),
            Action::UpdateWith(verb) => write!(f, "update/{}", verb),
            Action::Delete => f.write_str("delete"),
            Action::Unknown => f.write_str(UNKNOWN),
            Action::Custom(action) => f.write_str(action),
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Create.to_string(), "create");
        assert_eq!(Action::List.to_string(), "list");
        assert_eq!(Action::UpdateWith("reboot".into()).to_string(), "update/reboot");
        assert_eq!(Action::Unknown.to_string(), "unknown");
        assert_eq!(Action::Custom("start/reboot".into()).to_string(), "start/reboot");
    }

    #[test]
    fn test_action_serializes_as_string() {
        let json = serde_json::to_string(&Action::UpdateWith("resize".into())).unwrap();
        assert_eq!(json, "\"update/resize\"");
    }
}
