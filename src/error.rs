//! # Action Errors
//!
//! This module defines the error type shared by every stage of action resolution.
//!
//! Errors fall into two classes:
//!
//! - **Unresolvable targets** ([`ActionError::TargetUnresolvable`],
//!   [`ActionError::HandlerNotFound`]): the action's target cannot be turned into a
//!   resource, or the resource has no handler for the declared verb. The resolver drops
//!   the single action and keeps going.
//! - **Contract violations** (everything else): malformed metadata or a body that cannot
//!   hold an action list. These abort the whole invocation.

/// Errors that can occur while resolving and attaching hypermedia actions.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Target unresolvable: {uri} ({reason})")]
    TargetUnresolvable { uri: String, reason: String },

    #[error("No {handler} handler on {route}")]
    HandlerNotFound { route: String, handler: String },

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("Unknown request method: {0}")]
    UnknownMethod(String),

    #[error("Body cannot hold actions: {0}")]
    BodyShape(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Handler error: {0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl ActionError {
    pub fn unresolvable(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        ActionError::TargetUnresolvable {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only disqualifies one action rather than the whole invocation.
    pub fn is_unresolvable(&self) -> bool {
        matches!(
            self,
            ActionError::TargetUnresolvable { .. } | ActionError::HandlerNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_classification() {
        assert!(ActionError::unresolvable("app://self/x", "no such route").is_unresolvable());
        assert!(ActionError::HandlerNotFound {
            route: "app://self/x".into(),
            handler: "onPost".into(),
        }
        .is_unresolvable());

        assert!(!ActionError::InvalidMetadata("empty src".into()).is_unresolvable());
        assert!(!ActionError::UnknownMethod("fetch".into()).is_unresolvable());
        assert!(!ActionError::BodyShape("siren".into()).is_unresolvable());
    }

    #[test]
    fn test_display() {
        let err = ActionError::HandlerNotFound {
            route: "app://self/child".into(),
            handler: "onPut".into(),
        };
        assert_eq!(err.to_string(), "No onPut handler on app://self/child");
    }
}
