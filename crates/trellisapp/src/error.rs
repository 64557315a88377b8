use crate::validation::Violations;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrellisError {
    /// A local write hit an attribute the server owns.
    #[error("Attribute `{attribute}` of {resource} is read-only")]
    ReadOnlyAttribute {
        resource: &'static str,
        attribute: String,
    },

    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// Failure reported by the HTTP layer, passed through untouched.
    #[error("Request failed{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// Undeclared attribute, relation or filter value. A programming error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unexpected payload: {0}")]
    Payload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl TrellisError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        TrellisError::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        TrellisError::Configuration(message.into())
    }

    /// Violations carried by a [`TrellisError::Validation`], if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            TrellisError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_includes_status_when_known() {
        let err = TrellisError::transport(Some(404), "model not found");
        assert_eq!(err.to_string(), "Request failed (404): model not found");
    }

    #[test]
    fn transport_display_without_status() {
        let err = TrellisError::transport(None, "connection refused");
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn read_only_display_names_resource_and_attribute() {
        let err = TrellisError::ReadOnlyAttribute {
            resource: "member",
            attribute: "username".into(),
        };
        assert_eq!(
            err.to_string(),
            "Attribute `username` of member is read-only"
        );
    }
}
