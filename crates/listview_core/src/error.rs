use thiserror::Error;

/// Message shown when a service failure carries no usable text.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure reported by one of the external services at the transport level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with a structured error body.
    #[error("{message}")]
    Remote { message: String },

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Unknown,
}

impl ServiceError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Text suitable for the error banner: the structured body message first,
    /// then the transport message, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message } if !message.trim().is_empty() => message.clone(),
            Self::Transport(message) if !message.trim().is_empty() => message.clone(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ListViewError {
    #[error("Please configure a SOQL query for this component.")]
    MissingQuery,

    /// The query service answered with `success: false`.
    #[error("{0}")]
    Service(String),

    #[error(transparent)]
    Transport(#[from] ServiceError),

    #[error("Column '{0}' does not declare filter values")]
    UnknownFilterField(String),

    #[error("Invalid list view configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_remote_body() {
        let err = ServiceError::remote("Field X not queryable");
        assert_eq!(err.user_message(), "Field X not queryable");
    }

    #[test]
    fn user_message_falls_back_for_blank_messages() {
        assert_eq!(
            ServiceError::remote("  ").user_message(),
            UNEXPECTED_ERROR_MESSAGE
        );
        assert_eq!(
            ServiceError::transport("").user_message(),
            UNEXPECTED_ERROR_MESSAGE
        );
        assert_eq!(ServiceError::Unknown.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn transport_message_is_used_when_present() {
        let err = ServiceError::transport("connection reset");
        assert_eq!(err.user_message(), "connection reset");
        assert_eq!(err.to_string(), "Transport failure: connection reset");
    }
}
