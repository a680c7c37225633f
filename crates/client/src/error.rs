use shopfloor_core::error::CoreError;

/// Errors surfaced to the operator by the dashboard client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The gateway answered with the error envelope.
    #[error("Gateway error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the envelope.
        message: String,
    },

    /// A selection transition was rejected.
    #[error(transparent)]
    Selection(#[from] CoreError),

    /// The action is disabled for the current selection.
    #[error("{action} is not available for the current selection")]
    NotPermitted { action: &'static str },
}

impl ClientError {
    /// The text shown to the operator in the alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
