//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider answered with a non-success status
    #[error("Upstream rejected request with status {status}")]
    UpstreamRejected { status: u16 },

    /// Network, timeout or malformed response while calling the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// HTTP status reported by the provider, if any
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamRejected { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidCoordinates.into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.upstream_status(), None);
    }

    #[test]
    fn upstream_status_only_for_rejections() {
        let rejected = ApplicationError::UpstreamRejected { status: 401 };
        assert_eq!(rejected.upstream_status(), Some(401));

        let transport = ApplicationError::Transport("timeout".to_string());
        assert_eq!(transport.upstream_status(), None);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ApplicationError::UpstreamRejected { status: 500 }.to_string(),
            "Upstream rejected request with status 500"
        );
        assert_eq!(
            ApplicationError::Transport("refused".to_string()).to_string(),
            "Transport error: refused"
        );
    }
}
