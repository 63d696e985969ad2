use shipdesk::access::RegistryError;
use shipdesk::session::SessionError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Registry(RegistryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Registry(err) => write!(formatter, "Route configuration error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError::Registry(err)
    }
}

/// Maps request failures onto the session error the listener's retry policy
/// understands.
impl From<AppError> for SessionError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Network(message) | AppError::Config(message) => {
                SessionError::Network(message)
            }
            AppError::Timeout(_) => SessionError::Timeout,
            AppError::Http { status, message } => SessionError::Http { status, message },
            AppError::Parse(message) => SessionError::Parse(message),
            AppError::Registry(err) => SessionError::Parse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Http {
                status: 503,
                message: "unavailable".to_string()
            }
            .to_string(),
            "Request failed (503): unavailable"
        );
        assert_eq!(
            AppError::from(RegistryError::UnknownPage("invoices".to_string())).to_string(),
            "Route configuration error: no page descriptor registered for `invoices`"
        );
    }

    #[test]
    fn test_session_error_mapping_keeps_retryability() {
        let timeout = SessionError::from(AppError::Timeout("slow".to_string()));
        assert!(timeout.is_retryable());

        let rejected = SessionError::from(AppError::Http {
            status: 403,
            message: "forbidden".to_string(),
        });
        assert!(!rejected.is_retryable());

        let malformed = SessionError::from(AppError::Parse("bad json".to_string()));
        assert!(!malformed.is_retryable());
    }
}
