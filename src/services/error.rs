use thiserror::Error;

/// Failure talking to the company API
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_auth_statuses_count_as_unauthorized() {
        let unauthorized = ApiError::Http { status: 401, message: "Unauthorized".into() };
        let forbidden = ApiError::Http { status: 403, message: "Forbidden".into() };
        let missing = ApiError::Http { status: 404, message: "Not Found".into() };

        assert!(unauthorized.is_unauthorized());
        assert!(forbidden.is_unauthorized());
        assert!(!missing.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Http { status: 500, message: "Internal Server Error".into() };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
