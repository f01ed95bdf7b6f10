use thiserror::Error;

/// Errors surfaced by the recommendation endpoint call
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {reason}")]
    Transport { reason: String },

    #[error("invalid response body: {reason}")]
    InvalidBody { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_formatting() {
        let err = ApiError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = ApiError::InvalidBody {
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().starts_with("invalid response body"));
    }
}
