//! API response types
//!
//! Standard error envelope for the annofuse API. Success payloads are not
//! wrapped: the upload and query responses have fixed shapes of their own.

use serde::Serialize;

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let error = ErrorResponse::new("PARSE_ERROR", "bad input");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "PARSE_ERROR");
        assert_eq!(json["error"]["message"], "bad input");
    }
}
