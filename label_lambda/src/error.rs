use aws_sdk_s3::error::DisplayErrorContext;
use thiserror::Error;

/// Failures that abort an invocation. None of them are handled locally;
/// they are boxed into `lambda_runtime::Error` and reported by the runtime.
#[derive(Debug, Error)]
pub(crate) enum HandlerError {
    #[error("malformed S3 event: missing {0}")]
    MalformedEvent(&'static str),
    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },
    #[error("failed to serialize detection result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HandlerError {
    pub(crate) fn service<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error,
    {
        Self::Service {
            operation,
            message: DisplayErrorContext(err).to_string(),
        }
    }
}
