use thiserror::Error as ThisError;

/// Different errors that the forwarder can raise
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned when a required environment variable is missing or empty
    #[error("missing environment variable {0}")]
    MissingConfig(String),
    /// Error returned when the notification event carries no records
    #[error("notification event has no records")]
    MissingRecord,
    /// Error returned when the notification message is not a JSON array
    #[error("notification message is not a JSON array")]
    InvalidMessage(#[from] serde_json::Error),
    /// Error returned by the CloudWatch Logs API
    #[error("unexpected cloudwatch logs error")]
    CloudWatchLogs(#[from] aws_sdk_cloudwatchlogs::Error),
}
