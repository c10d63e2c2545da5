use crate::error::RuntimeError;
use aws_lambda_events::event::sns::SnsEvent;
use serde_json::Value;

/// Decode the log messages carried by the first notification record.
///
/// `Message` must hold a JSON array. Every element becomes one message: strings
/// are kept as they are, any other JSON value is rendered as compact JSON text
/// (`42` becomes `"42"`).
pub fn log_messages(event: &SnsEvent) -> Result<Vec<String>, RuntimeError> {
    let record = event.records.first().ok_or(RuntimeError::MissingRecord)?;
    if event.records.len() > 1 {
        tracing::warn!(
            records = event.records.len(),
            "only the first notification record is forwarded"
        );
    }

    let values: Vec<Value> = serde_json::from_str(&record.sns.message)?;
    Ok(values.into_iter().map(into_message).collect())
}

fn into_message(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
