#![deny(missing_docs)]
//! <fullname>SNS to CloudWatch Logs forwarder</fullname>
//!
//! Lambda function that receives a batch of log messages
//! inside an SNS notification and writes them, one record per
//! message, into a fresh log stream of a CloudWatch Logs group.
use aws_lambda_events::event::sns::SnsEvent;
use aws_sdk_cloudwatchlogs::Client as CwClient;
use lambda_runtime::LambdaEvent;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

mod cloudwatch_logs;
use cloudwatch_logs::*;

mod config;
pub use config::Config;

mod error;
pub use error::RuntimeError;

mod event;
pub use event::log_messages;

/// `nonce` generates the random log stream suffix
pub mod nonce;

#[cfg(test)]
mod test_util;

/// `handle_notification` is the Lambda function entry point
/// that receives the events from SNS.
///
/// Returns false when CloudWatch rejected one of the messages.
#[tracing::instrument(skip(client, config, event), fields(request_id = %event.context.request_id))]
pub async fn handle_notification(
    client: &CwClient,
    config: &Config,
    event: LambdaEvent<SnsEvent>,
) -> Result<bool, RuntimeError> {
    handle_with_rng(client, config, event, StdRng::from_entropy()).await
}

async fn handle_with_rng<R: Rng>(
    client: &CwClient,
    config: &Config,
    event: LambdaEvent<SnsEvent>,
    mut rng: R,
) -> Result<bool, RuntimeError> {
    let messages = log_messages(&event.payload)?;

    let nonce = nonce::generate(&mut rng);
    let log_stream = nonce::stream_name(&config.log_stream_name_prefix, &nonce);

    forward(client, config, &log_stream, &messages, epoch_millis).await
}

/// Write the messages into a new log stream, creating the log group first if needed.
/// Each message is appended on its own, carrying the sequence token forward.
/// Stops at the first rejected message and returns false.
#[tracing::instrument(skip(client, config, messages, clock), fields(log_group = %config.log_group_name, messages = messages.len()))]
pub async fn forward<C>(
    client: &CwClient,
    config: &Config,
    log_stream: &str,
    messages: &[String],
    clock: C,
) -> Result<bool, RuntimeError>
where
    C: Fn() -> i64,
{
    let log_group = config.log_group_name.as_str();
    create_log_group_if_missing(client, log_group, &config.log_group_tags).await?;
    create_log_stream(client, log_group, log_stream).await?;

    let mut sequence_token = None;
    for (index, message) in messages.iter().enumerate() {
        let outcome = put_log_event(
            client,
            log_group,
            log_stream,
            clock(),
            message,
            sequence_token.take(),
        )
        .await?;

        match outcome {
            PutOutcome::Accepted(next) => sequence_token = next,
            PutOutcome::Rejected(_) => {
                tracing::warn!(index, "stopped forwarding after rejected message");
                return Ok(false);
            }
        }
    }

    tracing::info!("forwarded all messages");
    Ok(true)
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
