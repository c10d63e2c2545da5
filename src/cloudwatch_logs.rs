use aws_sdk_cloudwatchlogs::{
    model::{InputLogEvent, RejectedLogEventsInfo},
    Client, Error,
};
use std::collections::HashMap;

use crate::error::RuntimeError;

/// Result of appending one record to a log stream
#[derive(Clone, Debug, PartialEq)]
pub enum PutOutcome {
    /// The record was accepted. Carries the token for the next append, if any.
    Accepted(Option<String>),
    /// The service refused the record.
    Rejected(RejectedLogEventsInfo),
}

/// Find out whether a log group with exactly this name exists.
/// Every page of groups sharing the name as prefix is inspected.
#[tracing::instrument(skip(client))]
async fn log_group_exists(client: &Client, log_group: &str) -> Result<bool, RuntimeError> {
    let mut next_token = None;
    loop {
        let output = client
            .describe_log_groups()
            .log_group_name_prefix(log_group)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(Error::from)?;

        let found = output
            .log_groups
            .unwrap_or_default()
            .iter()
            .filter_map(|g| g.log_group_name.as_deref())
            .any(|name| name == log_group);
        if found {
            return Ok(true);
        }

        match output.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => return Ok(false),
        }
    }
}

/// Create the log group unless it already exists.
/// Returns true when this call created it.
#[tracing::instrument(skip(client, tags))]
pub async fn create_log_group_if_missing(
    client: &Client,
    log_group: &str,
    tags: &HashMap<String, String>,
) -> Result<bool, RuntimeError> {
    if log_group_exists(client, log_group).await? {
        return Ok(false);
    }

    tracing::info!("creating new log group");
    let res = client
        .create_log_group()
        .log_group_name(log_group)
        .set_tags(Some(tags.clone()))
        .send()
        .await;

    match res {
        Ok(_) => Ok(true),
        Err(sdk_err) => match Error::from(sdk_err) {
            // another invocation won the race
            Error::ResourceAlreadyExistsException(_) => {
                tracing::info!("log group already exists");
                Ok(false)
            }
            err => Err(RuntimeError::CloudWatchLogs(err)),
        },
    }
}

/// Create the log stream that this invocation writes into.
#[tracing::instrument(skip(client))]
pub async fn create_log_stream(
    client: &Client,
    log_group: &str,
    log_stream: &str,
) -> Result<(), RuntimeError> {
    tracing::info!("creating new log stream");
    client
        .create_log_stream()
        .log_group_name(log_group)
        .log_stream_name(log_stream)
        .send()
        .await
        .map_err(Error::from)?;

    Ok(())
}

/// Append a single record to the log stream.
/// The sequence token is omitted for the first append to a new stream.
#[tracing::instrument(skip(client, message))]
pub async fn put_log_event(
    client: &Client,
    log_group: &str,
    log_stream: &str,
    timestamp: i64,
    message: &str,
    sequence_token: Option<String>,
) -> Result<PutOutcome, RuntimeError> {
    let event = InputLogEvent::builder()
        .message(message)
        .timestamp(timestamp)
        .build();

    let output = client
        .put_log_events()
        .log_group_name(log_group)
        .log_stream_name(log_stream)
        .log_events(event)
        .set_sequence_token(sequence_token)
        .send()
        .await
        .map_err(Error::from)?;

    match output.rejected_log_events_info {
        Some(info) => {
            tracing::warn!(?info, "log event rejected");
            Ok(PutOutcome::Rejected(info))
        }
        None => Ok(PutOutcome::Accepted(output.next_sequence_token)),
    }
}
