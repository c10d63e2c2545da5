use crate::error::RuntimeError;
use std::collections::HashMap;

const LOG_GROUP_NAME: &str = "CloudWatchLogGroupName";
const LOG_STREAM_NAME_PREFIX: &str = "CloudWatchLogStreamNamePrefix";
const LOG_GROUP_OWNER: &str = "CloudWatchLogGroupOwner";
const LOG_GROUP_PRODUCT: &str = "CloudWatchLogGroupProduct";

/// `Config` holds the destination of the forwarded messages
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Log group that receives the streams, created on demand
    pub log_group_name: String,
    /// Prefix for the per-invocation log stream name
    pub log_stream_name_prefix: String,
    /// Tags attached to the log group when it's created
    pub log_group_tags: HashMap<String, String>,
}

impl Config {
    /// Load the configuration from the function's environment.
    pub fn from_env() -> Result<Config, RuntimeError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, RuntimeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| RuntimeError::MissingConfig(key.into()))
        };

        let log_group_name = required(LOG_GROUP_NAME)?;
        let log_stream_name_prefix = required(LOG_STREAM_NAME_PREFIX)?;

        let mut log_group_tags = HashMap::new();
        log_group_tags.insert("Name".to_string(), log_group_name.clone());
        for (tag, key) in [("Owner", LOG_GROUP_OWNER), ("Product", LOG_GROUP_PRODUCT)] {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                log_group_tags.insert(tag.to_string(), value);
            }
        }

        Ok(Config {
            log_group_name,
            log_stream_name_prefix,
            log_group_tags,
        })
    }
}
