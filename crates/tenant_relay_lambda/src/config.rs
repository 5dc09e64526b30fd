//! Cold-start configuration read from the Lambda environment.

use thiserror::Error;

pub const QUEUE_URL_VAR: &str = "SQS_QUEUE_URL";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_OVERRIDE_VAR: &str = "SQS_ENDPOINT_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    MissingVariable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub queue_url: String,
    pub region: String,
    pub queue_endpoint: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let queue_url = read(QUEUE_URL_VAR).ok_or(ConfigError::MissingVariable(QUEUE_URL_VAR))?;
        let region = read(REGION_VAR).ok_or(ConfigError::MissingVariable(REGION_VAR))?;
        let queue_endpoint =
            read(ENDPOINT_OVERRIDE_VAR).unwrap_or_else(|| default_queue_endpoint(&region));

        Ok(Self {
            queue_url,
            region,
            queue_endpoint,
        })
    }
}

pub fn default_queue_endpoint(region: &str) -> String {
    format!("https://sqs.{region}.amazonaws.com")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn derives_endpoint_from_region() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (QUEUE_URL_VAR, "https://sqs.eu-west-1.amazonaws.com/123/tenant-queue"),
            (REGION_VAR, "eu-west-1"),
        ]))
        .expect("config should load");

        assert_eq!(config.queue_endpoint, "https://sqs.eu-west-1.amazonaws.com");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn endpoint_override_wins() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (QUEUE_URL_VAR, "http://localhost:4566/000000000000/tenant-queue"),
            (REGION_VAR, "us-east-1"),
            (ENDPOINT_OVERRIDE_VAR, "http://localhost:4566"),
        ]))
        .expect("config should load");

        assert_eq!(config.queue_endpoint, "http://localhost:4566");
    }

    #[test]
    fn missing_queue_url_is_reported() {
        let error = RelayConfig::from_lookup(lookup_from(&[(REGION_VAR, "us-east-1")]))
            .expect_err("queue url is required");

        assert_eq!(error, ConfigError::MissingVariable(QUEUE_URL_VAR));
        assert_eq!(error.to_string(), "SQS_QUEUE_URL must be configured");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let error = RelayConfig::from_lookup(lookup_from(&[
            (QUEUE_URL_VAR, "https://sqs.us-east-1.amazonaws.com/123/q"),
            (REGION_VAR, "   "),
        ]))
        .expect_err("blank region should be rejected");

        assert_eq!(error, ConfigError::MissingVariable(REGION_VAR));
    }
}
