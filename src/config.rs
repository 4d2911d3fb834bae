//! Graylog connection configuration.
//!
//! The three connection parameters are read from the environment exactly once
//! at startup and handed to the service by value; request handlers never
//! touch ambient process state.

use std::env;

use crate::constants::{ENV_BASE_URL, ENV_PASSWORD, ENV_USERNAME};
use crate::error::{Error, Result};

/// Resolved connection parameters for one Graylog server.
#[derive(Debug, Clone)]
pub struct GraylogConfig {
    /// Base URL of the Graylog server, always ending in `/`.
    pub base_url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
}

impl GraylogConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// Fails with a configuration error naming every variable that is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(ENV_BASE_URL).ok(),
            env::var(ENV_USERNAME).ok(),
            env::var(ENV_PASSWORD).ok(),
        )
    }

    /// Build a configuration from already-read values.
    ///
    /// Split out of [`Self::from_env`] so validation and normalization can be
    /// tested without mutating process-wide environment state.
    pub fn from_values(
        base_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();
        let base_url = require(base_url, ENV_BASE_URL, &mut missing);
        let username = require(username, ENV_USERNAME, &mut missing);
        let password = require(password, ENV_PASSWORD, &mut missing);

        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            base_url: normalize_base_url(base_url),
            username,
            password,
        })
    }
}

fn require(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
