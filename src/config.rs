// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::requeue;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Only watch ConfigMaps in this namespace, cluster-wide when unset
    pub watch_namespace: Option<String>,
    pub error_requeue: Duration,
    pub conflict_requeue: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_namespace: None,
            error_requeue: Duration::from_secs(requeue::ERROR_SECS),
            conflict_requeue: Duration::from_secs(requeue::CONFLICT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.trim().is_empty());

        let error_requeue = secs_or_default(&lookup, "ERROR_REQUEUE_SECS", requeue::ERROR_SECS)?;
        let conflict_requeue =
            secs_or_default(&lookup, "CONFLICT_REQUEUE_SECS", requeue::CONFLICT_SECS)?;

        Ok(Config {
            watch_namespace,
            error_requeue,
            conflict_requeue,
        })
    }
}

fn secs_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<Duration> {
    match lookup(key) {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", key, raw))?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(Duration::from_secs(default)),
    }
}
