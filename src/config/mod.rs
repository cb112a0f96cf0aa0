//! Discovery configuration.
//!
//! The provider is configured primarily through environment variables set
//! for the host process. An optional TOML file can supply the same values;
//! environment variables always win over the file.

mod loading;


use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

/// Environment variable overriding the number of modems.
pub const ENV_FORCE_NUM_MODEMS: &str = "FORCE_RIL_NUM_MODEMS";
/// Environment variable overriding the modem object path prefix.
pub const ENV_MODEM_PREFIX: &str = "MCP_OFONO_MODEM_PREFIX";
/// Environment variable overriding the account name prefix.
pub const ENV_ACCOUNT_PREFIX: &str = "MCP_OFONO_ACCOUNT_PREFIX";

/// Modem prefix used when none (or an empty one) is configured.
pub const DEFAULT_MODEM_PREFIX: &str = "ril_";
/// Account prefix used when none (or an empty one) is configured.
pub const DEFAULT_ACCOUNT_PREFIX: &str = "account";
/// Location of the Android property tool.
pub const DEFAULT_GETPROP_PATH: &str = "/usr/bin/getprop";
/// Upper bound on each external query made during discovery.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 3;

/// Settings that drive modem discovery and account synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Forced modem count. Bypasses the property service entirely when set.
    pub force_num_modems: Option<i32>,

    /// Prefix of modem object paths (`/<prefix><index>`).
    pub modem_prefix: Option<String>,

    /// Prefix of account names (`ofono/ofono/<prefix><index>`).
    pub account_prefix: Option<String>,

    /// Timeout applied to each property or directory query, in seconds.
    pub query_timeout_secs: u64,

    /// Path of the `getprop` executable.
    pub getprop_path: PathBuf,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            force_num_modems: None,
            modem_prefix: None,
            account_prefix: None,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            getprop_path: PathBuf::from(DEFAULT_GETPROP_PATH),
        }
    }
}

impl DiscoveryConfig {
    /// Modem prefix in effect; empty values fall back to [`DEFAULT_MODEM_PREFIX`].
    pub fn modem_prefix(&self) -> &str {
        non_empty_or(self.modem_prefix.as_deref(), DEFAULT_MODEM_PREFIX)
    }

    /// Account prefix in effect; empty values fall back to [`DEFAULT_ACCOUNT_PREFIX`].
    pub fn account_prefix(&self) -> &str {
        non_empty_or(self.account_prefix.as_deref(), DEFAULT_ACCOUNT_PREFIX)
    }

    /// Bound applied to each external query.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
