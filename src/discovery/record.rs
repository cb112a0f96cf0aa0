use std::collections::BTreeMap;

/// Connection manager and protocol every synthesized account uses.
pub const BACKEND: &str = "ofono";

/// Connection manager name parameter
pub const PARAM_MANAGER: &str = "manager";
/// Protocol name parameter
pub const PARAM_PROTOCOL: &str = "protocol";
/// Account enabled flag
pub const PARAM_ENABLED: &str = "Enabled";
/// Auto-connect flag
pub const PARAM_CONNECT_AUTOMATICALLY: &str = "ConnectAutomatically";
/// Always-dispatch flag
pub const PARAM_ALWAYS_DISPATCH: &str = "always_dispatch";
/// Object path of the modem backing the account
pub const PARAM_MODEM_OBJPATH: &str = "param-modem-objpath";
/// SIM display name, present only when AccountsService knows one
pub const PARAM_DISPLAY_NAME: &str = "DisplayName";

/// One synthesized account, describing how to reach a single modem.
///
/// Records are built by discovery and never change afterwards; there are
/// no mutable accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    account_name: String,
    index: u32,
    params: BTreeMap<String, String>,
}

impl AccountRecord {
    pub(crate) fn new(account_name: String, index: u32, params: BTreeMap<String, String>) -> Self {
        Self {
            account_name,
            index,
            params,
        }
    }

    /// Unique account name, `ofono/ofono/<prefix><index>`.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Position of the modem in discovery order.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// All account parameters.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Value of a single parameter, if set.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
