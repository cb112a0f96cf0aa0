use std::collections::HashMap;

use serde::Serialize;

use super::{RestrictionFlags, StorageError};

/// Priority hosts assign to an ordinary storage provider.
pub const PRIORITY_DEFAULT: i32 = 100;

/// Identity a storage provider presents to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Stable provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Ordering among competing providers; lower is consulted later
    pub priority: i32,
    /// Provider / service identifier
    pub provider: &'static str,
}

/// Host-side account manager that receives values read from a provider.
pub trait AccountManager {
    /// Records `value` for `key` on `account`. `None` means the key is unset.
    fn set_value(&self, account: &str, key: &str, value: Option<&str>);
}

/// Verb set a host uses to query an account storage provider.
///
/// Boolean results follow the host protocol: `true` means the provider
/// handled the request, `false` that it did not (unknown account, or a
/// write the provider refuses).
pub trait AccountStorage: Send + Sync {
    /// Identity of this provider.
    fn info(&self) -> ProviderInfo;

    /// Names of all accounts this provider serves.
    fn list(&self) -> Vec<String>;

    /// Pushes one parameter (`key`) or all parameters (`None`) of `account`
    /// into `manager`.
    fn get(&self, manager: &dyn AccountManager, account: &str, key: Option<&str>) -> bool;

    /// Stores a parameter value.
    fn set(&self, account: &str, key: &str, value: Option<&str>) -> bool;

    /// Creates a new account and returns its name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the provider cannot create the account.
    fn create(
        &self,
        cm_name: &str,
        protocol_name: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, StorageError>;

    /// Deletes one parameter (`key`) or the whole account (`None`).
    fn delete(&self, account: &str, key: Option<&str>) -> bool;

    /// Flushes pending changes. Returns `false` when there was nothing to write.
    fn commit(&self) -> bool;

    /// Opaque identifier of `account`, if known.
    fn get_identifier(&self, account: &str) -> Option<u32>;

    /// Restrictions the host must apply to `account`.
    fn get_restrictions(&self, account: &str) -> RestrictionFlags;
}
