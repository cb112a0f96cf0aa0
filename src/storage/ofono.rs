use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{
    AccountManager, AccountStorage, PRIORITY_DEFAULT, ProviderInfo, RestrictionFlags,
    StorageError,
};
use crate::{
    Result,
    config::DiscoveryConfig,
    discovery::{self, AccountRecord, DiscoveryError},
    services::{AccountsServiceDirectory, GetpropQuery, PropertyQuery, SimNameSource},
};

/// Identity of the ofono modem account provider.
pub const OFONO_PROVIDER_INFO: ProviderInfo = ProviderInfo {
    name: "ofono-account",
    description: "Provide ril modem accounts for telepathy-ofono",
    priority: PRIORITY_DEFAULT - 10,
    provider: "im.telepathy.Account.Storage.Ofono",
};

/// Read-only storage provider serving one account per discovered modem.
///
/// The record list is fixed at construction. Lookups scan it linearly;
/// names are unique so the first match is the only match.
#[derive(Debug, Clone)]
pub struct OfonoAccountStorage {
    accounts: Vec<AccountRecord>,
}

impl OfonoAccountStorage {
    /// Wraps an already discovered record list.
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self { accounts }
    }

    /// Runs discovery against the given collaborators and serves the result.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::IdentifierTooLong` if a configured prefix is
    /// too long.
    pub async fn discover<P, D>(
        config: &DiscoveryConfig,
        properties: &P,
        directory: &D,
    ) -> std::result::Result<Self, DiscoveryError>
    where
        P: PropertyQuery + ?Sized,
        D: SimNameSource + ?Sized,
    {
        let accounts = discovery::discover(config, properties, directory).await?;
        Ok(Self::new(accounts))
    }

    /// Discovers modems on this system using `getprop` and AccountsService.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier exceeds its length ceiling.
    #[instrument(skip(config))]
    pub async fn start(config: &DiscoveryConfig) -> Result<Self> {
        debug!("MC ril ofono accounts plugin initializing");
        let properties = GetpropQuery::new(&config.getprop_path);
        let directory = AccountsServiceDirectory::for_current_user()?;

        Ok(Self::discover(config, &properties, &directory).await?)
    }

    /// Records in discovery order.
    pub fn accounts(&self) -> &[AccountRecord] {
        &self.accounts
    }

    fn find(&self, account: &str) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.account_name() == account)
    }
}

impl AccountStorage for OfonoAccountStorage {
    fn info(&self) -> ProviderInfo {
        OFONO_PROVIDER_INFO
    }

    fn list(&self) -> Vec<String> {
        self.accounts
            .iter()
            .rev()
            .map(|a| a.account_name().to_string())
            .collect()
    }

    fn get(&self, manager: &dyn AccountManager, account: &str, key: Option<&str>) -> bool {
        let Some(record) = self.find(account) else {
            return false;
        };

        match key {
            None => {
                for (key, value) in record.params() {
                    debug!("get: {account}, {key} {value}");
                    manager.set_value(account, key, Some(value));
                }
            }
            Some(key) => {
                let value = record.param(key);
                debug!("get: {account}, {key} {value:?}");
                manager.set_value(account, key, value);
            }
        }

        true
    }

    fn set(&self, _account: &str, _key: &str, _value: Option<&str>) -> bool {
        false
    }

    fn create(
        &self,
        _cm_name: &str,
        _protocol_name: &str,
        _params: &HashMap<String, String>,
    ) -> std::result::Result<String, StorageError> {
        Err(StorageError::InvalidArgument(
            "Ofono ril account manager cannot create accounts".to_string(),
        ))
    }

    fn delete(&self, account: &str, key: Option<&str>) -> bool {
        debug!("delete: {account}, {key:?}");
        false
    }

    fn commit(&self) -> bool {
        debug!("commit");
        false
    }

    fn get_identifier(&self, account: &str) -> Option<u32> {
        let record = self.find(account)?;
        debug!("get_identifier: {account}");
        Some(record.index())
    }

    fn get_restrictions(&self, account: &str) -> RestrictionFlags {
        match self.find(account) {
            Some(_) => RestrictionFlags::LOCKED,
            None => RestrictionFlags::UNKNOWN,
        }
    }
}
