use async_trait::async_trait;
use tracing::{debug, instrument};
use zbus::{Connection, proxy::CacheProperties};

use super::{DirectoryError, PhoneProxy, SimNameSource, SimNames};
use crate::discovery::{DiscoveryError, IdentifierKind};

const ACCOUNTS_USER_PATH_PREFIX: &str = "/org/freedesktop/Accounts/User";

/// SIM names read from AccountsService on the system bus.
///
/// The bus connection is opened per lookup and dropped before returning,
/// whether or not the lookup succeeded.
#[derive(Debug, Clone)]
pub struct AccountsServiceDirectory {
    user_path: String,
}

impl AccountsServiceDirectory {
    /// Directory for the user running this process.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::IdentifierTooLong` if the user object path
    /// exceeds the D-Bus path ceiling.
    pub fn for_current_user() -> Result<Self, DiscoveryError> {
        Self::for_uid(current_uid())
    }

    /// Directory for the user with the given uid.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::IdentifierTooLong` if the user object path
    /// exceeds the D-Bus path ceiling.
    pub fn for_uid(uid: u32) -> Result<Self, DiscoveryError> {
        let user_path = format!("{ACCOUNTS_USER_PATH_PREFIX}{uid}");
        IdentifierKind::DbusPath.check(&user_path)?;

        Ok(Self { user_path })
    }

    /// AccountsService object path queried by this directory.
    pub fn user_path(&self) -> &str {
        &self.user_path
    }
}

#[async_trait]
impl SimNameSource for AccountsServiceDirectory {
    #[instrument(skip(self), fields(path = %self.user_path))]
    async fn sim_names(&self) -> Result<SimNames, DirectoryError> {
        let connection = Connection::system()
            .await
            .map_err(DirectoryError::ConnectionFailed)?;

        let proxy = PhoneProxy::builder(&connection)
            .path(self.user_path.as_str())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let names = proxy.sim_names().await?;
        debug!("Retrieved {} SIM name(s)", names.len());

        Ok(names)
    }
}

#[allow(unsafe_code)]
fn current_uid() -> u32 {
    // SAFETY: getuid takes no arguments, has no preconditions and always succeeds.
    unsafe { libc::getuid() }
}
