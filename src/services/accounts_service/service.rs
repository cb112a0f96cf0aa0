use std::collections::HashMap;

use async_trait::async_trait;

use super::DirectoryError;

/// SIM display names keyed by modem object path (e.g. `/ril_0`).
pub type SimNames = HashMap<String, String>;

/// Source of user-assigned SIM display names.
#[async_trait]
pub trait SimNameSource: Send + Sync {
    /// Fetches the current user's modem path to display name mapping.
    async fn sim_names(&self) -> Result<SimNames, DirectoryError>;
}
