use std::time::Duration;

use tokio::time;
use tracing::{instrument, warn};

use crate::services::{SimNameSource, SimNames};

/// Fetches SIM display names, falling back to an empty mapping.
///
/// Transport errors, permission errors and timeouts are logged and
/// otherwise ignored: accounts are still synthesized, just without
/// display names.
#[instrument(skip_all)]
pub async fn fetch_sim_names<D>(directory: &D, timeout: Duration) -> SimNames
where
    D: SimNameSource + ?Sized,
{
    match time::timeout(timeout, directory.sim_names()).await {
        Ok(Ok(names)) => names,
        Ok(Err(e)) => {
            warn!("{e}");
            SimNames::new()
        }
        Err(_) => {
            warn!("Timed out fetching SimNames after {timeout:?}");
            SimNames::new()
        }
    }
}
