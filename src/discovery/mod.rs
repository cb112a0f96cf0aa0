//! Modem discovery and account synthesis.
//!
//! Discovery runs once at provider start-up. It works out how many modems
//! the device has, looks up the SIM display names the user assigned to
//! them, and turns both into one [`AccountRecord`] per modem. Failures of
//! the property service or of AccountsService are logged and degrade to
//! "no modems" or "no display names"; only an identifier that overflows
//! its length ceiling stops discovery.

/// Discovery errors and identifier ceilings
mod error;
/// Modem count detection
mod modems;
/// Synthesized account records
mod record;
/// SIM display name lookup
mod sim_names;
/// Record synthesis
mod synthesis;


pub use error::{DiscoveryError, IdentifierKind};
pub use modems::determine_modem_count;
pub use record::*;
pub use sim_names::fetch_sim_names;
pub use synthesis::synthesize_records;

use tracing::{debug, info, instrument};

use crate::{
    config::DiscoveryConfig,
    services::{PropertyQuery, SimNameSource, SimNames},
};

/// Runs the full discovery pipeline against the given collaborators.
///
/// Every collaborator call is bounded by the configured query timeout.
/// When no modems are found AccountsService is not contacted.
///
/// # Errors
///
/// Returns `DiscoveryError::IdentifierTooLong` if a configured prefix makes
/// an account or modem name exceed its ceiling.
#[instrument(skip_all)]
pub async fn discover<P, D>(
    config: &DiscoveryConfig,
    properties: &P,
    directory: &D,
) -> Result<Vec<AccountRecord>, DiscoveryError>
where
    P: PropertyQuery + ?Sized,
    D: SimNameSource + ?Sized,
{
    let count = determine_modem_count(config, properties).await;

    let sim_names = if count > 0 {
        fetch_sim_names(directory, config.query_timeout()).await
    } else {
        debug!("No modems, skipping SIM name lookup");
        SimNames::new()
    };

    let records = synthesize_records(
        count,
        config.account_prefix(),
        config.modem_prefix(),
        &sim_names,
    )?;
    info!("Discovered {} ofono account(s)", records.len());

    Ok(records)
}

/// Blocking variant of [`discover`] for hosts without an async runtime.
///
/// Drives discovery to completion on a private current-thread runtime.
/// Must not be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created or discovery fails.
///
/// # Panics
///
/// Panics if called from within a Tokio runtime, since the private runtime
/// cannot block inside another one.
pub fn discover_blocking<P, D>(
    config: &DiscoveryConfig,
    properties: &P,
    directory: &D,
) -> crate::Result<Vec<AccountRecord>>
where
    P: PropertyQuery + ?Sized,
    D: SimNameSource + ?Sized,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(runtime.block_on(discover(config, properties, directory))?)
}
