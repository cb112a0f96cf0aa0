use std::time::Duration;

use tokio::time;
use tracing::{debug, instrument, warn};

use crate::{
    config::DiscoveryConfig,
    services::{
        PropertyQuery,
        properties::{RIL_NUM_SLOTS, RILD_LIBPATH},
    },
};

/// Works out how many modems to synthesize accounts for.
///
/// A forced count from the configuration wins outright, negative values
/// included. Otherwise the RIL library property decides whether there is a
/// modem stack at all, and the slot count property (default `1`) gives the
/// number of modems. Any property failure yields `0`.
#[instrument(skip_all)]
pub async fn determine_modem_count<P>(config: &DiscoveryConfig, properties: &P) -> i32
where
    P: PropertyQuery + ?Sized,
{
    if let Some(count) = config.force_num_modems {
        debug!("forced number of modems: {count}");
        return count;
    }

    if !properties.is_available() {
        debug!("Property service not available, assuming no modems");
        return 0;
    }

    let timeout = config.query_timeout();

    let Some(libpath) = read_property(properties, RILD_LIBPATH, "", timeout).await else {
        return 0;
    };
    if libpath.trim().is_empty() {
        debug!("{RILD_LIBPATH} is empty, assuming no modems");
        return 0;
    }

    let Some(slots) = read_property(properties, RIL_NUM_SLOTS, "1", timeout).await else {
        return 0;
    };

    match slots.trim().parse::<i32>() {
        Ok(count) => {
            debug!("{RIL_NUM_SLOTS} reports {count} modem(s)");
            count
        }
        Err(e) => {
            warn!("Invalid {RIL_NUM_SLOTS} value {slots:?}: {e}");
            0
        }
    }
}

async fn read_property<P>(
    properties: &P,
    name: &str,
    default: &str,
    timeout: Duration,
) -> Option<String>
where
    P: PropertyQuery + ?Sized,
{
    match time::timeout(timeout, properties.get(name, default)).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!("Failed to read property {name}: {e}");
            None
        }
        Err(_) => {
            warn!("Timed out reading property {name} after {timeout:?}");
            None
        }
    }
}
