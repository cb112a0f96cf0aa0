use std::collections::BTreeMap;

use super::{
    AccountRecord, BACKEND, DiscoveryError, IdentifierKind, PARAM_ALWAYS_DISPATCH,
    PARAM_CONNECT_AUTOMATICALLY, PARAM_DISPLAY_NAME, PARAM_ENABLED, PARAM_MANAGER,
    PARAM_MODEM_OBJPATH, PARAM_PROTOCOL,
};
use crate::services::SimNames;

/// Builds one account record per modem index in `0..count`.
///
/// `count <= 0` produces no records. The output depends only on the
/// arguments, so repeated calls with the same inputs return equal lists.
///
/// # Errors
///
/// Returns `DiscoveryError::IdentifierTooLong` if an account name exceeds
/// 80 bytes or a modem name exceeds 40.
pub fn synthesize_records(
    count: i32,
    account_prefix: &str,
    modem_prefix: &str,
    sim_names: &SimNames,
) -> Result<Vec<AccountRecord>, DiscoveryError> {
    let total = u32::try_from(count).unwrap_or(0);

    (0..total)
        .map(|index| synthesize_record(index, account_prefix, modem_prefix, sim_names))
        .collect()
}

fn synthesize_record(
    index: u32,
    account_prefix: &str,
    modem_prefix: &str,
    sim_names: &SimNames,
) -> Result<AccountRecord, DiscoveryError> {
    let account_name = format!("{BACKEND}/{BACKEND}/{account_prefix}{index}");
    IdentifierKind::AccountName.check(&account_name)?;

    let modem_name = format!("/{modem_prefix}{index}");
    IdentifierKind::ModemName.check(&modem_name)?;

    let mut params = BTreeMap::from([
        (PARAM_MANAGER.to_string(), BACKEND.to_string()),
        (PARAM_PROTOCOL.to_string(), BACKEND.to_string()),
        (PARAM_ENABLED.to_string(), "true".to_string()),
        (PARAM_CONNECT_AUTOMATICALLY.to_string(), "true".to_string()),
        (PARAM_ALWAYS_DISPATCH.to_string(), "true".to_string()),
    ]);

    if let Some(display_name) = sim_names.get(&modem_name) {
        params.insert(PARAM_DISPLAY_NAME.to_string(), display_name.clone());
    }
    params.insert(PARAM_MODEM_OBJPATH.to_string(), modem_name);

    Ok(AccountRecord::new(account_name, index, params))
}
