#![allow(missing_docs)]

use std::collections::HashMap;

use zbus::{Result, proxy};

/// Phone settings exported by AccountsService for each user.
///
/// Has no default path; every user lives at
/// `/org/freedesktop/Accounts/User<uid>`.
#[proxy(
    interface = "com.ubuntu.touch.AccountsService.Phone",
    default_service = "org.freedesktop.Accounts"
)]
pub trait Phone {
    /// Display names keyed by modem object path
    #[zbus(property)]
    fn sim_names(&self) -> Result<HashMap<String, String>>;
}
