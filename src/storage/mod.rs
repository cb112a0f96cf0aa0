//! Read-only account storage provider.
//!
//! The host account manager talks to storage providers through the
//! [`AccountStorage`] trait. [`OfonoAccountStorage`] serves the accounts
//! produced by discovery and refuses every write.

/// Storage provider errors
mod error;
/// Account restriction flags
mod flags;
/// Ofono modem account provider
mod ofono;
/// Storage provider and host traits
mod service;

#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use flags::RestrictionFlags;
pub use ofono::{OFONO_PROVIDER_INFO, OfonoAccountStorage};
pub use service::{AccountManager, AccountStorage, PRIORITY_DEFAULT, ProviderInfo};
