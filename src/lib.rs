//! ofono-accounts - Read-only telepathy account storage for RIL modems.
//!
//! On start-up the provider counts the modems exposed by the Android RIL
//! (via `getprop`), reads the SIM display names the user assigned in
//! AccountsService, and synthesizes one `ofono/ofono/...` account per
//! modem. The host account manager then queries those accounts through
//! the [`storage::AccountStorage`] trait; every write is refused.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ofono_accounts::{config::DiscoveryConfig, storage::{AccountStorage, OfonoAccountStorage}};
//!
//! # async fn run() -> ofono_accounts::Result<()> {
//! let config = DiscoveryConfig::from_env();
//! let storage = OfonoAccountStorage::start(&config).await?;
//!
//! for account in storage.list() {
//!     println!("{account}");
//! }
//! # Ok(())
//! # }
//! ```

/// Discovery configuration from the environment and TOML files.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Modem discovery and account synthesis.
pub mod discovery;

/// External collaborators: system properties and AccountsService.
pub mod services;

/// Read-only account storage provider.
pub mod storage;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{OfonoError, Result};
