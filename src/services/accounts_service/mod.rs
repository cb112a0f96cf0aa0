/// AccountsService backed SIM name lookups
mod directory;
/// SIM name lookup errors
mod error;
/// D-Bus proxy for the AccountsService phone extension
mod proxy;
/// SIM name source trait
mod service;


pub use directory::AccountsServiceDirectory;
pub use error::DirectoryError;
pub use proxy::PhoneProxy;
pub use service::{SimNameSource, SimNames};
