/// AccountsService SIM display names
pub mod accounts_service;
/// Android system property queries
pub mod properties;

pub use accounts_service::{AccountsServiceDirectory, DirectoryError, SimNameSource, SimNames};
pub use properties::{GetpropQuery, PropertyError, PropertyQuery};
