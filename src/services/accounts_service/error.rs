/// Errors that can occur while fetching SIM display names
#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    /// The system bus could not be reached
    #[error("Failed to get system bus: {0}")]
    ConnectionFailed(#[source] zbus::Error),

    /// D-Bus communication error
    #[error("Failed to get SimNames property: {0}")]
    DbusError(#[from] zbus::Error),
}
