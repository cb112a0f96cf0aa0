/// Errors returned to the host by storage operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The request cannot be honoured with the given arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorageError {
    /// Telepathy D-Bus error name the host should report for this error.
    pub fn dbus_name(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "org.freedesktop.Telepathy.Error.InvalidArgument",
        }
    }
}
