/// Errors that stop account synthesis.
///
/// Only configuration mistakes end up here. Collaborator failures
/// (property service, AccountsService) are absorbed by discovery and
/// never surface as a `DiscoveryError`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// A synthesized identifier is longer than its ceiling allows
    #[error("{kind} '{value}' was too long ({len} > {limit} bytes)")]
    IdentifierTooLong {
        /// Which identifier overflowed (account name, modem name, D-Bus path)
        kind: IdentifierKind,
        /// The offending identifier
        value: String,
        /// Its length in bytes
        len: usize,
        /// The ceiling it exceeded
        limit: usize,
    },
}

/// Identifiers whose length is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// `ofono/ofono/<prefix><index>`
    AccountName,
    /// `/<prefix><index>`
    ModemName,
    /// `/org/freedesktop/Accounts/User<uid>`
    DbusPath,
}

impl IdentifierKind {
    /// Maximum length, in bytes, of an identifier of this kind.
    pub const fn limit(self) -> usize {
        match self {
            Self::AccountName => 80,
            Self::ModemName => 40,
            Self::DbusPath => 80,
        }
    }

    /// Rejects `value` when it exceeds this kind's ceiling.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::IdentifierTooLong` if `value` is too long.
    pub fn check(self, value: &str) -> Result<(), DiscoveryError> {
        let len = value.len();
        if len > self.limit() {
            return Err(DiscoveryError::IdentifierTooLong {
                kind: self,
                value: value.to_string(),
                len,
                limit: self.limit(),
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountName => write!(f, "Account name"),
            Self::ModemName => write!(f, "Modem name"),
            Self::DbusPath => write!(f, "D-Bus path"),
        }
    }
}
