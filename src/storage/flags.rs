//! Account storage restriction flags.

use bitflags::bitflags;

bitflags! {
    /// Aspects of an account the user interface must not let users change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RestrictionFlags: u32 {
        /// Account parameters are read-only.
        const CANNOT_SET_PARAMETERS = 0x00000001;
        /// The enabled state is read-only.
        const CANNOT_SET_ENABLED = 0x00000002;
        /// Presence cannot be changed.
        const CANNOT_SET_PRESENCE = 0x00000004;
        /// The service name is read-only.
        const CANNOT_SET_SERVICE = 0x00000008;
    }
}

impl RestrictionFlags {
    /// Every mutable aspect of the account is locked.
    pub const LOCKED: Self = Self::CANNOT_SET_PARAMETERS
        .union(Self::CANNOT_SET_ENABLED)
        .union(Self::CANNOT_SET_PRESENCE)
        .union(Self::CANNOT_SET_SERVICE);

    /// Answer for accounts the provider does not know: all bits set.
    pub const UNKNOWN: Self = Self::from_bits_retain(u32::MAX);
}
