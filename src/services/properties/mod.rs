/// Property query errors
mod error;
/// `getprop` backed property queries
mod getprop;
/// Property query trait
mod service;


pub use error::PropertyError;
pub use getprop::GetpropQuery;
pub use service::PropertyQuery;

/// Property naming the RIL library; empty when no modem stack is present.
pub const RILD_LIBPATH: &str = "rild.libpath";
/// Property holding the number of SIM slots.
pub const RIL_NUM_SLOTS: &str = "ril.num_slots";
