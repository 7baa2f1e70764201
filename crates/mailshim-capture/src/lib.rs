//! Identity/time capabilities and entry construction for mailshim.

mod builder;
mod clock;
mod identity;

pub use builder::EntryBuilder;
pub use clock::{Clock, SystemClock};
pub use identity::{Identity, IdentitySource, OsIdentity};
