//! OS-level interactions: environment snapshots and the user database.

pub mod env;
pub mod user;
