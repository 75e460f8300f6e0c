//! Account backends
//!
//! - `ListBackend` - accounts listed inline in the config
//! - `PasswdFileBackend` - accounts read from a passwd-style file
//! - `RegisteredAccounts` - the account manager over both

mod list;
mod passwd;
mod registered;

pub use list::ListBackend;
pub use passwd::PasswdFileBackend;
pub use registered::RegisteredAccounts;
