//! Account manager port - the registered user backends
//!
//! The account system owns the backends; the cleanup pipeline only reads
//! the registered set and asks whether an account is still known.

use crate::domain::value_objects::AccountId;

/// A registered source of user accounts
///
/// Implementations:
/// - `ListBackend` - accounts listed inline in the config
/// - `PasswdFileBackend` - accounts read from a passwd-style file
pub trait UserBackend {
    /// Human readable backend name, if the backend has one
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Structural name of the implementation, used when there is no display name
    fn type_name(&self) -> &str;

    /// Check whether the backend knows the account
    fn user_exists(&self, account: &AccountId) -> bool;
}

/// Name used to select a backend with `--user-backend`.
pub fn backend_name(backend: &dyn UserBackend) -> &str {
    backend
        .display_name()
        .unwrap_or_else(|| backend.type_name())
}

/// Last path segment of a type's name, e.g. `PasswdFileBackend`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Abstract account manager
pub trait AccountManager {
    /// Check whether any registered backend still knows the account
    fn user_exists(&self, account: &AccountId) -> bool;

    /// All registered backends, in registration order
    fn backends(&self) -> &[Box<dyn UserBackend>];
}
