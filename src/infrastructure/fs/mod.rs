//! File system implementations
//!
//! Concrete implementations of the Storage and MountProvider ports.

mod local;
mod mounts;

pub use local::LocalStorage;
pub use mounts::DataDirMounts;
