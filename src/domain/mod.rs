//! Domain Layer
//!
//! The core of user-cleanup - backend resolution and the safety gate,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (AccountId)
//! - `services/` - Domain services (BackendResolver, ExistenceGuard)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
