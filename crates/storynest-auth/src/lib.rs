//! # storynest-auth
//!
//! Authorization and session state for the Storynest admin console.
//!
//! ## Modules
//!
//! - `permissions` — static role→capability table and permission checking
//! - `session` — authenticated-admin session lifecycle, persisted across
//!   restarts through a durable key/value store

pub mod permissions;
pub mod session;

pub use permissions::{Capability, PermissionChecker, RolePermissions, has_permission};
pub use session::{Session, SessionStore};
