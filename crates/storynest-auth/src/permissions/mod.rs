//! Role-based permission model.

pub mod capability;
pub mod checker;
pub mod policies;

pub use capability::Capability;
pub use checker::{PermissionChecker, has_permission};
pub use policies::RolePermissions;
