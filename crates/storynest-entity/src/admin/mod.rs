//! Admin-portal domain entities.

pub mod identity;
pub mod model;
pub mod role;

pub use identity::AdminIdentity;
pub use model::{AdminUserAccount, CreateAdminUserRequest, UpdateAdminUserRoleRequest};
pub use role::AdminRole;
