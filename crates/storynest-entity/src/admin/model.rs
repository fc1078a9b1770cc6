//! Admin-user management records (the admin-users CRUD screens).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::AdminRole;

/// An admin-portal account as returned by the admin-users endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserAccount {
    /// Admin account id.
    pub id: String,
    /// Backing platform user id.
    pub user_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: AdminRole,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Last successful login, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Display name of the admin who created this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}

/// Payload for creating a new admin account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminUserRequest {
    /// Given name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Role to assign.
    pub role: AdminRole,
}

/// Payload for changing an admin account's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminUserRoleRequest {
    /// The new role.
    pub role: AdminRole,
}
