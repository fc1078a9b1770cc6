//! The authenticated admin's identity, as persisted in the session store.

use serde::{Deserialize, Serialize};

/// Identity fields of the signed-in admin.
///
/// This is exactly the record serialized under the `admin_user` storage key
/// and returned by the auth endpoints. The `id` stays a plain string: it is
/// opaque to the console and only ever echoed back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminIdentity {
    /// Remote user id.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account has admin privileges.
    pub is_admin: bool,
}

impl AdminIdentity {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
