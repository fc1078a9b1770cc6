//! Permission checking against the static role table.

use std::str::FromStr;
use std::sync::OnceLock;

use tracing::warn;

use storynest_core::AppError;
use storynest_entity::admin::{AdminIdentity, AdminRole};

use super::capability::Capability;
use super::policies::RolePermissions;

/// Process-wide capability table, built on first use and never mutated.
fn table() -> &'static RolePermissions {
    static TABLE: OnceLock<RolePermissions> = OnceLock::new();
    TABLE.get_or_init(RolePermissions::new)
}

/// Checks whether the given role has the specified capability.
pub fn has_permission(role: AdminRole, capability: Capability) -> bool {
    table().has_permission(&role, &capability)
}

/// Answers permission questions for the current session.
///
/// The checker never stores a role: the effective role is derived fresh on
/// every call from the identity handed in, so a logout or role change is
/// reflected immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionChecker;

impl PermissionChecker {
    /// Creates a checker over the default table.
    pub fn new() -> Self {
        Self
    }

    /// The effective role for an optional identity.
    ///
    /// With no identity loaded the caller is treated as the most
    /// restrictive role, `support`, rather than failing. An identity with
    /// the admin flag maps to `admin`; the flag is all the session record
    /// carries, finer roles come from the admin-users endpoints.
    pub fn effective_role(&self, identity: Option<&AdminIdentity>) -> AdminRole {
        match identity {
            Some(user) if user.is_admin => AdminRole::Admin,
            _ => AdminRole::Support,
        }
    }

    /// Parse an externally supplied role string, falling back to the most
    /// restrictive role when it matches none of the known four.
    pub fn role_or_most_restrictive(&self, role: &str) -> AdminRole {
        AdminRole::from_str(role).unwrap_or_else(|_| {
            warn!(role, "Unknown admin role, treating as support");
            AdminRole::Support
        })
    }

    /// Whether the identity's effective role has the capability.
    pub fn can(&self, identity: Option<&AdminIdentity>, capability: Capability) -> bool {
        has_permission(self.effective_role(identity), capability)
    }

    /// Returns `Ok(())` if allowed, or `Err(AppError::Authorization)` if denied.
    pub fn require(
        &self,
        identity: Option<&AdminIdentity>,
        capability: Capability,
    ) -> Result<(), AppError> {
        let role = self.effective_role(identity);
        if has_permission(role, capability) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{capability}'"
            )))
        }
    }

    /// Whether the identity's effective role is the owner.
    pub fn is_owner(&self, identity: Option<&AdminIdentity>) -> bool {
        self.effective_role(identity).is_owner()
    }

    /// Whether the identity's effective role is admin or owner.
    pub fn is_admin(&self, identity: Option<&AdminIdentity>) -> bool {
        self.effective_role(identity).is_admin_or_owner()
    }

    /// Whether the identity's effective role is content manager or higher.
    pub fn is_content_manager(&self, identity: Option<&AdminIdentity>) -> bool {
        self.effective_role(identity).is_content_manager_or_above()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(is_admin: bool) -> AdminIdentity {
        AdminIdentity {
            id: "u-1".to_string(),
            email: "admin@storynest.test".to_string(),
            first_name: "Avery".to_string(),
            last_name: "Quinn".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_spot_checks_match_table() {
        assert!(!has_permission(AdminRole::Support, Capability::DeleteBooks));
        assert!(has_permission(AdminRole::Owner, Capability::DeleteBooks));
        assert!(has_permission(
            AdminRole::ContentManager,
            Capability::CreateBooks
        ));
        assert!(!has_permission(
            AdminRole::ContentManager,
            Capability::DeleteBooks
        ));
    }

    #[test]
    fn test_no_identity_is_most_restrictive() {
        let checker = PermissionChecker::new();
        assert_eq!(checker.effective_role(None), AdminRole::Support);
        assert!(!checker.can(None, Capability::DeleteBooks));
        assert!(checker.can(None, Capability::ViewBooks));
    }

    #[test]
    fn test_admin_flag_maps_to_admin_role() {
        let checker = PermissionChecker::new();
        let admin = identity(true);
        assert_eq!(checker.effective_role(Some(&admin)), AdminRole::Admin);
        assert!(checker.can(Some(&admin), Capability::DeleteBooks));
        assert!(checker.is_admin(Some(&admin)));
        assert!(!checker.is_owner(Some(&admin)));

        let plain = identity(false);
        assert_eq!(checker.effective_role(Some(&plain)), AdminRole::Support);
        assert!(!checker.is_content_manager(Some(&plain)));
    }

    #[test]
    fn test_unknown_role_falls_back_to_support() {
        let checker = PermissionChecker::new();
        assert_eq!(
            checker.role_or_most_restrictive("galactic_overlord"),
            AdminRole::Support
        );
        assert_eq!(
            checker.role_or_most_restrictive("content_manager"),
            AdminRole::ContentManager
        );
    }

    #[test]
    fn test_require_denies_with_authorization_error() {
        let checker = PermissionChecker::new();
        let err = checker
            .require(None, Capability::DeleteBooks)
            .expect_err("support must not delete books");
        assert_eq!(err.kind, storynest_core::error::ErrorKind::Authorization);
        checker
            .require(Some(&identity(true)), Capability::DeleteBooks)
            .expect("admin may delete books");
    }
}
