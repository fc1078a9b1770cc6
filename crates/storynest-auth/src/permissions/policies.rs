//! Role-to-capability mapping definitions.
//!
//! The table is pure, static configuration: it is built once per process and
//! never mutated. A capability missing from a role's set is denied.

use std::collections::{HashMap, HashSet};

use storynest_entity::admin::AdminRole;

use super::capability::Capability;

/// Defines the mapping from each role to its set of granted capabilities.
#[derive(Debug, Clone)]
pub struct RolePermissions {
    /// Role → set of granted capabilities.
    grants: HashMap<AdminRole, HashSet<Capability>>,
}

impl RolePermissions {
    /// Creates the default capability table.
    pub fn new() -> Self {
        let mut grants = HashMap::new();

        // Owner: everything.
        let owner: HashSet<Capability> = Capability::ALL.into_iter().collect();
        grants.insert(AdminRole::Owner, owner);

        // Admin: full operational access, but no admin-user management and
        // no settings edits.
        let admin: HashSet<Capability> = [
            Capability::ViewDashboard,
            Capability::ViewBooks,
            Capability::CreateBooks,
            Capability::EditBooks,
            Capability::DeleteBooks,
            Capability::ViewStickers,
            Capability::CreateStickers,
            Capability::EditStickers,
            Capability::DeleteStickers,
            Capability::ViewOrders,
            Capability::UpdateOrderStatus,
            Capability::CancelOrders,
            Capability::RefundOrders,
            Capability::ViewUsers,
            Capability::EditUsers,
            Capability::DeleteUsers,
            Capability::ViewSettings,
            Capability::ViewAnalytics,
            Capability::ExportData,
        ]
        .into_iter()
        .collect();
        grants.insert(AdminRole::Admin, admin);

        // Content manager: creates and edits catalog content, views orders
        // and analytics, but deletes nothing and mutates no orders.
        let content_manager: HashSet<Capability> = [
            Capability::ViewDashboard,
            Capability::ViewBooks,
            Capability::CreateBooks,
            Capability::EditBooks,
            Capability::ViewStickers,
            Capability::CreateStickers,
            Capability::EditStickers,
            Capability::ViewOrders,
            Capability::ViewUsers,
            Capability::ViewAnalytics,
        ]
        .into_iter()
        .collect();
        grants.insert(AdminRole::ContentManager, content_manager);

        // Support: view-mostly, plus order status updates to assist customers.
        let support: HashSet<Capability> = [
            Capability::ViewDashboard,
            Capability::ViewBooks,
            Capability::ViewStickers,
            Capability::ViewOrders,
            Capability::UpdateOrderStatus,
            Capability::ViewUsers,
        ]
        .into_iter()
        .collect();
        grants.insert(AdminRole::Support, support);

        Self { grants }
    }

    /// Checks whether the given role has the specified capability.
    pub fn has_permission(&self, role: &AdminRole, capability: &Capability) -> bool {
        self.grants
            .get(role)
            .map(|caps| caps.contains(capability))
            .unwrap_or(false)
    }

    /// Returns the set of capabilities granted to the given role.
    pub fn capabilities_for_role(&self, role: &AdminRole) -> HashSet<Capability> {
        self.grants.get(role).cloned().unwrap_or_default()
    }
}

impl Default for RolePermissions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        // Every (role, capability) pair resolves to a defined boolean.
        let table = RolePermissions::new();
        for role in AdminRole::ALL {
            for cap in Capability::ALL {
                let _ = table.has_permission(&role, &cap);
            }
        }
    }

    #[test]
    fn test_owner_has_everything() {
        let table = RolePermissions::new();
        for cap in Capability::ALL {
            assert!(
                table.has_permission(&AdminRole::Owner, &cap),
                "owner should have {cap}"
            );
        }
    }

    #[test]
    fn test_admin_lacks_admin_user_management() {
        let table = RolePermissions::new();
        for cap in [
            Capability::ViewAdminUsers,
            Capability::CreateAdminUsers,
            Capability::EditAdminUsers,
            Capability::DeleteAdminUsers,
            Capability::ManageRoles,
            Capability::EditSettings,
        ] {
            assert!(!table.has_permission(&AdminRole::Admin, &cap));
        }
        assert!(table.has_permission(&AdminRole::Admin, &Capability::DeleteBooks));
        assert!(table.has_permission(&AdminRole::Admin, &Capability::ViewSettings));
        assert!(table.has_permission(&AdminRole::Admin, &Capability::ExportData));
    }

    #[test]
    fn test_content_manager_creates_but_never_deletes() {
        let table = RolePermissions::new();
        assert!(table.has_permission(&AdminRole::ContentManager, &Capability::CreateBooks));
        assert!(table.has_permission(&AdminRole::ContentManager, &Capability::EditStickers));
        assert!(!table.has_permission(&AdminRole::ContentManager, &Capability::DeleteBooks));
        assert!(!table.has_permission(&AdminRole::ContentManager, &Capability::DeleteStickers));
        assert!(!table.has_permission(&AdminRole::ContentManager, &Capability::UpdateOrderStatus));
        assert!(!table.has_permission(&AdminRole::ContentManager, &Capability::ExportData));
        assert!(table.has_permission(&AdminRole::ContentManager, &Capability::ViewAnalytics));
    }

    #[test]
    fn test_support_views_and_updates_order_status() {
        let table = RolePermissions::new();
        assert!(table.has_permission(&AdminRole::Support, &Capability::ViewOrders));
        assert!(table.has_permission(&AdminRole::Support, &Capability::UpdateOrderStatus));
        assert!(!table.has_permission(&AdminRole::Support, &Capability::DeleteBooks));
        assert!(!table.has_permission(&AdminRole::Support, &Capability::CancelOrders));
        assert!(!table.has_permission(&AdminRole::Support, &Capability::ViewAnalytics));
    }

    #[test]
    fn test_capabilities_for_role_matches_grants() {
        let table = RolePermissions::new();
        assert_eq!(
            table.capabilities_for_role(&AdminRole::Owner).len(),
            Capability::ALL.len()
        );
        let support = table.capabilities_for_role(&AdminRole::Support);
        let expected: HashSet<Capability> = [
            Capability::ViewDashboard,
            Capability::ViewBooks,
            Capability::ViewStickers,
            Capability::ViewOrders,
            Capability::UpdateOrderStatus,
            Capability::ViewUsers,
        ]
        .into_iter()
        .collect();
        assert_eq!(support, expected);
        for role in AdminRole::ALL {
            let caps = table.capabilities_for_role(&role);
            for cap in Capability::ALL {
                assert_eq!(caps.contains(&cap), table.has_permission(&role, &cap));
            }
        }
    }
}
