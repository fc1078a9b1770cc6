//! Integration tests for the role permission model.

use storynest_auth::{Capability, PermissionChecker, RolePermissions, has_permission};
use storynest_entity::admin::{AdminIdentity, AdminRole};

fn support_identity() -> AdminIdentity {
    AdminIdentity {
        id: "usr-200".to_string(),
        email: "helpdesk@storynest.test".to_string(),
        first_name: "Noa".to_string(),
        last_name: "Petrov".to_string(),
        is_admin: false,
    }
}

#[test]
fn test_every_role_answers_every_capability() {
    // The grant table is total: no role/capability pair panics or is
    // left undefined.
    let table = RolePermissions::new();
    for role in AdminRole::ALL {
        for capability in Capability::ALL {
            let granted = has_permission(role, capability);
            assert_eq!(granted, table.has_permission(&role, &capability));
        }
    }
}

#[test]
fn test_owner_is_omnipotent() {
    for capability in Capability::ALL {
        assert!(has_permission(AdminRole::Owner, capability));
    }
}

#[test]
fn test_admin_cannot_touch_admin_accounts_or_settings() {
    let denied = [
        Capability::ViewAdminUsers,
        Capability::CreateAdminUsers,
        Capability::EditAdminUsers,
        Capability::DeleteAdminUsers,
        Capability::ManageRoles,
        Capability::EditSettings,
    ];
    for capability in Capability::ALL {
        let expected = !denied.contains(&capability);
        assert_eq!(
            has_permission(AdminRole::Admin, capability),
            expected,
            "admin grant for {capability:?}"
        );
    }
}

#[test]
fn test_content_manager_cannot_delete_or_run_orders() {
    assert!(has_permission(AdminRole::ContentManager, Capability::CreateBooks));
    assert!(has_permission(AdminRole::ContentManager, Capability::EditBooks));
    assert!(has_permission(AdminRole::ContentManager, Capability::ViewAnalytics));
    assert!(!has_permission(AdminRole::ContentManager, Capability::DeleteBooks));
    assert!(!has_permission(
        AdminRole::ContentManager,
        Capability::UpdateOrderStatus
    ));
    assert!(!has_permission(AdminRole::ContentManager, Capability::EditUsers));
}

#[test]
fn test_support_grants_are_exactly_the_frontline_set() {
    let granted = [
        Capability::ViewDashboard,
        Capability::ViewBooks,
        Capability::ViewStickers,
        Capability::ViewOrders,
        Capability::UpdateOrderStatus,
        Capability::ViewUsers,
    ];
    for capability in Capability::ALL {
        assert_eq!(
            has_permission(AdminRole::Support, capability),
            granted.contains(&capability),
            "support grant for {capability:?}"
        );
    }
}

#[test]
fn test_unknown_role_falls_back_to_support() {
    let checker = PermissionChecker::new();
    let role = checker.role_or_most_restrictive("superuser");
    assert_eq!(role, AdminRole::Support);
    assert!(!has_permission(role, Capability::DeleteBooks));
}

#[test]
fn test_checker_gates_by_effective_role() {
    let checker = PermissionChecker::new();
    let identity = support_identity();

    // Support can work the order queue but not reshape the catalog.
    assert!(checker.can(Some(&identity), Capability::UpdateOrderStatus));
    assert!(checker.require(Some(&identity), Capability::CreateBooks).is_err());

    // No identity at all gets the most restrictive role.
    assert_eq!(checker.effective_role(None), AdminRole::Support);
    assert!(checker.require(None, Capability::ViewAdminUsers).is_err());
}
