//! Permission table inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::{Capability, PermissionChecker, RolePermissions, has_permission};
use storynest_core::error::AppError;
use storynest_entity::admin::AdminRole;

/// Arguments for permission commands
#[derive(Debug, Args)]
pub struct PermissionsArgs {
    /// Permissions subcommand
    #[command(subcommand)]
    pub command: PermissionsCommand,
}

/// Permission subcommands
#[derive(Debug, Subcommand)]
pub enum PermissionsCommand {
    /// Show the full role/capability grant table
    Show,
    /// Describe the available roles
    Roles,
    /// Check whether a role has a capability
    Check {
        /// Role name (unknown names fall back to support)
        role: String,
        /// Capability name, e.g. viewBooks
        capability: String,
    },
}

/// One row of the grant table
#[derive(Debug, Serialize, Tabled)]
struct GrantRow {
    /// Capability
    capability: &'static str,
    /// Owner
    owner: &'static str,
    /// Admin
    admin: &'static str,
    /// Content manager
    content_manager: &'static str,
    /// Support
    support: &'static str,
}

/// One row of the role listing
#[derive(Debug, Serialize, Tabled)]
struct RoleRow {
    /// Role
    role: &'static str,
    /// Display name
    name: &'static str,
    /// Badge color
    badge: &'static str,
    /// Privilege level
    level: u8,
    /// Description
    description: &'static str,
}

fn mark(granted: bool) -> &'static str {
    if granted { "yes" } else { "-" }
}

/// Execute permission commands
pub async fn execute(
    args: &PermissionsArgs,
    _config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        PermissionsCommand::Show => {
            let table = RolePermissions::new();
            let owner = table.capabilities_for_role(&AdminRole::Owner);
            let admin = table.capabilities_for_role(&AdminRole::Admin);
            let content_manager = table.capabilities_for_role(&AdminRole::ContentManager);
            let support = table.capabilities_for_role(&AdminRole::Support);
            let rows: Vec<GrantRow> = Capability::ALL
                .iter()
                .map(|cap| GrantRow {
                    capability: cap.as_str(),
                    owner: mark(owner.contains(cap)),
                    admin: mark(admin.contains(cap)),
                    content_manager: mark(content_manager.contains(cap)),
                    support: mark(support.contains(cap)),
                })
                .collect();
            output::print_list(&rows, format);
        }
        PermissionsCommand::Roles => {
            let rows: Vec<RoleRow> = AdminRole::ALL
                .iter()
                .map(|role| RoleRow {
                    role: role.as_str(),
                    name: role.display_name(),
                    badge: role.badge_color(),
                    level: role.privilege_level(),
                    description: role.description(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        PermissionsCommand::Check { role, capability } => {
            // Unknown roles degrade to the least-privileged one.
            let role = PermissionChecker::new().role_or_most_restrictive(role);
            let capability: Capability = capability
                .parse()
                .map_err(|_| AppError::validation(format!("Unknown capability '{capability}'")))?;

            if has_permission(role, capability) {
                output::print_success(&format!(
                    "{} may {}",
                    role.display_name(),
                    capability.as_str()
                ));
            } else {
                output::print_warning(&format!(
                    "{} may not {}",
                    role.display_name(),
                    capability.as_str()
                ));
            }
        }
    }
    Ok(())
}
