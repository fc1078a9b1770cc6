//! Admin account management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::AdminUserApi;
use storynest_client::endpoints::admin_users::AdminUserSort;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::admin::{
    AdminRole, AdminUserAccount, CreateAdminUserRequest, UpdateAdminUserRoleRequest,
};

/// Arguments for admin-user commands
#[derive(Debug, Args)]
pub struct AdminUserArgs {
    /// Admin-user subcommand
    #[command(subcommand)]
    pub command: AdminUserCommand,
}

/// Admin-user subcommands
#[derive(Debug, Subcommand)]
pub enum AdminUserCommand {
    /// List admin accounts
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// Show one admin account
    Get {
        /// Admin account id
        id: String,
    },
    /// Show the admin account behind the current session
    Me,
    /// Create an admin account
    Create {
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// Initial password
        #[arg(long)]
        password: String,
        /// Role to assign
        #[arg(long, default_value = "support")]
        role: AdminRole,
    },
    /// Change an admin account's role
    SetRole {
        /// Admin account id
        id: String,
        /// New role
        role: AdminRole,
    },
    /// Flip an admin account between active and suspended
    ToggleStatus {
        /// Admin account id
        id: String,
    },
    /// Delete an admin account
    Delete {
        /// Admin account id
        id: String,
    },
}

/// Admin account display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AdminUserRow {
    /// Account ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Active
    active: String,
    /// Last login
    last_login: String,
}

impl From<&AdminUserAccount> for AdminUserRow {
    fn from(account: &AdminUserAccount) -> Self {
        Self {
            id: account.id.clone(),
            name: format!("{} {}", account.first_name, account.last_name),
            email: account.email.clone(),
            role: account.role.display_name().to_string(),
            active: if account.is_active {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            last_login: account
                .last_login
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string()),
        }
    }
}

/// Execute admin-user commands
pub async fn execute(
    args: &AdminUserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = AdminUserApi::new(ctx.client.clone());

    match &args.command {
        AdminUserCommand::List { page, limit } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewAdminUsers)?;
            let response = api
                .list(&PageRequest::new(*page, *limit), &AdminUserSort::default())
                .await?;
            let rows: Vec<AdminUserRow> = response.items.iter().map(AdminUserRow::from).collect();
            output::print_list(&rows, format);
        }
        AdminUserCommand::Get { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewAdminUsers)?;
            let account = api.get(id).await?;
            output::print_item(&account, format);
        }
        AdminUserCommand::Me => {
            let account = api.me().await?;
            output::print_item(&account, format);
        }
        AdminUserCommand::Create {
            first_name,
            last_name,
            email,
            password,
            role,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::CreateAdminUsers)?;
            let request = CreateAdminUserRequest {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                email: email.clone(),
                password: password.clone(),
                role: *role,
            };
            let account = api.create(&request).await?;
            output::print_success(&format!(
                "Created admin account {} ({})",
                account.email,
                account.role.display_name()
            ));
        }
        AdminUserCommand::SetRole { id, role } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ManageRoles)?;
            let account = api
                .update_role(id, &UpdateAdminUserRoleRequest { role: *role })
                .await?;
            output::print_success(&format!(
                "{} is now {}",
                account.email,
                account.role.display_name()
            ));
        }
        AdminUserCommand::ToggleStatus { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditAdminUsers)?;
            let account = api.toggle_status(id).await?;
            let state = if account.is_active {
                "active"
            } else {
                "suspended"
            };
            output::print_success(&format!("{} is now {}", account.email, state));
        }
        AdminUserCommand::Delete { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::DeleteAdminUsers)?;
            api.delete(id).await?;
            output::print_success(&format!("Deleted admin account {}", id));
        }
    }

    Ok(())
}
