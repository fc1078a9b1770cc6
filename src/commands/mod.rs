//! Console command definitions and dispatch.

pub mod admin_user;
pub mod book;
pub mod customer;
pub mod delivery;
pub mod login;
pub mod logout;
pub mod order;
pub mod permissions;
pub mod sticker;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use storynest_auth::{PermissionChecker, SessionStore};
use storynest_client::ApiClient;
use storynest_core::config::AppConfig;
use storynest_core::error::AppError;
use storynest_store::FileStore;

/// Storynest — admin console for the personalized-book platform
#[derive(Debug, Parser)]
#[command(name = "storynest-admin", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in to the admin API
    Login(login::LoginArgs),
    /// Sign out and clear the stored session
    Logout,
    /// Show the current session
    Whoami,
    /// Inspect the role permission table
    Permissions(permissions::PermissionsArgs),
    /// Book catalog management
    Book(book::BookArgs),
    /// Sticker pack management
    Sticker(sticker::StickerArgs),
    /// Order management
    Order(order::OrderArgs),
    /// Customer management
    Customer(customer::CustomerArgs),
    /// Admin account management
    AdminUser(admin_user::AdminUserArgs),
    /// Delivery type management
    Delivery(delivery::DeliveryArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => login::execute(args, &self.config).await,
            Commands::Logout => logout::execute(&self.config).await,
            Commands::Whoami => whoami::execute(&self.config, self.format).await,
            Commands::Permissions(args) => {
                permissions::execute(args, &self.config, self.format).await
            }
            Commands::Book(args) => book::execute(args, &self.config, self.format).await,
            Commands::Sticker(args) => sticker::execute(args, &self.config, self.format).await,
            Commands::Order(args) => order::execute(args, &self.config, self.format).await,
            Commands::Customer(args) => customer::execute(args, &self.config, self.format).await,
            Commands::AdminUser(args) => {
                admin_user::execute(args, &self.config, self.format).await
            }
            Commands::Delivery(args) => delivery::execute(args, &self.config, self.format).await,
        }
    }
}

/// Shared state every command needs: config, the restored session, the API
/// client, and the permission checker.
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub client: Arc<ApiClient>,
    pub checker: PermissionChecker,
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: build the session store and API client, restoring any persisted
/// session first.
pub fn build_context(config_path: &str) -> Result<AppContext, AppError> {
    let config = load_config(config_path)?;
    let store = FileStore::open(&config.session.storage_path)?;
    let session = Arc::new(SessionStore::new(Arc::new(store)));
    session.initialize_from_storage()?;
    let client = Arc::new(ApiClient::new(&config.api, session.clone())?);
    Ok(AppContext {
        session,
        client,
        checker: PermissionChecker::new(),
    })
}

/// Helper: parse a JSON request payload from a file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::validation(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::validation(format!("Invalid JSON in {}: {}", path.display(), e)))
}

impl AppContext {
    /// Fail with an authentication error unless a session is established.
    pub fn require_session(&self) -> Result<(), AppError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::authentication(
                "Not signed in. Run `storynest-admin login` first.",
            ))
        }
    }
}
