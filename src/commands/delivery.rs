//! Delivery type management commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::DeliveryTypeApi;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::delivery::{
    CreateDeliveryTypeRequest, DeliveryType, UpdateDeliveryTypeRequest,
};

/// Arguments for delivery commands
#[derive(Debug, Args)]
pub struct DeliveryArgs {
    /// Delivery subcommand
    #[command(subcommand)]
    pub command: DeliveryCommand,
}

/// Delivery subcommands
#[derive(Debug, Subcommand)]
pub enum DeliveryCommand {
    /// List delivery types
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// Show one delivery type
    Get {
        /// Delivery type id
        id: String,
    },
    /// Create a delivery type from a JSON payload file
    Create {
        /// Path to the JSON payload
        file: PathBuf,
    },
    /// Update a delivery type from a JSON payload file
    Update {
        /// Delivery type id
        id: String,
        /// Path to the JSON payload
        file: PathBuf,
    },
    /// Delete a delivery type
    Delete {
        /// Delivery type id
        id: String,
    },
}

/// Delivery type display row for table output
#[derive(Debug, Serialize, Tabled)]
struct DeliveryRow {
    /// Delivery type ID
    id: String,
    /// Name
    name: String,
    /// Price
    price: String,
    /// Estimated days
    estimated_days: String,
    /// Active
    active: String,
}

impl From<&DeliveryType> for DeliveryRow {
    fn from(delivery: &DeliveryType) -> Self {
        Self {
            id: delivery.id.clone(),
            name: delivery.name.clone(),
            price: format!("{:.2}", delivery.price),
            estimated_days: delivery
                .estimated_days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            active: if delivery.is_active {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        }
    }
}

/// Execute delivery commands
pub async fn execute(
    args: &DeliveryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = DeliveryTypeApi::new(ctx.client.clone());

    match &args.command {
        DeliveryCommand::List { page, limit } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewSettings)?;
            let response = api.list(&PageRequest::new(*page, *limit)).await?;
            let rows: Vec<DeliveryRow> = response.items.iter().map(DeliveryRow::from).collect();
            output::print_list(&rows, format);
        }
        DeliveryCommand::Get { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewSettings)?;
            let delivery = api.get(id).await?;
            output::print_item(&delivery, format);
        }
        DeliveryCommand::Create { file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditSettings)?;
            let request: CreateDeliveryTypeRequest = super::read_json(file)?;
            let delivery = api.create(&request).await?;
            output::print_success(&format!("Created delivery type '{}'", delivery.name));
        }
        DeliveryCommand::Update { id, file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditSettings)?;
            let request: UpdateDeliveryTypeRequest = super::read_json(file)?;
            let delivery = api.update(id, &request).await?;
            output::print_success(&format!("Updated delivery type '{}'", delivery.name));
        }
        DeliveryCommand::Delete { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditSettings)?;
            api.delete(id).await?;
            output::print_success(&format!("Deleted delivery type {}", id));
        }
    }

    Ok(())
}
