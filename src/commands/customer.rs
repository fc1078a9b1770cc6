//! Customer management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::CustomerApi;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::customer::{Customer, UpdateCustomerRequest};

/// Arguments for customer commands
#[derive(Debug, Args)]
pub struct CustomerArgs {
    /// Customer subcommand
    #[command(subcommand)]
    pub command: CustomerCommand,
}

/// Customer subcommands
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// List customers
    List {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// Show one customer
    Get {
        /// Customer id
        id: String,
    },
    /// Show a customer's order history
    Orders {
        /// Customer id
        id: String,
    },
    /// Show a customer's saved personalizations
    Personalizations {
        /// Customer id
        id: String,
    },
    /// Update a customer from a JSON payload file
    Update {
        /// Customer id
        id: String,
        /// Path to the JSON payload
        file: std::path::PathBuf,
    },
    /// Delete a customer account
    Delete {
        /// Customer id
        id: String,
    },
}

/// Customer display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CustomerRow {
    /// Customer ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Active
    active: String,
    /// Registered
    created_at: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.clone(),
            name: customer.full_name(),
            email: customer.email.clone(),
            active: if customer.is_active {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            created_at: customer.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Execute customer commands
pub async fn execute(
    args: &CustomerArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = CustomerApi::new(ctx.client.clone());

    match &args.command {
        CustomerCommand::List {
            search,
            page,
            limit,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewUsers)?;
            let response = api
                .list(&PageRequest::new(*page, *limit), search.as_deref())
                .await?;
            let rows: Vec<CustomerRow> = response.items.iter().map(CustomerRow::from).collect();
            output::print_list(&rows, format);
        }
        CustomerCommand::Get { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewUsers)?;
            let customer = api.get(id).await?;
            output::print_item(&customer, format);
        }
        CustomerCommand::Orders { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewUsers)?;
            let orders = api.orders(id).await?;
            output::print_item(&orders, format);
        }
        CustomerCommand::Personalizations { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewUsers)?;
            let personalizations = api.personalizations(id).await?;
            output::print_item(&personalizations, format);
        }
        CustomerCommand::Update { id, file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditUsers)?;
            let request: UpdateCustomerRequest = super::read_json(file)?;
            let customer = api.update(id, &request).await?;
            output::print_success(&format!("Updated customer {}", customer.email));
        }
        CustomerCommand::Delete { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::DeleteUsers)?;
            api.delete(id).await?;
            output::print_success(&format!("Deleted customer {}", id));
        }
    }

    Ok(())
}
