//! Order management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::OrderApi;
use storynest_client::endpoints::orders::OrderListFilter;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::order::{Order, OrderStatus, PaymentStatus, UpdateOrderStatusRequest};

/// Arguments for order commands
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Order subcommand
    #[command(subcommand)]
    pub command: OrderCommand,
}

/// Order subcommands
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List orders
    List {
        /// Filter by fulfillment status
        #[arg(long)]
        status: Option<OrderStatus>,
        /// Filter by payment status
        #[arg(long)]
        payment_status: Option<PaymentStatus>,
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
    /// Show one order
    Get {
        /// Order number
        order_number: String,
    },
    /// Update an order's fulfillment status
    SetStatus {
        /// Order number
        order_number: String,
        /// New status
        status: OrderStatus,
        /// Carrier tracking number
        #[arg(long)]
        tracking: Option<String>,
        /// Admin note
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Order display row for table output
#[derive(Debug, Serialize, Tabled)]
struct OrderRow {
    /// Order number
    order_number: String,
    /// Customer
    customer: String,
    /// Status
    status: String,
    /// Payment
    payment: String,
    /// Total
    total: String,
    /// Placed at
    created_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            customer: order
                .user
                .as_ref()
                .map(|u| u.full_name.clone())
                .unwrap_or_default(),
            status: order.status.to_string(),
            payment: order.payment_status.to_string(),
            total: format!("{:.2} {}", order.total, order.currency_code),
            created_at: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute order commands
pub async fn execute(
    args: &OrderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = OrderApi::new(ctx.client.clone());

    match &args.command {
        OrderCommand::List {
            status,
            payment_status,
            search,
            page,
            limit,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewOrders)?;
            let filter = OrderListFilter {
                status: *status,
                payment_status: *payment_status,
                search: search.clone(),
            };
            let response = api.list(&PageRequest::new(*page, *limit), &filter).await?;
            let rows: Vec<OrderRow> = response.items.iter().map(OrderRow::from).collect();
            output::print_list(&rows, format);
        }
        OrderCommand::Get { order_number } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewOrders)?;
            let order = api.get(order_number).await?;
            output::print_item(&order, format);
        }
        OrderCommand::SetStatus {
            order_number,
            status,
            tracking,
            notes,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::UpdateOrderStatus)?;
            let request = UpdateOrderStatusRequest {
                status: *status,
                tracking_number: tracking.clone(),
                notes: notes.clone(),
            };
            let order = api.update_status(order_number, &request).await?;
            output::print_success(&format!(
                "Order {} is now {}",
                order.order_number, order.status
            ));
        }
    }

    Ok(())
}
