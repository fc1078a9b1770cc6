//! Sticker pack commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::StickerApi;
use storynest_client::endpoints::stickers::StickerListFilter;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::sticker::{CreateStickerRequest, Sticker, UpdateStickerRequest};

/// Arguments for sticker commands
#[derive(Debug, Args)]
pub struct StickerArgs {
    /// Sticker subcommand
    #[command(subcommand)]
    pub command: StickerCommand,
}

/// Sticker subcommands
#[derive(Debug, Subcommand)]
pub enum StickerCommand {
    /// List sticker packs
    List {
        /// Filter by pack type
        #[arg(long)]
        pack_type: Option<String>,
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// Show one sticker pack by slug
    Get {
        /// Sticker slug
        slug: String,
    },
    /// Create a sticker pack from a JSON payload file
    Create {
        /// Path to the JSON payload
        file: PathBuf,
    },
    /// Update a sticker pack from a JSON payload file
    Update {
        /// Sticker id
        id: String,
        /// Path to the JSON payload
        file: PathBuf,
    },
    /// Delete a sticker pack
    Delete {
        /// Sticker id
        id: String,
    },
    /// Upload a preview image
    UploadImage {
        /// Sticker id
        id: String,
        /// Image file
        file: PathBuf,
    },
}

/// Sticker display row for table output
#[derive(Debug, Serialize, Tabled)]
struct StickerRow {
    /// Sticker ID
    id: String,
    /// Slug
    slug: String,
    /// Title
    title: String,
    /// Pack type
    pack_type: String,
    /// Age range
    ages: String,
    /// Final price
    final_price: String,
}

impl From<&Sticker> for StickerRow {
    fn from(sticker: &Sticker) -> Self {
        Self {
            id: sticker.id.clone(),
            slug: sticker.slug.clone(),
            title: sticker.title.clone(),
            pack_type: sticker.pack_type.clone(),
            ages: format!("{}-{}", sticker.age_min, sticker.age_max),
            final_price: format!("{:.2}", sticker.final_price),
        }
    }
}

/// Execute sticker commands
pub async fn execute(
    args: &StickerArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = StickerApi::new(ctx.client.clone());

    match &args.command {
        StickerCommand::List {
            pack_type,
            page,
            limit,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewStickers)?;
            let filter = StickerListFilter {
                pack_type: pack_type.clone(),
                ..Default::default()
            };
            let response = api.list(&PageRequest::new(*page, *limit), &filter).await?;
            let rows: Vec<StickerRow> = response.items.iter().map(StickerRow::from).collect();
            output::print_list(&rows, format);
        }
        StickerCommand::Get { slug } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewStickers)?;
            let sticker = api.get_by_slug(slug).await?;
            output::print_item(&sticker, format);
        }
        StickerCommand::Create { file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::CreateStickers)?;
            let request: CreateStickerRequest = super::read_json(file)?;
            let sticker = api.create(&request).await?;
            output::print_success(&format!("Created sticker pack '{}'", sticker.title));
        }
        StickerCommand::Update { id, file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditStickers)?;
            let request: UpdateStickerRequest = super::read_json(file)?;
            let sticker = api.update(id, &request).await?;
            output::print_success(&format!("Updated sticker pack '{}'", sticker.title));
        }
        StickerCommand::Delete { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::DeleteStickers)?;
            api.delete(id).await?;
            output::print_success(&format!("Deleted sticker pack {}", id));
        }
        StickerCommand::UploadImage { id, file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditStickers)?;
            api.upload_image(id, file).await?;
            output::print_success(&format!("Uploaded preview image for sticker pack {}", id));
        }
    }

    Ok(())
}
