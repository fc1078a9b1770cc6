//! Book catalog commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use storynest_auth::Capability;
use storynest_client::BookApi;
use storynest_client::endpoints::books::BookListFilter;
use storynest_core::error::AppError;
use storynest_core::types::PageRequest;
use storynest_entity::book::{BookSummary, CreateBookRequest, UpdateBookRequest};

/// Arguments for book commands
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Book subcommand
    #[command(subcommand)]
    pub command: BookCommand,
}

/// Book subcommands
#[derive(Debug, Subcommand)]
pub enum BookCommand {
    /// List books
    List {
        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,
        /// Audience filter (boy, girl, everyone)
        #[arg(long)]
        ideal_for: Option<String>,
        /// Only featured books
        #[arg(long)]
        featured: bool,
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// Show one book
    Get {
        /// Book id
        id: String,
    },
    /// Create a book from a JSON payload file
    Create {
        /// Path to the JSON payload
        file: PathBuf,
        /// Cover image to upload with the book
        #[arg(long)]
        cover: Option<PathBuf>,
        /// Additional images to upload with the book
        #[arg(long)]
        image: Vec<PathBuf>,
    },
    /// Update a book from a JSON payload file
    Update {
        /// Book id
        id: String,
        /// Path to the JSON payload
        file: PathBuf,
    },
    /// Delete a book
    Delete {
        /// Book id
        id: String,
    },
    /// Upload an image for an existing book
    UploadImage {
        /// Book id
        id: String,
        /// Image file
        file: PathBuf,
        /// Image slot (cover, additional)
        #[arg(long, default_value = "additional")]
        image_type: String,
    },
}

/// Book display row for table output
#[derive(Debug, Serialize, Tabled)]
struct BookRow {
    /// Book ID
    id: String,
    /// Slug
    slug: String,
    /// Title
    title: String,
    /// Age range
    ages: String,
    /// Base price
    base_price: String,
    /// Final price
    final_price: String,
    /// Featured
    featured: String,
}

impl From<&BookSummary> for BookRow {
    fn from(book: &BookSummary) -> Self {
        Self {
            id: book.id.clone(),
            slug: book.slug.clone(),
            title: book.title.clone(),
            ages: format!("{}-{}", book.age_min, book.age_max),
            base_price: format!("{:.2}", book.base_price),
            final_price: format!("{:.2}", book.final_price),
            featured: if book.is_featured.unwrap_or(false) {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        }
    }
}

/// Execute book commands
pub async fn execute(
    args: &BookArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;
    ctx.require_session()?;
    let identity = ctx.session.identity();
    let api = BookApi::new(ctx.client.clone());

    match &args.command {
        BookCommand::List {
            search,
            ideal_for,
            featured,
            page,
            limit,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewBooks)?;
            let filter = BookListFilter {
                search: search.clone(),
                ideal_for: ideal_for.clone(),
                featured: featured.then_some(true),
                ..Default::default()
            };
            let response = api.list(&PageRequest::new(*page, *limit), &filter).await?;
            let rows: Vec<BookRow> = response.items.iter().map(BookRow::from).collect();
            output::print_list(&rows, format);
            output::print_kv(
                "Page",
                &format!(
                    "{}/{} ({} total)",
                    response.pagination.page,
                    response.pagination.total_pages,
                    response.pagination.total
                ),
            );
        }
        BookCommand::Get { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::ViewBooks)?;
            let book = api.get(id).await?;
            output::print_item(&book, format);
        }
        BookCommand::Create { file, cover, image } => {
            ctx.checker
                .require(identity.as_ref(), Capability::CreateBooks)?;
            let request: CreateBookRequest = super::read_json(file)?;
            let book = if cover.is_some() || !image.is_empty() {
                let images: Vec<&std::path::Path> = image.iter().map(|p| p.as_path()).collect();
                api.create_with_files(&request, cover.as_deref(), &images)
                    .await?
            } else {
                api.create(&request).await?
            };
            output::print_success(&format!("Created book '{}'", book.summary.title));
            output::print_item(&book, format);
        }
        BookCommand::Update { id, file } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditBooks)?;
            let request: UpdateBookRequest = super::read_json(file)?;
            let book = api.update(id, &request).await?;
            output::print_success(&format!("Updated book '{}'", book.summary.title));
        }
        BookCommand::Delete { id } => {
            ctx.checker
                .require(identity.as_ref(), Capability::DeleteBooks)?;
            api.delete(id).await?;
            output::print_success(&format!("Deleted book {}", id));
        }
        BookCommand::UploadImage {
            id,
            file,
            image_type,
        } => {
            ctx.checker
                .require(identity.as_ref(), Capability::EditBooks)?;
            api.upload_image(id, file, image_type).await?;
            output::print_success(&format!("Uploaded {} image for book {}", image_type, id));
        }
    }

    Ok(())
}
