//! Current-session inspection command.

use crate::output::{self, OutputFormat};
use storynest_core::error::AppError;

/// Execute the whoami command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;

    let Some(identity) = ctx.session.identity() else {
        output::print_warning("Not signed in");
        return Ok(());
    };

    let role = ctx.session.effective_role();
    match format {
        OutputFormat::Json => output::print_item(&identity, format),
        OutputFormat::Table => {
            output::print_kv("Name", &format!("{} {}", identity.first_name, identity.last_name));
            output::print_kv("Email", &identity.email);
            output::print_kv("User id", &identity.id);
            output::print_kv("Role", role.display_name());
        }
    }
    Ok(())
}
