//! Sign-out command.

use crate::output;
use storynest_client::AuthApi;
use storynest_core::error::AppError;

/// Execute the logout command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;

    if !ctx.session.is_authenticated() {
        // Clearing an empty session is harmless; just say so.
        ctx.session.logout()?;
        output::print_warning("No session to clear");
        return Ok(());
    }

    // Best effort: invalidate the server side session, but always clear
    // local state even when the API call fails.
    let auth = AuthApi::new(ctx.client.clone());
    if let Err(e) = auth.logout().await {
        tracing::warn!(error = %e, "Server-side logout failed");
    }

    ctx.session.logout()?;
    output::print_success("Signed out");
    Ok(())
}
