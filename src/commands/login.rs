//! Sign-in command.

use clap::Args;
use dialoguer::{Input, Password};

use crate::output;
use storynest_client::AuthApi;
use storynest_client::endpoints::auth::LoginRequest;
use storynest_core::error::AppError;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login email (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, config_path: &str) -> Result<(), AppError> {
    let ctx = super::build_context(config_path)?;

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Failed to read email: {}", e)))?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))?;

    let auth = AuthApi::new(ctx.client.clone());
    let response = auth.login(&LoginRequest { email, password }).await?;

    let identity = response.identity();
    let name = format!("{} {}", identity.first_name, identity.last_name);
    ctx.session
        .set_auth(identity, &response.access_token, &response.refresh_token)?;

    output::print_success(&format!("Signed in as {}", name));
    Ok(())
}
