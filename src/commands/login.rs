//! `repo-ready login` — explicit OAuth trigger.

use colored::Colorize;

use crate::app::App;
use crate::services::credential_store::CredentialStoreTrait;
use crate::services::oauth_flow::{self, OAuthOptions};
use crate::types::errors::AuthError;

/// Runs the login command.
///
/// A stored token makes this a no-op with a message. Credentials are
/// checked before anything else so a misconfigured environment fails fast,
/// with no browser opened and no listener started.
pub async fn run(app: &App) -> Result<(), AuthError> {
    if app.credentials.retrieve()?.is_some() {
        println!("{}", "💡 You are already logged in to GitHub.".yellow());
        return Ok(());
    }

    let opts = OAuthOptions::from_env()?;
    oauth_flow::login(opts, app.credentials.clone()).await?;

    println!(
        "{}",
        "✅ Successfully logged in to GitHub! You can now run other commands.".green()
    );
    Ok(())
}
