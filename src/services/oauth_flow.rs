//! OAuth Flow Runner for repo-ready.
//!
//! Opens the browser to GitHub's authorization page, runs a single-use local
//! callback listener, exchanges the authorization code for an access token,
//! and hands the token to the Credential Store. The listener lives exactly as
//! long as the pending result and is torn down once, on success, failure, or
//! expiry.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use colored::Colorize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::services::credential_store::{CredentialStore, CredentialStoreTrait};
use crate::types::errors::AuthError;
use crate::types::github::AccessTokenResponse;

pub const LOCAL_SERVER_PORT: u16 = 3003;
const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const OAUTH_SCOPES: &str = "repo,user";

/// How long an unanswered browser round-trip may stay pending before the
/// flow is rejected.
const LOGIN_TIMEOUT_SECS: u64 = 300;

/// OAuth application settings, normally read from the environment.
#[derive(Debug, Clone)]
pub struct OAuthOptions {
    pub client_id: String,
    pub client_secret: String,
    /// Local callback port. The registered redirect URI uses the fixed
    /// production port; tests bind port 0.
    pub port: u16,
    pub authorize_url: String,
    pub token_url: String,
    pub timeout_secs: u64,
}

impl OAuthOptions {
    /// Reads `GITHUB_CLIENT_ID` / `GITHUB_CLIENT_SECRET`, failing fast when
    /// either is missing or empty.
    pub fn from_env() -> Result<Self, AuthError> {
        let client_id = env::var("GITHUB_CLIENT_ID").ok().filter(|v| !v.is_empty());
        let client_secret = env::var("GITHUB_CLIENT_SECRET")
            .ok()
            .filter(|v| !v.is_empty());

        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Self::new(client_id, client_secret)),
            _ => Err(AuthError::MissingCredentials),
        }
    }

    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            port: LOCAL_SERVER_PORT,
            authorize_url: GITHUB_AUTHORIZE_URL.to_string(),
            token_url: GITHUB_TOKEN_URL.to_string(),
            timeout_secs: LOGIN_TIMEOUT_SECS,
        }
    }

    fn redirect_uri(&self, port: u16) -> String {
        format!("http://localhost:{}/callback", port)
    }

    /// Builds the browser authorization URL for the given bound port and
    /// CSRF state value.
    pub fn build_authorize_url(&self, port: u16, state: &str) -> String {
        format!(
            "{}?client_id={}&scope={}&redirect_uri={}&state={}",
            self.authorize_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(OAUTH_SCOPES),
            urlencoding::encode(&self.redirect_uri(port)),
            urlencoding::encode(state),
        )
    }
}

/// A login flow whose callback listener is up and waiting.
pub struct PendingLogin {
    /// URL the user's browser must visit.
    pub auth_url: String,
    /// Port the listener actually bound (differs from the configured port
    /// only when that port was 0).
    pub port: u16,
    timeout_secs: u64,
    result_rx: oneshot::Receiver<Result<String, AuthError>>,
    server: JoinHandle<()>,
}

impl PendingLogin {
    /// Waits for the callback and resolves the flow with the access token.
    ///
    /// The listener task is aborted on every exit path, so the port is
    /// released exactly once whether the flow succeeds, fails, or expires.
    pub async fn finish(self) -> Result<String, AuthError> {
        let outcome = tokio::time::timeout(Duration::from_secs(self.timeout_secs), self.result_rx)
            .await;
        self.server.abort();

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(AuthError::ListenerError(
                "callback handler dropped".to_string(),
            )),
            Err(_) => Err(AuthError::Timeout(self.timeout_secs)),
        }
    }
}

/// Binds the callback listener and returns the pending flow.
///
/// Only one flow may be in flight per process; the fixed port enforces that.
pub async fn start_login(
    opts: OAuthOptions,
    store: Arc<CredentialStore>,
) -> Result<PendingLogin, AuthError> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", opts.port))
        .await
        .map_err(|e| AuthError::ListenerError(e.to_string()))?;
    let port = listener
        .local_addr()
        .map_err(|e| AuthError::ListenerError(e.to_string()))?
        .port();

    let state = uuid::Uuid::new_v4().to_string();
    let auth_url = opts.build_authorize_url(port, &state);
    let timeout_secs = opts.timeout_secs;

    let (result_tx, result_rx) = oneshot::channel::<Result<String, AuthError>>();
    let result_tx = Arc::new(tokio::sync::Mutex::new(Some(result_tx)));

    let app = Router::new().route(
        "/callback",
        get({
            let opts = Arc::new(opts);
            let expected_state = Arc::new(state);

            move |Query(params): Query<HashMap<String, String>>| {
                let opts = opts.clone();
                let expected_state = expected_state.clone();
                let store = store.clone();
                let result_tx = result_tx.clone();

                async move {
                    let Some(tx) = result_tx.lock().await.take() else {
                        return (
                            StatusCode::GONE,
                            Html("<h1>This login flow has already completed.</h1>".to_string()),
                        );
                    };

                    let result =
                        handle_callback(&params, &opts, expected_state.as_str(), &store).await;
                    let response = match &result {
                        Ok(_) => (
                            StatusCode::OK,
                            Html(
                                "<h1>Authentication successful! You can close this tab.</h1>\
                                 <script>window.close();</script>"
                                    .to_string(),
                            ),
                        ),
                        Err(AuthError::NoAuthorizationCode) => (
                            StatusCode::BAD_REQUEST,
                            Html("<h1>Authentication failed: No code received.</h1>".to_string()),
                        ),
                        Err(e) => (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Html(format!("<h1>Authentication failed: {}</h1>", e)),
                        ),
                    };

                    let _ = tx.send(result);
                    response
                }
            }
        }),
    );

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(PendingLogin {
        auth_url,
        port,
        timeout_secs,
        result_rx,
        server,
    })
}

/// Runs the whole flow: listener up, browser opened, token exchanged and
/// stored.
///
/// A browser that refuses to open is reported but not fatal; the printed
/// URL lets the user navigate manually.
pub async fn login(opts: OAuthOptions, store: Arc<CredentialStore>) -> Result<String, AuthError> {
    let pending = start_login(opts, store).await?;

    println!(
        "{}",
        "💡 Opening your browser to GitHub for authentication...".blue()
    );
    if let Err(e) = webbrowser::open(&pending.auth_url) {
        eprintln!(
            "{}",
            format!(
                "🚫 Failed to open browser: {}. Visit this URL to continue:\n   {}",
                e, pending.auth_url
            )
            .red()
        );
    }

    pending.finish().await
}

async fn handle_callback(
    params: &HashMap<String, String>,
    opts: &OAuthOptions,
    expected_state: &str,
    store: &CredentialStore,
) -> Result<String, AuthError> {
    let code = params
        .get("code")
        .filter(|c| !c.is_empty())
        .ok_or(AuthError::NoAuthorizationCode)?;

    if params.get("state").map(String::as_str) != Some(expected_state) {
        return Err(AuthError::ExchangeRejected(
            "state parameter mismatch".to_string(),
        ));
    }

    let token = exchange_code_for_token(opts, code).await?;
    store.store(&token)?;
    Ok(token)
}

/// Server-to-server exchange of the authorization code for an access token.
///
/// GitHub signals a rejected code through the body's `error` fields, not the
/// HTTP status.
async fn exchange_code_for_token(opts: &OAuthOptions, code: &str) -> Result<String, AuthError> {
    let response = reqwest::Client::new()
        .post(&opts.token_url)
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": opts.client_id,
            "client_secret": opts.client_secret,
            "code": code,
        }))
        .send()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    let ok = response.status().is_success();
    let data: AccessTokenResponse = response
        .json()
        .await
        .map_err(|e| AuthError::NetworkError(e.to_string()))?;

    match data.access_token {
        Some(token) if ok => Ok(token),
        _ => Err(AuthError::ExchangeRejected(
            data.error_description
                .or(data.error)
                .unwrap_or_else(|| "Failed to get access token from GitHub.".to_string()),
        )),
    }
}
