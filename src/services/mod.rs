pub mod catalog;
pub mod content_fetcher;
pub mod credential_store;
pub mod git_setup;
pub mod github_client;
pub mod label_sync;
pub mod oauth_flow;
