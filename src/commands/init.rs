//! `repo-ready init` — interactive project setup.
//!
//! Prompts for categories and set IDs, ensures a Git repository exists, then
//! copies template/hook files and replaces GitHub labels. Per-file and
//! per-label errors are printed and skipped; the run is best-effort across
//! the whole selected set.

use std::env;
use std::error::Error;
use std::fmt;
use std::path::Path;

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use crate::app::App;
use crate::services::catalog::SourceCatalogTrait;
use crate::services::content_fetcher::ContentFetcher;
use crate::services::git_setup;
use crate::services::github_client::GitHubClient;
use crate::services::label_sync::LabelSynchronizer;
use crate::types::config::{LabelSet, TemplateSet, TemplateSources};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Templates,
    Hooks,
    Labels,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Templates => write!(f, "Templates (.github)"),
            Category::Hooks => write!(f, "Git Hooks (.githooks)"),
            Category::Labels => write!(f, "GitHub Labels"),
        }
    }
}

/// Runs the init command.
pub async fn run(app: &mut App) -> Result<(), Box<dyn Error>> {
    let sources = match app.catalog.load() {
        Ok(sources) => sources.clone(),
        Err(e) => {
            eprintln!(
                "{}",
                format!("🚫 Error loading template sources config: {}", e).red()
            );
            eprintln!(
                "{}",
                format!(
                    "Please ensure '{}' exists and is valid.",
                    app.catalog.catalog_path().display()
                )
                .red()
            );
            return Err(Box::new(e));
        }
    };

    if sources.is_empty() {
        println!(
            "{}",
            format!(
                "No remote template sources configured. Please add entries to {}.",
                app.catalog.catalog_path().display()
            )
            .yellow()
        );
        return Ok(());
    }

    let categories = select_categories(&sources)?;
    if categories.is_empty() {
        println!("{}", "No categories selected for setup. Exiting.".yellow());
        return Ok(());
    }

    // Initialize Git repository if not already initialized
    if let Err(e) = git_setup::ensure_git_repo() {
        eprintln!(
            "{}",
            format!("🚫 Failed to initialize Git repository: {}", e).red()
        );
    }

    let project_root = env::current_dir()?;

    for category in categories {
        match category {
            Category::Templates => {
                if let Some(set) = select_template_set(&sources.templates, category)? {
                    let client = authenticated_client(app).await?;
                    copy_file_set(&client, &set, &project_root, false).await;
                }
            }
            Category::Hooks => {
                if let Some(set) = select_template_set(&sources.hooks, category)? {
                    let client = authenticated_client(app).await?;
                    copy_file_set(&client, &set, &project_root, true).await;
                }
            }
            Category::Labels => {
                if let Some(set) = select_label_set(&sources.labels)? {
                    let client = authenticated_client(app).await?;
                    setup_labels(&client, &set, &app.catalog_base_dir()).await;
                }
            }
        }
    }

    println!();
    println!("{}", "🎉 All selected settings completed!".green());
    Ok(())
}

/// Token from the store, or a fresh OAuth flow when none is stored.
///
/// A failed login aborts the whole run; nothing else in the session can
/// work without a client.
async fn authenticated_client(app: &App) -> Result<GitHubClient, Box<dyn Error>> {
    match app.github_client().await {
        Ok(client) => Ok(client),
        Err(e) => {
            eprintln!(
                "{}",
                "🚫 GitHub login failed. Please try again or check your GitHub App credentials."
                    .red()
            );
            Err(Box::new(e))
        }
    }
}

/// Multi-select over the categories that have at least one configured set.
fn select_categories(sources: &TemplateSources) -> Result<Vec<Category>, Box<dyn Error>> {
    let mut available = Vec::new();
    if !sources.templates.is_empty() {
        available.push(Category::Templates);
    }
    if !sources.hooks.is_empty() {
        available.push(Category::Hooks);
    }
    if !sources.labels.is_empty() {
        available.push(Category::Labels);
    }

    let labels: Vec<String> = available.iter().map(Category::to_string).collect();
    let defaults = vec![true; available.len()];

    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Which categories would you like to set up?")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| available[i]).collect())
}

fn describe(id: &str, name: &str, description: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!("{} | {} | {} ({})", id, name, description, lang.to_uppercase()),
        None => format!("{} | {} | {}", id, name, description),
    }
}

/// Select prompt over the template or hook sets of one category.
fn select_template_set(
    sets: &[TemplateSet],
    category: Category,
) -> Result<Option<TemplateSet>, Box<dyn Error>> {
    let items: Vec<String> = sets
        .iter()
        .map(|s| describe(&s.id, &s.name, &s.description, s.lang.as_deref()))
        .collect();

    println!();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a {} set (enter ID)", category))
        .items(&items)
        .default(0)
        .interact()?;

    Ok(sets.get(index).cloned())
}

fn select_label_set(sets: &[LabelSet]) -> Result<Option<LabelSet>, Box<dyn Error>> {
    let items: Vec<String> = sets
        .iter()
        .map(|s| describe(&s.id, &s.name, &s.description, s.lang.as_deref()))
        .collect();

    println!();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a labels set (enter ID)")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(sets.get(index).cloned())
}

/// Copies every file of a set into the project, sequentially.
///
/// Hooks additionally get `core.hooksPath` configured up front and the
/// execute bit after each copy. A failed file is reported and skipped.
async fn copy_file_set(
    client: &GitHubClient,
    set: &TemplateSet,
    project_root: &Path,
    hooks: bool,
) {
    println!();
    println!(
        "{}",
        format!(
            "💡 Fetching from {} ({} branch)...",
            set.repo_info.slug(),
            set.repo_info.branch
        )
        .blue()
    );

    if hooks {
        if let Err(e) = git_setup::set_hooks_path(project_root) {
            eprintln!("{}", format!("🚫 Failed to set git hooks path: {}", e).red());
        }
    }

    let fetcher = ContentFetcher::new(client);
    for file in &set.files {
        let local_dest = project_root.join(&file.local_path);
        match fetcher.fetch(&set.repo_info, &file.remote_path, &local_dest).await {
            Ok(()) => {
                println!(
                    "{}",
                    format!(
                        "✅ Copied remote file: {} to {}",
                        file.remote_path, file.local_path
                    )
                    .green()
                );
                if hooks {
                    if let Err(e) = git_setup::set_hook_exec_permission(&local_dest) {
                        eprintln!(
                            "{}",
                            format!(
                                "🚫 Failed to set execute permission for {}: {}",
                                file.local_path, e
                            )
                            .red()
                        );
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("🚫 Failed to copy {}: {}", file.remote_path, e).red()
                );
            }
        }
    }
}

/// Prompts for the target repository and replaces its labels with the
/// selected set.
async fn setup_labels(client: &GitHubClient, set: &LabelSet, base_dir: &Path) {
    let owner: String = match Input::with_theme(&ColorfulTheme::default())
        .with_prompt("GitHub Owner (username or organization name) for labels")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("This field is required.")
            } else {
                Ok(())
            }
        })
        .interact_text()
    {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", format!("🚫 Error setting up labels: {}", e).red());
            return;
        }
    };

    let repo: String = match Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Repository name for labels")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("This field is required.")
            } else {
                Ok(())
            }
        })
        .interact_text()
    {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", format!("🚫 Error setting up labels: {}", e).red());
            return;
        }
    };

    let synchronizer = LabelSynchronizer::new(client);

    let desired = match synchronizer.resolve_source(set, base_dir).await {
        Ok(labels) => labels,
        Err(e) => {
            eprintln!("{}", format!("🚫 Error setting up labels: {}", e).red());
            return;
        }
    };

    println!(
        "{}",
        "💡 Checking for and deleting existing labels...".blue()
    );
    match synchronizer.sync(&owner, &repo, &desired).await {
        Ok(report) if report.is_clean() => {
            println!("{}", "✅ All specified labels processed.".green());
        }
        Ok(report) => {
            println!(
                "{}",
                format!(
                    "⚠️ Labels processed with {} failure(s); the repository may be in a mixed state.",
                    report.failed()
                )
                .yellow()
            );
        }
        Err(e) => {
            eprintln!("{}", format!("🚫 Error setting up labels: {}", e).red());
        }
    }
}
