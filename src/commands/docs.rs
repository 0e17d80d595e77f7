//! `repo-ready docs` — regenerates the catalog documentation.
//!
//! Renders `AVAILABLE_TEMPLATES.md` from `template-sources.json` so the
//! selectable IDs stay documented next to the catalog. The file is only
//! rewritten when its content actually changed.

use std::error::Error;
use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::app::App;
use crate::services::catalog::SourceCatalogTrait;
use crate::types::config::{LabelSourceKind, TemplateSet, TemplateSources};

const OUTPUT_FILE: &str = "AVAILABLE_TEMPLATES.md";

/// Runs the docs command.
pub fn run(app: &mut App) -> Result<(), Box<dyn Error>> {
    let sources = app.catalog.load()?.clone();
    let output_path = app.catalog_base_dir().join(OUTPUT_FILE);
    let generated = generate_markdown(&sources);

    let existing = fs::read_to_string(&output_path).unwrap_or_default();
    if existing == generated {
        println!(
            "{}",
            format!("ℹ️ {} is already up-to-date. No changes needed.", OUTPUT_FILE).blue()
        );
        return Ok(());
    }

    fs::write(&output_path, &generated)?;
    println!(
        "{}",
        format!("✅ {} updated successfully.", OUTPUT_FILE).green()
    );
    Ok(())
}

fn file_names(set: &TemplateSet) -> String {
    set.files
        .iter()
        .map(|f| {
            let base = Path::new(&f.local_path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| f.local_path.clone());
            format!("`{}`", base)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn lang_display(lang: Option<&str>) -> String {
    lang.map(str::to_uppercase).unwrap_or_else(|| "N/A".to_string())
}

/// Renders the whole document from the catalog.
pub fn generate_markdown(sources: &TemplateSources) -> String {
    let mut md = String::from(
        "# Available Templates for repo-ready CLI\n\n\
         This document lists the GitHub repositories (and local files) from which you can \
         fetch templates, Git hooks, and labels using the `repo-ready init` command. Each \
         entry is identified by a unique `ID` for easy selection in the CLI.\n\n---\n\n\
         ## 📄 Templates (`.github` folders)\n\n\
         | ID | Name | Description | Language | Source Repository | Included Files |\n\
         |---|---|---|---|---|---|\n",
    );

    for set in &sources.templates {
        md.push_str(&format!(
            "| **{}** | **{}** | {} | {} | `https://github.com/{}` | {} |\n",
            set.id,
            set.name,
            set.description,
            lang_display(set.lang.as_deref()),
            set.repo_info.slug(),
            file_names(set),
        ));
    }

    md.push_str(
        "\n---\n\n## 🪝 Git Hooks (`.githooks` folders)\n\n\
         | ID | Name | Description | Language | Source Repository | Included Hooks |\n\
         |---|---|---|---|---|---|\n",
    );

    for set in &sources.hooks {
        md.push_str(&format!(
            "| **{}** | **{}** | {} | {} | `https://github.com/{}` | {} |\n",
            set.id,
            set.name,
            set.description,
            lang_display(set.lang.as_deref()),
            set.repo_info.slug(),
            file_names(set),
        ));
    }

    md.push_str(
        "\n---\n\n## 🏷️ GitHub Labels\n\n\
         Selecting a set will first **delete all existing labels** in your target \
         repository before adding the new ones.\n\n\
         | ID | Name | Description | Language | Source |\n\
         |---|---|---|---|---|\n",
    );

    for set in &sources.labels {
        let source = match (set.source_type, &set.repo_info, &set.source_path) {
            (LabelSourceKind::RemoteRepoLabels, Some(info), _) => {
                format!("`https://github.com/{}/labels`", info.slug())
            }
            (LabelSourceKind::LocalFile, _, Some(path)) => format!("Local file: `{}`", path),
            _ => "N/A".to_string(),
        };
        md.push_str(&format!(
            "| **{}** | **{}** | {} | {} | {} |\n",
            set.id,
            set.name,
            set.description,
            lang_display(set.lang.as_deref()),
            source,
        ));
    }

    md.push_str(
        "\n---\n\n## Extending This List\n\n\
         Add new entries to the `templates`, `hooks`, or `labels` arrays of \
         `template-sources.json` following the existing structure, then re-run \
         `repo-ready docs`.\n",
    );

    md
}
