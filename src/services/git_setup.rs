//! Local Git setup for repo-ready.
//!
//! Runs `git init` when the working directory is not already a repository,
//! points `core.hooksPath` at the copied hooks directory, and marks hook
//! files executable.

use std::path::Path;
use std::process::Command;

use colored::Colorize;

use crate::types::errors::GitError;

/// Directory hooks are copied into, relative to the project root.
pub const GITHOOKS_DIR: &str = ".githooks";

fn run_git(args: &[&str]) -> Result<(), GitError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| GitError::SpawnError(e.to_string()))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(GitError::CommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// True when the current directory is inside a Git work tree.
pub fn is_inside_work_tree() -> bool {
    run_git(&["rev-parse", "--is-inside-work-tree"]).is_ok()
}

/// Runs `git init` unless the current directory is already a repository.
pub fn ensure_git_repo() -> Result<(), GitError> {
    if is_inside_work_tree() {
        return Ok(());
    }

    println!("{}", "💡 Initializing Git repository...".blue());
    run_git(&["init"])?;
    println!("{}", "✅ Git repository initialized.".green());
    Ok(())
}

/// Points `core.hooksPath` at the project-local hooks directory.
pub fn set_hooks_path(project_root: &Path) -> Result<(), GitError> {
    let hooks_dir = project_root.join(GITHOOKS_DIR);
    let hooks_dir_str = hooks_dir.to_string_lossy();

    run_git(&["config", "core.hooksPath", &hooks_dir_str])?;
    println!(
        "{}",
        format!("✅ Git hooks path set to: {}", hooks_dir.display()).green()
    );
    Ok(())
}

/// Marks one copied hook file executable (no-op on Windows, where Git
/// ignores the execute bit).
pub fn set_hook_exec_permission(hook_path: &Path) -> Result<(), GitError> {
    #[cfg(unix)]
    {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(hook_path)
            .map_err(|e| GitError::PermissionError(e.to_string()))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(hook_path, permissions)
            .map_err(|e| GitError::PermissionError(e.to_string()))?;
    }

    let name = hook_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| hook_path.display().to_string());
    println!("{}", format!("✅ Made {} executable.", name).green());
    Ok(())
}
