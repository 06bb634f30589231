use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::StoreError;
use crate::layout::{DecodeReport, JsonCodec, ProjectsList};

/// Environment variable that overrides the projects file location.
pub const PROJECTS_FILE_ENV: &str = "DESKSET_PROJECTS_FILE";

const PROJECTS_FILE_NAME: &str = "projects.json";

/// Result of reading the projects file.
#[derive(Debug, Clone)]
pub struct LoadedProjects {
    pub path: PathBuf,
    pub projects: ProjectsList,
    /// Elements that could not be decoded and were left out of `projects`.
    pub report: DecodeReport,
    /// The document `projects` was decoded from; `None` when the file is
    /// missing. Keeps keys the model does not carry.
    pub document: Option<Value>,
}

/// Load projects from [`projects_file_path`].
pub fn load_projects() -> Result<LoadedProjects, StoreError> {
    load_projects_from(&projects_file_path())
}

/// Load projects from `path`.
///
/// A missing file is an empty list. Malformed projects, monitors and
/// applications are skipped and listed in the report; only an unreadable
/// file, invalid JSON or a document without a `projects` array is an error.
pub fn load_projects_from(path: &Path) -> Result<LoadedProjects, StoreError> {
    if !path.exists() {
        tracing::debug!(
            event = "core.store.file_missing",
            path = %path.display()
        );
        return Ok(LoadedProjects {
            path: path.to_path_buf(),
            projects: ProjectsList::default(),
            report: DecodeReport::default(),
            document: None,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        tracing::error!(
            event = "core.store.load_failed",
            path = %path.display(),
            error = %source
        );
        StoreError::ReadFailed {
            path: path.display().to_string(),
            source,
        }
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.store.json_parse_failed",
            path = %path.display(),
            error = %e
        );
        StoreError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let decoded = ProjectsList::decode_with_report(&document).map_err(|source| {
        tracing::error!(
            event = "core.store.document_invalid",
            path = %path.display(),
            error = %source
        );
        StoreError::InvalidDocument {
            path: path.display().to_string(),
            source,
        }
    })?;

    if decoded.report.is_clean() {
        tracing::info!(
            event = "core.store.loaded",
            path = %path.display(),
            count = decoded.value.len()
        );
    } else {
        tracing::warn!(
            event = "core.store.loaded_with_drops",
            path = %path.display(),
            count = decoded.value.len(),
            dropped = decoded.report.dropped_count(),
            "Some entries in the projects file were malformed and skipped"
        );
    }

    Ok(LoadedProjects {
        path: path.to_path_buf(),
        projects: decoded.value,
        report: decoded.report,
        document: Some(document),
    })
}

/// Save projects to [`projects_file_path`].
pub fn save_projects(projects: &ProjectsList) -> Result<(), StoreError> {
    save_projects_to(&projects_file_path(), projects)
}

/// Save projects to `path`, replacing the file in one rename.
pub fn save_projects_to(path: &Path, projects: &ProjectsList) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&parent).map_err(|e| StoreError::SaveFailed {
        message: format!("Failed to create directory ({}): {}", parent.display(), e),
    })?;

    let json = serde_json::to_string_pretty(&projects.to_json()).map_err(|e| {
        StoreError::SaveFailed {
            message: format!("Failed to serialize projects: {}", e),
        }
    })?;

    let mut file = tempfile::NamedTempFile::new_in(&parent).map_err(|e| StoreError::SaveFailed {
        message: format!("Failed to create temp file in {}: {}", parent.display(), e),
    })?;

    file.write_all(json.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| StoreError::SaveFailed {
            message: format!("Failed to write temp file: {}", e),
        })?;

    file.persist(path).map_err(|e| StoreError::SaveFailed {
        message: format!("Failed to write projects file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "core.store.saved",
        path = %path.display(),
        count = projects.len()
    );

    Ok(())
}

/// Location of the projects file.
///
/// `DESKSET_PROJECTS_FILE` wins when set and non-empty. Otherwise the file
/// lives on the desktop, falling back to the home directory and then the
/// current directory.
pub fn projects_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var(PROJECTS_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    if let Some(desktop) = dirs::desktop_dir() {
        return desktop.join(PROJECTS_FILE_NAME);
    }

    match dirs::home_dir() {
        Some(home) => home.join(PROJECTS_FILE_NAME),
        None => {
            tracing::error!(
                event = "core.store.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(PROJECTS_FILE_NAME)
        }
    }
}

/// Test utilities for the projects store.
///
/// Public so the CLI tests can point the default location at a temp file.
pub mod test_helpers {
    use std::sync::Mutex;

    use super::PROJECTS_FILE_ENV;

    /// Mutex to serialize tests that modify DESKSET_PROJECTS_FILE.
    pub static PROJECTS_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes DESKSET_PROJECTS_FILE on drop.
    pub struct ProjectsFileEnvGuard;

    impl ProjectsFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: We hold PROJECTS_FILE_ENV_LOCK to prevent concurrent access
            unsafe { std::env::set_var(PROJECTS_FILE_ENV, path) };
            Self
        }
    }

    impl Drop for ProjectsFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: We hold PROJECTS_FILE_ENV_LOCK to prevent concurrent access
            unsafe { std::env::remove_var(PROJECTS_FILE_ENV) };
        }
    }
}
