use serde::Serialize;

use deskset_core::errors::DesksetError;
use deskset_core::layout::DroppedElement;
use deskset_core::Project;

/// One row of `list --json`.
#[derive(Serialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub creation_time: i64,
    pub created_at: Option<String>,
    pub last_launched_time: Option<i64>,
    pub monitors: usize,
    pub applications: usize,
    pub is_shortcut_needed: bool,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            creation_time: project.creation_time,
            created_at: project.creation_datetime().map(|dt| dt.to_rfc3339()),
            last_launched_time: project.last_launched_time,
            monitors: project.monitors.len(),
            applications: project.apps.len(),
            is_shortcut_needed: project.is_shortcut_needed,
        }
    }
}

#[derive(Serialize)]
pub struct DroppedEntry {
    pub path: String,
    pub error_code: &'static str,
    pub message: String,
}

impl From<&DroppedElement> for DroppedEntry {
    fn from(dropped: &DroppedElement) -> Self {
        Self {
            path: dropped.path.clone(),
            error_code: dropped.error.error_code(),
            message: dropped.error.to_string(),
        }
    }
}

/// Application whose monitor index has no matching monitor.
#[derive(Serialize)]
pub struct DanglingMonitorEntry {
    pub project_id: String,
    pub app_index: usize,
    pub monitor: i32,
}

/// Output of `validate --json`.
#[derive(Serialize)]
pub struct ValidationOutput {
    pub path: String,
    pub projects: usize,
    pub dropped: Vec<DroppedEntry>,
    pub dangling_monitor_refs: Vec<DanglingMonitorEntry>,
    /// Keys that are ignored on load and lost on the next save.
    pub unknown_fields: Vec<String>,
}
