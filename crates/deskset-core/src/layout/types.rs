use chrono::{DateTime, Utc};

/// Edge coordinates of a rectangle, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Window geometry in pixels, top-left origin.
///
/// Covers `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            top: self.y,
            right: self.x.saturating_add(self.width),
            bottom: self.y.saturating_add(self.height),
        }
    }
}

/// Monitor bounds. Same geometry as [`Position`], stored as `top`/`left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorRect {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl MonitorRect {
    pub fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn to_bounds(&self) -> Bounds {
        Bounds {
            left: self.left,
            top: self.top,
            right: self.left.saturating_add(self.width),
            bottom: self.top.saturating_add(self.height),
        }
    }

    /// Whether the window's top-left corner falls inside this monitor.
    pub fn contains(&self, position: &Position) -> bool {
        let bounds = self.to_bounds();
        position.x >= bounds.left
            && position.x < bounds.right
            && position.y >= bounds.top
            && position.y < bounds.bottom
    }
}

/// OS window handle captured alongside an [`Application`].
///
/// Only meaningful inside the OS session that produced it. Handles get
/// recycled after a reboot or logout, so two equal values read from disk
/// say nothing about the windows being the same. Use it to correlate
/// results during a single capture, never as a durable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(i64);

impl WindowHandle {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// OS monitor handle. Session-local like [`WindowHandle`] and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorHandle(i64);

impl MonitorHandle {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

/// One captured window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Application {
    pub handle: WindowHandle,
    /// Executable path
    pub path: String,
    pub title: String,
    pub command_line_args: String,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub position: Position,
    /// Index into the owning project's `monitors`. Not checked on decode.
    pub monitor: i32,
}

/// One display device at capture time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Monitor {
    /// Set by the capture component; decoded monitors always carry `None`.
    pub handle: Option<MonitorHandle>,
    pub id: String,
    pub instance_id: String,
    pub number: u32,
    pub dpi: u32,
    pub rect_dpi_aware: MonitorRect,
    pub rect_dpi_unaware: MonitorRect,
}

/// A named desktop layout snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Unix seconds
    pub creation_time: i64,
    /// Unix seconds
    pub last_launched_time: Option<i64>,
    pub is_shortcut_needed: bool,
    pub monitors: Vec<Monitor>,
    pub apps: Vec<Application>,
}

/// A monitor index on an application that points outside the project's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingMonitorRef {
    pub app_index: usize,
    pub monitor: i32,
}

impl Project {
    /// Create an empty project stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            creation_time: Utc::now().timestamp(),
            ..Default::default()
        }
    }

    pub fn creation_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.creation_time, 0)
    }

    pub fn last_launched_datetime(&self) -> Option<DateTime<Utc>> {
        self.last_launched_time
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Record that the layout was just launched.
    pub fn mark_launched(&mut self) {
        self.last_launched_time = Some(Utc::now().timestamp());
    }

    /// Resolve the monitor an application was captured on.
    pub fn monitor_for(&self, app: &Application) -> Option<&Monitor> {
        usize::try_from(app.monitor)
            .ok()
            .and_then(|idx| self.monitors.get(idx))
    }

    /// Applications whose monitor index has no matching monitor.
    ///
    /// Reporting only; the data is left as captured.
    pub fn validate(&self) -> Vec<DanglingMonitorRef> {
        self.apps
            .iter()
            .enumerate()
            .filter(|(_, app)| self.monitor_for(app).is_none())
            .map(|(app_index, app)| DanglingMonitorRef {
                app_index,
                monitor: app.monitor,
            })
            .collect()
    }
}

/// Top-level persisted aggregate, in save order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectsList {
    pub projects: Vec<Project>,
}

impl ProjectsList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Replace the project with the same id in place, or append it.
    pub fn upsert(&mut self, project: Project) {
        match self.find_mut(&project.id) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
    }

    /// Remove a project by id, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(idx))
    }
}
