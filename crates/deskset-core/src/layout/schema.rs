//! Wire contract for the projects document.
//!
//! Each entity has exactly one table of fields. The codec takes every key it
//! reads or writes from these tables, so the tables are the full list of
//! names that can appear in a projects file.

use serde::Serialize;

/// JSON kind a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    String,
    Bool,
    Object,
    Array,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::String => "string",
            FieldKind::Bool => "bool",
            FieldKind::Object => "object",
            FieldKind::Array => "array",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Required,
    /// Omitted on encode when there is no value; absence is not an error.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

pub mod position {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "position";

    pub const X: FieldSpec = FieldSpec::required("X", FieldKind::Integer);
    pub const Y: FieldSpec = FieldSpec::required("Y", FieldKind::Integer);
    pub const WIDTH: FieldSpec = FieldSpec::required("width", FieldKind::Integer);
    pub const HEIGHT: FieldSpec = FieldSpec::required("height", FieldKind::Integer);

    pub const FIELDS: &[FieldSpec] = &[X, Y, WIDTH, HEIGHT];
}

pub mod monitor_rect {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "monitor_rect";

    pub const TOP: FieldSpec = FieldSpec::required("top", FieldKind::Integer);
    pub const LEFT: FieldSpec = FieldSpec::required("left", FieldKind::Integer);
    pub const WIDTH: FieldSpec = FieldSpec::required("width", FieldKind::Integer);
    pub const HEIGHT: FieldSpec = FieldSpec::required("height", FieldKind::Integer);

    pub const FIELDS: &[FieldSpec] = &[TOP, LEFT, WIDTH, HEIGHT];
}

pub mod application {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "application";

    pub const HWND: FieldSpec = FieldSpec::required("hwnd", FieldKind::Integer);
    pub const PATH: FieldSpec = FieldSpec::required("application", FieldKind::String);
    pub const TITLE: FieldSpec = FieldSpec::required("title", FieldKind::String);
    pub const COMMAND_LINE_ARGS: FieldSpec =
        FieldSpec::required("command-line-arguments", FieldKind::String);
    pub const MINIMIZED: FieldSpec = FieldSpec::required("minimized", FieldKind::Bool);
    pub const MAXIMIZED: FieldSpec = FieldSpec::required("maximized", FieldKind::Bool);
    pub const MONITOR: FieldSpec = FieldSpec::required("monitor", FieldKind::Integer);
    pub const POSITION: FieldSpec = FieldSpec::optional("position", FieldKind::Object);

    pub const FIELDS: &[FieldSpec] = &[
        HWND,
        PATH,
        TITLE,
        COMMAND_LINE_ARGS,
        MINIMIZED,
        MAXIMIZED,
        MONITOR,
        POSITION,
    ];
}

pub mod monitor {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "monitor";

    pub const ID: FieldSpec = FieldSpec::required("id", FieldKind::String);
    pub const INSTANCE_ID: FieldSpec = FieldSpec::required("instance-id", FieldKind::String);
    pub const NUMBER: FieldSpec = FieldSpec::required("monitor-number", FieldKind::Integer);
    pub const DPI: FieldSpec = FieldSpec::required("dpi", FieldKind::Integer);
    pub const RECT_DPI_AWARE: FieldSpec =
        FieldSpec::required("monitor-rect-dpi-aware", FieldKind::Object);
    pub const RECT_DPI_UNAWARE: FieldSpec =
        FieldSpec::required("monitor-rect-dpi-unaware", FieldKind::Object);

    pub const FIELDS: &[FieldSpec] = &[ID, INSTANCE_ID, NUMBER, DPI, RECT_DPI_AWARE, RECT_DPI_UNAWARE];
}

pub mod project {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "project";

    pub const ID: FieldSpec = FieldSpec::required("id", FieldKind::String);
    pub const NAME: FieldSpec = FieldSpec::required("name", FieldKind::String);
    pub const CREATION_TIME: FieldSpec = FieldSpec::required("creation-time", FieldKind::Integer);
    pub const LAST_LAUNCHED_TIME: FieldSpec =
        FieldSpec::optional("last-launched-time", FieldKind::Integer);
    pub const IS_SHORTCUT_NEEDED: FieldSpec =
        FieldSpec::required("is-shortcut-needed", FieldKind::Bool);
    pub const MONITORS: FieldSpec = FieldSpec::required("monitor-configuration", FieldKind::Array);
    pub const APPS: FieldSpec = FieldSpec::required("applications", FieldKind::Array);

    pub const FIELDS: &[FieldSpec] = &[
        ID,
        NAME,
        CREATION_TIME,
        LAST_LAUNCHED_TIME,
        IS_SHORTCUT_NEEDED,
        MONITORS,
        APPS,
    ];
}

pub mod projects_list {
    use super::{FieldKind, FieldSpec};

    pub const ENTITY: &str = "projects_list";

    pub const PROJECTS: FieldSpec = FieldSpec::required("projects", FieldKind::Array);

    pub const FIELDS: &[FieldSpec] = &[PROJECTS];
}

/// Every entity table, outermost first.
pub const ALL: &[EntitySchema] = &[
    EntitySchema {
        entity: projects_list::ENTITY,
        fields: projects_list::FIELDS,
    },
    EntitySchema {
        entity: project::ENTITY,
        fields: project::FIELDS,
    },
    EntitySchema {
        entity: monitor::ENTITY,
        fields: monitor::FIELDS,
    },
    EntitySchema {
        entity: monitor_rect::ENTITY,
        fields: monitor_rect::FIELDS,
    },
    EntitySchema {
        entity: application::ENTITY,
        fields: application::FIELDS,
    },
    EntitySchema {
        entity: position::ENTITY,
        fields: position::FIELDS,
    },
];
