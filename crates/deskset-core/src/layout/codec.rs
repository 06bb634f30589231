use serde_json::{Map, Value, json};
use tracing::warn;

use super::errors::DecodeError;
use super::schema::{self, FieldSpec};
use super::types::{
    Application, Monitor, MonitorRect, Position, Project, ProjectsList, WindowHandle,
};

/// Mapping between an entity and its JSON document.
pub trait JsonCodec: Sized {
    fn to_json(&self) -> Value;

    /// Rebuild the entity, or fail without producing a partial value.
    fn from_json(value: &Value) -> Result<Self, DecodeError>;
}

/// A collection element that failed to decode and was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedElement {
    /// Location in the document, e.g. `projects[1].applications[0]`.
    pub path: String,
    pub error: DecodeError,
}

/// Elements skipped while decoding collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    pub dropped: Vec<DroppedElement>,
}

impl DecodeReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// A decoded value plus what had to be dropped to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub report: DecodeReport,
}

/// Read access to one entity's object, keyed by its schema table.
struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn of(entity: &'static str, value: &'a Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(|map| Self { entity, map })
            .ok_or(DecodeError::NotAnObject { entity })
    }

    fn has(&self, spec: FieldSpec) -> bool {
        self.map.contains_key(spec.name)
    }

    fn require(&self, spec: FieldSpec) -> Result<&'a Value, DecodeError> {
        self.map.get(spec.name).ok_or(DecodeError::MissingField {
            entity: self.entity,
            field: spec.name,
        })
    }

    fn mismatch(&self, spec: FieldSpec) -> DecodeError {
        DecodeError::TypeMismatch {
            entity: self.entity,
            field: spec.name,
            expected: spec.kind,
        }
    }

    fn string(&self, spec: FieldSpec) -> Result<String, DecodeError> {
        self.require(spec)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(spec))
    }

    fn bool(&self, spec: FieldSpec) -> Result<bool, DecodeError> {
        self.require(spec)?
            .as_bool()
            .ok_or_else(|| self.mismatch(spec))
    }

    /// Integers may be stored as JSON integers or as floats with no
    /// fractional part. Anything else, or a value that does not fit `T`,
    /// is an error rather than a zero.
    fn int<T: TryFrom<i64>>(&self, spec: FieldSpec) -> Result<T, DecodeError> {
        let value = self.require(spec)?;
        let number = value.as_number().ok_or_else(|| self.mismatch(spec))?;

        let wide = if let Some(n) = number.as_i64() {
            n
        } else if number.is_u64() {
            return Err(self.out_of_range(spec));
        } else {
            let f = number.as_f64().ok_or_else(|| self.mismatch(spec))?;
            if f.fract() != 0.0 || !f.is_finite() {
                return Err(self.mismatch(spec));
            }
            if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                return Err(self.out_of_range(spec));
            }
            f as i64
        };

        T::try_from(wide).map_err(|_| self.out_of_range(spec))
    }

    fn optional_int<T: TryFrom<i64>>(&self, spec: FieldSpec) -> Result<Option<T>, DecodeError> {
        if self.has(spec) {
            self.int(spec).map(Some)
        } else {
            Ok(None)
        }
    }

    fn out_of_range(&self, spec: FieldSpec) -> DecodeError {
        DecodeError::OutOfRange {
            entity: self.entity,
            field: spec.name,
        }
    }

    fn nested<T: JsonCodec>(&self, spec: FieldSpec) -> Result<T, DecodeError> {
        let value = self.require(spec)?;
        T::from_json(value).map_err(|source| DecodeError::Nested {
            entity: self.entity,
            field: spec.name,
            source: Box::new(source),
        })
    }

    fn optional_nested<T: JsonCodec>(&self, spec: FieldSpec) -> Result<Option<T>, DecodeError> {
        if self.has(spec) {
            self.nested(spec).map(Some)
        } else {
            Ok(None)
        }
    }

    fn array(&self, spec: FieldSpec) -> Result<&'a [Value], DecodeError> {
        self.require(spec)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch(spec))
    }
}

/// Decode each element on its own, keeping successes in order and
/// recording the rest in `report`.
fn decode_elements<T, F>(
    items: &[Value],
    path: &str,
    report: &mut DecodeReport,
    mut decode: F,
) -> Vec<T>
where
    F: FnMut(&Value, &str, &mut DecodeReport) -> Result<T, DecodeError>,
{
    let mut decoded = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let element_path = format!("{}[{}]", path, idx);
        match decode(item, &element_path, report) {
            Ok(value) => decoded.push(value),
            Err(error) => {
                warn!(
                    event = "core.layout.element_dropped",
                    path = %element_path,
                    error = %error
                );
                report.dropped.push(DroppedElement {
                    path: element_path,
                    error,
                });
            }
        }
    }
    decoded
}

fn plain<T: JsonCodec>(
    value: &Value,
    _path: &str,
    _report: &mut DecodeReport,
) -> Result<T, DecodeError> {
    T::from_json(value)
}

fn encode_all<T: JsonCodec>(items: &[T]) -> Value {
    Value::Array(items.iter().map(JsonCodec::to_json).collect())
}

impl JsonCodec for Position {
    fn to_json(&self) -> Value {
        use schema::position::*;
        json!({
            X.name: self.x,
            Y.name: self.y,
            WIDTH.name: self.width,
            HEIGHT.name: self.height,
        })
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        use schema::position::*;
        let fields = Fields::of(ENTITY, value)?;
        Ok(Position {
            x: fields.int(X)?,
            y: fields.int(Y)?,
            width: fields.int(WIDTH)?,
            height: fields.int(HEIGHT)?,
        })
    }
}

impl JsonCodec for MonitorRect {
    fn to_json(&self) -> Value {
        use schema::monitor_rect::*;
        json!({
            TOP.name: self.top,
            LEFT.name: self.left,
            WIDTH.name: self.width,
            HEIGHT.name: self.height,
        })
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        use schema::monitor_rect::*;
        let fields = Fields::of(ENTITY, value)?;
        Ok(MonitorRect {
            top: fields.int(TOP)?,
            left: fields.int(LEFT)?,
            width: fields.int(WIDTH)?,
            height: fields.int(HEIGHT)?,
        })
    }
}

impl JsonCodec for Application {
    fn to_json(&self) -> Value {
        use schema::application::*;
        json!({
            HWND.name: self.handle.raw(),
            PATH.name: self.path,
            TITLE.name: self.title,
            COMMAND_LINE_ARGS.name: self.command_line_args,
            MINIMIZED.name: self.is_minimized,
            MAXIMIZED.name: self.is_maximized,
            POSITION.name: self.position.to_json(),
            MONITOR.name: self.monitor,
        })
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        use schema::application::*;
        let fields = Fields::of(ENTITY, value)?;
        Ok(Application {
            handle: WindowHandle::new(fields.int(HWND)?),
            path: fields.string(PATH)?,
            title: fields.string(TITLE)?,
            command_line_args: fields.string(COMMAND_LINE_ARGS)?,
            is_minimized: fields.bool(MINIMIZED)?,
            is_maximized: fields.bool(MAXIMIZED)?,
            monitor: fields.int(MONITOR)?,
            position: fields.optional_nested(POSITION)?.unwrap_or_default(),
        })
    }
}

impl JsonCodec for Monitor {
    fn to_json(&self) -> Value {
        use schema::monitor::*;
        json!({
            ID.name: self.id,
            INSTANCE_ID.name: self.instance_id,
            NUMBER.name: self.number,
            DPI.name: self.dpi,
            RECT_DPI_AWARE.name: self.rect_dpi_aware.to_json(),
            RECT_DPI_UNAWARE.name: self.rect_dpi_unaware.to_json(),
        })
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        use schema::monitor::*;
        let fields = Fields::of(ENTITY, value)?;
        Ok(Monitor {
            handle: None,
            id: fields.string(ID)?,
            instance_id: fields.string(INSTANCE_ID)?,
            number: fields.int(NUMBER)?,
            dpi: fields.int(DPI)?,
            rect_dpi_aware: fields.nested(RECT_DPI_AWARE)?,
            rect_dpi_unaware: fields.nested(RECT_DPI_UNAWARE)?,
        })
    }
}

impl Project {
    /// Decode a project, recording dropped monitors and applications.
    pub fn decode_with_report(value: &Value) -> Result<Decoded<Project>, DecodeError> {
        let mut report = DecodeReport::default();
        let project = decode_project(value, "", &mut report)?;
        Ok(Decoded {
            value: project,
            report,
        })
    }
}

fn decode_project(
    value: &Value,
    path: &str,
    report: &mut DecodeReport,
) -> Result<Project, DecodeError> {
    use schema::project::*;
    let fields = Fields::of(ENTITY, value)?;

    let id = fields.string(ID)?;
    let name = fields.string(NAME)?;
    let creation_time = fields.int(CREATION_TIME)?;
    let last_launched_time = fields.optional_int(LAST_LAUNCHED_TIME)?;
    let is_shortcut_needed = fields.bool(IS_SHORTCUT_NEEDED)?;
    let app_items = fields.array(APPS)?;
    let monitor_items = fields.array(MONITORS)?;

    let apps = decode_elements(app_items, &join_path(path, APPS.name), report, plain);
    let monitors = decode_elements(monitor_items, &join_path(path, MONITORS.name), report, plain);

    Ok(Project {
        id,
        name,
        creation_time,
        last_launched_time,
        is_shortcut_needed,
        monitors,
        apps,
    })
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

impl JsonCodec for Project {
    fn to_json(&self) -> Value {
        use schema::project::*;
        let mut map = Map::new();
        map.insert(ID.name.to_string(), json!(self.id));
        map.insert(NAME.name.to_string(), json!(self.name));
        map.insert(CREATION_TIME.name.to_string(), json!(self.creation_time));
        if let Some(launched) = self.last_launched_time {
            map.insert(LAST_LAUNCHED_TIME.name.to_string(), json!(launched));
        }
        map.insert(
            IS_SHORTCUT_NEEDED.name.to_string(),
            json!(self.is_shortcut_needed),
        );
        map.insert(MONITORS.name.to_string(), encode_all(&self.monitors));
        map.insert(APPS.name.to_string(), encode_all(&self.apps));
        Value::Object(map)
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        Project::decode_with_report(value).map(|decoded| decoded.value)
    }
}

impl ProjectsList {
    /// Decode the top-level document, recording every dropped element.
    pub fn decode_with_report(value: &Value) -> Result<Decoded<ProjectsList>, DecodeError> {
        use schema::projects_list::*;
        let fields = Fields::of(ENTITY, value)?;
        let items = fields.array(PROJECTS)?;

        let mut report = DecodeReport::default();
        let projects = decode_elements(items, PROJECTS.name, &mut report, decode_project);

        Ok(Decoded {
            value: ProjectsList { projects },
            report,
        })
    }
}

impl JsonCodec for ProjectsList {
    fn to_json(&self) -> Value {
        use schema::projects_list::*;
        json!({ PROJECTS.name: encode_all(&self.projects) })
    }

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        ProjectsList::decode_with_report(value).map(|decoded| decoded.value)
    }
}

/// Keys of `value` that `table` does not define.
pub fn unknown_fields(value: &Value, table: &[FieldSpec]) -> Vec<String> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    map.keys()
        .filter(|key| !table.iter().any(|spec| spec.name == key.as_str()))
        .cloned()
        .collect()
}

/// Paths of every key in a projects document that no schema table defines.
///
/// Walks the same structure the decoder does, e.g.
/// `projects[0].applications[2].z-order`. Unknown keys are ignored by
/// decoding and lost on the next save.
pub fn unknown_field_paths(document: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_unknown(document, schema::projects_list::FIELDS, "", &mut found);

    let projects = document
        .get(schema::projects_list::PROJECTS.name)
        .and_then(Value::as_array);
    for (i, project) in projects.into_iter().flatten().enumerate() {
        let path = format!("{}[{}]", schema::projects_list::PROJECTS.name, i);
        collect_unknown(project, schema::project::FIELDS, &path, &mut found);

        for (j, monitor) in elements(project, schema::project::MONITORS) {
            let path = format!("{}.{}[{}]", path, schema::project::MONITORS.name, j);
            collect_unknown(monitor, schema::monitor::FIELDS, &path, &mut found);
            for rect in [schema::monitor::RECT_DPI_AWARE, schema::monitor::RECT_DPI_UNAWARE] {
                if let Some(value) = monitor.get(rect.name) {
                    let path = format!("{}.{}", path, rect.name);
                    collect_unknown(value, schema::monitor_rect::FIELDS, &path, &mut found);
                }
            }
        }

        for (k, app) in elements(project, schema::project::APPS) {
            let path = format!("{}.{}[{}]", path, schema::project::APPS.name, k);
            collect_unknown(app, schema::application::FIELDS, &path, &mut found);
            if let Some(value) = app.get(schema::application::POSITION.name) {
                let path = format!("{}.{}", path, schema::application::POSITION.name);
                collect_unknown(value, schema::position::FIELDS, &path, &mut found);
            }
        }
    }
    found
}

fn elements<'a>(
    parent: &'a Value,
    field: FieldSpec,
) -> impl Iterator<Item = (usize, &'a Value)> + 'a {
    parent
        .get(field.name)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
}

fn collect_unknown(value: &Value, table: &[FieldSpec], path: &str, found: &mut Vec<String>) {
    for key in unknown_fields(value, table) {
        if path.is_empty() {
            found.push(key);
        } else {
            found.push(format!("{}.{}", path, key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::schema::FieldKind;
    use crate::layout::types::MonitorHandle;

    fn sample_monitor(n: u32) -> Monitor {
        Monitor {
            handle: None,
            id: format!(r"\\?\DISPLAY#GSM5B7F#{}", n),
            instance_id: format!("MONITOR\\GSM5B7F\\{}", n),
            number: n,
            dpi: 144,
            rect_dpi_aware: MonitorRect::new(0, 1920 * n as i32, 2560, 1440),
            rect_dpi_unaware: MonitorRect::new(0, 1280 * n as i32, 1707, 960),
        }
    }

    fn sample_app(title: &str, monitor: i32) -> Application {
        Application {
            handle: WindowHandle::new(0x0002_04D2),
            path: r"C:\Windows\System32\notepad.exe".to_string(),
            title: title.to_string(),
            command_line_args: "--new-window".to_string(),
            is_minimized: false,
            is_maximized: true,
            position: Position::new(-8, -8, 2576, 1416),
            monitor,
        }
    }

    fn sample_project() -> Project {
        Project {
            id: "{9A1B2C3D-0000-4000-8000-000000000001}".to_string(),
            name: "Morning work".to_string(),
            creation_time: 1_718_000_000,
            last_launched_time: Some(1_718_050_000),
            is_shortcut_needed: true,
            monitors: vec![sample_monitor(0), sample_monitor(1)],
            apps: vec![sample_app("notes.txt", 0), sample_app("todo.txt", 1)],
        }
    }

    fn app_json() -> Value {
        json!({
            "hwnd": 132306,
            "application": "C:\\Program Files\\App\\app.exe",
            "title": "App",
            "command-line-arguments": "",
            "minimized": false,
            "maximized": false,
            "monitor": 0,
            "position": {"X": 10, "Y": 20, "width": 800, "height": 600}
        })
    }

    fn monitor_json() -> Value {
        json!({
            "id": "DISPLAY1",
            "instance-id": "INSTANCE1",
            "monitor-number": 1,
            "dpi": 96,
            "monitor-rect-dpi-aware": {"top": 0, "left": 0, "width": 1920, "height": 1080},
            "monitor-rect-dpi-unaware": {"top": 0, "left": 0, "width": 1920, "height": 1080}
        })
    }

    fn project_json() -> Value {
        json!({
            "id": "p1",
            "name": "Layout",
            "creation-time": 1700000000,
            "is-shortcut-needed": false,
            "monitor-configuration": [monitor_json()],
            "applications": [app_json()]
        })
    }

    #[test]
    fn test_project_round_trip() {
        let project = sample_project();
        let decoded = Project::from_json(&project.to_json()).unwrap();
        assert_eq!(decoded, project);
    }

    #[test]
    fn test_projects_list_round_trip_preserves_order() {
        let mut second = sample_project();
        second.id = "second".to_string();
        second.last_launched_time = None;
        second.apps.reverse();
        let list = ProjectsList::new(vec![sample_project(), second]);

        let decoded = ProjectsList::from_json(&list.to_json()).unwrap();
        assert_eq!(decoded, list);
        assert_eq!(decoded.projects[1].apps[0].title, "todo.txt");
    }

    #[test]
    fn test_round_trip_through_text() {
        let list = ProjectsList::new(vec![sample_project()]);
        let text = serde_json::to_string_pretty(&list.to_json()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(ProjectsList::from_json(&value).unwrap(), list);
    }

    #[test]
    fn test_monitor_handle_is_not_persisted() {
        let mut monitor = sample_monitor(0);
        monitor.handle = Some(MonitorHandle::new(0x10001));

        let encoded = monitor.to_json();
        assert_eq!(encoded.as_object().unwrap().len(), 6);

        let decoded = Monitor::from_json(&encoded).unwrap();
        assert!(decoded.handle.is_none());
        assert_eq!(decoded.id, monitor.id);
    }

    #[test]
    fn test_position_uses_upper_case_axis_names() {
        let encoded = Position::new(1, 2, 3, 4).to_json();
        let keys: Vec<_> = encoded.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"X".to_string()));
        assert!(keys.contains(&"Y".to_string()));
        assert!(!keys.contains(&"x".to_string()));
        assert_eq!(encoded["X"], 1);
        assert_eq!(encoded["Y"], 2);
        assert_eq!(encoded["width"], 3);
        assert_eq!(encoded["height"], 4);

        // Lower-case axes are not accepted on read
        let lower = json!({"x": 1, "y": 2, "width": 3, "height": 4});
        assert!(Position::from_json(&lower).is_err());
    }

    #[test]
    fn test_monitor_rect_uses_top_left_names() {
        let encoded = MonitorRect::new(10, 20, 30, 40).to_json();
        assert_eq!(encoded["top"], 10);
        assert_eq!(encoded["left"], 20);
        assert_eq!(encoded["width"], 30);
        assert_eq!(encoded["height"], 40);
        assert!(encoded.get("X").is_none());

        let as_position = json!({"X": 10, "Y": 20, "width": 30, "height": 40});
        assert!(MonitorRect::from_json(&as_position).is_err());
    }

    #[test]
    fn test_position_missing_field_fails_whole_decode() {
        let doc = json!({"X": 1, "Y": 2, "width": 3});
        assert_eq!(
            Position::from_json(&doc),
            Err(DecodeError::MissingField {
                entity: "position",
                field: "height"
            })
        );
    }

    #[test]
    fn test_numbers_accept_integral_floats_only() {
        let doc = json!({"X": 1.0, "Y": -2.0, "width": 3, "height": 4});
        assert_eq!(Position::from_json(&doc).unwrap(), Position::new(1, -2, 3, 4));

        let fractional = json!({"X": 1.5, "Y": 2, "width": 3, "height": 4});
        assert!(matches!(
            Position::from_json(&fractional),
            Err(DecodeError::TypeMismatch { field: "X", .. })
        ));

        let text = json!({"X": "1", "Y": 2, "width": 3, "height": 4});
        assert!(matches!(
            Position::from_json(&text),
            Err(DecodeError::TypeMismatch { field: "X", .. })
        ));
    }

    #[test]
    fn test_numbers_out_of_range_fail() {
        let doc = json!({"X": 1, "Y": 2, "width": 3_000_000_000i64, "height": 4});
        assert_eq!(
            Position::from_json(&doc),
            Err(DecodeError::OutOfRange {
                entity: "position",
                field: "width"
            })
        );

        let mut monitor = monitor_json();
        monitor["dpi"] = json!(-96);
        assert!(matches!(
            Monitor::from_json(&monitor),
            Err(DecodeError::OutOfRange { field: "dpi", .. })
        ));
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            MonitorRect::from_json(&json!([1, 2, 3, 4])),
            Err(DecodeError::NotAnObject {
                entity: "monitor_rect"
            })
        );
    }

    #[test]
    fn test_application_without_position_defaults_to_zero() {
        let mut doc = app_json();
        doc.as_object_mut().unwrap().remove("position");

        let app = Application::from_json(&doc).unwrap();
        assert_eq!(app.position, Position::default());
        assert_eq!(app.position, Position::new(0, 0, 0, 0));
        assert_eq!(app.title, "App");
    }

    #[test]
    fn test_application_with_malformed_position_fails() {
        let mut doc = app_json();
        doc["position"] = json!({"X": 1, "Y": 2});

        let err = Application::from_json(&doc).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Nested {
                entity: "application",
                field: "position",
                ..
            }
        ));
        assert_eq!(
            err.root_cause(),
            &DecodeError::MissingField {
                entity: "position",
                field: "width"
            }
        );
    }

    #[test]
    fn test_application_missing_or_mistyped_required_fields_fail() {
        for field in [
            "hwnd",
            "application",
            "title",
            "command-line-arguments",
            "minimized",
            "maximized",
            "monitor",
        ] {
            let mut doc = app_json();
            doc.as_object_mut().unwrap().remove(field);
            assert!(
                Application::from_json(&doc).is_err(),
                "missing '{}' should fail",
                field
            );
        }

        let mut doc = app_json();
        doc["minimized"] = json!(0);
        assert!(matches!(
            Application::from_json(&doc),
            Err(DecodeError::TypeMismatch {
                field: "minimized",
                expected: FieldKind::Bool,
                ..
            })
        ));
    }

    #[test]
    fn test_application_hwnd_as_float_and_negative() {
        let mut doc = app_json();
        doc["hwnd"] = json!(132306.0);
        assert_eq!(
            Application::from_json(&doc).unwrap().handle,
            WindowHandle::new(132306)
        );

        doc["hwnd"] = json!(-4242);
        assert_eq!(Application::from_json(&doc).unwrap().handle.raw(), -4242);
    }

    #[test]
    fn test_application_encodes_wire_names() {
        let encoded = sample_app("notes.txt", 1).to_json();
        assert_eq!(encoded["hwnd"], 0x0002_04D2);
        assert_eq!(encoded["application"], r"C:\Windows\System32\notepad.exe");
        assert_eq!(encoded["title"], "notes.txt");
        assert_eq!(encoded["command-line-arguments"], "--new-window");
        assert_eq!(encoded["minimized"], false);
        assert_eq!(encoded["maximized"], true);
        assert_eq!(encoded["monitor"], 1);
        assert_eq!(encoded["position"]["X"], -8);
    }

    #[test]
    fn test_monitor_missing_dpi_aware_rect_fails() {
        let mut doc = monitor_json();
        doc.as_object_mut().unwrap().remove("monitor-rect-dpi-aware");

        assert_eq!(
            Monitor::from_json(&doc),
            Err(DecodeError::MissingField {
                entity: "monitor",
                field: "monitor-rect-dpi-aware"
            })
        );
    }

    #[test]
    fn test_monitor_malformed_dpi_unaware_rect_fails() {
        let mut doc = monitor_json();
        doc["monitor-rect-dpi-unaware"] = json!({"top": 0, "left": 0, "width": "wide", "height": 1});

        let err = Monitor::from_json(&doc).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Nested {
                field: "monitor-rect-dpi-unaware",
                ..
            }
        ));
    }

    #[test]
    fn test_monitor_encodes_wire_names() {
        let encoded = sample_monitor(1).to_json();
        assert_eq!(encoded["monitor-number"], 1);
        assert_eq!(encoded["dpi"], 144);
        assert_eq!(encoded["monitor-rect-dpi-aware"]["left"], 1920);
        assert_eq!(encoded["monitor-rect-dpi-unaware"]["left"], 1280);
        assert!(encoded["instance-id"].is_string());
    }

    #[test]
    fn test_project_without_last_launched_time() {
        let mut project = sample_project();
        project.last_launched_time = None;

        let encoded = project.to_json();
        assert!(encoded.get("last-launched-time").is_none());

        let decoded = Project::from_json(&encoded).unwrap();
        assert_eq!(decoded.last_launched_time, None);
    }

    #[test]
    fn test_project_with_last_launched_time() {
        let mut doc = project_json();
        doc["last-launched-time"] = json!(1700000500);
        let project = Project::from_json(&doc).unwrap();
        assert_eq!(project.last_launched_time, Some(1700000500));
        assert_eq!(project.creation_time, 1700000000);
    }

    #[test]
    fn test_project_drops_malformed_application() {
        let mut broken = app_json();
        broken.as_object_mut().unwrap().remove("application");
        let mut doc = project_json();
        doc["applications"] = json!([app_json(), broken]);

        let decoded = Project::decode_with_report(&doc).unwrap();
        assert_eq!(decoded.value.apps.len(), 1);
        assert_eq!(decoded.value.apps[0].title, "App");
        assert_eq!(decoded.report.dropped_count(), 1);
        assert_eq!(decoded.report.dropped[0].path, "applications[1]");
        assert_eq!(
            decoded.report.dropped[0].error,
            DecodeError::MissingField {
                entity: "application",
                field: "application"
            }
        );
    }

    #[test]
    fn test_project_drops_bad_monitors_and_non_objects_in_order() {
        let mut no_rect = monitor_json();
        no_rect.as_object_mut().unwrap().remove("monitor-rect-dpi-unaware");
        let mut second = monitor_json();
        second["id"] = json!("DISPLAY2");

        let mut doc = project_json();
        doc["monitor-configuration"] = json!([monitor_json(), no_rect, 7, second]);

        let decoded = Project::decode_with_report(&doc).unwrap();
        let ids: Vec<_> = decoded.value.monitors.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["DISPLAY1", "DISPLAY2"]);

        let paths: Vec<_> = decoded.report.dropped.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["monitor-configuration[1]", "monitor-configuration[2]"]
        );
    }

    #[test]
    fn test_project_required_scalars_fail_whole_project() {
        for field in ["id", "name", "creation-time", "is-shortcut-needed"] {
            let mut doc = project_json();
            doc.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(Project::from_json(&doc), Err(DecodeError::MissingField { field: f, .. }) if f == field),
                "missing '{}' should fail the project",
                field
            );
        }

        let mut doc = project_json();
        doc["creation-time"] = json!("yesterday");
        assert!(Project::from_json(&doc).is_err());
    }

    #[test]
    fn test_project_arrays_must_be_arrays() {
        let mut doc = project_json();
        doc.as_object_mut().unwrap().remove("applications");
        assert!(matches!(
            Project::from_json(&doc),
            Err(DecodeError::MissingField {
                field: "applications",
                ..
            })
        ));

        let mut doc = project_json();
        doc["monitor-configuration"] = json!({});
        assert!(matches!(
            Project::from_json(&doc),
            Err(DecodeError::TypeMismatch {
                field: "monitor-configuration",
                expected: FieldKind::Array,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_projects_list() {
        let list = ProjectsList::from_json(&json!({"projects": []})).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_entirely_invalid_projects_decode_to_empty_list() {
        let doc = json!({"projects": [1, "two", {"id": "no-name"}]});
        let decoded = ProjectsList::decode_with_report(&doc).unwrap();
        assert!(decoded.value.is_empty());
        assert_eq!(decoded.report.dropped_count(), 3);
    }

    #[test]
    fn test_projects_list_reports_nested_paths() {
        let mut broken_app = app_json();
        broken_app["title"] = json!(null);
        let mut project = project_json();
        project["applications"] = json!([broken_app, app_json()]);
        let mut bad_project = project_json();
        bad_project.as_object_mut().unwrap().remove("name");

        let doc = json!({"projects": [bad_project, project]});
        let decoded = ProjectsList::decode_with_report(&doc).unwrap();

        assert_eq!(decoded.value.len(), 1);
        assert_eq!(decoded.value.projects[0].apps.len(), 1);
        let paths: Vec<_> = decoded.report.dropped.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["projects[0]", "projects[1].applications[0]"]);
    }

    #[test]
    fn test_projects_list_requires_projects_array() {
        assert!(ProjectsList::from_json(&json!({})).is_err());
        assert!(ProjectsList::from_json(&json!({"projects": {}})).is_err());
        assert!(ProjectsList::from_json(&json!([])).is_err());
    }

    #[test]
    fn test_unknown_fields() {
        let mut doc = app_json();
        doc["z-order"] = json!(3);
        assert_eq!(
            unknown_fields(&doc, schema::application::FIELDS),
            vec!["z-order".to_string()]
        );
        assert!(unknown_fields(&json!(3), schema::application::FIELDS).is_empty());
    }

    #[test]
    fn test_unknown_field_paths_walks_document() {
        let mut app = app_json();
        app["position"]["Z"] = json!(1);
        let doc = json!({
            "version": 2,
            "projects": [{
                "id": "p", "name": "n", "creation-time": 1,
                "is-shortcut-needed": false, "pinned": true,
                "monitor-configuration": [],
                "applications": [app]
            }]
        });

        assert_eq!(
            unknown_field_paths(&doc),
            vec![
                "version".to_string(),
                "projects[0].pinned".to_string(),
                "projects[0].applications[0].position.Z".to_string(),
            ]
        );
    }
}
