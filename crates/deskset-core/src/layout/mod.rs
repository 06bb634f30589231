mod codec;
mod errors;
pub mod schema;
mod types;

pub use codec::{
    DecodeReport, Decoded, DroppedElement, JsonCodec, unknown_field_paths, unknown_fields,
};
pub use errors::DecodeError;
pub use types::{
    Application, Bounds, DanglingMonitorRef, Monitor, MonitorHandle, MonitorRect, Position,
    Project, ProjectsList, WindowHandle,
};
