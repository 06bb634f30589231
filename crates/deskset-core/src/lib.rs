//! Desktop layout snapshots: the data model, its JSON schema and the
//! projects file that stores them.

pub mod errors;
pub mod events;
pub mod layout;
pub mod logging;
pub mod store;

pub use errors::DesksetError;
pub use layout::{
    Application, DecodeError, DecodeReport, Decoded, JsonCodec, Monitor, MonitorRect, Position,
    Project, ProjectsList, WindowHandle,
};
pub use logging::init_logging;
pub use store::{LoadedProjects, StoreError};
