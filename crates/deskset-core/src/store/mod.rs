mod errors;
mod persistence;

pub use errors::StoreError;
pub use persistence::{
    LoadedProjects, PROJECTS_FILE_ENV, load_projects, load_projects_from, projects_file_path,
    save_projects, save_projects_to, test_helpers,
};
