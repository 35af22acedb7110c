pub mod environment;
pub mod paths;
pub mod terminal;
pub mod text;

pub use environment::get_claude_dir;
pub use paths::{
    format_path_with_tilde, guess_project_path, project_dir, project_dir_name, projects_dir,
    sessions_index_path,
};
