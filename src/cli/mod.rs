pub mod commands;
pub mod logging;

pub use commands::{Cli, Commands, run};
pub use logging::init_logging;
