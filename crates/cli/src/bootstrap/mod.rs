pub mod config;
pub mod log_file;
pub mod logging;

pub use config::load_config;
pub use log_file::init_tailer;
pub use logging::init_logging;
