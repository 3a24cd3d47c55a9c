// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod resource_reader;

// Re-exports
pub use config::{HandlerConfig, DEFAULT_RESOURCE_PATH};
pub use logging::init_logging;
pub use resource_reader::{FileResourceReader, ResourceReadError, ResourceReader};
