mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{GeminiSettings, LoggingSettings, ScaffoldSettings, ServerSettings, Settings};
