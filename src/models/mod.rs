pub mod config;
pub mod version;

pub use config::{ConfigError, NotesConfig, CONFIG_FILE_NAME};
pub use version::{FormatError, Version, VersionScheme, DEFAULT_VENDOR_TAG};
