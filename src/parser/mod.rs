pub mod changelog;
pub mod markers;

pub use changelog::{
    changelog_file_name, keep_only_changes, validate_minor_version, MinorVersionError,
};
pub use markers::{headings, HeadingOccurrence, MarkerOccurrence, MarkerScanner, ScanResult};
