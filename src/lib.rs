pub mod collect;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod listing;
pub mod matcher;

pub use collect::{collect_from_roots, collect_matching_files, collect_with_options};
pub use config::{DEFAULT_IMAGE_SUFFIXES, ScanOptions, SortOrder};
pub use error::ScanError;
pub use filesystem::{ScanOutcome, Walker};
pub use listing::MatchedFile;
pub use matcher::SuffixMatcher;
