pub use crate::filter::{filter_by_name, NameFilter};
pub use crate::geometry::{derive_point, derive_points, fold_inclination, SkipReason};
pub use crate::parser::{parse_catalog, split_lines};
pub use crate::source::{load_categories, CatalogSource, DirectorySource, SourceError};

pub mod filter;
pub mod geometry;
pub mod parser;
pub mod source;

/// Categories loaded when the caller doesn't select any
pub const DEFAULT_CATEGORIES: &[&str] = &["active", "stations"];
pub const CATALOG_FILE_EXTENSION: &str = "txt";
