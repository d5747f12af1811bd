//! Where raw catalog text comes from
//!
//! Sources are synchronous and are not retried, a failed fetch ends the load.

use crate::{parser::parse_catalog, CATALOG_FILE_EXTENSION};
use elements::prelude::*;
use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Catalog category '{category}' not found in {location}")]
    MissingCategory { category: String, location: String },
    #[error("Failed to read catalog category '{category}' from '{}'", path.display())]
    Io {
        category: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait CatalogSource {
    /// The full catalog text of one category
    fn fetch(&mut self, category: &str) -> Result<String, SourceError>;
}

/// Reads `<dir>/<category>.txt`, the same layout CelesTrak serves its element sets in
#[derive(Clone, Debug)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn category_path(&self, category: &str) -> PathBuf {
        self.dir.join(format!("{category}.{CATALOG_FILE_EXTENSION}"))
    }
}

impl CatalogSource for DirectorySource {
    fn fetch(&mut self, category: &str) -> Result<String, SourceError> {
        let path = self.category_path(category);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::MissingCategory {
                category: category.to_owned(),
                location: format!("'{}'", self.dir.display()),
            },
            _ => SourceError::Io {
                category: category.to_owned(),
                path,
                source: e,
            },
        })
    }
}

/// In-memory catalog text keyed by category
impl CatalogSource for HashMap<String, String> {
    fn fetch(&mut self, category: &str) -> Result<String, SourceError> {
        self.get(category)
            .cloned()
            .ok_or_else(|| SourceError::MissingCategory {
                category: category.to_owned(),
                location: "the in-memory catalog".to_owned(),
            })
    }
}

/// Fetch and parse each category in turn, concatenating the records in call order
pub fn load_categories<S, C>(
    source: &mut S,
    categories: &[C],
) -> Result<Vec<ElementRecord>, SourceError>
where
    S: CatalogSource + ?Sized,
    C: AsRef<str>,
{
    let mut all_records = Vec::new();
    for category in categories {
        let category = category.as_ref();
        let text = source.fetch(category)?;
        let records = parse_catalog(&text);
        info!(
            category,
            records = records.len(),
            "Loaded element catalog category"
        );
        all_records.extend(records);
    }
    Ok(all_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const STATIONS: &str = indoc! {r#"ISS (ZARYA)
        1 25544U 98067A   23190.51782528  .00011589  00000+0  20945-3 0  9992
        2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.50230181405460
        "#};

    const ACTIVE: &str = indoc! {r#"NOAA 19
        1 33591U 09005A   23190.49537422  .00000177  00000+0  12131-3 0  9993
        2 33591  99.1002 212.1339 0013807 186.4524 173.6439 14.12781437737563
        GEO1
        1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991
        2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578
        "#};

    fn source() -> HashMap<String, String> {
        [("stations", STATIONS), ("active", ACTIVE)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn categories_are_concatenated_in_call_order() {
        let mut src = source();
        let records = load_categories(&mut src, &["active", "stations"]).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["NOAA 19", "GEO1", "ISS (ZARYA)"]);

        let records = load_categories(&mut src, &["stations", "active"]).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ISS (ZARYA)", "NOAA 19", "GEO1"]);
    }

    #[test]
    fn missing_category_is_fatal() {
        let mut src = source();
        let err = load_categories(&mut src, &["stations", "debris"]).unwrap_err();
        assert!(matches!(
            err,
            SourceError::MissingCategory { ref category, .. } if category == "debris"
        ));
    }

    #[test]
    fn no_categories() {
        let mut src = source();
        let categories: [&str; 0] = [];
        assert!(load_categories(&mut src, &categories).unwrap().is_empty());
    }

    #[test]
    fn directory_source_reads_category_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stations.txt"), STATIONS).unwrap();

        let mut src = DirectorySource::new(dir.path());
        assert_eq!(
            src.category_path("stations"),
            dir.path().join("stations.txt")
        );
        assert_eq!(src.fetch("stations").unwrap(), STATIONS);

        let err = src.fetch("active").unwrap_err();
        assert!(matches!(err, SourceError::MissingCategory { .. }));
        assert!(err.to_string().contains("'active'"));
    }
}
