use catalog::DEFAULT_CATEGORIES;
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("At least one catalog category must be selected")]
    NoCategories,
    #[error("Duplicate configuration entry for catalog category '{0}'")]
    DuplicateCategory(String),
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub name: Option<String>,
    /// Directory holding `<category>.txt` catalogs
    pub catalog_dir: Option<PathBuf>,
    #[serde(alias = "category")]
    pub categories: Vec<String>,
    /// Name filter criterion
    pub filter: Option<String>,
    pub plot: Option<PlotConfig>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlotConfig {
    pub output: PathBuf,
    #[serde(default)]
    pub format: PlotFormat,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlotFormat {
    /// Whitespace-separated `longitude latitude` lines
    #[default]
    Text,
    /// JSON array of points
    Json,
}

/// Command line values that take precedence over the config file
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Overrides {
    pub catalog_dir: Option<PathBuf>,
    pub categories: Vec<String>,
    pub filter: Option<String>,
    pub plot_output: Option<PathBuf>,
    pub plot_format: Option<PlotFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            catalog_dir: None,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            filter: None,
            plot: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_str_checked(&content)
    }

    pub fn from_str_checked(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut names = HashSet::new();
        for name in self.categories.iter() {
            if !names.insert(name) {
                return Err(ConfigError::DuplicateCategory(name.clone()));
            }
        }

        Ok(())
    }

    pub fn apply_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if overrides.catalog_dir.is_some() {
            self.catalog_dir = overrides.catalog_dir;
        }
        if !overrides.categories.is_empty() {
            self.categories = overrides.categories;
        }
        if overrides.filter.is_some() {
            self.filter = overrides.filter;
        }

        let format = overrides.plot_format;
        self.plot = match (overrides.plot_output, self.plot) {
            (Some(output), plot) => Some(PlotConfig {
                output,
                format: format.or(plot.map(|p| p.format)).unwrap_or_default(),
            }),
            (None, Some(plot)) => Some(PlotConfig {
                format: format.unwrap_or(plot.format),
                ..plot
            }),
            (None, None) => None,
        };

        self.validate()?;
        Ok(self)
    }

    /// Catalog directory, the working directory when unset
    pub fn catalog_dir(&self) -> &Path {
        self.catalog_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}
