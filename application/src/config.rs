//! [`Config`]-related definitions.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{domain::catalog::Location, read};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Catalog endpoint configuration.
    pub catalog: Catalog,

    /// Display configuration.
    pub display: Display,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Returns the [`service::Config`] part of this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        service::Config {
            location: Location {
                postcode: self.catalog.postcode.clone().into(),
                area: self.catalog.area.clone().into(),
            },
            hide_forbidden: self.display.hide_forbidden,
        }
    }
}

/// Catalog endpoint configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Base URL of the skip catalog endpoint.
    #[default("https://app.wewantwaste.co.uk/api/skips".to_owned())]
    pub endpoint: String,

    /// Postcode the catalog is scoped to.
    #[default("NR32".to_owned())]
    pub postcode: String,

    /// Area name the catalog is scoped to.
    #[default("Lowestoft".to_owned())]
    pub area: String,
}

/// Display configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Display {
    /// Naming scheme of category labels.
    pub labels: Labels,

    /// Indicator whether skips marked as forbidden upstream are hidden from
    /// the rendered catalog.
    ///
    /// Upstream data carries the flag on every record, while the booking
    /// flow renders flagged skips anyway, so rendering them is the default.
    #[default(false)]
    pub hide_forbidden: bool,
}

/// Naming scheme of category labels.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Labels {
    /// Project-oriented labels (`Small Projects`, `Medium Projects`, ...).
    #[default]
    Projects,

    /// Sector-oriented labels (`Residential`, `Commercial`, `Industrial`).
    Sectors,
}

impl From<Labels> for read::skip::Labels {
    fn from(value: Labels) -> Self {
        match value {
            Labels::Projects => Self::Projects,
            Labels::Sectors => Self::Sectors,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
