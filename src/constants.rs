//! Application constants for the SMN weather feed
//!
//! Feed endpoint defaults, the column layout of the station feed, the
//! literal markers the feed uses for missing values, and the names of the
//! display artifacts written for the selected station.

// =============================================================================
// Feed Endpoint
// =============================================================================

/// Base URL of the open-data zip endpoint; the dataset id is appended verbatim
pub const DEFAULT_FEED_BASE_URL: &str = "https://ssl.smn.gob.ar/dpd/zipopendata.php?dato=";

/// Dataset id of the "current weather per station" feed
pub const DEFAULT_DATASET: &str = "tiepre";

/// HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Polling
// =============================================================================

/// Station selected for display in the reference deployment
pub const DEFAULT_STATION: &str = "Buenos Aires";

/// Delay between poll cycles, applied after successes and failures alike
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Feed Layout
// =============================================================================

/// Field delimiter within a feed line
pub const FIELD_DELIMITER: char = ';';

/// Number of characters every feed line carries after its last field
pub const LINE_SUFFIX_LEN: usize = 2;

/// Column positions within a split feed line
pub mod columns {
    pub const STATION: usize = 0;
    pub const DATE: usize = 1;
    pub const TIME: usize = 2;
    pub const WEATHER: usize = 3;
    pub const TEMPERATURE: usize = 5;
    pub const FEELS_LIKE: usize = 6;
    pub const HUMIDITY: usize = 7;
}

// =============================================================================
// Feed Markers
// =============================================================================

/// Placeholder for a value the station did not report
pub const MISSING_VALUE: &str = "---";

/// Substring marking a derived value the producer did not compute
pub const NOT_CALCULATED: &str = "No se calcula";

/// Label used wherever a value is absent
pub const UNAVAILABLE_LABEL: &str = "No disponible";

// =============================================================================
// Display Artifacts
// =============================================================================

/// File name prefixes, completed with `_<station slug>.txt`
pub mod artifacts {
    pub const TEMPERATURE: &str = "temperatura_actual";
    pub const FEELS_LIKE: &str = "sensacion_termica";
    pub const HUMIDITY: &str = "humedad";
    pub const WEATHER_CODE: &str = "estado_clima";
    pub const LAST_UPDATED: &str = "ultima_actualizacion";
}

/// Prefix of the human-readable last-updated line
pub const LAST_UPDATED_PREFIX: &str = "Última actualización:";

// =============================================================================
// Configuration Files
// =============================================================================

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "smn-weather";

pub const CONFIG_FILE_NAME: &str = "config.toml";
