use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::{coordinates::GeoCoordinate, frame::FrameKind, location::DEFAULT_ENDPOINT};

/// Configuration for the application.
#[derive(Default, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub frame: FrameConfig,
    pub location: LocationConfig,
    pub data: DataConfig,
    pub view: ViewConfig,
}

/// Configuration for the reference frame.
#[derive(Default, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    pub kind: FrameKind,
}

/// Configuration for locating the observer.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    pub provider: LocationProviderKind,
    /// Position reported by the `fixed` provider.
    pub position: GeoCoordinate,
    /// Endpoint queried by the `ip` provider.
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProviderKind {
    Fixed,
    #[default]
    Ip,
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: LocationProviderKind::default(),
            position: GeoCoordinate::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout_secs: 10,
        }
    }
}

/// Configuration for the star and constellation datasets.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// A directory, or an `http(s)://` base URL.
    pub base: String,
    pub cache_dir: PathBuf,
    pub cache_lifetime_min: u64,
    pub timeout_secs: u64,
}

impl DataConfig {
    /// Returns `true` if the datasets are downloaded rather than read from disk.
    pub fn is_remote(&self) -> bool {
        self.base.starts_with("http://") || self.base.starts_with("https://")
    }

    pub fn cache_lifetime(&self) -> Duration {
        Duration::from_secs(self.cache_lifetime_min.saturating_mul(60))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base: "data".to_owned(),
            cache_dir: std::env::temp_dir().join("skychart"),
            cache_lifetime_min: 24 * 60,
            timeout_secs: 30,
        }
    }
}

/// Configuration for the emitted view snapshots.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Rotation of the view about its center, in degrees.
    pub orientation: f64,
    /// Seconds between snapshots. `0` emits a single snapshot.
    pub refresh_secs: u64,
    /// Offset of the simulated time from the current time, in minutes.
    pub time_offset_min: i64,
    /// Number of brightest stars listed in a snapshot.
    pub brightest: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            orientation: 0.0,
            refresh_secs: 0,
            time_offset_min: 0,
            brightest: 5,
        }
    }
}
