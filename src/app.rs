use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    catalog::{Catalog, CatalogSummary, DataSource, FileProvider, HttpProvider},
    clock::TimeState,
    config::{Config, LocationProviderKind, ViewConfig},
    coordinates::{Ecliptic, Equatorial, EulerAngle},
    frame::{FrameKind, ReferenceFrame},
    location::{FixedLocation, IpLocation, LocationSource},
    rotation::center_on,
    zenith::Zenith,
};

/// Application.
pub struct App {
    frame: ReferenceFrame,
    zenith: Zenith<LocationSource>,
    data: DataSource,
    clock: TimeState,
    view: ViewConfig,
}

/// What the sky looks like from the observer at one instant.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub time: DateTime<Utc>,
    pub frame: FrameKind,
    pub zenith: Equatorial,
    pub ecliptic: Ecliptic,
    /// Rotation that centers the view on the zenith.
    pub rotation: EulerAngle,
    pub catalog: CatalogSummary,
}

impl App {
    /// Creates a new `App` with the given configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let location: LocationSource = match config.location.provider {
            LocationProviderKind::Fixed => FixedLocation::new(config.location.position).into(),
            LocationProviderKind::Ip => {
                IpLocation::new(config.location.endpoint.clone(), config.location.timeout())
                    .context("failed to create geolocation client")?
                    .into()
            }
        };

        let data = if config.data.is_remote() {
            DataSource::Http(
                HttpProvider::new(
                    config.data.base.clone(),
                    config.data.cache_dir.clone(),
                    config.data.cache_lifetime(),
                    config.data.timeout(),
                )
                .context("failed to create dataset client")?,
            )
        } else {
            DataSource::File(FileProvider::new(&config.data.base))
        };

        let time_offset = chrono::Duration::try_minutes(config.view.time_offset_min)
            .filter(|offset| Utc::now().checked_add_signed(*offset).is_some())
            .context("view.time_offset_min out of range")?;

        Ok(Self {
            frame: ReferenceFrame::new(config.frame.kind),
            zenith: Zenith::new(location),
            data,
            clock: TimeState::with_offset(time_offset),
            view: config.view,
        })
    }

    /// Loads the catalog, then emits snapshots until done or interrupted.
    pub async fn run(&self) -> Result<()> {
        let catalog = Catalog::load(&self.data)
            .await
            .context("failed to load star catalog")?;

        if self.view.refresh_secs == 0 {
            return self.emit(&catalog).await;
        }

        let mut interval = tokio::time::interval(Duration::from_secs(self.view.refresh_secs));
        loop {
            tokio::select! {
                _ = interval.tick() => self.emit(&catalog).await?,
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Interrupted, exiting");
                    return Ok(());
                }
            }
        }
    }

    /// Returns the snapshot for the current simulation time.
    pub async fn snapshot(&self, catalog: &Catalog) -> Snapshot {
        let zenith = self.zenith.locate(&self.clock).await;
        Snapshot {
            time: self.clock.time(),
            frame: self.frame.kind(),
            zenith,
            ecliptic: zenith.to_ecliptic(self.frame.obliquity()),
            rotation: center_on(&self.frame, &zenith, self.view.orientation),
            catalog: catalog.summary(self.view.brightest),
        }
    }

    /// Writes a snapshot to stdout as a single JSON line.
    async fn emit(&self, catalog: &Catalog) -> Result<()> {
        let snapshot = self.snapshot(catalog).await;
        log::debug!("Zenith at {:?}", snapshot.zenith);

        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, &snapshot).context("failed to write snapshot")?;
        writeln!(stdout)?;
        Ok(())
    }
}
