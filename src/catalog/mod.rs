//! Static star and constellation datasets.

mod file;
mod geojson;
mod http;

use std::path::PathBuf;

use serde::Serialize;
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::spectrum::Rgb;

pub use file::FileProvider;
pub use geojson::{
    ConstellationProperties, Feature, FeatureCollection, FeatureId, Geometry, Position,
    StarProperties,
};
pub use http::HttpProvider;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to fetch {dataset}: HTTP {status}")]
    Status { dataset: Dataset, status: u16 },
    #[error("failed to parse {dataset}: {source}")]
    Parse {
        dataset: Dataset,
        source: serde_json::Error,
    },
}

/// The datasets a sky chart is drawn from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Dataset {
    /// Stars down to magnitude 6.
    Stars,
    /// Constellation boundary polygons.
    Constellations,
    /// Constellation stick figures.
    ConstellationLines,
}

impl Dataset {
    /// Returns the file name the dataset is published under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Stars => "stars.6.min.geojson",
            Dataset::Constellations => "constellations.min.geojson",
            Dataset::ConstellationLines => "constellations.lines.min.geojson",
        }
    }
}

/// A capability that loads the raw GeoJSON text of a dataset.
pub trait FeatureDataProvider {
    fn load(&self, dataset: Dataset) -> impl Future<Output = Result<String, CatalogError>> + Send;
}

/// The data provider selected by configuration.
#[derive(Debug)]
pub enum DataSource {
    File(FileProvider),
    Http(HttpProvider),
}

impl FeatureDataProvider for DataSource {
    async fn load(&self, dataset: Dataset) -> Result<String, CatalogError> {
        match self {
            DataSource::File(provider) => provider.load(dataset).await,
            DataSource::Http(provider) => provider.load(dataset).await,
        }
    }
}

/// The loaded datasets.
///
/// A `Catalog` only exists once every dataset has been loaded and parsed, and
/// is never modified afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub stars: FeatureCollection<StarProperties>,
    pub constellations: FeatureCollection<ConstellationProperties>,
    pub constellation_lines: FeatureCollection<ConstellationProperties>,
}

/// Counts of loaded features and the brightest stars.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CatalogSummary {
    pub stars: usize,
    pub constellations: usize,
    pub constellation_lines: usize,
    pub brightest: Vec<StarSummary>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StarSummary {
    pub name: Option<String>,
    pub mag: f64,
    pub color: Option<Rgb>,
}

impl Catalog {
    /// Loads all datasets concurrently from `provider`.
    pub async fn load(provider: &impl FeatureDataProvider) -> Result<Self, CatalogError> {
        let (stars, constellations, constellation_lines) = futures::try_join!(
            provider.load(Dataset::Stars),
            provider.load(Dataset::Constellations),
            provider.load(Dataset::ConstellationLines),
        )?;

        let catalog = Self {
            stars: parse(Dataset::Stars, &stars)?,
            constellations: parse(Dataset::Constellations, &constellations)?,
            constellation_lines: parse(Dataset::ConstellationLines, &constellation_lines)?,
        };
        log::info!(
            "Loaded {} stars, {} constellations and {} constellation figures",
            catalog.stars.len(),
            catalog.constellations.len(),
            catalog.constellation_lines.len()
        );
        Ok(catalog)
    }

    /// Returns the stars brighter than (or as bright as) magnitude `mag`.
    pub fn stars_brighter_than(&self, mag: f64) -> impl Iterator<Item = &Feature<StarProperties>> {
        self.stars
            .features
            .iter()
            .filter(move |star| star.properties.mag <= mag)
    }

    /// Returns the `count` brightest stars, brightest first.
    pub fn brightest(&self, count: usize) -> Vec<&Feature<StarProperties>> {
        let mut stars: Vec<_> = self.stars.features.iter().collect();
        stars.sort_by(|a, b| a.properties.mag.total_cmp(&b.properties.mag));
        stars.truncate(count);
        stars
    }

    pub fn summary(&self, brightest: usize) -> CatalogSummary {
        CatalogSummary {
            stars: self.stars.len(),
            constellations: self.constellations.len(),
            constellation_lines: self.constellation_lines.len(),
            brightest: self
                .brightest(brightest)
                .into_iter()
                .map(|star| StarSummary {
                    name: star.properties.name.clone(),
                    mag: star.properties.mag,
                    color: star.properties.color(),
                })
                .collect(),
        }
    }
}

fn parse<P>(dataset: Dataset, json: &str) -> Result<FeatureCollection<P>, CatalogError>
where
    P: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { dataset, source })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub const STARS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "id": 24436, "properties": {"name": "Rigel", "mag": 0.18, "bv": "-0.03"},
         "geometry": {"type": "Point", "coordinates": [78.6345, -8.2016]}},
        {"type": "Feature", "id": 32349, "properties": {"name": "Sirius", "mag": -1.44, "bv": "0.009"},
         "geometry": {"type": "Point", "coordinates": [101.2885, -16.7131]}},
        {"type": "Feature", "id": 27989, "properties": {"name": "Betelgeuse", "mag": 0.45, "bv": "1.5"},
         "geometry": {"type": "Point", "coordinates": [88.7929, 7.4071]}},
        {"type": "Feature", "id": 1, "properties": {"mag": 5.9},
         "geometry": {"type": "Point", "coordinates": [0.0, 1.0]}}
    ]}"#;

    pub const CONSTELLATIONS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "id": "Ori", "properties": {"name": "Orion"},
         "geometry": {"type": "Polygon", "coordinates": [[[70.0, -11.0], [95.0, -11.0], [95.0, 22.0], [70.0, 22.0], [70.0, -11.0]]]}}
    ]}"#;

    pub const LINES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "id": "Ori", "properties": {},
         "geometry": {"type": "MultiLineString", "coordinates": [[[88.79, 7.41], [81.28, 6.35]]]}}
    ]}"#;

    /// Serves datasets from memory.
    pub struct MemoryProvider(pub HashMap<Dataset, &'static str>);

    impl MemoryProvider {
        pub fn sample() -> Self {
            Self(HashMap::from([
                (Dataset::Stars, STARS),
                (Dataset::Constellations, CONSTELLATIONS),
                (Dataset::ConstellationLines, LINES),
            ]))
        }
    }

    impl FeatureDataProvider for MemoryProvider {
        async fn load(&self, dataset: Dataset) -> Result<String, CatalogError> {
            self.0
                .get(&dataset)
                .map(|json| json.to_string())
                .ok_or(CatalogError::Status {
                    dataset,
                    status: 404,
                })
        }
    }

    #[tokio::test]
    async fn loads_all_datasets() {
        let catalog = Catalog::load(&MemoryProvider::sample()).await.unwrap();
        assert_eq!(catalog.stars.len(), 4);
        assert_eq!(catalog.constellations.len(), 1);
        assert_eq!(catalog.constellation_lines.len(), 1);
        assert_eq!(
            catalog.constellations.features[0].id,
            Some(FeatureId::Name("Ori".into()))
        );
    }

    #[tokio::test]
    async fn missing_dataset_fails() {
        let mut provider = MemoryProvider::sample();
        provider.0.remove(&Dataset::ConstellationLines);
        let err = Catalog::load(&provider).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Status {
                dataset: Dataset::ConstellationLines,
                status: 404
            }
        ));
    }

    #[tokio::test]
    async fn malformed_dataset_names_the_dataset() {
        let mut provider = MemoryProvider::sample();
        provider.0.insert(Dataset::Constellations, "{\"features\": 3}");
        let err = Catalog::load(&provider).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Parse {
                dataset: Dataset::Constellations,
                ..
            }
        ));
        assert!(err.to_string().starts_with("failed to parse constellations"));
    }

    #[tokio::test]
    async fn brightest_stars_first() {
        let catalog = Catalog::load(&MemoryProvider::sample()).await.unwrap();
        let names: Vec<_> = catalog
            .brightest(3)
            .iter()
            .map(|star| star.properties.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, ["Sirius", "Rigel", "Betelgeuse"]);
        assert_eq!(catalog.stars_brighter_than(0.2).count(), 2);
    }

    #[tokio::test]
    async fn summary_includes_colors() {
        let catalog = Catalog::load(&MemoryProvider::sample()).await.unwrap();
        let summary = catalog.summary(2);
        assert_eq!(summary.stars, 4);
        assert_eq!(summary.brightest.len(), 2);
        assert_eq!(summary.brightest[0].name.as_deref(), Some("Sirius"));
        assert!(summary.brightest[0].color.is_some());
    }

    #[test]
    fn dataset_names() {
        assert_eq!(Dataset::ConstellationLines.to_string(), "constellation_lines");
        assert_eq!(
            Dataset::ConstellationLines.file_name(),
            "constellations.lines.min.geojson"
        );
    }
}
