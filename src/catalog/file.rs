use std::path::PathBuf;

use tokio::fs;

use super::{CatalogError, Dataset, FeatureDataProvider};

/// Reads datasets from a local directory.
#[derive(Clone, Debug)]
pub struct FileProvider {
    dir: PathBuf,
}

impl FileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FeatureDataProvider for FileProvider {
    async fn load(&self, dataset: Dataset) -> Result<String, CatalogError> {
        let path = self.dir.join(dataset.file_name());
        log::debug!("Reading {dataset} from {}", path.display());
        fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Read { path, source })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::{
        Catalog,
        tests::{CONSTELLATIONS, LINES, STARS},
    };

    #[tokio::test]
    async fn reads_datasets_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        for (dataset, json) in [
            (Dataset::Stars, STARS),
            (Dataset::Constellations, CONSTELLATIONS),
            (Dataset::ConstellationLines, LINES),
        ] {
            std::fs::write(temp_dir.path().join(dataset.file_name()), json).unwrap();
        }

        let catalog = Catalog::load(&FileProvider::new(temp_dir.path()))
            .await
            .unwrap();
        assert_eq!(catalog.stars.len(), 4);
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileProvider::new(temp_dir.path())
            .load(Dataset::Stars)
            .await
            .unwrap_err();
        match err {
            CatalogError::Read { path, .. } => {
                assert_eq!(path, temp_dir.path().join("stars.6.min.geojson"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
