use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::fs;

use super::{CatalogError, Dataset, FeatureDataProvider};

/// Downloads datasets over HTTP and caches them on disk.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
    cache_dir: PathBuf,
    cache_lifetime: Duration,
}

impl HttpProvider {
    /// Creates a new `HttpProvider`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - URL the dataset file names are appended to.
    /// * `cache_dir` - Directory downloaded datasets are cached in.
    /// * `cache_lifetime` - Duration for which the cache is considered valid.
    /// * `timeout` - Timeout of a single request.
    pub fn new(
        base_url: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
        cache_lifetime: Duration,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            cache_dir: cache_dir.into(),
            cache_lifetime,
        })
    }

    /// Fetches a dataset from the server.
    async fn fetch(&self, dataset: Dataset) -> Result<String, CatalogError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            dataset.file_name()
        );
        log::debug!("Fetching {dataset} from {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status {
                dataset,
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

impl FeatureDataProvider for HttpProvider {
    /// Returns the dataset.
    ///
    /// If cache is expired, fetches the dataset from the server. Otherwise,
    /// reads it from cache. A stale cache is used when the refresh fails.
    /// Failing to write the cache never fails the load.
    async fn load(&self, dataset: Dataset) -> Result<String, CatalogError> {
        let cache_path = self.cache_dir.join(dataset.file_name());

        let age = cache_age(&cache_path).await;
        if age.is_some_and(|age| age <= self.cache_lifetime) {
            log::debug!("Reading {dataset} from cache");
            match read_cache(&cache_path).await {
                Ok(json) => return Ok(json),
                Err(err) => log::warn!("Failed to read cached {dataset}: {err}"),
            }
        }

        match self.fetch(dataset).await {
            Ok(json) => {
                if let Err(err) = write_cache(&self.cache_dir, &cache_path, &json).await {
                    log::warn!(
                        "Failed to cache {dataset} at {}: {err}",
                        cache_path.display()
                    );
                }
                Ok(json)
            }
            Err(err) if age.is_some() => {
                log::warn!("Failed to refresh {dataset}, using stale cache: {err}");
                read_cache(&cache_path).await
            }
            Err(err) => Err(err),
        }
    }
}

/// Returns the time since the cache file was written, if it exists.
async fn cache_age(path: &Path) -> Option<Duration> {
    let modified = fs::metadata(path).await.ok()?.modified().ok()?;
    Some(modified.elapsed().unwrap_or_default())
}

async fn read_cache(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_cache(dir: &Path, path: &Path, json: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir).await?;
    fs::write(path, json).await
}
