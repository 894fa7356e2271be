use std::time::Duration;

use super::{AssetError, AssetSource};

/// Default request timeout for remote assets.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves raw bytes for an [`AssetSource`].
pub trait Fetcher {
    fn fetch(&self, source: &AssetSource) -> Result<Vec<u8>, AssetError>;
}

/// Fetches URLs over HTTP(S) and files from the local filesystem.
pub struct NetFetcher {
    client: reqwest::blocking::Client,
}

impl NetFetcher {
    pub fn new() -> Result<Self, AssetError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AssetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| AssetError::Http { url: String::new(), source })?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let http = |source| AssetError::Http { url: url.to_string(), source };

        let response = self.client.get(url).send().map_err(http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().map_err(http)?;
        log::debug!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

impl Fetcher for NetFetcher {
    fn fetch(&self, source: &AssetSource) -> Result<Vec<u8>, AssetError> {
        match source {
            AssetSource::Url(url) => self.get(url),
            AssetSource::File(path) => std::fs::read(path).map_err(|source| AssetError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let fetcher = NetFetcher::new().unwrap();
        let path = std::env::temp_dir().join("turntable-missing-asset.gltf");
        let err = fetcher.fetch(&AssetSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, AssetError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn local_file_is_read() {
        let path = std::env::temp_dir().join(format!("turntable-fetch-{}.bin", std::process::id()));
        std::fs::write(&path, b"abc").unwrap();
        let bytes = NetFetcher::new().unwrap().fetch(&AssetSource::File(path.clone())).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(bytes, b"abc");
    }
}
