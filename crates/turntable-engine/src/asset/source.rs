use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

/// Where an asset (or one of its buffers) lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    Url(String),
    File(PathBuf),
}

impl AssetSource {
    /// Resolves a URI found inside the asset relative to this source.
    ///
    /// URI reference rules apply: absolute URIs are kept, `/x` starts from
    /// the host (or filesystem) root, anything else replaces the last path
    /// segment. File results are percent-decoded, so `my%20mesh.bin` names
    /// `my mesh.bin` on disk.
    pub fn resolve(&self, uri: &str) -> AssetSource {
        let joined = self.base_url().and_then(|base| base.join(uri).ok());
        match joined {
            Some(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => AssetSource::File(path),
                Err(()) => self.join_plain(uri),
            },
            Some(url) => AssetSource::Url(url.into()),
            None => self.join_plain(uri),
        }
    }

    fn base_url(&self) -> Option<Url> {
        match self {
            AssetSource::Url(base) => Url::parse(base).ok(),
            AssetSource::File(path) => {
                let path = std::path::absolute(path).ok()?;
                Url::from_file_path(path).ok()
            }
        }
    }

    /// Last resort for bases that are not valid URLs.
    fn join_plain(&self, uri: &str) -> AssetSource {
        match self {
            AssetSource::Url(base) => {
                let dir = base.rfind('/').map_or("", |i| &base[..=i]);
                AssetSource::Url(format!("{dir}{uri}"))
            }
            AssetSource::File(path) => {
                let dir = path.parent().map(PathBuf::from).unwrap_or_default();
                AssetSource::File(dir.join(uri))
            }
        }
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Url(url) => f.write_str(url),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
