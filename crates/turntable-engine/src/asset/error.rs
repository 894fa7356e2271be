use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("unsupported data URI (only base64 payloads are accepted)")]
    DataUri,

    #[error("bad base64 in data URI: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("buffer {index} holds {actual} bytes, {expected} declared")]
    BufferTooShort {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("buffer {0} uses the GLB binary chunk but the file has none")]
    MissingBlob(usize),

    #[error("asset contains no triangle geometry")]
    NoGeometry,

    #[error("asset loader thread exited without a result")]
    LoaderGone,
}
