/// Asynchronous OBJ loading from URLs or local files
use std::path::{Path, PathBuf};

use crate::geometry::Geometry;
use crate::obj::{self, ObjError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] ObjError),
}

/// GET `url` and return the full response body
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response.text().await?)
}

/// Fetch and decode an OBJ file over HTTP
pub async fn fetch_obj(url: &str) -> Result<Geometry, LoadError> {
    let text = fetch_text(url).await?;
    let geometry = obj::decode(&text)?;
    log::info!(
        "loaded {url}: {} vertices, {} faces",
        geometry.vertex.len(),
        geometry.tris.len()
    );
    Ok(geometry)
}

/// Read and decode a local OBJ file
pub async fn read_obj(path: impl AsRef<Path>) -> Result<Geometry, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let geometry = obj::decode(&text)?;
    log::info!(
        "loaded {}: {} vertices, {} faces",
        path.display(),
        geometry.vertex.len(),
        geometry.tris.len()
    );
    Ok(geometry)
}

/// Load from `source`, fetching `http(s)://` URLs and reading anything else
/// as a path.
///
/// Dropping the future cancels the load. There is no retry and no timeout
/// beyond the HTTP client's defaults.
pub async fn load_obj(source: &str) -> Result<Geometry, LoadError> {
    if is_url(source) {
        fetch_obj(source).await
    } else {
        read_obj(source).await
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
