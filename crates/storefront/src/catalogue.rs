//! Catalogue resource loading.
//!
//! The catalogue is read exactly once per process, either with an HTTP GET
//! (`reqwest`) or from a local file. Any failure is reported to the caller;
//! there is no retry.

use std::fmt;
use std::path::PathBuf;

use menu_cart_core::{Catalogue, CatalogueError};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Where the catalogue JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    /// Fetched with an HTTP GET.
    Url(Url),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl CatalogueSource {
    /// Interpret a string as a URL when it has an `http` or `https` scheme,
    /// otherwise as a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the string looks like an HTTP URL but does not
    /// parse as one.
    pub fn parse(source: &str) -> Result<Self, url::ParseError> {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            return Url::parse(source).map(Self::Url);
        }
        Ok(Self::File(PathBuf::from(source)))
    }
}

impl fmt::Display for CatalogueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that can occur while loading the catalogue.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error. Status: {0}")]
    Status(reqwest::StatusCode),

    /// The catalogue file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The body was not a valid catalogue.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

/// Read and parse the catalogue from `source`.
///
/// # Errors
///
/// Returns [`LoadError`] on network failure, a non-2xx status, an unreadable
/// file, or a malformed body.
#[instrument(skip(client), fields(source = %source))]
pub async fn load(
    source: &CatalogueSource,
    client: &reqwest::Client,
) -> Result<Catalogue, LoadError> {
    let body = match source {
        CatalogueSource::Url(url) => {
            let response = client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status));
            }
            response.bytes().await?.to_vec()
        }
        CatalogueSource::File(path) => {
            tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?
        }
    };

    debug!(bytes = body.len(), "Catalogue resource read");
    Ok(Catalogue::from_json(&body)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    use super::*;

    const BODY: &str = r#"[
        {"id": 1, "name": "Espresso", "price": 3.5, "description": "Short", "imgUrl": "e.png"}
    ]"#;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_parse_source() {
        assert!(matches!(
            CatalogueSource::parse("https://example.com/catalogue.json").unwrap(),
            CatalogueSource::Url(_)
        ));
        assert_eq!(
            CatalogueSource::parse("static/catalogue.json").unwrap(),
            CatalogueSource::File(PathBuf::from("static/catalogue.json"))
        );
        assert!(CatalogueSource::parse("http://").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("catalogue-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, BODY).await.unwrap();

        let catalogue = load(&CatalogueSource::File(path.clone()), &reqwest::Client::new())
            .await
            .unwrap();
        assert_eq!(catalogue.len(), 1);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let err = load(&CatalogueSource::File(path), &reqwest::Client::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let base = serve(Router::new().route("/catalogue.json", get(|| async { BODY }))).await;
        let source = CatalogueSource::parse(&format!("{base}/catalogue.json")).unwrap();

        let catalogue = load(&source, &reqwest::Client::new()).await.unwrap();
        assert_eq!(catalogue.iter().next().unwrap().name, "Espresso");
    }

    #[tokio::test]
    async fn test_load_non_success_status() {
        let base = serve(Router::new().route(
            "/catalogue.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        ))
        .await;
        let source = CatalogueSource::parse(&format!("{base}/catalogue.json")).unwrap();

        let err = load(&source, &reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(err, LoadError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(err.to_string(), "HTTP error. Status: 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_load_malformed_body() {
        let base = serve(Router::new().route("/catalogue.json", get(|| async { "not json" }))).await;
        let source = CatalogueSource::parse(&format!("{base}/catalogue.json")).unwrap();

        let err = load(&source, &reqwest::Client::new()).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Catalogue(CatalogueError::Malformed(_))
        ));
    }
}
