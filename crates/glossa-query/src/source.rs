//! Where exported shards are read from.
//!
//! A [`ShardSource`] serves the runtime configuration and the shard files
//! written by the collection indexer. [`DirShardSource`] reads an assets
//! directory on disk; [`HttpShardSource`] fetches the same layout from the
//! assets base URL.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use glossa_collection::runtime::{
    collection_assets_dir, shard_path, shard_url_path, RuntimeConfig, COLLECTION_ASSETS_DIR,
    RUNTIME_CONFIG_FILE,
};
use glossa_core::Error as CoreError;

use crate::error::{Error, Result};

/// Source of exported index artifacts.
#[async_trait]
pub trait ShardSource: Send + Sync {
    /// Fetch the runtime configuration.
    async fn runtime_config(&self) -> Result<RuntimeConfig>;

    /// Fetch the JSON text of one shard.
    ///
    /// A missing shard is an error, never an empty shard.
    async fn fetch_shard(&self, language: &str, shard: &str) -> Result<String>;

    /// Location description for diagnostics.
    fn location(&self) -> String;
}

/// Reads shards from an assets directory.
#[derive(Debug, Clone)]
pub struct DirShardSource {
    root: PathBuf,
}

impl DirShardSource {
    /// Source rooted at the assets directory (the parent of `collection/`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Assets directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ShardSource for DirShardSource {
    async fn runtime_config(&self) -> Result<RuntimeConfig> {
        Ok(RuntimeConfig::read(&self.root).await?)
    }

    async fn fetch_shard(&self, language: &str, shard: &str) -> Result<String> {
        let path = shard_path(&self.root, language, shard);
        let data = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CoreError::io_with_path(e, &path))?;
        Ok(data)
    }

    fn location(&self) -> String {
        collection_assets_dir(&self.root).display().to_string()
    }
}

/// Fetches shards over HTTP from the assets base URL.
#[derive(Debug, Clone)]
pub struct HttpShardSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpShardSource {
    /// Source for an absolute assets base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Source using an existing client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Assets base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/collection/{language}/{shard}.json`.
    pub fn shard_url(&self, language: &str, shard: &str) -> String {
        format!("{}/{}", self.base_url, shard_url_path(language, shard))
    }

    /// `{base}/collection/config.json`.
    pub fn runtime_config_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url, COLLECTION_ASSETS_DIR, RUNTIME_CONFIG_FILE
        )
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ShardSource for HttpShardSource {
    async fn runtime_config(&self) -> Result<RuntimeConfig> {
        let text = self.get_text(&self.runtime_config_url()).await?;
        Ok(RuntimeConfig::from_json(&text)?)
    }

    async fn fetch_shard(&self, language: &str, shard: &str) -> Result<String> {
        self.get_text(&self.shard_url(language, shard)).await
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }
}

/// Returns `true` if `location` is an `http://` or `https://` URL.
pub fn is_http_location(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick an HTTP or directory source for a location string.
pub fn source_for(location: &str) -> Box<dyn ShardSource> {
    if is_http_location(location) {
        Box::new(HttpShardSource::new(location))
    } else {
        Box::new(DirShardSource::new(location))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ------------------------------------------------------------------------
    // Directory source
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_dir_source_reads_shard() {
        let temp_dir = TempDir::new().unwrap();
        let path = shard_path(temp_dir.path(), "en", "reg");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[0,1]").unwrap();

        let source = DirShardSource::new(temp_dir.path());
        assert_eq!(source.fetch_shard("en", "reg").await.unwrap(), "[0,1]");
    }

    #[tokio::test]
    async fn test_dir_source_missing_shard_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = DirShardSource::new(temp_dir.path());

        let err = source.fetch_shard("en", "reg").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("reg.json"));
    }

    #[tokio::test]
    async fn test_dir_source_missing_runtime_config() {
        let temp_dir = TempDir::new().unwrap();
        let err = DirShardSource::new(temp_dir.path())
            .runtime_config()
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    // ------------------------------------------------------------------------
    // HTTP source
    // ------------------------------------------------------------------------

    #[test]
    fn test_http_urls() {
        let source = HttpShardSource::new("https://example.com/assets/");
        assert_eq!(source.base_url(), "https://example.com/assets");
        assert_eq!(
            source.shard_url("zh-tw", "name.map"),
            "https://example.com/assets/collection/zh-tw/name.map.json"
        );
        assert_eq!(
            source.runtime_config_url(),
            "https://example.com/assets/collection/config.json"
        );
    }

    async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_http_source_fetches_shard() {
        let server = serve(
            "/assets/collection/en/reg.json",
            ResponseTemplate::new(200).set_body_string("[0,1,2]"),
        )
        .await;

        let source = HttpShardSource::new(format!("{}/assets/", server.uri()));
        assert_eq!(source.fetch_shard("en", "reg").await.unwrap(), "[0,1,2]");
    }

    #[tokio::test]
    async fn test_http_source_missing_shard_is_not_found() {
        let server = serve("/assets/collection/en/reg.json", ResponseTemplate::new(404)).await;

        let source = HttpShardSource::new(format!("{}/assets", server.uri()));
        let err = source.fetch_shard("en", "reg").await.unwrap_err();
        assert!(err.is_not_found());
        match err {
            Error::Status { url, status } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/assets/collection/en/reg.json"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_source_server_error() {
        let server = serve("/assets/collection/en/tag.json", ResponseTemplate::new(500)).await;

        let source = HttpShardSource::new(format!("{}/assets", server.uri()));
        let err = source.fetch_shard("en", "tag").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 500, .. }));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_http_source_runtime_config() {
        let site = glossa_collection::SiteConfig::from_toml_str(
            "[languages]\nenabled = [\"en\", \"ja\"]\n",
        )
        .unwrap();
        let mut runtime = RuntimeConfig::from_site(&site);
        runtime
            .language_index_keys
            .insert("ja".to_string(), vec!["reg".to_string(), "tag".to_string()]);

        let server = serve(
            "/assets/collection/config.json",
            ResponseTemplate::new(200).set_body_string(serde_json::to_string(&runtime).unwrap()),
        )
        .await;

        let source = source_for(&format!("{}/assets", server.uri()));
        let fetched = source.runtime_config().await.unwrap();
        assert_eq!(fetched, runtime);
        assert_eq!(fetched.index_keys("ja"), ["reg", "tag"]);

        let err = source.fetch_shard("ja", "reg").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_location_detection() {
        assert!(is_http_location("https://example.com/assets"));
        assert!(is_http_location("HTTP://example.com"));
        assert!(!is_http_location("dist/assets"));
        assert!(!is_http_location("/assets"));

        assert_eq!(source_for("dist/assets").location(), "dist/assets/collection");
        assert_eq!(source_for("https://x.test/a").location(), "https://x.test/a");
    }
}
