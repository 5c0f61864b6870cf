//! Loading of the newline-delimited catalog lists (assets, stories, media).

use crate::assets::join_url;
use crate::error::{AssetBrowserError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("konofan-assets/", env!("CARGO_PKG_VERSION"));

/// The lists published next to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Assets,
    Stories,
    Videos,
    Music,
    Sounds,
}

impl Catalog {
    pub const ALL: [Catalog; 5] = [
        Catalog::Assets,
        Catalog::Stories,
        Catalog::Videos,
        Catalog::Music,
        Catalog::Sounds,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Catalog::Assets => "assets",
            Catalog::Stories => "stories",
            Catalog::Videos => "videos",
            Catalog::Music => "music",
            Catalog::Sounds => "sounds",
        }
    }

    pub fn list_file(&self) -> &'static str {
        match self {
            Catalog::Assets => "assets.txt",
            Catalog::Stories => "stories.txt",
            Catalog::Videos => "videos.txt",
            Catalog::Music => "music.txt",
            Catalog::Sounds => "sounds.txt",
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where catalog lists are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP(S) base URL
    Remote(Url),
    /// Local directory holding the list files
    Local(PathBuf),
}

impl DataSource {
    fn location(&self, file: &str) -> String {
        match self {
            DataSource::Remote(url) => join_url(url.as_str(), file),
            DataSource::Local(dir) => dir.join(file).display().to_string(),
        }
    }
}

impl FromStr for DataSource {
    type Err = AssetBrowserError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DataSource::Remote(Url::parse(s)?))
        } else if s.is_empty() {
            Err(AssetBrowserError::InvalidInput(
                "data source must not be empty".into(),
            ))
        } else {
            Ok(DataSource::Local(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::Local(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Network options for the catalog client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Number of retries after the first attempt (default: 2)
    pub retry_count: u32,
    /// Base delay between retries (exponential backoff)
    pub retry_delay: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retry_count: 2,
            retry_delay: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Outcome of a load that never fails: an empty list plus the error on failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub entries: Vec<String>,
    pub error: Option<String>,
}

impl CatalogLoad {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

enum AttemptError {
    Retriable(AssetBrowserError),
    Fatal(AssetBrowserError),
}

/// Client that fetches catalog lists and text resources once per call.
pub struct CatalogClient {
    client: reqwest::Client,
    source: DataSource,
    options: ClientOptions,
}

impl CatalogClient {
    pub fn new(source: DataSource, options: ClientOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            source,
            options,
        })
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load one catalog list.
    pub async fn load(&self, catalog: Catalog) -> Result<Vec<String>> {
        let location = self.source.location(catalog.list_file());
        tracing::debug!("Loading {} list from {}", catalog, location);

        let text = match &self.source {
            DataSource::Local(_) => read_local(catalog.name(), &location).await?,
            DataSource::Remote(_) => self.fetch_with_retry(catalog.name(), &location).await?,
        };

        let entries = parse_list(&text);
        tracing::debug!("Loaded {} {} entries", entries.len(), catalog);
        Ok(entries)
    }

    /// Load one catalog, turning a failure into an empty list plus an error indicator.
    pub async fn load_or_empty(&self, catalog: Catalog) -> CatalogLoad {
        match self.load(catalog).await {
            Ok(entries) => CatalogLoad {
                catalog,
                entries,
                error: None,
            },
            Err(e) => {
                tracing::error!("{}", e);
                CatalogLoad {
                    catalog,
                    entries: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Load every catalog concurrently.
    pub async fn load_all(&self) -> Vec<CatalogLoad> {
        let loads = Catalog::ALL.iter().map(|c| self.load_or_empty(*c));
        futures_util::future::join_all(loads).await
    }

    /// Fetch a single text resource (story script, text asset).
    ///
    /// `location` is an HTTP(S) URL or a local file path.
    pub async fn fetch_text(&self, location: &str) -> Result<String> {
        if location.starts_with("http://") || location.starts_with("https://") {
            self.fetch_with_retry("text", location).await
        } else {
            read_local("text", location).await
        }
    }

    /// Fetch with exponential backoff retry.
    async fn fetch_with_retry(&self, what: &str, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..=self.options.retry_count {
            if attempt > 0 {
                let delay = backoff_delay(self.options.retry_delay, attempt);
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(what, url).await {
                Ok(text) => return Ok(text),
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Retriable(e)) => {
                    if attempt < self.options.retry_count {
                        tracing::warn!(
                            "Retry {}/{} for {}: {}",
                            attempt + 1,
                            self.options.retry_count,
                            url,
                            e
                        );
                    }
                    last_error = Some(e);
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts made".to_string());
        Err(AssetBrowserError::load_failure(what, message))
    }

    async fn fetch_once(&self, what: &str, url: &str) -> std::result::Result<String, AttemptError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AttemptError::Retriable(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let error = AssetBrowserError::load_failure(what, format!("HTTP {} for {}", status, url));
            return Err(if status.is_server_error() {
                AttemptError::Retriable(error)
            } else {
                AttemptError::Fatal(error)
            });
        }

        response
            .text()
            .await
            .map_err(|e| AttemptError::Retriable(e.into()))
    }
}

/// Delay before retry `attempt` (1-based): doubles each time, capped at [`MAX_RETRY_DELAY`].
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor).min(MAX_RETRY_DELAY)
}

async fn read_local(what: &str, path: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AssetBrowserError::load_failure(what, format!("{}: {}", path, e)))
}

/// Split a newline-delimited list, dropping empty lines and trailing `\r`.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_client(dir: &TempDir) -> CatalogClient {
        CatalogClient::new(
            DataSource::Local(dir.path().to_path_buf()),
            ClientOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_backoff_delay() {
        let base = Duration::from_millis(500);
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(500));
        assert_eq!(backoff_delay(base, 3), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 40), MAX_RETRY_DELAY);
        assert_eq!(backoff_delay(base, u32::MAX), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_parse_list() {
        let list = parse_list("a/b.png\n\nc.txt\r\n\n");
        assert_eq!(list, vec!["a/b.png", "c.txt"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_data_source_from_str() {
        let remote: DataSource = "https://example.com/data".parse().unwrap();
        assert!(matches!(remote, DataSource::Remote(_)));
        assert_eq!(
            remote.location("assets.txt"),
            "https://example.com/data/assets.txt"
        );

        let local: DataSource = "./public/data".parse().unwrap();
        assert_eq!(local, DataSource::Local(PathBuf::from("./public/data")));

        assert!("".parse::<DataSource>().is_err());
        assert!("https://".parse::<DataSource>().is_err());
    }

    #[test]
    fn test_catalog_files() {
        let files: Vec<&str> = Catalog::ALL.iter().map(|c| c.list_file()).collect();
        assert_eq!(
            files,
            vec!["assets.txt", "stories.txt", "videos.txt", "music.txt", "sounds.txt"]
        );
    }

    #[tokio::test]
    async fn test_load_local_catalog() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("assets.txt"), "Unit/a.png\nUnit/b.png\n").unwrap();

        let client = local_client(&dir);
        let assets = client.load(Catalog::Assets).await.unwrap();
        assert_eq!(assets, vec!["Unit/a.png", "Unit/b.png"]);
    }

    #[tokio::test]
    async fn test_missing_list_is_load_failure() {
        let dir = TempDir::new().unwrap();
        let client = local_client(&dir);

        let err = client.load(Catalog::Videos).await.unwrap_err();
        assert!(matches!(err, AssetBrowserError::LoadFailure { ref catalog, .. } if catalog == "videos"));
    }

    #[tokio::test]
    async fn test_load_or_empty_reports_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("music.txt"), "BGM/title.ogg\n").unwrap();
        let client = local_client(&dir);

        let music = client.load_or_empty(Catalog::Music).await;
        assert!(music.is_ok());
        assert_eq!(music.entries, vec!["BGM/title.ogg"]);

        let sounds = client.load_or_empty(Catalog::Sounds).await;
        assert!(!sounds.is_ok());
        assert!(sounds.entries.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_keeps_catalog_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("assets.txt"), "a.png\n").unwrap();
        std::fs::write(dir.path().join("stories.txt"), "s01.txt\ns02.txt\n").unwrap();
        let client = local_client(&dir);

        let loads = client.load_all().await;
        let catalogs: Vec<Catalog> = loads.iter().map(|l| l.catalog).collect();
        assert_eq!(catalogs, Catalog::ALL.to_vec());
        assert_eq!(loads[0].entries.len(), 1);
        assert_eq!(loads[1].entries.len(), 2);
        assert!(loads[2..].iter().all(|l| !l.is_ok()));
    }

    #[tokio::test]
    async fn test_fetch_text_local_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("story.txt");
        std::fs::write(&path, "Title\nA: hi").unwrap();
        let client = local_client(&dir);

        let text = client.fetch_text(&path.display().to_string()).await.unwrap();
        assert_eq!(text, "Title\nA: hi");
    }

    #[tokio::test]
    async fn test_unreachable_remote_fails_after_retries() {
        let options = ClientOptions {
            retry_count: 1,
            retry_delay: Duration::from_millis(1),
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
        };
        let source: DataSource = "http://127.0.0.1:9/data".parse().unwrap();
        let client = CatalogClient::new(source, options).unwrap();

        let err = client.load(Catalog::Assets).await.unwrap_err();
        assert!(matches!(err, AssetBrowserError::LoadFailure { .. }));
    }
}
