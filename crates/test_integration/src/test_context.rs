use app_state::{AppSettings, load_settings_from_path};
use color_eyre::eyre::Result;
use publisher::PublishClient;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::MockServer;

/// The main context for our integration tests.
///
/// Points the watched folder at a scratch directory and the publishing API
/// at a local mock server.
pub struct TestContext {
    pub settings: AppSettings,
    pub client: PublishClient,
    pub server: MockServer,
    video_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Self::with_abort_on_transfer_failure(false).await
    }

    /// Context with the strict transfer mode enabled.
    pub async fn strict() -> Result<Self> {
        Self::with_abort_on_transfer_failure(true).await
    }

    async fn with_abort_on_transfer_failure(abort: bool) -> Result<Self> {
        let server = MockServer::start().await;
        let video_dir = tempfile::tempdir()?;

        let settings_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/settings.yaml");
        let mut settings = load_settings_from_path(&settings_path)?;
        settings.ingest.video_folder = video_dir.path().to_path_buf();
        settings.publish.base_url = server.uri();
        settings.publish.abort_on_transfer_failure = abort;

        let client = PublishClient::new(Client::new(), &settings);

        Ok(Self {
            settings,
            client,
            server,
            video_dir,
        })
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.video_dir.path().join(name)
    }

    pub async fn write_file(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.file_path(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Polls until the condition holds or a few seconds pass.
    pub async fn wait_until(&self, mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..50 {
            if condition() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        condition()
    }
}
