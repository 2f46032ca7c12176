use app_state::AppSettings;
use publisher::PublishClient;

/// Shared state handed to every spawned publish pipeline.
pub struct WatcherContext {
    pub client: PublishClient,
    pub settings: AppSettings,
}
