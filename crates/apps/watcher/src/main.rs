use app_state::load_app_settings;
use color_eyre::Result;
use publisher::PublishClient;
use reqwest::Client;
use std::sync::Arc;
use tokio::fs;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use watcher::context::WatcherContext;
use watcher::watcher::start_watching;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_app_settings()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.logging.level.parse::<Level>()?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    color_eyre::install()?;

    fs::create_dir_all(&settings.ingest.video_folder).await?;

    let client = PublishClient::new(Client::new(), &settings);
    let ctx = Arc::new(WatcherContext { client, settings });
    start_watching(ctx).await?;

    Ok(())
}
