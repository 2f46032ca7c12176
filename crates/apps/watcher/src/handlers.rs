use crate::context::WatcherContext;
use publisher::publish_video;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Handles a create event from the watcher.
///
/// Spawns a detached publish pipeline for every new video file and returns
/// its handle. A pipeline failure is logged here and goes no further; one
/// file failing never affects the next.
pub fn handle_create(ctx: &Arc<WatcherContext>, path: &Path) -> Option<JoinHandle<()>> {
    if !path.is_file() || !ctx.settings.ingest.is_video_file(path) {
        return None;
    }

    info!("🎬 New video detected: {:?}", path);
    let ctx = Arc::clone(ctx);
    let path = path.to_path_buf();

    Some(tokio::spawn(async move {
        if let Err(e) = publish_video(&ctx.client, &ctx.settings, &path).await {
            warn!("Publishing failed for {:?}: {e}", path);
        }
    }))
}
