use crate::client::PublishClient;
use crate::error::PublishResult;
use crate::progress::UploadProgress;
use app_state::AppSettings;
use std::path::Path;
use tracing::{error, info};

/// Runs the full publishing pipeline for one video file.
///
/// The three remote calls run in order: request an upload destination,
/// transfer the file bytes, create the post. A failed destination request
/// aborts before anything touches the local file. Whether a failed transfer
/// stops the pipeline is controlled by `publish.abort_on_transfer_failure`;
/// with it off, the post is still created and the local file still removed,
/// matching the historical behavior of this bot.
pub async fn publish_video(
    client: &PublishClient,
    settings: &AppSettings,
    path: &Path,
) -> PublishResult<()> {
    let destination = client.request_upload_destination().await?;

    let file_size = tokio::fs::metadata(path).await?.len();
    let title = video_title(path);
    let mut progress = UploadProgress::new(&title, file_size);

    match client
        .transfer_bytes(path, &destination.url, &mut progress)
        .await
    {
        Ok(()) => progress.finish(),
        Err(e) if settings.publish.abort_on_transfer_failure => return Err(e),
        Err(e) => error!("Failed to transfer {:?}: {e}", path),
    }

    match client.create_post(&title, &destination.hash).await {
        Ok(body) => info!("Post created: {body}"),
        Err(e) => error!("Failed to create post for {:?}: {e}", path),
    }

    tokio::fs::remove_file(path).await?;
    info!("🗑️ Deleted local file: {:?}", path);

    Ok(())
}

/// Post title, derived from the file name.
fn video_title(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_file_base_name() {
        assert_eq!(video_title(Path::new("/videos/clip.mp4")), "clip.mp4");
    }
}
