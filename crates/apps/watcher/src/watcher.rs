use crate::context::WatcherContext;
use crate::handlers::handle_create;
use color_eyre::eyre::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub async fn start_watching(ctx: Arc<WatcherContext>) -> Result<()> {
    if let Err(e) = run(ctx).await {
        error!("Watcher failed with an error: {}", e);
    }

    Ok(())
}

/// Runs the file system watcher.
///
/// Events from the notify thread are handed off through a channel; every
/// qualifying creation event spawns its own publish pipeline, so the watcher
/// itself never waits on an upload.
async fn run(ctx: Arc<WatcherContext>) -> notify::Result<()> {
    let (tx, rx) = mpsc::channel(100);

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            if let Err(e) = tx.blocking_send(res) {
                error!("Failed to send event through channel: {}", e);
            }
        },
        Config::default(),
    )?;

    watcher.watch(&ctx.settings.ingest.video_folder, RecursiveMode::NonRecursive)?;
    info!(
        "👁️ Watching {:?} for new videos...",
        &ctx.settings.ingest.video_folder
    );

    run_event_loop(rx, ctx).await;

    Ok(())
}

/// Drains watch events until an interrupt arrives or the event channel
/// closes, then waits for in-flight publish pipelines to finish before
/// tearing down.
pub async fn run_event_loop(
    mut rx: mpsc::Receiver<notify::Result<Event>>,
    ctx: Arc<WatcherContext>,
) {
    let mut pipelines: Vec<JoinHandle<()>> = Vec::new();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut interrupt => {
                info!("🛑 Interrupt received, stopping watcher.");
                break;
            }
            maybe_event = rx.recv() => {
                let Some(result) = maybe_event else { break };
                match result {
                    Ok(event) => process_event(&ctx, &event, &mut pipelines),
                    Err(err) => error!("Watch error: {:?}", err),
                }
                pipelines.retain(|handle| !handle.is_finished());
            }
        }
    }

    // Already-scheduled uploads run to completion; only observation stops.
    for handle in pipelines {
        if let Err(e) = handle.await {
            warn!("Publish task panicked: {e}");
        }
    }
}

/// Processes a single file system event from the watcher.
fn process_event(ctx: &Arc<WatcherContext>, event: &Event, pipelines: &mut Vec<JoinHandle<()>>) {
    if !matches!(event.kind, EventKind::Create(_)) {
        return;
    }
    let Some(path) = event.paths.first() else {
        return;
    };

    if let Some(handle) = handle_create(ctx, path) {
        pipelines.push(handle);
    }
}
