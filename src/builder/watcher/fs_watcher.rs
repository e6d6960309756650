use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;
use log::{info, debug, error};
use notify::{Watcher, RecursiveMode, Result as NotifyResult, Event, EventKind};

use crate::config::BuildConfig;
use crate::builder::site::build_site;
use crate::utils::error::BoxResult;

/// Watch the source directory and rebuild on changes to its inputs
pub fn watch_site(config: &BuildConfig) -> BoxResult<()> {
    info!("Watching source directory: {}", config.source.display());

    // Event paths are reported relative to the watched path
    let source = config.source.canonicalize().unwrap_or_else(|_| config.source.clone());
    let destination = source.join(&config.destination);

    // Create a channel to receive filesystem events
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| {
        match res {
            Ok(event) => {
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {
                        tx.send(event).unwrap_or_else(|e| {
                            error!("Error sending file event: {}", e);
                        });
                    },
                    _ => {}
                }
            },
            Err(e) => error!("Watch error: {}", e),
        }
    })?;

    watcher.watch(&source, RecursiveMode::Recursive)?;

    // Initial build
    if let Err(e) = build_site(config) {
        error!("Error building site: {}", e);
    }

    info!("Watching for changes. Press Ctrl+C to stop.");

    // Track the last build time to avoid rebuilding too frequently
    let mut last_build = std::time::Instant::now();
    const DEBOUNCE_DURATION: Duration = Duration::from_millis(500);

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                // Our own output lands inside the source tree by default
                if is_output_event(&event, &destination) {
                    continue;
                }
                debug!("File event: {:?}", event);

                let mut pending = true;
                while pending {
                    let elapsed = last_build.elapsed();
                    if elapsed < DEBOUNCE_DURATION {
                        std::thread::sleep(DEBOUNCE_DURATION - elapsed);

                        // Drain any additional events that came in during sleep
                        while rx.try_recv().is_ok() {}
                    }

                    info!("File change detected, rebuilding site...");
                    if let Err(e) = build_site(config) {
                        error!("Error rebuilding site: {}", e);
                    }

                    last_build = std::time::Instant::now();
                    // Output writes are dropped; source edits made during the build go again
                    pending = has_source_event(rx.try_iter(), &destination);
                }
            },
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // No events, continue waiting
            },
            Err(e) => {
                error!("Error receiving file events: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// True when every path of the event lies inside the destination directory
fn is_output_event(event: &Event, destination: &Path) -> bool {
    !event.paths.is_empty() && event.paths.iter().all(|path| path.starts_with(destination))
}

/// Consume every event and report whether any touched the source
fn has_source_event(events: impl Iterator<Item = Event>, destination: &Path) -> bool {
    events.fold(false, |found, event| found || !is_output_event(&event, destination))
}
