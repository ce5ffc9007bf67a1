use std::io;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawns a task that cancels `token` on the first SIGINT or SIGTERM.
///
/// Signal registration happens before the task is spawned so that a
/// failure is reported to the caller instead of being lost in the task.
/// Must be called from within a tokio runtime.
#[cfg(unix)]
pub fn spawn_signal_listener(token: CancellationToken) -> io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        let received = tokio::select! {
            _ = interrupt.recv() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
            _ = token.cancelled() => return,
        };
        tracing::debug!(signal = received, "termination signal received");
        token.cancel();
    }))
}

/// Spawns a task that cancels `token` on Ctrl-C.
#[cfg(not(unix))]
pub fn spawn_signal_listener(token: CancellationToken) -> io::Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    tracing::debug!("ctrl-c received");
                    token.cancel();
                }
            }
            _ = token.cancelled() => {}
        }
    }))
}
