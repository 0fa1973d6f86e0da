//! Periodic zombie reaping, decoupled from message traffic.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::engine::HeatEngine;

/// Background task that sweeps idle groups on a fixed interval.
pub struct MaintenanceTask {
    engine: Arc<HeatEngine>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl MaintenanceTask {
    /// Spawn on the current tokio runtime. The first sweep runs immediately.
    pub fn spawn(engine: Arc<HeatEngine>, interval: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let worker = Arc::clone(&engine);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval_secs = interval.as_secs(), "maintenance task started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let reaped = worker.sweep_idle();
                        debug!(reaped, remaining = worker.group_count(), "maintenance sweep");
                    }
                    // Only `true` is ever sent; a dropped sender also means stop.
                    _ = shutdown_rx.changed() => break,
                }
            }
            info!("maintenance task stopped");
        });

        Self {
            engine,
            shutdown_tx,
            handle,
        }
    }

    /// Spawn using `config.maintenance.sweep_interval_secs`.
    pub fn spawn_configured(engine: Arc<HeatEngine>) -> Self {
        let interval = engine.config().maintenance.sweep_interval();
        Self::spawn(engine, interval)
    }

    /// Stop the loop, wait for it, then flush the trigger store.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.handle.await;
        // Failures are already logged by the engine.
        let _ = self.engine.shutdown();
    }
}
