//! Ticker for repeated page actions with cancellation support.
//!
//! Runs a callback on a fixed interval (first tick after one full interval)
//! until stopped. Used for carousel auto-rotation.

use std::{collections::HashMap, sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Cloneable set of named tickers.
#[derive(Clone, Default)]
pub struct Ticker {
    /// Cancellation token per running ticker id.
    entries: Arc<Mutex<HashMap<String, CancellationToken>>>,
}

impl Ticker {
    /// Ticker with nothing running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a ticker is active for the given id.
    pub fn is_active(&self, id: &str) -> bool {
        self.entries.lock().contains_key(id)
    }

    /// Start or replace the ticker for `id`. Must be called within a tokio
    /// runtime.
    pub fn start<F>(&self, id: &str, interval: Duration, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.stop(id);

        let token = CancellationToken::new();
        let cancel = token.clone();
        let id_for_log = id.to_string();

        tokio::spawn(async move {
            trace!(ticker_start = %id_for_log, int_ms = interval.as_millis());
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        trace!(ticker_cancelled = %id_for_log);
                        return;
                    }
                    _ = ticker.tick() => on_tick(),
                }
            }
        });
        self.entries.lock().insert(id.to_string(), token);
    }

    /// Stop a ticker if present.
    pub fn stop(&self, id: &str) {
        if let Some(token) = self.entries.lock().remove(id) {
            token.cancel();
            trace!(ticker_stop = %id);
        }
    }

    /// Stop every ticker.
    pub fn clear(&self) {
        for (_, token) in self.entries.lock().drain() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_stopped() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        ticker.start("t", Duration::from_secs(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(ticker.is_active("t"));

        time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        time::sleep(Duration::from_millis(10_200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        ticker.stop("t");
        assert!(!ticker.is_active("t"));
        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_resets_the_phase() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        ticker.start("t", Duration::from_secs(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        time::sleep(Duration::from_secs(4)).await;
        let c = count.clone();
        ticker.start("t", Duration::from_secs(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        time::sleep(Duration::from_secs(4)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        ticker.clear();
        assert!(!ticker.is_active("t"));
    }
}
