use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a running refresh loop. Stops the loop on drop.
#[derive(Debug)]
pub struct RefreshHandle {
    token: CancellationToken,
}

impl RefreshHandle {
    /// Runs `tick` once right away and then every `period` until stopped.
    ///
    /// `period` must be non-zero. Must be called from within a Tokio
    /// runtime.
    pub fn start<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => tick(),
                }
            }

            tracing::debug!("refresh loop stopped");
        });

        tracing::debug!(?period, "refresh loop started");
        Self { token }
    }

    /// Stops future ticks. Safe to call more than once; anything a previous
    /// tick already started keeps running.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
