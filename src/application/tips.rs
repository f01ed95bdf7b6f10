use std::time::{Duration, Instant};

/// Advisory tips shown while a request is in flight. Cosmetic only.
pub const TIPS: [&str; 5] = [
    "Diversify your portfolio across sectors.",
    "Always set stop-loss orders to manage risk.",
    "Monitor market news for timely decisions.",
    "Invest in fundamentally strong companies for long-term gains.",
    "Use technical indicators like RSI and SMA for better analysis.",
];

const ROTATION_PERIOD: Duration = Duration::from_secs(3);

/// Rotates through [`TIPS`] on a fixed 3-second cadence.
///
/// The ticker holds no timer of its own: the current tip is derived from
/// elapsed time, so rotation stops the moment the ticker is dropped. It
/// lives inside the loading state and is destroyed with it on both the
/// success and failure paths.
#[derive(Debug, Clone)]
pub struct TipTicker {
    started_at: Instant,
}

impl TipTicker {
    pub fn start() -> Self {
        Self::started(Instant::now())
    }

    fn started(started_at: Instant) -> Self {
        Self { started_at }
    }

    pub fn current(&self, now: Instant) -> &'static str {
        let ticks = now.duration_since(self.started_at).as_secs() / ROTATION_PERIOD.as_secs();
        TIPS[(ticks as usize) % TIPS.len()]
    }
}
