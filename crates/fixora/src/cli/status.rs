//! Rotating status line shown while a generation is in flight.

use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Status messages, cycled in order.
pub const LOADING_STEPS: [&str; 5] = [
    "Analyzing your idea... 🧠",
    "Crafting a cinematic visual style... 🎨",
    "Laying out the timeline and script... 📝",
    "Optimizing SEO metadata... ⚡",
    "Finishing touches... ✨",
];

/// Time each message stays on screen.
pub const STEP_INTERVAL: Duration = Duration::from_secs(2);

/// Message shown at `tick`, wrapping around.
pub fn step_message(tick: usize) -> &'static str {
    LOADING_STEPS[tick % LOADING_STEPS.len()]
}

/// Background task redrawing the status line on stderr.
///
/// Does nothing when stderr is not a terminal.
pub struct StatusTicker {
    handle: Option<JoinHandle<()>>,
}

impl StatusTicker {
    /// Start cycling through [`LOADING_STEPS`].
    pub fn start() -> Self {
        if !std::io::stderr().is_terminal() {
            return Self { handle: None };
        }

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(STEP_INTERVAL);
            let mut tick = 0usize;
            loop {
                interval.tick().await;
                let mut stderr = std::io::stderr().lock();
                let _ = write!(stderr, "\r\x1b[2K{}", step_message(tick));
                let _ = stderr.flush();
                tick = tick.wrapping_add(1);
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Stop the ticker and clear its line.
    pub async fn stop(self) {
        if let Some(handle) = self.handle {
            handle.abort();
            let _ = handle.await;
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_cycle() {
        assert_eq!(step_message(0), LOADING_STEPS[0]);
        assert_eq!(step_message(4), LOADING_STEPS[4]);
        assert_eq!(step_message(5), LOADING_STEPS[0]);
        assert_eq!(step_message(12), LOADING_STEPS[2]);
    }

    #[tokio::test]
    async fn ticker_stops_cleanly() {
        let ticker = StatusTicker::start();
        tokio::task::yield_now().await;
        ticker.stop().await;
    }
}
