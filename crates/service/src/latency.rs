//! Optional simulated upstream latency.
//!
//! The in-memory repositories can resolve each call after a fixed 300-800 ms
//! delay to imitate network round trips. Opt-in, so demos feel like a real
//! backend while tests stay fast.

use std::time::Duration;

pub(crate) async fn simulate(delay: Option<Duration>) {
    if let Some(d) = delay {
        tokio::time::sleep(d).await;
    }
}
