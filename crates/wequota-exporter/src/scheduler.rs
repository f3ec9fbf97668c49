//! Fixed-interval check loop.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::check::QuotaCheck;

/// Run `checker` now, then once per `interval`, forever.
///
/// The interval starts counting when the initial check returns. Ticks are
/// not queued: a cycle that outlives the interval pushes the next tick back
/// instead of triggering a burst.
pub async fn run<C>(interval: Duration, checker: &C)
where
    C: QuotaCheck + ?Sized,
{
    tracing::info!("Performing initial quota check...");
    checker.run_check().await;

    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        tracing::info!("Performing scheduled quota check...");
        checker.run_check().await;
    }
}
