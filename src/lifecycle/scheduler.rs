//! Daily cart clear.
//!
//! The task sleeps until the next occurrence of the configured local time, clears
//! the cart, and goes back to sleep. A failed clear is logged and not retried
//! until the following day.
//!
//! Targets are resolved in the clock's time zone and the sleep is the gap between
//! two real instants, so a day with a DST change still clears at local midnight.

use crate::clients::CartClient;
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Source of wall-clock time in some time zone.
pub type Clock<Tz = Local> = Arc<dyn Fn() -> DateTime<Tz> + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(Local::now)
}

/// Maps a wall-clock reading to an instant in `tz`.
///
/// A repeated reading (clocks turned back) takes the earlier instant. A skipped
/// reading (clocks turned forward) is read with the offset in effect before the
/// jump, which lands just after it.
fn resolve<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(local - TimeDelta::days(1))).fix();
            let utc = local - TimeDelta::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// The first occurrence of wall-clock time `at` strictly after `now`.
pub fn next_occurrence<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
    let tz = now.timezone();
    let mut date = now.date_naive();
    loop {
        let candidate = resolve(&tz, date.and_time(at));
        if candidate > *now {
            return candidate;
        }
        date = date + TimeDelta::days(1);
    }
}

pub fn duration_until_next<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> Duration {
    (next_occurrence(now, at) - now.clone())
        .to_std()
        .unwrap_or(Duration::ZERO)
}

pub struct DailyClear<Tz: TimeZone = Local> {
    cart: CartClient,
    clear_at: NaiveTime,
    clock: Clock<Tz>,
}

impl DailyClear {
    pub fn new(cart: CartClient, clear_at: NaiveTime) -> Self {
        Self {
            cart,
            clear_at,
            clock: local_clock(),
        }
    }
}

impl<Tz: TimeZone> DailyClear<Tz> {
    pub fn with_clock<Z: TimeZone>(self, clock: Clock<Z>) -> DailyClear<Z> {
        DailyClear {
            cart: self.cart,
            clear_at: self.clear_at,
            clock,
        }
    }
}

impl<Tz> DailyClear<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Send + Sync,
{
    pub fn spawn(self) -> ScheduleHandle {
        let (shutdown, stop) = oneshot::channel();
        let handle = tokio::spawn(self.run(stop));
        ScheduleHandle { shutdown, handle }
    }

    async fn run(self, mut stop: oneshot::Receiver<()>) {
        info!(clear_at = %self.clear_at, "Scheduled cart clear");
        let mut last_fired: Option<DateTime<Tz>> = None;

        loop {
            let now = (self.clock)();
            let mut target = next_occurrence(&now, self.clear_at);
            // A clock reading slightly early must not fire the same slot twice.
            if last_fired.as_ref() == Some(&target) {
                target = next_occurrence(&target, self.clear_at);
            }
            let wait = (target.clone() - now).to_std().unwrap_or(Duration::ZERO);

            tokio::select! {
                _ = tokio::time::sleep(wait) => {}
                _ = &mut stop => break,
            }

            let at = target.naive_local();
            match self.cart.clear_cart().await {
                Ok(()) => info!(%at, "Daily cart clear done"),
                Err(e) => error!(%at, error = %e, "Daily cart clear failed"),
            }
            last_fired = Some(target);
        }
        info!("Cart clear scheduler stopped");
    }
}

/// Running scheduler task.
pub struct ScheduleHandle {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ScheduleHandle {
    /// Stops the scheduler and waits for it to exit. An in-flight clear finishes first.
    pub async fn stop(self) -> Result<(), JoinError> {
        let _ = self.shutdown.send(());
        self.handle.await
    }
}
