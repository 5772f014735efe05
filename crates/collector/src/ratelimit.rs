use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;

/// Global throttle for calls to the external services.
///
/// Shared by every entity run in a batch: bounds in-flight calls with a
/// semaphore and enforces a minimum spacing between call starts. This is
/// the only state shared across entity runs.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_interval: Duration,
    last_start: Arc<Mutex<Option<Instant>>>,
}

/// Held for the duration of one external call.
pub struct RatePermit {
    _permit: OwnedSemaphorePermit,
}

impl RateLimiter {
    pub fn new(max_in_flight: usize, min_interval: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_in_flight.max(1))),
            min_interval,
            last_start: Arc::new(Mutex::new(None)),
        }
    }

    /// A limiter that never delays — for unit tests.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX >> 3, Duration::ZERO)
    }

    /// Wait for capacity and spacing; the returned permit must be held
    /// until the external call completes.
    pub async fn acquire(&self) -> RatePermit {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("limiter semaphore never closed");

        if !self.min_interval.is_zero() {
            let mut last = self.last_start.lock().await;
            let now = Instant::now();
            if let Some(prev) = *last {
                let next_allowed = prev + self.min_interval;
                if next_allowed > now {
                    tokio::time::sleep(next_allowed - now).await;
                }
            }
            *last = Some(Instant::now());
        }

        RatePermit { _permit: permit }
    }
}
