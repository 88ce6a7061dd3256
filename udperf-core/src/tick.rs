use std::{
    thread,
    time::{Duration, Instant},
};

use log::warn;

/// Active send window inside each one-second step. The remaining 0.1 s of
/// slack absorbs scheduling jitter before the next step's correction.
pub const ACTIVE_WINDOW: Duration = Duration::from_millis(900);

/// A self-correcting periodic sleep: each `wait` call sleeps just long enough
/// that successive calls are spaced one period apart, regardless of how much
/// of the period the caller's work consumed. The first call sleeps a full
/// period.
///
/// When the caller has overrun the period the computed sleep would be
/// negative; it is clamped to zero (and logged) rather than failing the run.
#[derive(Debug)]
pub struct Cadence {
    period: Duration,
    last: Option<Instant>,
}

impl Cadence {
    pub fn new(period: Duration) -> Cadence {
        Cadence { period, last: None }
    }

    pub fn once_per_second() -> Cadence {
        Cadence::new(Duration::from_secs(1))
    }

    pub fn wait(&mut self) {
        let sleep_time = self.next_sleep(Instant::now());
        if !sleep_time.is_zero() {
            thread::sleep(sleep_time);
        }
        self.last = Some(Instant::now());
    }

    fn next_sleep(&self, now: Instant) -> Duration {
        match self.last {
            None => self.period,
            Some(last) => {
                let elapsed = now - last;
                match self.period.checked_sub(elapsed) {
                    Some(sleep_time) => sleep_time,
                    None => {
                        warn!(
                            "cadence overrun: {:?} elapsed in a {:?} period",
                            elapsed, self.period
                        );
                        Duration::ZERO
                    }
                }
            }
        }
    }
}
