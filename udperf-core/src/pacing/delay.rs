use std::time::Duration;

/// Recomputes the inter-batch delay so the remaining batches fill the rest of
/// the window.
///
/// The naive share is `(window - elapsed) / remaining_batches`, saturated to
/// zero when the pacer has fallen behind (or the clock misbehaved and the
/// share exceeds the whole window). It is then divided by a damping ratio
/// `2 * total_batches / (total_batches - remaining_batches + 1)`, large at the
/// start of a run and shrinking to 2 at the end, so early corrections stay
/// conservative while late ones land at close to full strength. This is an
/// anti-oscillation heuristic, not a PID controller.
pub fn batch_delay(
    window: Duration,
    elapsed: Duration,
    total_batches: u64,
    remaining_batches: u64,
) -> Duration {
    if remaining_batches == 0 || total_batches < remaining_batches {
        return Duration::ZERO;
    }
    let left = match window.checked_sub(elapsed) {
        Some(left) => left,
        None => return Duration::ZERO, // fell behind, stop sleeping
    };
    let naive = left / remaining_batches as u32;
    if naive > window {
        return Duration::ZERO;
    }
    let ratio = 2 * total_batches / (total_batches - remaining_batches + 1);
    Duration::from_nanos((naive.as_nanos() / ratio as u128) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_remaining_time_across_remaining_batches() {
        let window = Duration::from_secs(1);
        let elapsed = Duration::from_millis(500);

        let delay = batch_delay(window, elapsed, 10, 5);

        // naive share is 100ms, damping ratio is 2*10/6 = 3
        assert_eq!(delay, Duration::from_nanos(100_000_000 / 3));
    }

    #[test]
    fn clamps_to_zero_when_behind() {
        let window = Duration::from_secs(1);
        let elapsed = Duration::from_millis(1500);

        assert_eq!(batch_delay(window, elapsed, 10, 2), Duration::ZERO);
    }

    #[test]
    fn clamps_exactly_at_the_window_edge() {
        let window = Duration::from_secs(1);

        assert_eq!(batch_delay(window, window, 10, 2), Duration::ZERO);
    }

    #[test]
    fn damping_relaxes_over_the_run() {
        let window = Duration::from_secs(1);
        let elapsed = Duration::from_millis(100);

        let total = 100;
        let early = batch_delay(window, elapsed, total, 90);
        let mid = batch_delay(window, elapsed, total, 50);
        let late = batch_delay(window, elapsed, total, 1);

        assert!(early < mid);
        assert!(mid < late);
    }

    #[test]
    fn final_batch_is_damped_by_two() {
        let window = Duration::from_secs(1);
        let elapsed = Duration::from_millis(900);

        let delay = batch_delay(window, elapsed, 100, 1);

        // naive 100ms, ratio 2*100/100 = 2
        assert_eq!(delay, Duration::from_millis(50));
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        let window = Duration::from_secs(1);

        assert_eq!(batch_delay(window, Duration::ZERO, 10, 0), Duration::ZERO);
        assert_eq!(batch_delay(window, Duration::ZERO, 5, 10), Duration::ZERO);
        assert_eq!(
            batch_delay(Duration::ZERO, Duration::ZERO, 10, 5),
            Duration::ZERO
        );
    }
}
