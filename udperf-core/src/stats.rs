use std::time::Duration;

/// Formats a byte count with base-1024 units; the decimal precision grows
/// with the unit so "10.00MB" and "100B" both come out compact.
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value > 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.*}{}", unit, value, UNITS[unit])
}

pub fn human_duration(elapsed: Duration) -> String {
    const UNITS: [&str; 3] = ["us", "ms", "s"];
    let mut value = elapsed.as_micros() as f64;
    let mut unit = 0;
    while value > 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.*}{}", unit, value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_scale_with_precision() {
        assert_eq!(human_bytes(100), "100B");
        assert_eq!(human_bytes(1536), "1.5KB");
        assert_eq!(human_bytes(10 * 1024 * 1024), "10.00MB");
        assert_eq!(human_bytes(5 * 1024 * 1024 * 1024), "5.000GB");
    }

    #[test]
    fn durations_scale_with_precision() {
        assert_eq!(human_duration(Duration::from_micros(500)), "500us");
        assert_eq!(human_duration(Duration::from_millis(250)), "250.0ms");
        assert_eq!(human_duration(Duration::from_secs(10)), "10.00s");
    }
}
