mod error;
mod units;

pub use error::*;
pub use units::*;

/// Everything the orchestrator needs for one run. Explicit values, no
/// process-wide globals: the packet size and filler pattern travel with the
/// configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RunOptions {
    /// Target send rate during the steady-state phase.
    pub bandwidth: DataRate,

    /// Steady-state test duration, in whole seconds. One pacer invocation
    /// per second.
    pub seconds: u64,

    /// Geometrically raise the rate to `bandwidth` before the test proper.
    pub ramp_up: bool,

    /// Per-datagram payload length used for all pacing computations.
    /// The default fits under a 1500-byte Ethernet MTU after IP/UDP headers.
    pub packet_size: PacketSize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            bandwidth: DataRate(10 * 1024 * 1024),
            seconds: 10,
            ramp_up: false,
            packet_size: PacketSize(1470),
        }
    }
}

impl RunOptions {
    /// A bandwidth below one packet per second paces zero packets every
    /// window; reject it up front instead.
    pub fn validate(self) -> Result<Self, OptionsError> {
        if self.bandwidth.0 < self.packet_size.0 {
            return Err(OptionsError::BandwidthBelowPacketSize(self.packet_size));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_cli_defaults() {
        let options = RunOptions::default();

        assert_eq!(options.bandwidth, DataRate(10 * 1024 * 1024));
        assert_eq!(options.seconds, 10);
        assert!(!options.ramp_up);
        assert_eq!(options.packet_size, PacketSize(1470));
    }

    #[test]
    fn validation_rejects_sub_packet_bandwidth() {
        let options = RunOptions {
            bandwidth: DataRate(1469),
            ..Default::default()
        };

        assert_eq!(
            options.validate(),
            Err(OptionsError::BandwidthBelowPacketSize(PacketSize(1470)))
        );
    }
}
