mod delay;

pub use delay::batch_delay;

use std::{
    thread,
    time::{Duration, Instant},
};

use log::trace;

use crate::{
    options::{ByteCount, PacketCount, PacketSize},
    payload::PayloadBuilder,
    transport::{TransmitError, Transport},
};

/// Packets per batch. The delay is recomputed once per batch rather than per
/// packet: per-packet timestamping at high bandwidth would itself perturb the
/// timing it is trying to correct.
pub const CORRECTION_INTERVAL: u64 = 50;

/// Sends a byte volume as fixed-size packets spread across a wall-clock
/// window, periodically recomputing the inter-batch delay so the aggregate
/// timing converges on the window.
#[derive(Debug)]
pub struct Pacer {
    packet_size: PacketSize,
    correction_interval: u64,
    payload: PayloadBuilder,
}

impl Pacer {
    pub fn new(packet_size: PacketSize, payload: PayloadBuilder) -> Pacer {
        Pacer {
            packet_size,
            correction_interval: CORRECTION_INTERVAL,
            payload,
        }
    }

    pub fn packet_size(&self) -> PacketSize {
        self.packet_size
    }

    /// Transmits `floor(total / packet_size)` packets over `window`; the
    /// remainder of a partial final packet is dropped, not sent. Returns the
    /// bytes the transport reported as transmitted. A volume below one packet
    /// is a no-op. Any send failure aborts the invocation; there is no retry.
    pub fn pace(
        &self,
        transport: &mut impl Transport,
        total: ByteCount,
        window: Duration,
    ) -> Result<ByteCount, TransmitError> {
        let packet_count: PacketCount = total / self.packet_size;
        if packet_count.0 == 0 {
            return Ok(ByteCount(0));
        }

        let payload = self.payload.build(self.packet_size.into());
        let total_batches = batches(packet_count.0, self.correction_interval);
        let start = Instant::now();
        let mut sent = ByteCount(0);
        for packet in 0..packet_count.0 {
            // delay only at batch boundaries; the first batch goes out
            // immediately
            if packet != 0 && packet % self.correction_interval == 0 {
                let remaining = batches(packet_count.0 - packet, self.correction_interval);
                let delay = batch_delay(window, start.elapsed(), total_batches, remaining);
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            let bytes = transport.send(&payload).map_err(TransmitError::Send)?;
            sent += ByteCount(bytes as u64);
        }
        trace!(
            "paced {} over {:?} (target window {:?})",
            sent,
            start.elapsed(),
            window
        );
        Ok(sent)
    }
}

fn batches(packets: u64, interval: u64) -> u64 {
    (packets + interval - 1) / interval
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct MockTransport {
        sent: Vec<usize>,
        reported: Option<usize>,
        fail_at: Option<usize>,
    }

    impl MockTransport {
        fn new() -> Self {
            MockTransport {
                sent: Vec::new(),
                reported: None,
                fail_at: None,
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
            if self.fail_at == Some(self.sent.len()) {
                return Err(io::Error::new(io::ErrorKind::Other, "down"));
            }
            self.sent.push(payload.len());
            Ok(self.reported.unwrap_or(payload.len()))
        }
    }

    fn pacer() -> Pacer {
        Pacer::new(PacketSize(1470), PayloadBuilder::default())
    }

    #[test]
    fn tiny_volume_is_a_noop() {
        let mut transport = MockTransport::new();

        let sent = pacer()
            .pace(&mut transport, ByteCount(1469), Duration::ZERO)
            .unwrap();

        assert_eq!(sent, ByteCount(0));
        assert!(transport.sent.is_empty());
    }

    #[test]
    fn zero_volume_is_a_noop() {
        let mut transport = MockTransport::new();

        let sent = pacer()
            .pace(&mut transport, ByteCount(0), Duration::ZERO)
            .unwrap();

        assert_eq!(sent, ByteCount(0));
    }

    #[test]
    fn partial_final_packet_is_dropped() {
        let mut transport = MockTransport::new();

        let sent = pacer()
            .pace(&mut transport, ByteCount(1470 * 3 + 100), Duration::ZERO)
            .unwrap();

        assert_eq!(transport.sent.len(), 3);
        assert_eq!(sent, ByteCount(1470 * 3));
    }

    #[test]
    fn every_packet_is_exactly_the_fixed_size() {
        let mut transport = MockTransport::new();

        pacer()
            .pace(&mut transport, ByteCount(1470 * 120), Duration::ZERO)
            .unwrap();

        assert_eq!(transport.sent.len(), 120);
        assert!(transport.sent.iter().all(|&len| len == 1470));
    }

    #[test]
    fn returns_transport_reported_bytes() {
        let mut transport = MockTransport::new();
        transport.reported = Some(1000); // short sends

        let sent = pacer()
            .pace(&mut transport, ByteCount(1470 * 5), Duration::ZERO)
            .unwrap();

        assert_eq!(sent, ByteCount(5000));
    }

    #[test]
    fn send_failure_is_fatal() {
        let mut transport = MockTransport::new();
        transport.fail_at = Some(60);

        let result = pacer().pace(&mut transport, ByteCount(1470 * 100), Duration::ZERO);

        assert!(matches!(result, Err(TransmitError::Send(_))));
        assert_eq!(transport.sent.len(), 60);
    }
}
