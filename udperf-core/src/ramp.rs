use std::time::Instant;

use log::info;

use crate::{
    options::{ByteCount, DataRate, PacketSize},
    pacing::Pacer,
    stats::{human_bytes, human_duration},
    tick::{Cadence, ACTIVE_WINDOW},
    transport::{TransmitError, Transport},
};

/// The per-second rate targets of the ramp-up phase: one packet's worth,
/// doubling each step, clamped to the target, ending at the target exactly
/// (inclusive).
#[derive(Debug)]
pub struct RampSchedule {
    next: Option<u64>,
    target: u64,
}

impl RampSchedule {
    pub fn new(packet_size: PacketSize, target: DataRate) -> RampSchedule {
        RampSchedule {
            next: Some(packet_size.0),
            target: target.0,
        }
    }
}

impl Iterator for RampSchedule {
    type Item = DataRate;

    fn next(&mut self) -> Option<DataRate> {
        let current = self.next?;
        self.next = if current >= self.target {
            None
        } else {
            Some(u64::min(current.saturating_mul(2), self.target))
        };
        Some(DataRate(current))
    }
}

/// Raises the send rate through the schedule, one pacer invocation per
/// second, until one full second has run at the target rate. Returns the
/// bytes sent during the whole ramp.
pub fn ramp_up(
    pacer: &Pacer,
    transport: &mut impl Transport,
    target: DataRate,
) -> Result<ByteCount, TransmitError> {
    info!("raise bandwidth start");
    let start = Instant::now();
    let mut cadence = Cadence::once_per_second();
    let mut total_sent = ByteCount(0);
    for rate in RampSchedule::new(pacer.packet_size(), target) {
        cadence.wait();
        info!(" - raise: {}", human_bytes(rate.0));
        total_sent += pacer.pace(transport, ByteCount(rate.0), ACTIVE_WINDOW)?;
    }
    info!(
        " - total_sent={}/{}",
        human_bytes(total_sent.0),
        human_duration(start.elapsed())
    );
    info!("raise bandwidth done");
    Ok(total_sent)
}
