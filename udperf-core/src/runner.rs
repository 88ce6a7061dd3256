use std::time::{Duration, Instant};

use log::info;

use crate::{
    options::{ByteCount, RunOptions},
    pacing::Pacer,
    payload::PayloadBuilder,
    ramp::ramp_up,
    stats::{human_bytes, human_duration},
    tick::{Cadence, ACTIVE_WINDOW},
    transport::{TransmitError, Transport},
};

/// Totals for the steady-state phase. The elapsed wall time may exceed the
/// configured seconds under sustained overrun; the loop is bounded by
/// iteration count, not by the clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct RunTotals {
    pub bytes_sent: ByteCount,
    pub elapsed: Duration,
}

/// Drives one whole test: the optional ramp-up phase, then exactly
/// `seconds` once-per-second pacer invocations at the target bandwidth.
#[derive(Debug)]
pub struct Runner {
    options: RunOptions,
    pacer: Pacer,
}

impl Runner {
    pub fn new(options: RunOptions) -> Runner {
        Runner::with_payload(options, PayloadBuilder::default())
    }

    pub fn with_payload(options: RunOptions, payload: PayloadBuilder) -> Runner {
        let pacer = Pacer::new(options.packet_size, payload);
        Runner { options, pacer }
    }

    pub fn run(&self, transport: &mut impl Transport) -> Result<RunTotals, TransmitError> {
        if self.options.ramp_up {
            ramp_up(&self.pacer, transport, self.options.bandwidth)?;
        }

        info!("bandwidth test");
        let per_second = self.options.bandwidth * Duration::from_secs(1);
        let mut cadence = Cadence::once_per_second();
        let mut totals = RunTotals::default();
        let start = Instant::now();
        for iteration in 1..=self.options.seconds {
            cadence.wait();
            let sent = self.pacer.pace(transport, per_second, ACTIVE_WINDOW)?;
            totals.bytes_sent += sent;
            info!("[{}] sent: {}", iteration, human_bytes(sent.0));
        }
        totals.elapsed = start.elapsed();
        info!(
            "DONE: total_sent={}/{}",
            human_bytes(totals.bytes_sent.0),
            human_duration(totals.elapsed)
        );
        Ok(totals)
    }
}
