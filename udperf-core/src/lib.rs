//! Pacing core for udperf, a UDP bandwidth generator.
//!
//! The interesting part lives in [`pacing`]: a feedback loop that turns a
//! (byte volume, wall-clock window) pair into a stream of fixed-size
//! datagrams whose aggregate timing converges on the window despite send
//! jitter and coarse OS sleep granularity. [`ramp`] drives that pacer
//! through a geometric progression of per-second targets, and [`runner`]
//! composes the two into a full test.
//!
//! Everything is single-threaded and blocking; the only suspension points
//! are monotonic-clock sleeps.

pub mod options;
pub mod pacing;
pub mod payload;
pub mod ramp;
pub mod runner;
pub mod stats;
pub mod tick;
pub mod transport;

pub use options::{ByteCount, DataRate, OptionsError, PacketCount, PacketSize, RunOptions};
pub use pacing::{batch_delay, Pacer, CORRECTION_INTERVAL};
pub use payload::PayloadBuilder;
pub use ramp::{ramp_up, RampSchedule};
pub use runner::{RunTotals, Runner};
pub use transport::{TransmitError, Transport, UdpTransport};
