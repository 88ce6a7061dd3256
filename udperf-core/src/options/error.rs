use std::{io, io::ErrorKind};

use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum OptionsError {
    #[error("Size string is empty.")]
    EmptySize,

    #[error("Invalid size number: {0:?}. Expected decimal digits followed by a unit suffix.")]
    InvalidSizeNumber(String),

    #[error("Invalid size unit: {0:?}. Valid units are B, K, M, and G.")]
    InvalidSizeUnit(char),

    #[error("Bandwidth must be at least one packet ({0}) per second.")]
    BandwidthBelowPacketSize(super::PacketSize),
}

impl From<OptionsError> for io::Error {
    fn from(error: OptionsError) -> Self {
        Self::new(ErrorKind::InvalidInput, error)
    }
}
