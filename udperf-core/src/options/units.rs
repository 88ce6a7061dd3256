use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Deref, Div, Mul},
    str::FromStr,
    time::Duration,
};

use super::OptionsError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct ByteCount(pub u64);

impl From<ByteCount> for u64 {
    fn from(value: ByteCount) -> Self {
        value.0
    }
}

impl From<ByteCount> for usize {
    fn from(value: ByteCount) -> Self {
        value.0 as usize
    }
}

impl Deref for ByteCount {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ByteCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl Add for ByteCount {
    type Output = ByteCount;

    fn add(self, rhs: ByteCount) -> Self::Output {
        ByteCount(self.0 + rhs.0)
    }
}

impl AddAssign for ByteCount {
    fn add_assign(&mut self, rhs: ByteCount) {
        self.0 += rhs.0;
    }
}

impl Div<PacketSize> for ByteCount {
    type Output = PacketCount;

    fn div(self, rhs: PacketSize) -> Self::Output {
        PacketCount(self.0 / rhs.0)
    }
}

/// Parses a size with a `B`/`K`/`M`/`G` suffix, base-1024 multipliers.
/// The suffix is mandatory: `"10M"` is 10 MiB, `"10"` is an error.
impl FromStr for ByteCount {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let unit = chars.next_back().ok_or(OptionsError::EmptySize)?;
        let digits = chars.as_str();
        let count: u64 = digits
            .parse()
            .map_err(|_| OptionsError::InvalidSizeNumber(digits.into()))?;
        let multiplier = match unit {
            'B' => 1,
            'K' => 1024,
            'M' => 1024 * 1024,
            'G' => 1024 * 1024 * 1024,
            other => return Err(OptionsError::InvalidSizeUnit(other)),
        };
        Ok(ByteCount(count * multiplier))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct PacketSize(pub u64);

impl From<PacketSize> for u64 {
    fn from(value: PacketSize) -> Self {
        value.0
    }
}

impl From<PacketSize> for usize {
    fn from(value: PacketSize) -> Self {
        value.0 as usize
    }
}

impl Deref for PacketSize {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PacketSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl Mul<PacketCount> for PacketSize {
    type Output = ByteCount;

    fn mul(self, rhs: PacketCount) -> Self::Output {
        ByteCount(self.0 * rhs.0)
    }
}

impl Mul<PacketSize> for PacketCount {
    type Output = ByteCount;

    fn mul(self, rhs: PacketSize) -> Self::Output {
        rhs * self
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct PacketCount(pub u64);

impl From<PacketCount> for u64 {
    fn from(value: PacketCount) -> Self {
        value.0
    }
}

impl From<PacketCount> for usize {
    fn from(value: PacketCount) -> Self {
        value.0 as usize
    }
}

impl Deref for PacketCount {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PacketCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} packets", self.0)
    }
}

/// Rate in bytes per second.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct DataRate(pub u64);

impl From<u64> for DataRate {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DataRate> for u64 {
    fn from(value: DataRate) -> Self {
        value.0
    }
}

impl Deref for DataRate {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} B/s", self.0)
    }
}

impl Mul<Duration> for DataRate {
    type Output = ByteCount;

    fn mul(self, rhs: Duration) -> Self::Output {
        let bytes_nearest_second = self.0 * rhs.as_secs();
        let bytes_scaled_for_micros =
            (self.0 as u128).saturating_mul(rhs.subsec_micros() as u128);
        let bytes_remaining_micros = (bytes_scaled_for_micros / 1_000_000) as u64;
        ByteCount(bytes_nearest_second + bytes_remaining_micros)
    }
}

impl Mul<DataRate> for Duration {
    type Output = ByteCount;

    fn mul(self, rhs: DataRate) -> Self::Output {
        rhs * self
    }
}

impl FromStr for DataRate {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: ByteCount = s.parse()?;
        Ok(DataRate(bytes.0))
    }
}
