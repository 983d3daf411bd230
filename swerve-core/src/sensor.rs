// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Raw sensor readings and the acquisition contract.
//!
//! The control core never touches a converter. The firmware implements [`SensorPair`] on top of
//! its ADC and hands readings to [`steering`](crate::steering) as a [`RawSensorPair`].

/// One acquisition: the latest raw readings from both rangers.
///
/// Readings are unscaled converter output. With a 12-bit converter the useful range is
/// `1..=4095`; a zero is possible when a sensor is absent or saturated low and is handled by the
/// distance conversion, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawSensorPair {
    pub left: u16,
    pub right: u16,
}

/// A pair of range sensors sampled on demand.
///
/// `acquire` starts a fresh conversion on both channels and blocks until both complete or the
/// implementation's bound elapses. Implementations must discard any stale completion indication
/// before triggering, so a reading from a previous conversion is never returned as fresh.
pub trait SensorPair {
    type Error;

    /// Sample both sensors, returning readings in (left, right) order.
    fn acquire(&mut self) -> Result<RawSensorPair, Self::Error>;
}
