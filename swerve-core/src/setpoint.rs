// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Shared duty-cycle setpoints.
//!
//! The foreground control loop and the PWM tick exception communicate through exactly one value:
//! the pair of duty setpoints. [`SetpointCell`] packs both 16-bit setpoints into a single
//! `AtomicU32` so a reader sees either the old pair or the new pair, never one half of each.

use core::sync::atomic::{AtomicU32, Ordering};

/// Duty setpoints for the left and right motor, in PWM counter ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DutyPair {
    pub left: u16,
    pub right: u16,
}

impl DutyPair {
    /// Pair with both channels at the same duty.
    pub const fn splat(duty: u16) -> Self {
        Self {
            left: duty,
            right: duty,
        }
    }

    /// Pack into one word, left channel in the high half.
    pub const fn pack(self) -> u32 {
        ((self.left as u32) << 16) | self.right as u32
    }

    /// Inverse of [`pack`](Self::pack).
    pub const fn unpack(word: u32) -> Self {
        Self {
            left: (word >> 16) as u16,
            right: word as u16,
        }
    }
}

/// Single-word cell holding the published [`DutyPair`].
///
/// Written by the foreground loop, read by the tick handler. Relaxed ordering is sufficient: the
/// word is the only shared state, and the waveform contract only asks that a published pair take
/// effect within one PWM period.
///
/// ```
/// use swerve_core::setpoint::{DutyPair, SetpointCell};
///
/// static SETPOINTS: SetpointCell = SetpointCell::new(DutyPair::splat(6_000));
///
/// SETPOINTS.store(DutyPair { left: 8_200, right: 3_800 });
/// assert_eq!(SETPOINTS.load().right, 3_800);
/// ```
pub struct SetpointCell {
    word: AtomicU32,
}

impl SetpointCell {
    /// Cell holding `initial` until the first store.
    pub const fn new(initial: DutyPair) -> Self {
        Self {
            word: AtomicU32::new(initial.pack()),
        }
    }

    /// Publish a new pair.
    #[inline]
    pub fn store(&self, duty: DutyPair) {
        self.word.store(duty.pack(), Ordering::Relaxed);
    }

    /// Read the most recently published pair.
    #[inline]
    pub fn load(&self) -> DutyPair {
        DutyPair::unpack(self.word.load(Ordering::Relaxed))
    }
}
