// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Software PWM counter core.
//!
//! The firmware has no spare hardware timer channels for the motor gates, so the waveform is
//! synthesized in software: a periodic exception advances a free-running counter modulo the
//! period and drives each gate high while the counter is below that channel's setpoint. Both
//! channels share the counter, so their leading edges are phase-locked at the wrap.
//!
//! [`SoftPwm`] holds only the counter arithmetic. The firmware owns the instance inside its tick
//! handler and applies the returned [`Levels`] to the gate pins.

use crate::setpoint::DutyPair;

/// Counter ticks per PWM period.
///
/// The waveform rate is the tick rate divided by this period. A setpoint equal to the period is
/// full-on; zero is full-off.
pub const PWM_PERIOD: u16 = 12_000;

/// Output levels for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Levels {
    pub left: bool,
    pub right: bool,
}

/// Free-running counter over two phase-locked channels.
pub struct SoftPwm {
    period: u16,
    counter: u16,
}

impl SoftPwm {
    /// Generator with the counter at zero.
    pub const fn new(period: u16) -> Self {
        Self { period, counter: 0 }
    }

    /// Current counter value, in `[0, period)`.
    #[inline]
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Configured period in ticks.
    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Advance one tick and derive both output levels.
    ///
    /// The counter increments before the comparison, so a setpoint of `S` holds a channel high
    /// for exactly `S` of every `period` ticks, the run starting at the counter wrap. Setpoints
    /// above the period saturate to full-on rather than fault the handler.
    pub fn tick(&mut self, duty: DutyPair) -> Levels {
        self.counter += 1;
        if self.counter >= self.period {
            self.counter = 0;
        }
        Levels {
            left: self.counter < duty.left.min(self.period),
            right: self.counter < duty.right.min(self.period),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_count_matches_setpoint_exactly() {
        let mut pwm = SoftPwm::new(PWM_PERIOD);
        let duty = DutyPair {
            left: 8_200,
            right: 3_800,
        };

        let mut left_high = 0u32;
        let mut right_high = 0u32;
        for _ in 0..PWM_PERIOD {
            let levels = pwm.tick(duty);
            assert_eq!(levels.left, pwm.counter() < duty.left);
            assert_eq!(levels.right, pwm.counter() < duty.right);
            if levels.left {
                left_high += 1;
            }
            if levels.right {
                right_high += 1;
            }
        }
        assert_eq!(left_high, 8_200);
        assert_eq!(right_high, 3_800);
    }

    #[test]
    fn test_high_run_sits_below_setpoint() {
        let mut pwm = SoftPwm::new(10);
        let duty = DutyPair::splat(4);

        // Across three periods every tick is high exactly when the counter is below the
        // setpoint, i.e. the high run occupies counters 0..4 of each period.
        for _ in 0..30 {
            let levels = pwm.tick(duty);
            assert_eq!(levels.left, pwm.counter() < 4);
            assert_eq!(levels.right, pwm.counter() < 4);
        }
    }

    #[test]
    fn test_full_on_and_full_off() {
        let mut pwm = SoftPwm::new(100);
        for _ in 0..200 {
            let levels = pwm.tick(DutyPair {
                left: 100,
                right: 0,
            });
            assert!(levels.left);
            assert!(!levels.right);
        }
    }

    #[test]
    fn test_setpoint_above_period_saturates() {
        let mut pwm = SoftPwm::new(100);
        for _ in 0..200 {
            let levels = pwm.tick(DutyPair::splat(150));
            assert!(levels.left);
            assert!(levels.right);
        }
    }

    #[test]
    fn test_counter_wraps_every_period() {
        let mut pwm = SoftPwm::new(50);
        for cycle in 1..=3 {
            for tick in 1u16..50 {
                pwm.tick(DutyPair::splat(0));
                assert_eq!(pwm.counter(), tick);
            }
            pwm.tick(DutyPair::splat(0));
            assert_eq!(pwm.counter(), 0, "no wrap in cycle {}", cycle);
        }
    }

    #[test]
    fn test_setpoint_change_lands_within_one_period() {
        let mut pwm = SoftPwm::new(100);

        // Run partway into a period on the old pair.
        for _ in 0..37 {
            pwm.tick(DutyPair::splat(30));
        }

        // Switch pairs mid-period, run to the wrap, then measure one full period.
        let duty = DutyPair::splat(80);
        let mut waited = 0u32;
        loop {
            pwm.tick(duty);
            waited += 1;
            assert!(waited <= 100);
            if pwm.counter() == 0 {
                break;
            }
        }

        let mut high = 0u32;
        for _ in 0..100 {
            if pwm.tick(duty).left {
                high += 1;
            }
        }
        assert_eq!(high, 80);
    }
}
