// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Swerve Control Core
//!
//! Hardware-independent control core for the Swerve obstacle-avoidance robot. The robot carries
//! two forward-facing infrared rangers and two independently driven wheels; this crate turns a
//! pair of raw ranger readings into a pair of motor duty cycles and generates the software PWM
//! waveform that realizes them.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | ------- |
//! | [`sensor`] | Raw reading types and the acquisition contract the firmware implements |
//! | [`steering`] | Distance conversion, steering error, and the three-tier duty policy |
//! | [`setpoint`] | Single-word atomic cell carrying both duty setpoints to the tick handler |
//! | [`pwm`] | Free-running counter core that derives the two output levels each tick |
//!
//! The crate is `no_std` and dependency-free so the whole control path can be unit-tested on the
//! host. The `swerve` firmware crate binds it to the STM32F7 peripherals: the foreground loop
//! feeds [`steering`] and publishes through [`setpoint`], while the periodic tick exception
//! advances [`pwm`] and drives the motor gate pins.

#![no_std]

pub mod pwm;
pub mod sensor;
pub mod setpoint;
pub mod steering;

pub use pwm::{Levels, SoftPwm, PWM_PERIOD};
pub use sensor::{RawSensorPair, SensorPair};
pub use setpoint::{DutyPair, SetpointCell};
pub use steering::{Steer, SteeringConfig, SteeringController};

#[cfg(test)]
mod tests {
    use crate::pwm::{SoftPwm, PWM_PERIOD};
    use crate::sensor::RawSensorPair;
    use crate::setpoint::{DutyPair, SetpointCell};
    use crate::steering::{SteeringController, HIGH_DUTY, LOW_DUTY, NOMINAL_DUTY};

    // End-to-end path: readings through the policy, published through the cell, consumed by the
    // counter core. A pair published mid-period must be fully in effect no later than the first
    // complete period after the publish.
    #[test]
    fn test_policy_to_waveform_within_one_period() {
        let controller = SteeringController::default();
        let cell = SetpointCell::new(DutyPair::splat(NOMINAL_DUTY));
        let mut pwm = SoftPwm::new(PWM_PERIOD);

        // Clear corridor for a while, mid-period.
        for _ in 0..1_234 {
            pwm.tick(cell.load());
        }

        // Obstacle closes in on the right.
        cell.store(controller.update(RawSensorPair {
            left: 500,
            right: 2_000,
        }));

        // Run to the next counter wrap. The wait is bounded by a single period.
        let mut waited = 0u32;
        loop {
            pwm.tick(cell.load());
            waited += 1;
            assert!(waited <= PWM_PERIOD as u32);
            if pwm.counter() == 0 {
                break;
            }
        }

        // The first full period after the wrap carries the new pair exactly.
        let mut left_high = 0u32;
        let mut right_high = 0u32;
        for _ in 0..PWM_PERIOD {
            let levels = pwm.tick(cell.load());
            if levels.left {
                left_high += 1;
            }
            if levels.right {
                right_high += 1;
            }
        }
        assert_eq!(left_high, HIGH_DUTY as u32);
        assert_eq!(right_high, LOW_DUTY as u32);
    }
}
