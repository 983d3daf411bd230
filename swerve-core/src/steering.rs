// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Distance conversion and the three-tier steering policy.
//!
//! Each Sharp ranger's output voltage rises as the target closes in, so the raw reading is
//! roughly inverse to distance. Dividing an empirically fitted constant by the reading recovers a
//! distance estimate good enough for steering. The policy compares both estimates: inside the
//! dead-band the robot drives straight at nominal duty, outside it the motor on the obstacle side
//! drops to the low tier and the opposite motor rises to the high tier.

use crate::pwm::PWM_PERIOD;
use crate::sensor::RawSensorPair;
use crate::setpoint::DutyPair;

/// Empirical fit for the GP2Y0A21 ranger: distance = constant / raw reading.
pub const CALIBRATION_CONSTANT: u32 = 114_251;

/// Half-width of the no-correction band around zero steering error, in distance units.
pub const DEAD_BAND: i32 = 10;

/// Duty commanded to the motor on the obstacle side.
pub const LOW_DUTY: u16 = 3_800;

/// Duty commanded to both motors when driving straight.
pub const NOMINAL_DUTY: u16 = 6_000;

/// Duty commanded to the motor away from the obstacle.
pub const HIGH_DUTY: u16 = 8_200;

/// Steering decision for one policy update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Steer {
    /// Error inside the dead-band: both motors at nominal duty.
    Straight,
    /// Left ranger reports the nearer obstacle: left motor low, right motor high.
    AvoidLeft,
    /// Right ranger reports the nearer obstacle: left motor high, right motor low.
    AvoidRight,
}

/// Tunable constants of the steering policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SteeringConfig {
    /// Distance = `calibration` / raw reading.
    pub calibration: u32,
    /// Half-width of the dead-band, in distance units.
    pub dead_band: i32,
    /// Duty tier for the motor on the obstacle side.
    pub low_duty: u16,
    /// Duty tier for straight running.
    pub nominal_duty: u16,
    /// Duty tier for the motor away from the obstacle.
    pub high_duty: u16,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            calibration: CALIBRATION_CONSTANT,
            dead_band: DEAD_BAND,
            low_duty: LOW_DUTY,
            nominal_duty: NOMINAL_DUTY,
            high_duty: HIGH_DUTY,
        }
    }
}

/// The steering policy: raw readings in, duty setpoints out.
///
/// ```
/// use swerve_core::sensor::RawSensorPair;
/// use swerve_core::steering::SteeringController;
///
/// let controller = SteeringController::default();
/// let duty = controller.update(RawSensorPair { left: 1_000, right: 1_000 });
/// assert_eq!((duty.left, duty.right), (6_000, 6_000));
/// ```
pub struct SteeringController {
    config: SteeringConfig,
}

impl SteeringController {
    /// Build a controller, clamping every duty tier to `period` so no setpoint can exceed the
    /// counter range.
    pub fn new(config: SteeringConfig, period: u16) -> Self {
        let mut config = config;
        config.low_duty = config.low_duty.min(period);
        config.nominal_duty = config.nominal_duty.min(period);
        config.high_duty = config.high_duty.min(period);
        Self { config }
    }

    /// Active configuration after clamping.
    #[inline]
    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Distance estimate for one raw reading.
    ///
    /// A zero reading means an absent or saturated sensor. It is clamped to 1, which maps to the
    /// maximum representable distance: an empty channel reads as open space on that side.
    #[inline]
    pub fn distance(&self, raw: u16) -> u32 {
        self.config.calibration / raw.max(1) as u32
    }

    /// Steering error: right distance minus left distance.
    pub fn error(&self, raw: RawSensorPair) -> i32 {
        self.distance(raw.right) as i32 - self.distance(raw.left) as i32
    }

    /// Classify an error against the dead-band. Both band edges count as straight.
    pub fn classify(&self, error: i32) -> Steer {
        if error > self.config.dead_band {
            Steer::AvoidLeft
        } else if error < -self.config.dead_band {
            Steer::AvoidRight
        } else {
            Steer::Straight
        }
    }

    /// Duty pair commanded for a steering decision.
    pub fn duties(&self, steer: Steer) -> DutyPair {
        let config = &self.config;
        match steer {
            Steer::Straight => DutyPair::splat(config.nominal_duty),
            Steer::AvoidLeft => DutyPair {
                left: config.low_duty,
                right: config.high_duty,
            },
            Steer::AvoidRight => DutyPair {
                left: config.high_duty,
                right: config.low_duty,
            },
        }
    }

    /// One full policy update: raw readings in, duty setpoints out.
    pub fn update(&self, raw: RawSensorPair) -> DutyPair {
        self.duties(self.classify(self.error(raw)))
    }
}

impl Default for SteeringController {
    /// Reference configuration against the default PWM period.
    fn default() -> Self {
        Self::new(SteeringConfig::default(), PWM_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(left: u16, right: u16) -> RawSensorPair {
        RawSensorPair { left, right }
    }

    #[test]
    fn test_straight_when_readings_equal() {
        let controller = SteeringController::default();
        assert_eq!(controller.error(raw(1_000, 1_000)), 0);
        assert_eq!(controller.classify(0), Steer::Straight);
        assert_eq!(controller.update(raw(1_000, 1_000)), DutyPair::splat(6_000));
    }

    #[test]
    fn test_obstacle_near_right_slows_right_motor() {
        let controller = SteeringController::default();
        // Left reads far (228 units), right reads near (57 units).
        assert_eq!(controller.distance(500), 228);
        assert_eq!(controller.distance(2_000), 57);
        assert_eq!(controller.error(raw(500, 2_000)), -171);

        let duty = controller.update(raw(500, 2_000));
        assert_eq!((duty.left, duty.right), (8_200, 3_800));
    }

    #[test]
    fn test_obstacle_near_left_slows_left_motor() {
        let controller = SteeringController::default();
        let duty = controller.update(raw(2_000, 500));
        assert_eq!((duty.left, duty.right), (3_800, 8_200));
    }

    #[test]
    fn test_dead_band_edges_count_as_straight() {
        let controller = SteeringController::default();

        // 114251/1000 = 114, 114251/921 = 124, 114251/914 = 125.
        assert_eq!(controller.error(raw(1_000, 921)), 10);
        assert_eq!(controller.classify(10), Steer::Straight);
        assert_eq!(controller.error(raw(1_000, 914)), 11);
        assert_eq!(controller.classify(11), Steer::AvoidLeft);

        assert_eq!(controller.error(raw(921, 1_000)), -10);
        assert_eq!(controller.classify(-10), Steer::Straight);
        assert_eq!(controller.error(raw(914, 1_000)), -11);
        assert_eq!(controller.classify(-11), Steer::AvoidRight);
    }

    #[test]
    fn test_only_admissible_pairs_commanded() {
        let controller = SteeringController::default();
        let admissible = [
            DutyPair::splat(NOMINAL_DUTY),
            DutyPair {
                left: LOW_DUTY,
                right: HIGH_DUTY,
            },
            DutyPair {
                left: HIGH_DUTY,
                right: LOW_DUTY,
            },
        ];

        for left in (1..=4_095u16).step_by(97) {
            for right in (1..=4_095u16).step_by(89) {
                let duty = controller.update(raw(left, right));
                assert!(
                    admissible.contains(&duty),
                    "inadmissible pair {:?} for readings ({}, {})",
                    duty,
                    left,
                    right
                );
            }
        }
    }

    #[test]
    fn test_policy_is_mirror_symmetric() {
        let controller = SteeringController::default();
        for (left, right) in [(500, 2_000), (37, 4_095), (123, 3_001), (1_000, 921), (914, 1_000)] {
            let forward = controller.update(raw(left, right));
            let mirrored = controller.update(raw(right, left));
            assert_eq!(forward.left, mirrored.right);
            assert_eq!(forward.right, mirrored.left);
        }
    }

    #[test]
    fn test_zero_reading_reads_as_open_space() {
        let controller = SteeringController::default();
        assert_eq!(controller.distance(0), CALIBRATION_CONSTANT);
        assert_eq!(controller.distance(0), controller.distance(1));

        // Dead left channel, near obstacle on the right: the right correction still wins.
        let duty = controller.update(raw(0, 2_000));
        assert_eq!((duty.left, duty.right), (8_200, 3_800));

        // Both channels dead: no correction.
        assert_eq!(controller.update(raw(0, 0)), DutyPair::splat(NOMINAL_DUTY));
    }

    #[test]
    fn test_extreme_readings_stay_in_range() {
        let controller = SteeringController::default();
        assert_eq!(controller.distance(1), CALIBRATION_CONSTANT);
        assert_eq!(controller.distance(4_095), 27);

        // Far-left extreme against near-right extreme: the right correction.
        let duty = controller.update(raw(1, 4_095));
        assert_eq!((duty.left, duty.right), (8_200, 3_800));
    }

    #[test]
    fn test_duty_tiers_clamped_to_period() {
        let config = SteeringConfig {
            high_duty: 60_000,
            ..SteeringConfig::default()
        };
        let controller = SteeringController::new(config, 12_000);
        assert_eq!(controller.config().high_duty, 12_000);

        let duty = controller.update(raw(4_095, 1));
        assert_eq!((duty.left, duty.right), (3_800, 12_000));
    }
}
