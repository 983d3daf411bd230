// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sharp GP2Y0A21YK0F infrared ranger pair.
//!
//! Two rangers sit on the robot's nose, angled left and right, each feeding one ADC1 channel.
//! The device outputs an analog voltage that rises as the target closes in, so raw readings are
//! roughly inverse to distance; the control core recovers a distance estimate from them.
//!
//! Wiring (JST PH 3-pin):
//! - Pin 1 (Yellow): Vo (ADC input)
//! - Pin 2 (Black):  GND
//! - Pin 3 (Red):    Vcc (5V, with a bulk capacitor near the sensor)

use crate::hw::adc::{Adc, AdcError};

use swerve_core::sensor::{RawSensorPair, SensorPair};

/// Ranger pair bound to two ADC1 channels.
pub struct RangerPair {
    adc: Adc,
    left_ch: u8,
    right_ch: u8,
}

impl RangerPair {
    /// Bind the pair to its converter and channels.
    pub fn new(adc: Adc, left_ch: u8, right_ch: u8) -> Self {
        Self {
            adc,
            left_ch,
            right_ch,
        }
    }

    /// Release the converter.
    pub fn free(self) -> Adc {
        self.adc
    }
}

impl SensorPair for RangerPair {
    type Error = AdcError;

    /// Sample both rangers, left first. Either side stalling past the converter's poll budget
    /// aborts the acquisition.
    fn acquire(&mut self) -> Result<RawSensorPair, AdcError> {
        let left = self.adc.read(self.left_ch)?;
        let right = self.adc.read(self.right_ch)?;
        Ok(RawSensorPair { left, right })
    }
}
