// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor gate drive.
//!
//! Each wheel motor is switched by a logic-level MOSFET whose gate hangs off one GPIO through a
//! series resistor. Gate high = motor energized. The PWM tick handler is the only writer once
//! the loop is running.

use stm32f7xx_hal::gpio::{self, Output, PinState, PushPull};

/// Push-pull, active-high gate line, generic over any GPIO pin.
pub struct MotorGate<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> MotorGate<P, N> {
    /// Create a gate line and set it to the de-energized state (i.e., low).
    pub fn new<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_state(PinState::Low);
        Self { pin }
    }

    /// Drive the gate: `true` energizes the motor.
    #[inline]
    pub fn set(&mut self, energized: bool) {
        if energized {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Force the motor off.
    #[inline]
    pub fn off(&mut self) {
        self.pin.set_low();
    }

    pub fn free(self) -> gpio::Pin<P, N, Output<PushPull>> {
        self.pin
    }
}
