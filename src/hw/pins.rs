// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for STM32F767 MCU for Swerve.

use stm32f7xx_hal::{
    gpio::{gpioa, gpioc, gpiod, Alternate, Analog, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart1: Usart1Pins,
    pub motors: MotorPins,
    pub rangers: RangerPins,
}

pub struct LedPins {
    pub yellow: gpiod::PD9<Output<PushPull>>,
    pub green: gpiod::PD10<Output<PushPull>>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// MOSFET gate drive, one pin per wheel motor.
pub struct MotorPins {
    pub left: gpioa::PA4<Output<PushPull>>,
    pub right: gpioa::PA5<Output<PushPull>>,
}

/// Sharp ranger analog inputs (ADC1_IN14 / ADC1_IN15).
pub struct RangerPins {
    pub left: gpioc::PC4<Analog>,
    pub right: gpioc::PC5<Analog>,
}

impl BoardPins {
    /// Create all the named pins from the raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: LedPins {
                yellow: gpiod.pd9.into_push_pull_output(),
                green: gpiod.pd10.into_push_pull_output(),
            },
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
            motors: MotorPins {
                left: gpioa.pa4.into_push_pull_output(),
                right: gpioa.pa5.into_push_pull_output(),
            },
            rangers: RangerPins {
                left: gpioc.pc4.into_analog(),
                right: gpioc.pc5.into_analog(),
            },
        }
    }
}
