// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board-level configuration for the Swerve robot.
//!
//! Control policy constants (calibration, dead-band, duty tiers) live in `swerve-core`; this
//! module only pins down what is specific to this board revision.

/// Core clock requested from the RCC.
pub const SYSCLK_HZ: u32 = 120_000_000;

/// SysTick exception rate driving the software PWM counter.
pub const PWM_TICK_HZ: u32 = 10_000;

/// ADC1 channel of the left ranger (PC4 = ADC1_IN14).
pub const ADC_CH_LEFT: u8 = 14;

/// ADC1 channel of the right ranger (PC5 = ADC1_IN15).
pub const ADC_CH_RIGHT: u8 = 15;

/// End-of-conversion poll budget per ADC read.
///
/// A conversion normally completes in a few microseconds; burning this many status polls means
/// the converter is wedged and the acquisition is abandoned.
pub const ADC_TIMEOUT_POLLS: u32 = 100_000;

/// Debug console baud rate on USART1.
pub const DEBUG_BAUD: u32 = 115_200;
