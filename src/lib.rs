// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Swerve Firmware
//!
//! This crate contains all firmware components for the Swerve obstacle-avoidance robot, written
//! in Rust, targeting an STM32F767 MCU.
//!
//! The robot carries two Sharp infrared rangers on its nose and one DC motor per wheel, each
//! switched by a MOSFET. The control loop reads both rangers, steers by slowing the motor on the
//! nearer-obstacle side, and synthesizes the motor PWM in the SysTick exception. The policy and
//! waveform arithmetic live in the hardware-independent [`swerve_core`] crate so they can be
//! unit-tested on the host.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around ADC, SysTick, GPIO, USART |
//! | [`drivers`] | Device-level drivers (e.g., GP2Y0A21 ranger pair) |
//! | [`config`] | Board-level constants (clocks, channels, poll budgets) |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the control core tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Build the firmware image:
//!
//! ```bash
//! cargo build -p swerve --target thumbv7em-none-eabihf --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod config;
pub mod drivers;
pub mod hw;
