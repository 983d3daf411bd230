// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! control loop.
//!
//! ## Existing drivers
//!
//! - [`gp2y0a21`] – Sharp GP2Y0A21YK0F infrared ranger pair on ADC1

pub mod gp2y0a21;

pub use gp2y0a21::RangerPair;
