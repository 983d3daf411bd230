//! Periodic tick source on the Cortex-M SysTick timer.
//!
//! The PWM counter advances in the `SysTick` exception. SysTick fits this job well: it lives in
//! the core, needs no NVIC plumbing, and `cortex-m-rt` routes its exception with the
//! `#[exception]` attribute. The reload value is derived from the core clock, so the handler
//! fires at the requested rate independent of clock configuration.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;

/// Running SysTick configured as a fixed-rate exception source.
pub struct TickSource {
    syst: SYST,
}

impl TickSource {
    /// Configure SysTick for `tick_hz` exceptions and start it.
    ///
    /// `sysclk_hz` is the core clock feeding the counter. The first exception arrives one full
    /// tick after this returns, so any state the handler touches must be installed before the
    /// call. With a 120 MHz core clock and a 10 kHz tick the reload is 11 999, well inside the
    /// 24-bit reload register.
    pub fn start(mut syst: SYST, sysclk_hz: u32, tick_hz: u32) -> Self {
        syst.set_clock_source(SystClkSource::Core);

        // Counts reload..0 inclusive, so reload = cycles per tick - 1.
        let reload = (sysclk_hz / tick_hz).saturating_sub(1);
        syst.set_reload(reload);
        syst.clear_current();

        syst.enable_interrupt();
        syst.enable_counter();

        Self { syst }
    }

    /// Stop the tick and release the peripheral.
    pub fn free(mut self) -> SYST {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        self.syst
    }
}
