//! Basic ADC support for STM32F7 using direct PAC register access.
//!
//! Thin wrapper around ADC1 with blocking single-channel reads. Every end-of-conversion wait is
//! bounded by a poll budget so a wedged converter stalls one acquisition, not the control loop.
//!
//! Example:
//! ```ignore
//! let mut adc = Adc::adc1(dp.ADC1, 100_000);
//! let value = adc.read(14)?;
//! ```

use stm32f7xx_hal::pac;

/// Failure of a blocking ADC read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdcError {
    /// The conversion did not complete within the poll budget.
    Timeout,
}

/// Wrapper around the ADC1 peripheral.
pub struct Adc {
    adc: pac::ADC1,
    timeout_polls: u32,
}

fn configure_common() {
    let common = unsafe { &*pac::ADC_COMMON::ptr() };

    // ADC prescaler: PCLK2 / 4
    common.ccr.modify(|_, w| w.adcpre().div4());
}

fn init_basic_adc(adc: &pac::adc1::RegisterBlock) {
    // Power off to configure
    adc.cr2.modify(|_, w| w.adon().clear_bit());

    // 12-bit, right-aligned, software trigger
    adc.cr1.modify(|_, w| w.res().bits(0b00));
    adc.cr2.modify(|_, w| {
        w.cont().clear_bit();
        w.align().right();
        w.exten().disabled();
        w
    });

    // Default minimal sample times
    adc.smpr1.modify(|_, w| unsafe { w.bits(0) });
    adc.smpr2.modify(|_, w| unsafe { w.bits(0) });

    // Power on
    adc.cr2.modify(|_, w| w.adon().set_bit());
}

/// Configure the longest sample time on one channel. The Sharp ranger output impedance wants the
/// slowest option for a stable reading.
fn set_sample_time(adc: &pac::adc1::RegisterBlock, channel: u8) {
    if channel <= 9 {
        adc.smpr2.modify(|_, w| match channel {
            0 => w.smp0().bits(0b111),
            1 => w.smp1().bits(0b111),
            2 => w.smp2().bits(0b111),
            3 => w.smp3().bits(0b111),
            4 => w.smp4().bits(0b111),
            5 => w.smp5().bits(0b111),
            6 => w.smp6().bits(0b111),
            7 => w.smp7().bits(0b111),
            8 => w.smp8().bits(0b111),
            9 => w.smp9().bits(0b111),
            _ => unreachable!(),
        });
    } else if channel <= 18 {
        adc.smpr1.modify(|_, w| match channel {
            10 => w.smp10().bits(0b111),
            11 => w.smp11().bits(0b111),
            12 => w.smp12().bits(0b111),
            13 => w.smp13().bits(0b111),
            14 => w.smp14().bits(0b111),
            15 => w.smp15().bits(0b111),
            16 => w.smp16().bits(0b111),
            17 => w.smp17().bits(0b111),
            18 => w.smp18().bits(0b111),
            _ => unreachable!(),
        });
    }
}

impl Adc {
    /// Create and initialize ADC1. `timeout_polls` bounds every end-of-conversion wait.
    pub fn adc1(adc1: pac::ADC1, timeout_polls: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        configure_common();
        init_basic_adc(&adc1);

        Self {
            adc: adc1,
            timeout_polls,
        }
    }

    /// Read a single channel.
    ///
    /// Triggers a fresh conversion and blocks until it completes or the poll budget runs out.
    pub fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        let adc = &self.adc;

        set_sample_time(adc, channel);

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));

        // Set channel
        adc.sqr3
            .modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

        // Drop stale completion flags so an earlier conversion can never satisfy this trigger.
        adc.sr.modify(|_, w| w.eoc().clear_bit().ovr().clear_bit());

        // Start
        adc.cr2.modify(|_, w| w.swstart().set_bit());

        // Wait for completion, bounded
        let mut polls = 0u32;
        while adc.sr.read().eoc().bit_is_clear() {
            polls += 1;
            if polls >= self.timeout_polls {
                return Err(AdcError::Timeout);
            }
        }

        // Reading DR also clears EOC.
        Ok(adc.dr.read().data().bits() as u16)
    }

    #[inline]
    pub fn free(self) -> pac::ADC1 {
        self.adc
    }
}
