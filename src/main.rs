#![no_main]
#![no_std]
#![allow(dead_code)]

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use cortex_m_rt::{entry, exception};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use swerve_core::pwm::{SoftPwm, PWM_PERIOD};
use swerve_core::sensor::SensorPair;
use swerve_core::setpoint::{DutyPair, SetpointCell};
use swerve_core::steering::{Steer, SteeringController, NOMINAL_DUTY};

mod config;
mod drivers;
mod hw;

use drivers::RangerPair;
use hw::{Adc, BoardPins, Led, MotorGate, TickSource, Usart};

/// Published duty setpoints: written by the control loop, read by the `SysTick` handler.
static SETPOINTS: SetpointCell = SetpointCell::new(DutyPair::splat(NOMINAL_DUTY));

/// PWM counter and gate pins, owned by the `SysTick` handler after bring-up.
static PWM: Mutex<RefCell<Option<PwmChannels>>> = Mutex::new(RefCell::new(None));

/// Everything one PWM tick touches: the counter core plus both gate lines.
struct PwmChannels {
    pwm: SoftPwm,
    left: MotorGate<'A', 4>,
    right: MotorGate<'A', 5>,
}

impl PwmChannels {
    /// Advance the counter one tick and drive both gates. Runs in exception context and must not
    /// block.
    fn on_tick(&mut self, setpoints: &SetpointCell) {
        let levels = self.pwm.tick(setpoints.load());
        self.left.set(levels.left);
        self.right.set(levels.right);
    }
}

#[exception]
fn SysTick() {
    interrupt::free(|cs| {
        if let Some(channels) = PWM.borrow(cs).borrow_mut().as_mut() {
            channels.on_tick(&SETPOINTS);
        }
    });
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(config::SYSCLK_HZ.Hz()).freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD);

    // LEDs
    let mut led_yellow = Led::active_low(pins.leds.yellow);
    let mut led_green = Led::active_low(pins.leds.green);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: config::DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    // Rangers on ADC1
    let adc = Adc::adc1(dp.ADC1, config::ADC_TIMEOUT_POLLS);
    let mut rangers = RangerPair::new(adc, config::ADC_CH_LEFT, config::ADC_CH_RIGHT);

    // Motor gates, low until the first tick
    let left = MotorGate::new(pins.motors.left);
    let right = MotorGate::new(pins.motors.right);

    // Hand the counter and gates to the tick handler before starting the tick: the first
    // exception taken must already find valid state and setpoints.
    interrupt::free(|cs| {
        PWM.borrow(cs).replace(Some(PwmChannels {
            pwm: SoftPwm::new(PWM_PERIOD),
            left,
            right,
        }));
    });
    let _tick = TickSource::start(cp.SYST, clocks.sysclk().raw(), config::PWM_TICK_HZ);

    let controller = SteeringController::default();
    let mut last_steer = Steer::Straight;
    let mut faulted = false;

    usart.println("swerve: control loop up");
    led_green.on();

    loop {
        match rangers.acquire() {
            Ok(raw) => {
                if faulted {
                    faulted = false;
                    led_yellow.off();
                    usart.println("rangers: recovered");
                }

                let error = controller.error(raw);
                let steer = controller.classify(error);
                SETPOINTS.store(controller.duties(steer));

                if steer != last_steer {
                    last_steer = steer;
                    led_green.toggle();
                    let _ = writeln!(
                        usart,
                        "steer {:?}: L={} R={} err={}\r",
                        steer,
                        controller.distance(raw.left),
                        controller.distance(raw.right),
                        error,
                    );
                }
            }
            Err(_) => {
                // Converter stalled: hold course at nominal rather than hold the last correction.
                SETPOINTS.store(DutyPair::splat(controller.config().nominal_duty));
                if !faulted {
                    faulted = true;
                    led_yellow.on();
                    usart.println("rangers: conversion timed out, holding straight");
                }
            }
        }
    }
}
