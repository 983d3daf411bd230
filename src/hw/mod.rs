pub mod adc;
pub mod gate;
pub mod led;
pub mod pins;
pub mod tick;
pub mod usart;

pub use adc::Adc;
pub use adc::AdcError;
pub use gate::MotorGate;
pub use led::Led;
pub use pins::BoardPins;
pub use tick::TickSource;
pub use usart::Usart;
