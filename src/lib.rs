#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{DataReadyStatus, DriverState, Fxas21002cDriver, GyroData};
pub use interface::{I2cInterface, SpiInterface};
pub use sensors::{
    Axis, GyroConfig, GyroDataDps, GyroDataRps, GyroFullScale, GyroOdr, InvalidCode,
    TemperatureUnit,
};

/// FXAS21002C I2C address when the SA0 pin is low (default: 0x20)
///
/// This is the most common configuration. Use [`I2cInterface::default()`]
/// for this address.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x20;

/// FXAS21002C I2C address when the SA0 pin is high (alternative: 0x21)
///
/// Use this address when the SA0 pin is pulled high to VDD. Use
/// [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x21;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0xD7;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Invalid configuration parameter (register code out of range)
    InvalidConfig,
    /// Data or configuration requested before `start()`/`init()`
    NotStarted,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
