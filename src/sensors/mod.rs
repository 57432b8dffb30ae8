//! Sensor modules for the FXAS21002C
//!
//! This module provides types, enums, and conversion math for the two
//! measurement channels of the FXAS21002C:
//! - Gyroscope (3-axis angular rate)
//! - Internal temperature sensor
//!
//! All sensor operations are performed through methods on `Fxas21002cDriver`.

pub mod gyroscope;
pub mod temperature;

// Re-export main types
pub use gyroscope::{
    Axis, GyroConfig, GyroDataDps, GyroDataRps, GyroFullScale, GyroOdr, InvalidCode,
};
pub use temperature::{raw_to_celsius, TemperatureUnit};
