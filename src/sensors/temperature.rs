//! Internal temperature sensor types for the FXAS21002C
//!
//! The TEMP register holds a signed 8-bit value in °C directly
//! (1 °C/LSB, no offset).

use super::InvalidCode;

/// Temperature unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Kelvin
    Kelvin,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius value into this unit
    #[must_use]
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Self::Celsius => celsius,
            Self::Kelvin => celsius + 273.15,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

impl TryFrom<char> for TemperatureUnit {
    type Error = InvalidCode;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' | 'C' => Ok(Self::Celsius),
            'k' | 'K' => Ok(Self::Kelvin),
            'f' | 'F' => Ok(Self::Fahrenheit),
            _ => Err(InvalidCode),
        }
    }
}

/// Convert a raw TEMP register value to degrees Celsius
#[must_use]
pub fn raw_to_celsius(raw: i8) -> f32 {
    f32::from(raw)
}
