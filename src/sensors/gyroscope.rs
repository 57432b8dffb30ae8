//! Gyroscope types and conversion math for the FXAS21002C
//!
//! Provides the full-scale range and output data rate selections, the
//! driver configuration, and the raw-to-physical conversion types.

/// Full-scale range in °/s, indexed by `[fs_double][range code]`
///
/// Row 0 is the standard table, row 1 the expanded (doubled) table
/// selected by CTRL_REG3 FS_DOUBLE.
const FULL_SCALE_DPS: [[f32; 4]; 2] = [
    [2000.0, 1000.0, 500.0, 250.0],
    [4000.0, 2000.0, 1000.0, 500.0],
];

/// Output data rate in Hz, indexed by DR code
///
/// Codes 6 and 7 are both 12.5 Hz per the datasheet.
const ODR_HZ: [f32; 8] = [800.0, 400.0, 200.0, 100.0, 50.0, 25.0, 12.5, 12.5];

/// Error for a register code or selector with no corresponding setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCode;

/// Gyroscope full-scale range (CTRL_REG0 FS)
///
/// The effective range doubles when range expansion is enabled, see
/// [`GyroConfig::double_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±2000°/s range (±4000°/s expanded)
    Dps2000 = 0,
    /// ±1000°/s range (±2000°/s expanded)
    Dps1000 = 1,
    /// ±500°/s range (±1000°/s expanded)
    Dps500 = 2,
    /// ±250°/s range (±500°/s expanded)
    Dps250 = 3,
}

impl GyroFullScale {
    /// Get the full-scale range in °/s
    ///
    /// `double_range` selects the expanded table (CTRL_REG3 FS_DOUBLE).
    #[must_use]
    pub const fn full_scale_dps(self, double_range: bool) -> f32 {
        FULL_SCALE_DPS[double_range as usize][self as usize]
    }

    /// Get the conversion factor in (°/s)/LSB
    ///
    /// Raw samples span the full signed 16-bit range, so one LSB is the
    /// full-scale value divided by 2^15.
    #[must_use]
    pub const fn dps_per_lsb(self, double_range: bool) -> f32 {
        self.full_scale_dps(double_range) / 32768.0
    }
}

impl TryFrom<u8> for GyroFullScale {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Dps2000),
            1 => Ok(Self::Dps1000),
            2 => Ok(Self::Dps500),
            3 => Ok(Self::Dps250),
            _ => Err(InvalidCode),
        }
    }
}

/// Gyroscope output data rate (CTRL_REG1 DR)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// 800 Hz
    Hz800 = 0,
    /// 400 Hz
    Hz400 = 1,
    /// 200 Hz
    Hz200 = 2,
    /// 100 Hz
    Hz100 = 3,
    /// 50 Hz
    Hz50 = 4,
    /// 25 Hz
    Hz25 = 5,
    /// 12.5 Hz
    Hz12_5 = 6,
    /// 12.5 Hz (duplicate encoding)
    Hz12_5Alt = 7,
}

impl GyroOdr {
    /// Get the sample frequency in Hz
    ///
    /// Informational only; the conversion math does not depend on it.
    #[must_use]
    pub const fn frequency_hz(self) -> f32 {
        ODR_HZ[self as usize]
    }
}

impl TryFrom<u8> for GyroOdr {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Hz800),
            1 => Ok(Self::Hz400),
            2 => Ok(Self::Hz200),
            3 => Ok(Self::Hz100),
            4 => Ok(Self::Hz50),
            5 => Ok(Self::Hz25),
            6 => Ok(Self::Hz12_5),
            7 => Ok(Self::Hz12_5Alt),
            _ => Err(InvalidCode),
        }
    }
}

/// Gyroscope axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl TryFrom<char> for Axis {
    type Error = InvalidCode;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' | 'X' => Ok(Self::X),
            'y' | 'Y' => Ok(Self::Y),
            'z' | 'Z' => Ok(Self::Z),
            _ => Err(InvalidCode),
        }
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub range: GyroFullScale,
    /// Output data rate
    pub odr: GyroOdr,
    /// Full-scale range expansion (CTRL_REG3 FS_DOUBLE); doubles the range
    pub double_range: bool,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            range: GyroFullScale::Dps2000,
            odr: GyroOdr::Hz200,
            double_range: false,
        }
    }
}

impl GyroConfig {
    /// Build a configuration from raw register codes
    ///
    /// Validates `range` ∈ 0..=3, `odr` ∈ 0..=7 and `fs_double` ∈ {0, 1}.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCode`] if any code is out of range.
    pub fn from_codes(range: u8, odr: u8, fs_double: u8) -> Result<Self, InvalidCode> {
        let double_range = match fs_double {
            0 => false,
            1 => true,
            _ => return Err(InvalidCode),
        };
        Ok(Self {
            range: GyroFullScale::try_from(range)?,
            odr: GyroOdr::try_from(odr)?,
            double_range,
        })
    }

    /// Get the conversion factor in (°/s)/LSB for this configuration
    #[must_use]
    pub const fn dps_per_lsb(&self) -> f32 {
        self.range.dps_per_lsb(self.double_range)
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `dps_per_lsb` - Conversion factor (from [`GyroConfig::dps_per_lsb()`])
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, dps_per_lsb: f32) -> Self {
        Self {
            x: f32::from(raw_x) * dps_per_lsb,
            y: f32::from(raw_y) * dps_per_lsb,
            z: f32::from(raw_z) * dps_per_lsb,
        }
    }

    /// Get a single component
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Convert to radians per second
    #[must_use]
    pub fn to_radians_per_sec(&self) -> GyroDataRps {
        const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
        GyroDataRps {
            x: self.x * DEG_TO_RAD,
            y: self.y * DEG_TO_RAD,
            z: self.z * DEG_TO_RAD,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

/// Gyroscope data in radians per second
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataRps {
    /// X-axis rotation rate in rad/s
    pub x: f32,
    /// Y-axis rotation rate in rad/s
    pub y: f32,
    /// Z-axis rotation rate in rad/s
    pub z: f32,
}

impl GyroDataRps {
    /// Convert to degrees per second
    #[must_use]
    pub fn to_degrees_per_sec(&self) -> GyroDataDps {
        const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;
        GyroDataDps {
            x: self.x * RAD_TO_DEG,
            y: self.y * RAD_TO_DEG,
            z: self.z * RAD_TO_DEG,
        }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
