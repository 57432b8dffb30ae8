//! High-level driver API for the FXAS21002C
//!
//! This module provides a user-friendly interface to the FXAS21002C gyroscope,
//! handling the standby/active lifecycle, sensor configuration, and data
//! reading with raw-to-physical conversion.

use crate::registers::Fxas21002c as RegisterDevice;
use crate::sensors::{Axis, GyroConfig, GyroDataDps, GyroDataRps, TemperatureUnit};
use crate::{Error, WHO_AM_I_VALUE};

// Only import RegisterInterface when not using async feature
#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Rate-threshold setup applied during `init`: detection enabled on all
/// three axes, threshold one-tenth of full scale (THS*FSR/128), debounce
/// counter of 4 samples with clearing mode off.
const RATE_THRESHOLD: u8 = 0x0D;
const RATE_DEBOUNCE_COUNT: u8 = 0x04;

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Data-ready status snapshot from the DR_STATUS register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataReadyStatus {
    /// X-axis sample available
    pub x_ready: bool,
    /// Y-axis sample available
    pub y_ready: bool,
    /// Z-axis sample available
    pub z_ready: bool,
    /// New samples available on all three axes
    pub all_ready: bool,
    /// At least one unread sample was overwritten
    pub overwritten: bool,
}

/// Driver lifecycle state
///
/// Transitions are linear and re-entrant: `start()` moves to `Started`,
/// `init()` to `Configured`, and `init()` may be called again to
/// reconfigure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed, no bus traffic yet
    Uninitialized,
    /// Device identity verified, in standby
    Started,
    /// Configured and acquiring data
    Configured,
}

/// Main driver for the FXAS21002C
pub struct Fxas21002cDriver<I> {
    device: RegisterDevice<I>,
    state: DriverState,
    config: GyroConfig,
}

impl<I> Fxas21002cDriver<I> {
    /// Create a new FXAS21002C driver instance
    ///
    /// Performs no bus traffic; call [`start()`](Self::start) to verify the
    /// device and [`init()`](Self::init) to configure it.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            state: DriverState::Uninitialized,
            config: GyroConfig::default(),
        }
    }

    /// Get the current lifecycle state
    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Get the active configuration
    ///
    /// Meaningful once [`init()`](Self::init) has succeeded; before that it
    /// holds the defaults.
    #[must_use]
    pub const fn config(&self) -> GyroConfig {
        self.config
    }

    /// Convert a raw TEMP register value to degrees Celsius
    ///
    /// The FXAS21002C reports temperature as a signed 8-bit value with a
    /// sensitivity of 1 °C/LSB and no offset.
    #[must_use]
    pub fn temperature_to_celsius(raw: i8) -> f32 {
        crate::sensors::raw_to_celsius(raw)
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &crate::registers::Fxas21002c<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut crate::registers::Fxas21002c<I> {
        &mut self.device
    }
}

#[cfg(not(feature = "async"))]
impl<I> Fxas21002cDriver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    fn ensure_configured(&self) -> Result<(), Error<I::Error>> {
        if self.state == DriverState::Configured {
            Ok(())
        } else {
            Err(Error::NotStarted)
        }
    }

    /// Start the device: verify identity and enter standby
    ///
    /// Reads `WHO_AM_I` and checks it against the expected value (0xD7),
    /// then forces standby so `init()` can safely reprogram the control
    /// registers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn start(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        self.standby()?;
        self.state = DriverState::Started;
        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0xD7 for a valid FXAS21002C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Configure the gyroscope and enter active mode
    ///
    /// Applies the full configuration sequence: standby, range expansion
    /// (CTRL_REG3), full-scale range (CTRL_REG0), output data rate
    /// (CTRL_REG1), interrupt routing (CTRL_REG2, data ready on INT1,
    /// push-pull, active high), rate-threshold detection on all axes, then
    /// active mode. The conversion scale factor is derived from `config`
    /// and used by all subsequent reads.
    ///
    /// May be called again at any time to reconfigure; the stored scale
    /// factor is simply replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if `start()` has not succeeded, or a
    /// bus error if communication with the device fails.
    pub fn init(&mut self, config: GyroConfig) -> Result<(), Error<I::Error>> {
        if self.state == DriverState::Uninitialized {
            return Err(Error::NotStarted);
        }

        self.standby()?;

        self.device.ctrl_reg_3().write(|w| {
            w.set_fs_double(config.double_range);
        })?;

        self.device.ctrl_reg_0().write(|w| {
            w.set_fs(config.range as u8);
        })?;

        self.device.ctrl_reg_1().write(|w| {
            w.set_dr(config.odr as u8);
        })?;

        self.device.ctrl_reg_2().write(|w| {
            w.set_ipol(true);
            w.set_int_en_drdy(true);
            w.set_int_cfg_drdy(true);
        })?;

        self.device.rt_cfg().write(|w| {
            w.set_xtefe(true);
            w.set_ytefe(true);
            w.set_ztefe(true);
        })?;

        self.device.rt_ths().write(|w| {
            w.set_ths(RATE_THRESHOLD);
        })?;

        self.device.rt_count().write(|w| {
            w.set_count(RATE_DEBOUNCE_COUNT);
        })?;

        self.activate()?;

        self.config = config;
        self.state = DriverState::Configured;
        Ok(())
    }

    /// Configure the gyroscope from raw register codes
    ///
    /// Validates `range` ∈ 0..=3, `odr` ∈ 0..=7 and `fs_double` ∈ {0, 1}
    /// before touching the bus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an out-of-range code, otherwise
    /// behaves like [`init()`](Self::init).
    pub fn init_from_codes(
        &mut self,
        range: u8,
        odr: u8,
        fs_double: u8,
    ) -> Result<(), Error<I::Error>> {
        let config =
            GyroConfig::from_codes(range, odr, fs_double).map_err(|_| Error::InvalidConfig)?;
        self.init(config)
    }

    /// Put the device in standby mode
    ///
    /// Clears the ACTIVE and READY bits; data acquisition stops. Control
    /// registers may only be written in standby.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn standby(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_active(false);
            w.set_ready(false);
        })?;
        Ok(())
    }

    /// Put the device in active mode, enabling data acquisition
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn activate(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_active(true);
        })?;
        Ok(())
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        self.ensure_configured()?;

        // Read all 6 bytes in one burst to prevent torn samples
        // Register addresses: OUT_X_MSB (0x01) through OUT_Z_LSB (0x06)
        const OUT_X_MSB: u8 = 0x01;
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_MSB, 48, &mut buffer)?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read raw gyroscope data (16-bit signed values)
    ///
    /// Returns raw sensor values without conversion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_gyroscope_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        self.read_gyro()
    }

    /// Read gyroscope data in degrees per second
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dps = gyro.read_gyroscope()?;
    /// info!("X: {}°/s, Y: {}°/s, Z: {}°/s", dps.x, dps.y, dps.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_gyroscope(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro()?;
        Ok(GyroDataDps::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.config.dps_per_lsb(),
        ))
    }

    /// Read a single gyroscope axis in degrees per second
    ///
    /// Equal to the corresponding component of
    /// [`read_gyroscope()`](Self::read_gyroscope).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_gyroscope_axis(&mut self, axis: Axis) -> Result<f32, Error<I::Error>> {
        Ok(self.read_gyroscope()?.axis(axis))
    }

    /// Read gyroscope data in radians per second
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_gyroscope_radians(&mut self) -> Result<GyroDataRps, Error<I::Error>> {
        let dps = self.read_gyroscope()?;
        Ok(dps.to_radians_per_sec())
    }

    /// Read the internal temperature sensor
    ///
    /// Returns the raw signed 8-bit value (1 °C/LSB).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_temperature_raw(&mut self) -> Result<i8, Error<I::Error>> {
        self.ensure_configured()?;
        let reg = self.device.temp().read()?;
        Ok(reg.temp() as i8)
    }

    /// Read the internal temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature_raw()?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Read the internal temperature in the requested unit
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn read_temperature_in(&mut self, unit: TemperatureUnit) -> Result<f32, Error<I::Error>> {
        let celsius = self.read_temperature_celsius()?;
        Ok(unit.from_celsius(celsius))
    }

    /// Poll the data-ready status
    ///
    /// Reads DR_STATUS; useful for pacing reads without wiring the
    /// interrupt lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub fn data_ready(&mut self) -> Result<DataReadyStatus, Error<I::Error>> {
        self.ensure_configured()?;
        let reg = self.device.dr_status().read()?;
        Ok(DataReadyStatus {
            x_ready: reg.x_dr(),
            y_ready: reg.y_dr(),
            z_ready: reg.z_dr(),
            all_ready: reg.zyx_dr(),
            overwritten: reg.zyx_ow(),
        })
    }
}

#[cfg(feature = "async")]
impl<I> Fxas21002cDriver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    fn ensure_configured(&self) -> Result<(), Error<I::Error>> {
        if self.state == DriverState::Configured {
            Ok(())
        } else {
            Err(Error::NotStarted)
        }
    }

    /// Start the device: verify identity and enter standby
    ///
    /// Reads `WHO_AM_I` and checks it against the expected value (0xD7),
    /// then forces standby so `init()` can safely reprogram the control
    /// registers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub async fn start(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(Error::InvalidDevice(who_am_i));
        }

        self.standby().await?;
        self.state = DriverState::Started;
        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0xD7 for a valid FXAS21002C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read_async().await?;
        Ok(reg.who_am_i())
    }

    /// Configure the gyroscope and enter active mode
    ///
    /// Async version of the blocking `init`; see that method for the
    /// register sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if `start()` has not succeeded, or a
    /// bus error if communication with the device fails.
    pub async fn init(&mut self, config: GyroConfig) -> Result<(), Error<I::Error>> {
        if self.state == DriverState::Uninitialized {
            return Err(Error::NotStarted);
        }

        self.standby().await?;

        self.device
            .ctrl_reg_3()
            .write_async(|w| {
                w.set_fs_double(config.double_range);
            })
            .await?;

        self.device
            .ctrl_reg_0()
            .write_async(|w| {
                w.set_fs(config.range as u8);
            })
            .await?;

        self.device
            .ctrl_reg_1()
            .write_async(|w| {
                w.set_dr(config.odr as u8);
            })
            .await?;

        self.device
            .ctrl_reg_2()
            .write_async(|w| {
                w.set_ipol(true);
                w.set_int_en_drdy(true);
                w.set_int_cfg_drdy(true);
            })
            .await?;

        self.device
            .rt_cfg()
            .write_async(|w| {
                w.set_xtefe(true);
                w.set_ytefe(true);
                w.set_ztefe(true);
            })
            .await?;

        self.device
            .rt_ths()
            .write_async(|w| {
                w.set_ths(RATE_THRESHOLD);
            })
            .await?;

        self.device
            .rt_count()
            .write_async(|w| {
                w.set_count(RATE_DEBOUNCE_COUNT);
            })
            .await?;

        self.activate().await?;

        self.config = config;
        self.state = DriverState::Configured;
        Ok(())
    }

    /// Configure the gyroscope from raw register codes
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an out-of-range code, otherwise
    /// behaves like [`init()`](Self::init).
    pub async fn init_from_codes(
        &mut self,
        range: u8,
        odr: u8,
        fs_double: u8,
    ) -> Result<(), Error<I::Error>> {
        let config =
            GyroConfig::from_codes(range, odr, fs_double).map_err(|_| Error::InvalidConfig)?;
        self.init(config).await
    }

    /// Put the device in standby mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn standby(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_active(false);
                w.set_ready(false);
            })
            .await?;
        Ok(())
    }

    /// Put the device in active mode, enabling data acquisition
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn activate(&mut self) -> Result<(), Error<I::Error>> {
        self.device
            .ctrl_reg_1()
            .modify_async(|w| {
                w.set_active(true);
            })
            .await?;
        Ok(())
    }

    /// Read gyroscope data
    ///
    /// Returns raw 16-bit values for X, Y, Z axes.
    async fn read_gyro(&mut self) -> Result<GyroData, Error<I::Error>> {
        self.ensure_configured()?;

        // Read all 6 bytes in one burst to prevent torn samples
        // Register addresses: OUT_X_MSB (0x01) through OUT_Z_LSB (0x06)
        const OUT_X_MSB: u8 = 0x01;
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUT_X_MSB, 48, &mut buffer)
            .await?;

        let x = i16::from_be_bytes([buffer[0], buffer[1]]);
        let y = i16::from_be_bytes([buffer[2], buffer[3]]);
        let z = i16::from_be_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read raw gyroscope data (16-bit signed values)
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_gyroscope_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        self.read_gyro().await
    }

    /// Read gyroscope data in degrees per second
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_gyroscope(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro().await?;
        Ok(GyroDataDps::from_raw(
            raw.x,
            raw.y,
            raw.z,
            self.config.dps_per_lsb(),
        ))
    }

    /// Read a single gyroscope axis in degrees per second
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_gyroscope_axis(&mut self, axis: Axis) -> Result<f32, Error<I::Error>> {
        Ok(self.read_gyroscope().await?.axis(axis))
    }

    /// Read gyroscope data in radians per second
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_gyroscope_radians(&mut self) -> Result<GyroDataRps, Error<I::Error>> {
        let dps = self.read_gyroscope().await?;
        Ok(dps.to_radians_per_sec())
    }

    /// Read the internal temperature sensor
    ///
    /// Returns the raw signed 8-bit value (1 °C/LSB).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_temperature_raw(&mut self) -> Result<i8, Error<I::Error>> {
        self.ensure_configured()?;
        let reg = self.device.temp().read_async().await?;
        Ok(reg.temp() as i8)
    }

    /// Read the internal temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.read_temperature_raw().await?;
        Ok(Self::temperature_to_celsius(raw))
    }

    /// Read the internal temperature in the requested unit
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn read_temperature_in(
        &mut self,
        unit: TemperatureUnit,
    ) -> Result<f32, Error<I::Error>> {
        let celsius = self.read_temperature_celsius().await?;
        Ok(unit.from_celsius(celsius))
    }

    /// Poll the data-ready status
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before `start()`/`init()`, or a bus
    /// error if communication with the device fails.
    pub async fn data_ready(&mut self) -> Result<DataReadyStatus, Error<I::Error>> {
        self.ensure_configured()?;
        let reg = self.device.dr_status().read_async().await?;
        Ok(DataReadyStatus {
            x_ready: reg.x_dr(),
            y_ready: reg.y_dr(),
            z_ready: reg.z_dr(),
            all_ready: reg.zyx_dr(),
            overwritten: reg.zyx_ow(),
        })
    }
}
