//! Unit tests for error propagation and lifecycle guards

use crate::common::mock_interface::MockError;
use crate::common::{configured_driver, create_mock_driver, started_driver};
use fxas21002c::{Error, GyroConfig};

#[test]
fn test_read_before_start_fails() {
    let (mut driver, _interface) = create_mock_driver();

    assert!(matches!(
        driver.read_gyroscope_raw(),
        Err(Error::NotStarted)
    ));
    assert!(matches!(driver.read_gyroscope(), Err(Error::NotStarted)));
    assert!(matches!(
        driver.read_temperature_raw(),
        Err(Error::NotStarted)
    ));
    assert!(matches!(driver.data_ready(), Err(Error::NotStarted)));
}

#[test]
fn test_init_before_start_fails() {
    let (mut driver, _interface) = create_mock_driver();

    assert!(matches!(
        driver.init(GyroConfig::default()),
        Err(Error::NotStarted)
    ));
}

#[test]
fn test_read_after_start_before_init_fails() {
    let (mut driver, _interface) = started_driver();

    assert!(matches!(
        driver.read_gyroscope_raw(),
        Err(Error::NotStarted)
    ));
}

#[test]
fn test_wrong_who_am_i_rejected() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_who_am_i(0xC7);

    assert!(matches!(driver.start(), Err(Error::InvalidDevice(0xC7))));
}

#[test]
fn test_bus_read_failure_propagates() {
    let (mut driver, interface) = configured_driver(GyroConfig::default());

    interface.fail_next_read();
    assert!(matches!(
        driver.read_gyroscope(),
        Err(Error::Bus(MockError::Communication))
    ));

    // The failure is one-shot; the next read succeeds
    interface.set_gyro_data(1, 2, 3);
    assert!(driver.read_gyroscope().is_ok());
}

#[test]
fn test_bus_write_failure_during_init() {
    let (mut driver, interface) = started_driver();

    interface.fail_next_write();
    assert!(matches!(
        driver.init(GyroConfig::default()),
        Err(Error::Bus(MockError::Communication))
    ));
}

#[test]
fn test_bus_failure_during_start() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(matches!(
        driver.start(),
        Err(Error::Bus(MockError::Communication))
    ));
}

#[test]
fn test_temperature_failure_propagates() {
    let (mut driver, interface) = configured_driver(GyroConfig::default());

    interface.fail_next_read();
    assert!(matches!(
        driver.read_temperature_celsius(),
        Err(Error::Bus(MockError::Communication))
    ));
}
