//! Unit tests for the driver lifecycle

use crate::common::{create_mock_driver, started_driver};
use fxas21002c::{DriverState, GyroConfig, GyroFullScale, WHO_AM_I_VALUE};

#[test]
fn test_lifecycle_transitions() {
    let (mut driver, _interface) = create_mock_driver();
    assert_eq!(driver.state(), DriverState::Uninitialized);

    driver.start().unwrap();
    assert_eq!(driver.state(), DriverState::Started);

    driver.init(GyroConfig::default()).unwrap();
    assert_eq!(driver.state(), DriverState::Configured);
}

#[test]
fn test_start_is_repeatable() {
    let (mut driver, _interface) = create_mock_driver();

    driver.start().unwrap();
    driver.start().unwrap();
    assert_eq!(driver.state(), DriverState::Started);
}

#[test]
fn test_reinit_is_allowed() {
    let (mut driver, _interface) = started_driver();

    driver.init(GyroConfig::default()).unwrap();
    driver
        .init(GyroConfig {
            range: GyroFullScale::Dps500,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(driver.state(), DriverState::Configured);
    assert_eq!(driver.config().range, GyroFullScale::Dps500);
}

#[test]
fn test_who_am_i_readback() {
    let (mut driver, _interface) = create_mock_driver();
    assert_eq!(driver.who_am_i().unwrap(), WHO_AM_I_VALUE);
}

#[test]
fn test_standby_clears_active() {
    let (mut driver, interface) = started_driver();
    driver.init(GyroConfig::default()).unwrap();
    assert_eq!(interface.get_register(0x13) & 0x03, 0x02);

    driver.standby().unwrap();
    assert_eq!(
        interface.get_register(0x13) & 0x03,
        0x00,
        "standby must clear ACTIVE and READY"
    );

    driver.activate().unwrap();
    assert_eq!(interface.get_register(0x13) & 0x03, 0x02);
}

#[test]
fn test_release_returns_interface() {
    let (mut driver, interface) = started_driver();
    driver.init(GyroConfig::default()).unwrap();

    let released = driver.release();
    // The released interface shares state with our clone
    assert_eq!(released.get_register(0x0C), interface.get_register(0x0C));
}
