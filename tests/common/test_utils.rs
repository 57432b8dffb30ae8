//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use fxas21002c::{Fxas21002cDriver, GyroConfig};

/// Create a driver on a fresh mock interface
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Fxas21002cDriver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Fxas21002cDriver::new(interface);
    (driver, interface_clone)
}

/// Create a driver that has passed `start()` (identity verified, standby)
pub fn started_driver() -> (Fxas21002cDriver<MockInterface>, MockInterface) {
    let (mut driver, interface) = create_mock_driver();
    driver.start().expect("start() against mock should succeed");
    (driver, interface)
}

/// Create a fully configured driver with the given configuration
pub fn configured_driver(config: GyroConfig) -> (Fxas21002cDriver<MockInterface>, MockInterface) {
    let (mut driver, interface) = started_driver();
    driver.init(config).expect("init() against mock should succeed");
    (driver, interface)
}

/// Assert that two floating point values are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
