//! Common test utilities and mock implementations

pub mod mock_interface;
pub mod test_utils;

pub use mock_interface::Operation;
pub use test_utils::{assert_float_eq, configured_driver, create_mock_driver, started_driver};
