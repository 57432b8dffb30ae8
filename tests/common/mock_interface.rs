//! Mock interface implementation for testing the FXAS21002C driver

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values, address -> value
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Sensor data sequence for simulating consecutive readings
    gyro_sequence: Vec<[i16; 3]>,
    gyro_sequence_idx: usize,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            gyro_sequence: Vec::new(),
            gyro_sequence_idx: 0,
        };

        // Set default WHO_AM_I value (0xD7)
        state.registers.insert(0x0C, 0xD7);

        state
    }

    /// Advance gyroscope sequence and update registers
    fn advance_gyro_sequence(&mut self) {
        if !self.gyro_sequence.is_empty() {
            let [x, y, z] = self.gyro_sequence[self.gyro_sequence_idx];
            self.set_gyro_data(x, y, z);
            self.gyro_sequence_idx = (self.gyro_sequence_idx + 1) % self.gyro_sequence.len();
        }
    }

    /// Set gyroscope data (will be returned on next read)
    fn set_gyro_data(&mut self, x: i16, y: i16, z: i16) {
        let [x_h, x_l] = x.to_be_bytes();
        let [y_h, y_l] = y.to_be_bytes();
        let [z_h, z_l] = z.to_be_bytes();

        self.registers.insert(0x01, x_h);
        self.registers.insert(0x02, x_l);
        self.registers.insert(0x03, y_h);
        self.registers.insert(0x04, y_l);
        self.registers.insert(0x05, z_h);
        self.registers.insert(0x06, z_l);
    }

    /// Set temperature data (will be returned on next read)
    fn set_temperature_data(&mut self, temp_raw: i8) {
        self.registers.insert(0x12, temp_raw as u8);
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    #[allow(dead_code)]
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    #[allow(dead_code)]
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set WHO_AM_I register value
    #[allow(dead_code)]
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(0x0C, value);
    }

    /// Set gyroscope data (will be returned on next read)
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_gyro_data(x, y, z);
    }

    /// Set a sequence of gyroscope readings, one per burst read
    #[allow(dead_code)]
    pub fn set_gyro_sequence(&self, sequence: Vec<[i16; 3]>) {
        let mut state = self.state.borrow_mut();
        state.gyro_sequence = sequence;
        state.gyro_sequence_idx = 0;
    }

    /// Set temperature data (will be returned on next read)
    pub fn set_temperature_data(&self, temp_raw: i8) {
        self.state.borrow_mut().set_temperature_data(temp_raw);
    }

    /// Set the DR_STATUS register value
    #[allow(dead_code)]
    pub fn set_dr_status(&self, value: u8) {
        self.set_register(0x07, value);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    #[allow(dead_code)]
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Verify a register was written with expected value
    #[allow(dead_code)]
    pub fn verify_register(&self, address: u8, expected: u8) -> bool {
        self.get_register(address) == expected
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // Check if reading sample data - advance sequence if configured
        if address == 0x01 {
            state.advance_gyro_sequence();
        }

        // Read from registers
        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        // Write to registers
        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            state.registers.insert(reg_addr, byte);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });
        }

        Ok(())
    }
}

#[cfg(feature = "async")]
impl AsyncRegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::read_register(self, address, size_bits, read_data)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        // Delegate to synchronous implementation
        RegisterInterface::write_register(self, address, size_bits, write_data)
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
