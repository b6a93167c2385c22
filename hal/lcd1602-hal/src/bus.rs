//! Shared bus transport
//!
//! [`SharedBus`] is the single exclusive handle to the physical bus. Every
//! operation runs inside one lock acquisition, covering the whole composite
//! transfer. A display transfer that is cut between its strobe-high and
//! strobe-low writes leaves the controller latched on a half nibble, so
//! multi-write sequences go through [`SharedBus::write_each`] which holds the
//! lock for the full sequence.
//!
//! The lock kind is chosen by the `M` parameter:
//! - `CriticalSectionRawMutex` - process-wide, safe to share across threads
//! - `NoopRawMutex` - single execution context only

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, Operation};
use heapless::Vec;

use crate::i2c::DeviceAddress;

/// Maximum size of a register write message (address bytes + payload)
pub const MAX_WRITE_LEN: usize = 34;

/// Errors that can occur on the shared bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus handle could not be acquired (already held by this context)
    Open,
    /// The composite transfer was rejected or partially failed
    Transaction(ErrorKind),
    /// Message buffer for a write could not be obtained
    Allocation,
}

/// Lock-owning handle to an I2C bus
pub struct SharedBus<M: RawMutex, I2C> {
    bus: Mutex<M, RefCell<I2C>>,
}

impl<M: RawMutex, I2C> SharedBus<M, I2C> {
    /// Wrap a bus
    pub const fn new(i2c: I2C) -> Self {
        Self {
            bus: Mutex::new(RefCell::new(i2c)),
        }
    }

    /// Release the underlying bus
    pub fn into_inner(self) -> I2C {
        self.bus.into_inner().into_inner()
    }

    /// Mutable access to the underlying bus (no lock needed, access is exclusive)
    pub fn get_mut(&mut self) -> &mut I2C {
        self.bus.get_mut().get_mut()
    }
}

impl<M: RawMutex, I2C: I2c> SharedBus<M, I2C> {
    /// Run `f` with exclusive access to the bus
    fn with_bus<R>(&self, f: impl FnOnce(&mut I2C) -> Result<R, I2C::Error>) -> Result<R, BusError> {
        self.bus.lock(|cell| {
            let mut bus = cell.try_borrow_mut().map_err(|_| BusError::Open)?;
            f(&mut bus).map_err(|e| BusError::Transaction(e.kind()))
        })
    }

    /// Execute one composite transfer of one or more messages
    pub fn transact(
        &self,
        address: DeviceAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), BusError> {
        self.with_bus(|bus| bus.transaction(address.get(), operations))
    }

    /// Write `payload` to a device register
    ///
    /// Registers above `0xFF` use a 2-byte big-endian address. The register
    /// address and payload travel in a single write message.
    pub fn write_register(
        &self,
        address: DeviceAddress,
        register: u16,
        payload: &[u8],
    ) -> Result<(), BusError> {
        let mut message: Vec<u8, MAX_WRITE_LEN> = Vec::new();
        message
            .extend_from_slice(register_bytes(register).as_slice())
            .map_err(|_| BusError::Allocation)?;
        message
            .extend_from_slice(payload)
            .map_err(|_| BusError::Allocation)?;

        self.transact(address, &mut [Operation::Write(&message)])
    }

    /// Read `buf.len()` bytes from a device register
    ///
    /// Issued as two messages: the register address write, then the read.
    pub fn read_register(
        &self,
        address: DeviceAddress,
        register: u16,
        buf: &mut [u8],
    ) -> Result<(), BusError> {
        let reg = register_bytes(register);
        self.transact(
            address,
            &mut [Operation::Write(reg.as_slice()), Operation::Read(buf)],
        )
    }

    /// Write a single byte with no register address
    pub fn write_byte(&self, address: DeviceAddress, byte: u8) -> Result<(), BusError> {
        self.with_bus(|bus| bus.write(address.get(), &[byte]))
    }

    /// Write each byte as its own one-byte message, holding the lock throughout
    ///
    /// Stops at the first failing write.
    pub fn write_each(&self, address: DeviceAddress, bytes: &[u8]) -> Result<(), BusError> {
        self.with_bus(|bus| {
            for &byte in bytes {
                bus.write(address.get(), &[byte])?;
            }
            Ok(())
        })
    }
}

/// Register address bytes (1 byte up to 0xFF, 2 bytes big-endian above)
fn register_bytes(register: u16) -> Vec<u8, 2> {
    let mut bytes = Vec::new();
    let [hi, lo] = register.to_be_bytes();
    if register > 0xFF {
        let _ = bytes.push(hi);
    }
    let _ = bytes.push(lo);
    bytes
}
