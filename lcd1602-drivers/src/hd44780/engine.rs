//! HD44780 protocol engine
//!
//! Serializes instruction and data bytes into 4-bit transfers on the
//! PCF8574 backpack and owns the settle delays and the power-on
//! initialization sequence.
//!
//! # Timing
//!
//! - Every transfer: 50 µs settle (datasheet minimum 37 µs)
//! - Clear / return home: additional 2 ms (internal RAM fill)
//! - Power-on: 4.5 ms after the first 8-bit pattern, 150 µs after the second

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use lcd1602_core::cmd;
use lcd1602_hal::{BusError, DeviceAddress, SharedBus};

use crate::pcf8574::{init_frames, nibble_frames, Register};

/// Settle time after every transfer
pub const SETTLE_US: u32 = 50;
/// Extra settle time after clear and return home
pub const CLEAR_US: u32 = 2_000;
/// Wait after the first 8-bit init pattern
pub const POWER_ON_FIRST_US: u32 = 4_500;
/// Wait after the second 8-bit init pattern
pub const POWER_ON_SECOND_US: u32 = 150;

/// Register bytes written at the end of power-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitSequence {
    /// Function set instruction
    pub function_set: u8,
    /// Display control instruction
    pub display_control: u8,
    /// Entry mode instruction
    pub entry_mode: u8,
}

/// Byte-level access to one display behind a shared bus
pub struct ProtocolEngine<'bus, M: RawMutex, I2C, D> {
    bus: &'bus SharedBus<M, I2C>,
    address: DeviceAddress,
    delay: D,
    backlight: bool,
}

impl<'bus, M, I2C, D> ProtocolEngine<'bus, M, I2C, D>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
{
    /// Create an engine; nothing is sent until the first transfer
    pub fn new(bus: &'bus SharedBus<M, I2C>, address: DeviceAddress, delay: D) -> Self {
        Self {
            bus,
            address,
            delay,
            backlight: true,
        }
    }

    /// Device address
    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Change the device address for subsequent transfers
    pub fn set_address(&mut self, address: DeviceAddress) {
        self.address = address;
    }

    /// Backlight pin state carried by every transfer
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// Set the backlight pin state for subsequent transfers
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
    }

    /// Release the delay provider
    pub fn release(self) -> D {
        self.delay
    }

    /// Send an instruction byte
    pub fn send_command(&mut self, byte: u8) -> Result<(), BusError> {
        self.send(byte, Register::Command)
    }

    /// Send a data byte (DDRAM or CGRAM, depending on the last address set)
    pub fn send_data(&mut self, byte: u8) -> Result<(), BusError> {
        self.send(byte, Register::Data)
    }

    /// Send an instruction that needs the long settle time
    pub fn send_slow_command(&mut self, byte: u8) -> Result<(), BusError> {
        self.send_command(byte)?;
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    /// Clear the display (cursor moves to the origin)
    pub fn clear(&mut self) -> Result<(), BusError> {
        self.send_slow_command(cmd::CLEAR_DISPLAY)
    }

    /// Return home (cursor to the origin, display shift undone)
    pub fn home(&mut self) -> Result<(), BusError> {
        self.send_slow_command(cmd::RETURN_HOME)
    }

    /// Run the power-on sequence
    ///
    /// Puts the controller into a known 4-bit state from any interface state,
    /// then writes the given registers and clears the screen. The first bus
    /// failure aborts the sequence.
    pub fn init(&mut self, sequence: InitSequence) -> Result<(), BusError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd {=u8:#x}: power-on sequence", self.address.get());

        self.send_pattern(cmd::INIT_8BIT_PATTERN)?;
        self.delay.delay_us(POWER_ON_FIRST_US);
        self.send_pattern(cmd::INIT_8BIT_PATTERN)?;
        self.delay.delay_us(POWER_ON_SECOND_US);
        self.send_pattern(cmd::INIT_8BIT_PATTERN)?;
        self.send_pattern(cmd::INIT_4BIT_PATTERN)?;

        self.send_command(sequence.function_set)?;
        self.home()?;
        self.send_command(sequence.display_control)?;
        self.send_command(sequence.entry_mode)?;
        self.clear()
    }

    /// One byte as two nibbles, strobe pairs kept under one bus lock
    fn send(&mut self, byte: u8, register: Register) -> Result<(), BusError> {
        let frames = nibble_frames(byte, register, self.backlight);
        self.bus.write_each(self.address, &frames).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("lcd {=u8:#x}: transfer failed: {}", self.address.get(), _e);
        })?;
        self.delay.delay_us(SETTLE_US);
        Ok(())
    }

    /// One 8-bit mode pattern (high nibble only)
    fn send_pattern(&mut self, pattern: u8) -> Result<(), BusError> {
        self.bus.write_each(self.address, &init_frames(pattern))?;
        self.delay.delay_us(SETTLE_US);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{self, Event, MockDelay, MockI2c};
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use std::vec;

    const SEQUENCE: InitSequence = InitSequence {
        function_set: 0x28,
        display_control: 0x0C,
        entry_mode: 0x06,
    };

    #[test]
    fn test_init_sequence() {
        let log = mock::log();
        let bus: SharedBus<NoopRawMutex, _> = SharedBus::new(MockI2c::new(&log));
        let mut engine = ProtocolEngine::new(&bus, DeviceAddress::from_8bit(0x7E), MockDelay::new(&log));

        engine.init(SEQUENCE).unwrap();

        assert_eq!(
            mock::events(&log),
            vec![
                Event::Init(0x30),
                Event::Delay(50_000),
                Event::Delay(4_500_000),
                Event::Init(0x30),
                Event::Delay(50_000),
                Event::Delay(150_000),
                Event::Init(0x30),
                Event::Delay(50_000),
                Event::Init(0x20),
                Event::Delay(50_000),
                Event::Command(0x28),
                Event::Delay(50_000),
                Event::Command(0x02),
                Event::Delay(50_000),
                Event::Delay(2_000_000),
                Event::Command(0x0C),
                Event::Delay(50_000),
                Event::Command(0x06),
                Event::Delay(50_000),
                Event::Command(0x01),
                Event::Delay(50_000),
                Event::Delay(2_000_000),
            ]
        );
    }

    #[test]
    fn test_frames_carry_address_and_backlight() {
        let log = mock::log_4bit();
        let bus: SharedBus<NoopRawMutex, _> = SharedBus::new(MockI2c::new(&log));
        let mut engine = ProtocolEngine::new(&bus, DeviceAddress::from_8bit(0x4E), MockDelay::new(&log));

        engine.send_data(b'A').unwrap();
        engine.set_backlight(false);
        engine.send_command(0x01).unwrap();

        let entries = log.borrow().entries.clone();
        assert!(entries.iter().all(|e| match e {
            mock::Entry::Write(addr, _) => *addr == 0x27,
            mock::Entry::Delay(_) => true,
        }));
        assert_eq!(
            mock::frames(&log),
            vec![0x4D, 0x49, 0x1D, 0x19, 0x04, 0x00, 0x14, 0x10]
        );
        assert_eq!(
            mock::transfers(&log),
            vec![Event::Data(b'A'), Event::Command(0x01)]
        );
    }

    #[test]
    fn test_set_address() {
        let log = mock::log_4bit();
        let bus: SharedBus<NoopRawMutex, _> = SharedBus::new(MockI2c::new(&log));
        let mut engine = ProtocolEngine::new(&bus, DeviceAddress::from_8bit(0x7E), MockDelay::new(&log));

        engine.set_address(DeviceAddress::from_8bit(0x4E));
        engine.send_data(b'x').unwrap();
        assert_eq!(engine.address().get(), 0x27);
        assert!(matches!(log.borrow().entries[0], mock::Entry::Write(0x27, _)));
    }

    #[test]
    fn test_failure_aborts_init() {
        let log = mock::log();
        log.borrow_mut().fail_after = Some(7);
        let bus: SharedBus<CriticalSectionRawMutex, _> = SharedBus::new(MockI2c::new(&log));
        let mut engine = ProtocolEngine::new(&bus, DeviceAddress::from_8bit(0x7E), MockDelay::new(&log));

        assert_eq!(
            engine.init(SEQUENCE),
            Err(BusError::Transaction(ErrorKind::NoAcknowledge(
                NoAcknowledgeSource::Data
            )))
        );
        // two patterns and the first frame of the third made it out
        assert_eq!(mock::frames(&log).len(), 7);
        assert_eq!(mock::delay_ns(&log), 4_750_000);
    }

    #[test]
    fn test_clear_and_home_wait_long() {
        let log = mock::log_4bit();
        let bus: SharedBus<NoopRawMutex, _> = SharedBus::new(MockI2c::new(&log));
        let mut engine = ProtocolEngine::new(&bus, DeviceAddress::default(), MockDelay::new(&log));

        engine.clear().unwrap();
        assert_eq!(mock::delay_ns(&log), 2_050_000);

        mock::reset(&log);
        engine.home().unwrap();
        assert_eq!(mock::delay_ns(&log), 2_050_000);
        assert_eq!(mock::transfers(&log), vec![Event::Command(0x02)]);
    }
}
