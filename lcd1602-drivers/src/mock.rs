//! Test doubles: recording I2C bus, recording delay and a frame decoder
//!
//! The bus and the delay append to one shared [`Log`] so tests can check
//! both the bytes on the wire and the settle time between them.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::pcf8574::pin;
use lcd1602_core::cmd::{self, flag};

/// One recorded bus or delay event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// One-byte write to the expander: `(7-bit address, pins)`
    Write(u8, u8),
    /// Blocking delay in nanoseconds
    Delay(u64),
}

#[derive(Debug, Default)]
pub struct Log {
    pub entries: Vec<Entry>,
    /// Number of writes after which the bus NAKs every transfer
    pub fail_after: Option<usize>,
    /// Controller already in 4-bit mode when recording starts
    pub four_bit: bool,
    writes: usize,
    /// Entries before this index are hidden from [`transfers`]
    mark: usize,
}

pub type SharedLog = Rc<RefCell<Log>>;

pub fn log() -> SharedLog {
    Rc::new(RefCell::new(Log::default()))
}

/// Log for a controller that was initialized before recording
pub fn log_4bit() -> SharedLog {
    Rc::new(RefCell::new(Log {
        four_bit: true,
        ..Log::default()
    }))
}

/// I2C bus recording every write message byte by byte
pub struct MockI2c {
    log: SharedLog,
}

impl MockI2c {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(data) => {
                    for &byte in data.iter() {
                        if log.fail_after.is_some_and(|n| log.writes >= n) {
                            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
                        }
                        log.writes += 1;
                        log.entries.push(Entry::Write(address, byte));
                    }
                }
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

/// Delay that records instead of sleeping
pub struct MockDelay {
    log: SharedLog,
}

impl MockDelay {
    pub fn new(log: &SharedLog) -> Self {
        Self { log: log.clone() }
    }

    fn push(&mut self, ns: u64) {
        self.log.borrow_mut().entries.push(Entry::Delay(ns));
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.push(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.push(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.push(u64::from(ms) * 1_000_000);
    }
}

/// What the controller latched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// 8-bit mode instruction (high nibble only)
    Init(u8),
    /// Instruction in 4-bit mode
    Command(u8),
    /// Data byte in 4-bit mode
    Data(u8),
    /// Settle delay in nanoseconds
    Delay(u64),
}

/// Replay recorded frames the way the controller sees them
///
/// A nibble is latched when a frame with EN high is followed by the same
/// pins with EN low. The controller starts in 8-bit mode and switches to
/// 4-bit mode on a function set without the 8-bit flag. Init patterns open
/// with a frame that has no strobe-high predecessor, which drops the
/// decoder back into 8-bit mode.
pub fn decode(entries: &[Entry], four_bit: bool) -> Vec<(usize, Event)> {
    let mut events = Vec::new();
    let mut eight_bit = !four_bit;
    let mut pending: Option<u8> = None;
    let mut prev: Option<u8> = None;

    for (index, entry) in entries.iter().enumerate() {
        let frame = match *entry {
            Entry::Delay(ns) => {
                events.push((index, Event::Delay(ns)));
                continue;
            }
            Entry::Write(_, frame) => frame,
        };

        // a strobe-low frame after another strobe-low frame starts an init pattern
        if frame & pin::EN == 0 && prev.is_some_and(|p| p & pin::EN == 0) {
            eight_bit = true;
            pending = None;
        }
        let latched = prev.is_some_and(|p| p & pin::EN != 0 && frame == p & !pin::EN);
        prev = Some(frame);
        if !latched {
            continue;
        }

        let nibble = frame & pin::DATA;
        if eight_bit {
            events.push((index, Event::Init(nibble)));
            if nibble & cmd::FUNCTION_SET != 0 && nibble & flag::MODE_8BIT == 0 {
                eight_bit = false;
            }
            continue;
        }

        match pending.take() {
            None => pending = Some(nibble),
            Some(high) => {
                let byte = high | (nibble >> 4);
                if frame & pin::RS != 0 {
                    events.push((index, Event::Data(byte)));
                } else {
                    events.push((index, Event::Command(byte)));
                }
            }
        }
    }

    events
}

/// Decoded events since the last [`reset`], delays included
pub fn events(log: &SharedLog) -> Vec<Event> {
    let log = log.borrow();
    decode(&log.entries, log.four_bit)
        .into_iter()
        .filter(|&(index, _)| index >= log.mark)
        .map(|(_, event)| event)
        .collect()
}

/// Decoded transfers since the last [`reset`]
pub fn transfers(log: &SharedLog) -> Vec<Event> {
    events(log)
        .into_iter()
        .filter(|e| !matches!(e, Event::Delay(_)))
        .collect()
}

/// Data bytes written to the display
pub fn data_bytes(log: &SharedLog) -> Vec<u8> {
    transfers(log)
        .into_iter()
        .filter_map(|e| match e {
            Event::Data(byte) => Some(byte),
            _ => None,
        })
        .collect()
}

/// Hide everything recorded so far
pub fn reset(log: &SharedLog) {
    let mut log = log.borrow_mut();
    log.mark = log.entries.len();
}

/// Total delay since the last [`reset`], in nanoseconds
pub fn delay_ns(log: &SharedLog) -> u64 {
    let log = log.borrow();
    log.entries[log.mark..]
        .iter()
        .map(|e| match e {
            Entry::Delay(ns) => *ns,
            Entry::Write(..) => 0,
        })
        .sum()
}

/// Raw frames since the last [`reset`]
pub fn frames(log: &SharedLog) -> Vec<u8> {
    let log = log.borrow();
    log.entries[log.mark..]
        .iter()
        .filter_map(|e| match e {
            Entry::Write(_, frame) => Some(*frame),
            Entry::Delay(_) => None,
        })
        .collect()
}
