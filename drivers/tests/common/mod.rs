#![allow(dead_code)]

use embedded_hal::digital;
use embedded_hal::i2c;
use embedded_hal::i2c::Operation;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

pub const ADDRESS: u8 = 0x36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Read(u16),
    Write(u16, u8),
    SupplyOn(&'static str),
    SupplyOff(&'static str),
    PowerdownReleased,
    PowerdownAsserted,
    ClockOn,
    ClockOff,
    Delay(u32),
}

#[derive(Debug, Default)]
pub struct Failures {
    pub registers: HashSet<u16>,
    pub supply: Option<&'static str>,
    pub clock: bool,
    pub powerdown: bool,
}

#[derive(Debug, Default)]
struct Shared {
    events: Vec<Event>,
    registers: HashMap<u16, u8>,
    failures: Failures,
}

/// Recording stand-in for the bus, supplies, power-down line, clock and delay of one board.
///
/// Every part shares one event log and one register file.
#[derive(Clone)]
pub struct Board {
    shared: Arc<Mutex<Shared>>,
    clock_rate: u32,
}

impl Board {
    pub fn new() -> Self {
        let board = Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            clock_rate: 25_000_000,
        };
        board.set_register(0x300A, 0x56);
        board.set_register(0x300B, 0x47);
        board
    }

    pub fn with_clock_rate(mut self, rate: u32) -> Self {
        self.clock_rate = rate;
        self
    }

    fn with<T>(&self, action: impl FnOnce(&mut Shared) -> T) -> T {
        action(&mut self.shared.lock().unwrap())
    }

    pub fn i2c(&self) -> FakeI2c {
        FakeI2c {
            board: self.clone(),
        }
    }

    pub fn resources(&self) -> ov5647::Resources<FakeI2c, FakeSupply, FakePin, FakeClock, FakeDelay> {
        self.resources_with(self.i2c())
    }

    pub fn resources_with<I2C>(
        &self,
        i2c: I2C,
    ) -> ov5647::Resources<I2C, FakeSupply, FakePin, FakeClock, FakeDelay> {
        ov5647::Resources {
            i2c,
            supplies: ov5647::PROPERTIES
                .supplies
                .iter()
                .map(|&name| FakeSupply {
                    name,
                    board: self.clone(),
                })
                .collect(),
            powerdown: Some(FakePin {
                board: self.clone(),
            }),
            clock: FakeClock {
                rate: self.clock_rate,
                board: self.clone(),
            },
            delay: FakeDelay {
                board: self.clone(),
            },
        }
    }

    pub fn attach(&self) -> FakeDevice {
        ov5647::Device::attach(self.resources(), ov5647::DEFAULT_CONFIGURATION).unwrap()
    }

    pub fn events(&self) -> Vec<Event> {
        self.with(|shared| shared.events.clone())
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(address, value) => Some((address, value)),
                _ => None,
            })
            .collect()
    }

    /// Value of the last write to `address`, if any.
    pub fn last_write(&self, address: u16) -> Option<u8> {
        self.writes()
            .into_iter()
            .rev()
            .find(|(written, _)| *written == address)
            .map(|(_, value)| value)
    }

    pub fn clear(&self) {
        self.with(|shared| shared.events.clear());
    }

    pub fn register(&self, address: u16) -> u8 {
        self.with(|shared| shared.registers.get(&address).copied().unwrap_or(0))
    }

    pub fn set_register(&self, address: u16, value: u8) {
        self.with(|shared| {
            shared.registers.insert(address, value);
        });
    }

    pub fn fail_register(&self, address: u16) {
        self.with(|shared| {
            shared.failures.registers.insert(address);
        });
    }

    pub fn heal_register(&self, address: u16) {
        self.with(|shared| {
            shared.failures.registers.remove(&address);
        });
    }

    pub fn fail_supply(&self, name: &'static str) {
        self.with(|shared| shared.failures.supply = Some(name));
    }

    pub fn fail_clock(&self) {
        self.with(|shared| shared.failures.clock = true);
    }

    pub fn fail_powerdown(&self) {
        self.with(|shared| shared.failures.powerdown = true);
    }

    fn record(&self, event: Event) {
        self.with(|shared| shared.events.push(event));
    }
}

pub type FakeDevice = ov5647::Device<FakeI2c, FakeSupply, FakePin, FakeClock, FakeDelay>;

pub struct FakeI2c {
    board: Board,
}

impl i2c::ErrorType for FakeI2c {
    type Error = i2c::ErrorKind;
}

impl i2c::I2c for FakeI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, ADDRESS);
        let mut pending = None;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => match *bytes {
                    &[high, low] => pending = Some(u16::from_be_bytes([high, low])),
                    &[high, low, value] => {
                        let register = u16::from_be_bytes([high, low]);
                        self.board.with(|shared| {
                            if shared.failures.registers.contains(&register) {
                                return Err(i2c::ErrorKind::Other);
                            }
                            shared.registers.insert(register, value);
                            shared.events.push(Event::Write(register, value));
                            Ok(())
                        })?;
                    }
                    bytes => panic!("unexpected write of {} bytes", bytes.len()),
                },
                Operation::Read(buffer) => {
                    assert_eq!(buffer.len(), 1);
                    let register = pending.take().expect("read without an address");
                    buffer[0] = self.board.with(|shared| {
                        if shared.failures.registers.contains(&register) {
                            return Err(i2c::ErrorKind::Other);
                        }
                        shared.events.push(Event::Read(register));
                        Ok(shared.registers.get(&register).copied().unwrap_or(0))
                    })?;
                }
            }
        }
        Ok(())
    }
}

pub struct FakeSupply {
    name: &'static str,
    board: Board,
}

impl ov5647::Supply for FakeSupply {
    type Error = &'static str;

    fn name(&self) -> &str {
        self.name
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.board.with(|shared| shared.failures.supply == Some(self.name)) {
            return Err("regulator refused");
        }
        self.board.record(Event::SupplyOn(self.name));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.board.record(Event::SupplyOff(self.name));
        Ok(())
    }
}

pub struct FakePin {
    board: Board,
}

impl digital::ErrorType for FakePin {
    type Error = digital::ErrorKind;
}

impl digital::OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.board.with(|shared| shared.failures.powerdown) {
            return Err(digital::ErrorKind::Other);
        }
        self.board.record(Event::PowerdownReleased);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.board.record(Event::PowerdownAsserted);
        Ok(())
    }
}

pub struct FakeClock {
    rate: u32,
    board: Board,
}

impl ov5647::Clock for FakeClock {
    type Error = &'static str;

    fn rate(&self) -> u32 {
        self.rate
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.board.with(|shared| shared.failures.clock) {
            return Err("clock refused");
        }
        self.board.record(Event::ClockOn);
        Ok(())
    }

    fn disable(&mut self) {
        self.board.record(Event::ClockOff);
    }
}

pub struct FakeDelay {
    board: Board,
}

impl embedded_hal::delay::DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.board.record(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.board.record(Event::Delay(ms));
    }
}

/// Events of a complete power-on sequence.
pub fn power_on_events() -> Vec<Event> {
    vec![
        Event::SupplyOn("dovdd"),
        Event::SupplyOn("avdd"),
        Event::SupplyOn("dvdd"),
        Event::PowerdownReleased,
        Event::Delay(20),
        Event::ClockOn,
        Event::Delay(20),
        Event::Write(0x3000, 0x0f),
        Event::Write(0x3001, 0xff),
        Event::Write(0x3002, 0xe4),
    ]
}

/// Events of a complete power-off sequence.
pub fn power_off_events() -> Vec<Event> {
    vec![
        Event::PowerdownAsserted,
        Event::SupplyOff("dvdd"),
        Event::SupplyOff("avdd"),
        Event::SupplyOff("dovdd"),
        Event::ClockOff,
    ]
}
