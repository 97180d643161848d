use crate::error::Error;

use embedded_hal::i2c::Error as _;
use embedded_hal::i2c::I2c;

/// One 8-bit write to a 16-bit register address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisterWrite {
    pub address: u16,
    pub value: u8,
}

/// Ordered register program. Entries are applied strictly in order.
pub type RegisterList = [RegisterWrite];

macro_rules! register_list {
    ($($address:literal => $value:literal),+ $(,)?) => {
        &[
            $(
                $crate::registers::RegisterWrite {
                    address: $address,
                    value: $value,
                },
            )+
        ]
    };
}

pub(crate) use register_list;

/// SCCB register access over a two-wire bus.
///
/// The bus does not retry: a failed transaction surfaces as [`Error::Io`] (single access)
/// or [`Error::RegisterList`] (list application) and the caller decides how to unwind.
pub struct Bus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Bus<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn read(&mut self, address: u16) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.i2c
            .write_read(self.address, &address.to_be_bytes(), &mut buffer)
            .map_err(|error| Error::Io {
                address,
                kind: error.kind(),
            })?;
        let [value] = buffer;
        log::trace!("read {:#06x} -> {:#04x}", address, value);
        Ok(value)
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Error> {
        let [high, low] = address.to_be_bytes();
        self.i2c
            .write(self.address, &[high, low, value])
            .map_err(|error| Error::Io {
                address,
                kind: error.kind(),
            })?;
        log::trace!("write {:#06x} <- {:#04x}", address, value);
        Ok(())
    }

    /// Writes every entry in order and stops at the first failure.
    ///
    /// Entries before the failing one have been written once each, the rest are untouched.
    /// There is no rollback.
    pub fn apply(&mut self, list: &RegisterList) -> Result<(), Error> {
        for (index, register) in list.iter().enumerate() {
            self.write(register.address, register.value)
                .map_err(|error| match error {
                    Error::Io { address, kind } => Error::RegisterList {
                        index,
                        address,
                        kind,
                    },
                    error => error,
                })?;
        }
        Ok(())
    }
}

pub trait Register: Sized {
    const ADDRESS: u16;

    fn value(&self) -> u8;

    fn from_value(value: u8) -> Self;

    fn read<I2C: I2c>(bus: &mut Bus<I2C>) -> Result<Self, Error> {
        Ok(Self::from_value(bus.read(Self::ADDRESS)?))
    }

    fn write<I2C: I2c>(&self, bus: &mut Bus<I2C>) -> Result<(), Error> {
        bus.write(Self::ADDRESS, self.value())
    }
}

macro_rules! register {
    ($name:ident, $address:literal, {$($field:ident: $start:literal..$end:literal),+ $(,)?}) => {
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                pub $field: u8,
            )+
        }
        $(
            const _: () = assert!($start < $end && $end <= 8);
        )+
        impl Register for $name {
            const ADDRESS: u16 = $address;

            fn value(&self) -> u8 {
                0u8
                $(
                    | ((self.$field & (((1u16 << ($end - $start)) - 1) as u8)) << $start)
                )+
            }

            fn from_value(value: u8) -> Self {
                Self {
                    $(
                        $field: (value >> $start) & (((1u16 << ($end - $start)) - 1) as u8),
                    )+
                }
            }
        }
    };
}

register! { SoftwareStandby, 0x0100, {
    streaming: 0..1,
    reserved_1_8: 1..8,
} }
register! { ChipIdHigh, 0x300A, { value: 0..8 } }
register! { ChipIdLow, 0x300B, { value: 0..8 } }
register! { PadOutput, 0x300D, { value: 0..8 } }
register! { ManualControl, 0x3503, {
    manual_exposure: 0..1,
    manual_gain: 1..2,
    reserved_2_8: 2..8,
} }
register! { TimingTc20, 0x3820, {
    vertical_binning: 0..1,
    vertical_flip: 1..3,
    reserved_3_6: 3..6,
    reserved_6_7: 6..7,
    reserved_7_8: 7..8,
} }
register! { TimingTc21, 0x3821, {
    horizontal_binning: 0..1,
    horizontal_mirror: 1..3,
    reserved_3_8: 3..8,
} }
register! { FrameOffNumber, 0x4202, { value: 0..8 } }
register! { MipiControl00, 0x4800, {
    clock_lane_disable: 0..1,
    reserved_1_2: 1..2,
    bus_idle: 2..3,
    reserved_3_4: 3..4,
    line_sync_enable: 4..5,
    clock_lane_gate: 5..6,
    reserved_6_8: 6..8,
} }
register! { MipiControl14, 0x4814, {
    reserved_0_6: 0..6,
    virtual_channel: 6..8,
} }
register! { IspControl01, 0x5001, {
    auto_white_balance: 0..1,
    reserved_1_8: 1..8,
} }
register! { TestPatternControl, 0x503D, {
    pattern: 0..2,
    reserved_2_5: 2..5,
    transparent: 5..6,
    rolling_bar: 6..7,
    enable: 7..8,
} }

// exposure, bits 19:16 / 15:8 / 7:0
pub const EXPOSURE_HIGH: u16 = 0x3500;
pub const EXPOSURE_MIDDLE: u16 = 0x3501;
pub const EXPOSURE_LOW: u16 = 0x3502;

// analogue gain, bits 9:8 / 7:0
pub const ANALOGUE_GAIN_HIGH: u16 = 0x350A;
pub const ANALOGUE_GAIN_LOW: u16 = 0x350B;

// vertical total size (active rows + vertical blanking)
pub const VTS_HIGH: u16 = 0x380E;
pub const VTS_LOW: u16 = 0x380F;
