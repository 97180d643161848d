use crate::controls::Control;
use crate::types;

use embedded_hal::digital;
use embedded_hal::i2c;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("bus error while accessing register {address:#06x} ({kind:?})")]
    Io { address: u16, kind: i2c::ErrorKind },

    #[error("register list failed at entry {index} (register {address:#06x}, {kind:?})")]
    RegisterList {
        index: usize,
        address: u16,
        kind: i2c::ErrorKind,
    },

    #[error("chip id mismatch (expected 0x5647, read {high:#04x}{low:02x})")]
    ChipMismatch { high: u8, low: u8 },

    #[error("external clock frequency not supported ({actual} Hz, expected {expected} Hz)")]
    ClockFrequency { expected: u32, actual: u32 },

    #[error("failed to enable supply \"{name}\" ({message})")]
    Supply { name: String, message: String },

    #[error("failed to enable the external clock ({0})")]
    Clock(String),

    #[error("power-down GPIO error ({0:?})")]
    Gpio(digital::ErrorKind),

    #[error("{value} is not a valid value for {control} (minimum {minimum}, maximum {maximum}, step {step})")]
    OutOfRange {
        control: Control,
        value: i64,
        minimum: i64,
        maximum: i64,
        step: i64,
    },

    #[error("{0} is read-only")]
    ReadOnly(Control),

    #[error("{0} cannot change while streaming")]
    Locked(Control),

    #[error("pad {0} does not exist")]
    Pad(u32),

    #[error("enumeration index {0} is out of range")]
    Index(u32),

    #[error("media bus code {0:?} is not supported")]
    Code(types::MediaBusCode),

    #[error("the mode cannot change while streaming")]
    Streaming,

    #[error("virtual channel {0} is out of range (0 to 3)")]
    VirtualChannel(u8),
}

/// Coarse error classes, in the order a host maps them onto its own error codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Class {
    Io,
    InvalidArgument,
    InvalidState,
    ChipMismatch,
    Resource,
}

impl Error {
    pub fn class(&self) -> Class {
        match self {
            Self::Io { .. } | Self::RegisterList { .. } => Class::Io,
            Self::OutOfRange { .. }
            | Self::ReadOnly(_)
            | Self::Pad(_)
            | Self::Index(_)
            | Self::Code(_)
            | Self::VirtualChannel(_) => Class::InvalidArgument,
            Self::Locked(_) | Self::Streaming => Class::InvalidState,
            Self::ChipMismatch { .. } => Class::ChipMismatch,
            Self::ClockFrequency { .. } | Self::Supply { .. } | Self::Clock(_) | Self::Gpio(_) => {
                Class::Resource
            }
        }
    }
}
