pub mod configuration;
pub mod controls;
pub mod device;
pub mod error;
pub mod format;
pub mod modes;
pub mod power;
pub mod properties;
pub mod registers;

pub use crate::configuration::Configuration;
pub use crate::configuration::DEFAULT_CONFIGURATION;
pub use crate::controls::Applied;
pub use crate::controls::Control;
pub use crate::controls::Parameter;
pub use crate::device::Device;
pub use crate::device::Resources;
pub use crate::error::Error;
pub use crate::format::PadState;
pub use crate::format::SelectionTarget;
pub use crate::format::Which;
pub use crate::modes::Mode;
pub use crate::power::Clock;
pub use crate::power::NoPin;
pub use crate::power::Supply;
pub use crate::properties::PROPERTIES;

pub use bincode;
pub use embedded_hal;
pub use ov5647_types as types;
