use crate::error::Error;
use crate::modes;
use crate::modes::MODES;
use crate::properties::PROPERTIES;
use crate::types;

/// The sensor exposes a single source pad.
pub const PAD: u32 = 0;

pub const MEDIA_BUS_CODES: [types::MediaBusCode; 1] = [types::MediaBusCode::Sbggr10_1x10];

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SelectionTarget {
    /// Analogue crop of the active (or proposed) mode.
    Crop,
    CropDefault,
    CropBounds,
    /// Whole native array, inactive border included.
    NativeSize,
}

/// Proposed format and crop of one negotiation session, independent from the device.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PadState {
    pub format: types::FrameFormat,
    pub crop: types::Rectangle,
}

impl Default for PadState {
    fn default() -> Self {
        Self {
            format: modes::default_mode().format(),
            crop: PROPERTIES.pixel_array,
        }
    }
}

/// Selects the state a negotiation reads or writes.
#[derive(Debug)]
pub enum Which<'a> {
    Try(&'a mut PadState),
    Active,
}

pub fn check_pad(pad: u32) -> Result<(), Error> {
    if pad == PAD {
        Ok(())
    } else {
        Err(Error::Pad(pad))
    }
}

pub fn media_bus_code(index: u32) -> Result<types::MediaBusCode, Error> {
    MEDIA_BUS_CODES
        .get(index as usize)
        .copied()
        .ok_or(Error::Index(index))
}

/// Every catalog mode is a discrete size (minimum and maximum are equal).
pub fn frame_size(index: u32, code: types::MediaBusCode) -> Result<types::FrameSizeRange, Error> {
    if !MEDIA_BUS_CODES.contains(&code) {
        return Err(Error::Code(code));
    }
    let mode = MODES.get(index as usize).ok_or(Error::Index(index))?;
    Ok(types::FrameSizeRange {
        min_width: mode.width,
        max_width: mode.width,
        min_height: mode.height,
        max_height: mode.height,
    })
}

/// Rectangles that do not depend on the negotiated mode.
pub fn fixed_selection(target: SelectionTarget) -> Option<types::Rectangle> {
    match target {
        SelectionTarget::Crop => None,
        SelectionTarget::CropDefault | SelectionTarget::CropBounds => Some(PROPERTIES.pixel_array),
        SelectionTarget::NativeSize => Some(PROPERTIES.native_size),
    }
}
