#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MediaBusCode {
    /// 10-bit raw Bayer, BGGR order, one sample per bus cycle.
    Sbggr10_1x10 = 0x3007,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Colorspace {
    Raw,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Field {
    None,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: MediaBusCode,
    pub colorspace: Colorspace,
    pub field: Field,
}

impl FrameFormat {
    /// Raw progressive format with the given geometry.
    pub const fn raw(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            code: MediaBusCode::Sbggr10_1x10,
            colorspace: Colorspace::Raw,
            field: Field::None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSizeRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}
