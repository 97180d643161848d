use crate::types;

#[derive(Debug, serde::Serialize)]
pub struct Sensor {
    pub name: &'static str,
    pub chip_id: [u8; 2],
    /// Full native array, inactive border included.
    pub native_size: types::Rectangle,
    /// Active pixel array, in native array coordinates.
    pub pixel_array: types::Rectangle,
    pub clock_frequency: u32,
    pub link_frequency: i64,
    pub supplies: [&'static str; 3],
}

pub const PROPERTIES: Sensor = Sensor {
    name: "OmniVision OV5647",
    chip_id: [0x56, 0x47],
    native_size: types::Rectangle::new(0, 0, 2624, 1956),
    pixel_array: types::Rectangle::new(16, 6, 2592, 1944),
    clock_frequency: 25_000_000,
    link_frequency: 297_000_000,
    supplies: ["dovdd", "avdd", "dvdd"],
};
