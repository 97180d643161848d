#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Configuration {
    /// 7-bit bus address.
    pub address: u8,
    pub non_continuous_clock: bool,
    /// MIPI CSI-2 virtual channel (0 to 3).
    pub virtual_channel: u8,
}

impl Configuration {
    pub fn deserialize_bincode(data: &[u8]) -> bincode::Result<Configuration> {
        bincode::deserialize(data)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        DEFAULT_CONFIGURATION
    }
}

pub const DEFAULT_CONFIGURATION: Configuration = Configuration {
    address: 0x36,
    non_continuous_clock: false,
    virtual_channel: 0,
};
