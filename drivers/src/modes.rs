pub mod programs;

use crate::properties::PROPERTIES;
use crate::registers::RegisterList;
use crate::types;

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Binning {
    None,
    Vertical,
    Horizontal,
    Both,
}

impl Binning {
    pub fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    pub fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

/// A capture mode: output geometry, timing and the full register program that selects it.
#[derive(Debug, PartialEq, Eq)]
pub struct Mode {
    pub width: u32,
    pub height: u32,

    /// Analogue crop rectangle, in native array coordinates.
    pub crop: types::Rectangle,

    pub pixel_rate: i64,

    /// Default horizontal total size (active columns + horizontal blanking).
    pub hts_def: u32,

    /// Default vertical total size (active rows + vertical blanking).
    pub vts_def: u32,

    pub registers: &'static RegisterList,

    pub binning: Binning,
}

impl Mode {
    pub fn hblank(&self) -> i64 {
        i64::from(self.hts_def) - i64::from(self.width)
    }

    pub fn vblank_default(&self) -> i64 {
        i64::from(self.vts_def) - i64::from(self.height)
    }

    pub fn format(&self) -> types::FrameFormat {
        types::FrameFormat::raw(self.width, self.height)
    }
}

const ARRAY_LEFT: i32 = PROPERTIES.pixel_array.left;
const ARRAY_TOP: i32 = PROPERTIES.pixel_array.top;

pub static MODES: [Mode; 4] = [
    Mode {
        width: 2592,
        height: 1944,
        crop: PROPERTIES.pixel_array,
        pixel_rate: 87_500_000,
        hts_def: 2844,
        vts_def: 0x7b0,
        registers: programs::FULL_RESOLUTION,
        binning: Binning::None,
    },
    Mode {
        width: 1920,
        height: 1080,
        crop: types::Rectangle::new(348 + ARRAY_LEFT, 434 + ARRAY_TOP, 1928, 1080),
        pixel_rate: 81_666_700,
        hts_def: 2416,
        vts_def: 0x450,
        registers: programs::FULL_HD,
        binning: Binning::None,
    },
    Mode {
        width: 1296,
        height: 972,
        crop: PROPERTIES.pixel_array,
        pixel_rate: 81_666_700,
        hts_def: 1896,
        vts_def: 0x59b,
        registers: programs::BINNED_2X2,
        binning: Binning::Both,
    },
    Mode {
        width: 640,
        height: 480,
        crop: types::Rectangle::new(16 + ARRAY_LEFT, ARRAY_TOP, 2560, 1920),
        pixel_rate: 55_000_000,
        hts_def: 1852,
        vts_def: 0x1f8,
        registers: programs::VGA,
        binning: Binning::Both,
    },
];

pub const DEFAULT_MODE: usize = 3;

pub fn default_mode() -> &'static Mode {
    &MODES[DEFAULT_MODE]
}

/// Picks the catalog mode closest to the requested geometry.
///
/// An exact match wins, otherwise the smallest `|Δwidth| + |Δheight|`. Ties go to the lowest
/// catalog index.
pub fn resolve(width: u32, height: u32) -> &'static Mode {
    let mut best = &MODES[0];
    let mut best_distance = u64::MAX;
    for mode in MODES.iter() {
        let distance = u64::from(mode.width.abs_diff(width)) + u64::from(mode.height.abs_diff(height));
        if distance < best_distance {
            best = mode;
            best_distance = distance;
        }
    }
    best
}
