use crate::error::Error;
use crate::modes::Mode;
use crate::properties::PROPERTIES;
use crate::registers;
use crate::registers::Bus;
use crate::registers::IspControl01;
use crate::registers::ManualControl;
use crate::registers::Register;
use crate::registers::RegisterWrite;
use crate::registers::TestPatternControl;
use crate::registers::TimingTc20;
use crate::registers::TimingTc21;

use embedded_hal::i2c::I2c;

pub const EXPOSURE_MINIMUM: i64 = 4;
pub const EXPOSURE_STEP: i64 = 1;
pub const EXPOSURE_DEFAULT: i64 = 1000;

/// The exposure must end this many rows before the frame does.
pub const EXPOSURE_MARGIN: i64 = 4;

pub const VBLANK_MINIMUM: i64 = 24;
pub const VTS_MAXIMUM: i64 = 32767;

pub const ANALOGUE_GAIN_MINIMUM: i64 = 16;
pub const ANALOGUE_GAIN_MAXIMUM: i64 = 1023;
pub const ANALOGUE_GAIN_DEFAULT: i64 = 32;

pub const EXPOSURE_AUTO: i64 = 0;
pub const EXPOSURE_MANUAL: i64 = 1;

pub const TEST_PATTERNS: [&str; 5] = [
    "Disabled",
    "Color Bars",
    "Square",
    "Random Data",
    "Input Data",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    pub minimum: i64,
    pub maximum: i64,
    pub step: i64,
    pub default: i64,
    pub value: i64,
}

impl Parameter {
    pub const fn new(minimum: i64, maximum: i64, step: i64, default: i64) -> Self {
        Self {
            minimum,
            maximum,
            step,
            default,
            value: default,
        }
    }

    pub const fn fixed(value: i64) -> Self {
        Self::new(value, value, 1, value)
    }

    pub const fn toggle() -> Self {
        Self::new(0, 1, 1, 0)
    }

    pub fn accepts(&self, value: i64) -> bool {
        value >= self.minimum && value <= self.maximum && (value - self.minimum) % self.step == 0
    }

    /// Replaces the range and clamps the current value into it.
    fn modify_range(&mut self, minimum: i64, maximum: i64, default: i64) {
        self.minimum = minimum;
        self.maximum = maximum;
        self.default = default;
        self.value = self.value.clamp(minimum, maximum);
    }
}

macro_rules! controls {
    ($($name:ident),+ $(,)?) => {
        paste::paste! {
            #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
            pub enum Control {
                $(
                    [<$name:camel>],
                )+
            }

            impl Control {
                pub const ALL: &'static [Control] = &[
                    $(
                        Control::[<$name:camel>],
                    )+
                ];
            }

            impl std::fmt::Display for Control {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    match self {
                        $(
                            Self::[<$name:camel>] => write!(formatter, stringify!($name)),
                        )+
                    }
                }
            }

            #[derive(Debug, PartialEq, Eq)]
            pub struct ParseControlError {
                on: String
            }

            impl std::fmt::Display for ParseControlError {
                fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(formatter, "unknown control \"{}\"", self.on)
                }
            }

            impl std::str::FromStr for Control {
                type Err = ParseControlError;

                fn from_str(string: &str) -> Result<Self, Self::Err> {
                    match string {
                        $(
                            stringify!($name) => Ok(Self::[<$name:camel>]),
                        )+
                        _ => Err(ParseControlError { on: string.to_owned() }),
                    }
                }
            }

            #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
            pub struct Parameters {
                $(
                    pub $name: Parameter,
                )+
            }

            impl Parameters {
                pub fn get(&self, control: Control) -> &Parameter {
                    match control {
                        $(
                            Control::[<$name:camel>] => &self.$name,
                        )+
                    }
                }

                fn get_mut(&mut self, control: Control) -> &mut Parameter {
                    match control {
                        $(
                            Control::[<$name:camel>] => &mut self.$name,
                        )+
                    }
                }
            }
        }
    };
}

controls! {
    pixel_rate,
    link_frequency,
    exposure,
    analogue_gain,
    vertical_blanking,
    horizontal_blanking,
    horizontal_flip,
    vertical_flip,
    auto_gain,
    auto_exposure,
    auto_white_balance,
    test_pattern,
}

impl Control {
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::PixelRate | Self::LinkFrequency)
    }

    /// Flips change the Bayer order and cannot move while frames are produced.
    pub fn is_flip(self) -> bool {
        matches!(self, Self::HorizontalFlip | Self::VerticalFlip)
    }
}

/// Outcome of a successful [`Controls::set`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Written to the sensor.
    Written,
    /// Stored; the sensor is unpowered and receives it when streaming starts.
    Deferred,
    /// Stored; the control has no register.
    Stored,
}

/// Values written to the sensor when streaming starts, in order.
const FLUSH_ORDER: [Control; 9] = [
    Control::VerticalBlanking,
    Control::Exposure,
    Control::AnalogueGain,
    Control::HorizontalFlip,
    Control::VerticalFlip,
    Control::AutoGain,
    Control::AutoExposure,
    Control::AutoWhiteBalance,
    Control::TestPattern,
];

#[derive(Debug, Clone)]
pub struct Controls {
    parameters: Parameters,
    flips_locked: bool,
}

impl Controls {
    pub fn new(mode: &Mode) -> Self {
        Self {
            parameters: Parameters {
                pixel_rate: Parameter::fixed(mode.pixel_rate),
                link_frequency: Parameter::fixed(PROPERTIES.link_frequency),
                exposure: exposure_parameter(i64::from(mode.vts_def) - EXPOSURE_MARGIN),
                analogue_gain: Parameter::new(
                    ANALOGUE_GAIN_MINIMUM,
                    ANALOGUE_GAIN_MAXIMUM,
                    1,
                    ANALOGUE_GAIN_DEFAULT,
                ),
                vertical_blanking: vblank_parameter(mode),
                horizontal_blanking: Parameter::fixed(mode.hblank()),
                horizontal_flip: Parameter::toggle(),
                vertical_flip: Parameter::toggle(),
                auto_gain: Parameter::toggle(),
                auto_exposure: Parameter::new(EXPOSURE_AUTO, EXPOSURE_MANUAL, 1, EXPOSURE_MANUAL),
                auto_white_balance: Parameter::toggle(),
                test_pattern: Parameter::new(0, TEST_PATTERNS.len() as i64 - 1, 1, 0),
            },
            flips_locked: false,
        }
    }

    pub fn get(&self, control: Control) -> Parameter {
        *self.parameters.get(control)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Recomputes every mode-dependent range and resets those controls to their defaults.
    pub fn apply_mode(&mut self, mode: &Mode) {
        self.parameters.pixel_rate = Parameter::fixed(mode.pixel_rate);
        self.parameters.horizontal_blanking = Parameter::fixed(mode.hblank());
        self.parameters.vertical_blanking = vblank_parameter(mode);
        self.parameters.exposure = exposure_parameter(i64::from(mode.vts_def) - EXPOSURE_MARGIN);
    }

    pub fn lock_flips(&mut self, locked: bool) {
        self.flips_locked = locked;
    }

    pub fn validate(&self, control: Control, value: i64) -> Result<(), Error> {
        if control.is_read_only() {
            return Err(Error::ReadOnly(control));
        }
        if self.flips_locked && control.is_flip() {
            return Err(Error::Locked(control));
        }
        let parameter = self.parameters.get(control);
        if !parameter.accepts(value) {
            return Err(Error::OutOfRange {
                control,
                value,
                minimum: parameter.minimum,
                maximum: parameter.maximum,
                step: parameter.step,
            });
        }
        Ok(())
    }

    /// Validates then stores `value`, writing it first when `bus` is given (sensor powered).
    ///
    /// A bus failure leaves every stored value untouched.
    pub fn set<I2C: I2c>(
        &mut self,
        control: Control,
        value: i64,
        mode: &Mode,
        bus: Option<&mut Bus<I2C>>,
    ) -> Result<Applied, Error> {
        self.validate(control, value)?;
        match control {
            Control::HorizontalBlanking => {
                self.parameters.horizontal_blanking.value = value;
                Ok(Applied::Stored)
            }
            Control::VerticalBlanking => {
                let exposure = self.exposure_for_vblank(mode, value);
                let applied = match bus {
                    Some(bus) => {
                        let written = bus.apply(&vts_writes(mode, value)).and_then(|()| {
                            if exposure.value != self.parameters.exposure.value {
                                bus.apply(&exposure_writes(exposure.value))
                            } else {
                                Ok(())
                            }
                        });
                        if let Err(error) = written {
                            self.restore_timing(mode, bus);
                            return Err(error);
                        }
                        Applied::Written
                    }
                    None => Applied::Deferred,
                };
                self.parameters.vertical_blanking.value = value;
                self.parameters.exposure = exposure;
                Ok(applied)
            }
            control => {
                let applied = match bus {
                    Some(bus) => {
                        write(control, value, mode, bus)?;
                        Applied::Written
                    }
                    None => Applied::Deferred,
                };
                self.parameters.get_mut(control).value = value;
                Ok(applied)
            }
        }
    }

    /// Writes every stored value to the sensor.
    pub fn flush<I2C: I2c>(&self, mode: &Mode, bus: &mut Bus<I2C>) -> Result<(), Error> {
        for control in FLUSH_ORDER {
            write(control, self.parameters.get(control).value, mode, bus)?;
        }
        Ok(())
    }

    /// Rewrites the stored frame length and exposure after a partial vblank update.
    fn restore_timing<I2C: I2c>(&self, mode: &Mode, bus: &mut Bus<I2C>) {
        let vblank = self.parameters.vertical_blanking.value;
        if let Err(error) = bus.apply(&vts_writes(mode, vblank)) {
            log::warn!("restoring the frame length failed ({error})");
        }
        if let Err(error) = bus.apply(&exposure_writes(self.parameters.exposure.value)) {
            log::warn!("restoring the exposure failed ({error})");
        }
    }

    fn exposure_for_vblank(&self, mode: &Mode, vblank: i64) -> Parameter {
        let maximum = i64::from(mode.height) + vblank - EXPOSURE_MARGIN;
        let mut exposure = self.parameters.exposure;
        exposure.modify_range(exposure.minimum, maximum, maximum.min(EXPOSURE_DEFAULT));
        exposure
    }
}

fn exposure_parameter(maximum: i64) -> Parameter {
    Parameter::new(
        EXPOSURE_MINIMUM,
        maximum,
        EXPOSURE_STEP,
        maximum.min(EXPOSURE_DEFAULT),
    )
}

fn vblank_parameter(mode: &Mode) -> Parameter {
    Parameter::new(
        VBLANK_MINIMUM,
        VTS_MAXIMUM - i64::from(mode.height),
        1,
        mode.vblank_default(),
    )
}

/// 20-bit exposure, low byte first.
pub fn exposure_writes(exposure: i64) -> [RegisterWrite; 3] {
    let exposure = exposure as u32;
    [
        RegisterWrite {
            address: registers::EXPOSURE_LOW,
            value: (exposure & 0xff) as u8,
        },
        RegisterWrite {
            address: registers::EXPOSURE_MIDDLE,
            value: ((exposure >> 8) & 0xff) as u8,
        },
        RegisterWrite {
            address: registers::EXPOSURE_HIGH,
            value: ((exposure >> 16) & 0x0f) as u8,
        },
    ]
}

/// 10-bit analogue gain, low byte first.
pub fn analogue_gain_writes(gain: i64) -> [RegisterWrite; 2] {
    let gain = gain as u32;
    [
        RegisterWrite {
            address: registers::ANALOGUE_GAIN_LOW,
            value: (gain & 0xff) as u8,
        },
        RegisterWrite {
            address: registers::ANALOGUE_GAIN_HIGH,
            value: ((gain >> 8) & 0x03) as u8,
        },
    ]
}

/// Frame length in rows for the given vertical blanking.
pub fn vts_writes(mode: &Mode, vblank: i64) -> [RegisterWrite; 2] {
    let [high, low] = ((i64::from(mode.height) + vblank) as u16).to_be_bytes();
    [
        RegisterWrite {
            address: registers::VTS_HIGH,
            value: high,
        },
        RegisterWrite {
            address: registers::VTS_LOW,
            value: low,
        },
    ]
}

fn write<I2C: I2c>(control: Control, value: i64, mode: &Mode, bus: &mut Bus<I2C>) -> Result<(), Error> {
    match control {
        Control::Exposure => bus.apply(&exposure_writes(value)),
        Control::AnalogueGain => bus.apply(&analogue_gain_writes(value)),
        Control::VerticalBlanking => bus.apply(&vts_writes(mode, value)),
        Control::HorizontalFlip => TimingTc21 {
            horizontal_binning: u8::from(mode.binning.horizontal()),
            horizontal_mirror: if value == 0 { 0b00 } else { 0b11 },
            ..Default::default()
        }
        .write(bus),
        Control::VerticalFlip => TimingTc20 {
            vertical_binning: u8::from(mode.binning.vertical()),
            vertical_flip: if value == 0 { 0b00 } else { 0b11 },
            reserved_6_7: 1,
            ..Default::default()
        }
        .write(bus),
        Control::AutoGain => {
            let mut register = ManualControl::read(bus)?;
            register.manual_gain = u8::from(value == 0);
            register.write(bus)
        }
        Control::AutoExposure => {
            let mut register = ManualControl::read(bus)?;
            register.manual_exposure = u8::from(value == EXPOSURE_MANUAL);
            register.write(bus)
        }
        Control::AutoWhiteBalance => {
            let mut register = IspControl01::read(bus)?;
            register.auto_white_balance = u8::from(value != 0);
            register.write(bus)
        }
        Control::TestPattern => TestPatternControl {
            enable: u8::from(value != 0),
            pattern: (value.max(1) - 1) as u8,
            ..Default::default()
        }
        .write(bus),
        Control::PixelRate | Control::LinkFrequency | Control::HorizontalBlanking => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::MODES;

    type Unpowered<'a> = Option<&'a mut Bus<embedded_hal_mock::eh1::i2c::Mock>>;

    #[test]
    fn ranges_follow_every_mode() {
        let mut controls = Controls::new(&MODES[0]);
        for mode in MODES.iter() {
            controls.apply_mode(mode);
            let exposure = controls.get(Control::Exposure);
            let vblank = controls.get(Control::VerticalBlanking);
            let hblank = controls.get(Control::HorizontalBlanking);
            let pixel_rate = controls.get(Control::PixelRate);
            assert_eq!(exposure.maximum, i64::from(mode.vts_def) - 4);
            assert_eq!(vblank.value, i64::from(mode.vts_def) - i64::from(mode.height));
            assert_eq!(vblank.maximum, VTS_MAXIMUM - i64::from(mode.height));
            assert_eq!(
                (hblank.minimum, hblank.maximum, hblank.default),
                (mode.hblank(), mode.hblank(), mode.hblank())
            );
            assert_eq!(
                (pixel_rate.minimum, pixel_rate.maximum, pixel_rate.default),
                (mode.pixel_rate, mode.pixel_rate, mode.pixel_rate)
            );
        }
    }

    #[test]
    fn vblank_moves_the_exposure_ceiling() {
        let mode = &MODES[3];
        let mut controls = Controls::new(mode);
        for vblank in [24, 100, 1000, VTS_MAXIMUM - 480] {
            let applied = controls
                .set(Control::VerticalBlanking, vblank, mode, Unpowered::None)
                .unwrap();
            assert_eq!(applied, Applied::Deferred);
            assert_eq!(controls.get(Control::Exposure).maximum, 480 + vblank - 4);
        }
    }

    #[test]
    fn shrinking_vblank_clamps_exposure() {
        let mode = &MODES[3];
        let mut controls = Controls::new(mode);
        controls
            .set(Control::VerticalBlanking, 1000, mode, Unpowered::None)
            .unwrap();
        controls
            .set(Control::Exposure, 1400, mode, Unpowered::None)
            .unwrap();
        controls
            .set(Control::VerticalBlanking, 100, mode, Unpowered::None)
            .unwrap();
        let exposure = controls.get(Control::Exposure);
        assert_eq!(exposure.maximum, 576);
        assert_eq!(exposure.value, 576);
        assert_eq!(exposure.default, 576);
    }

    #[test]
    fn rejects_before_touching_anything() {
        let mode = &MODES[3];
        let mut controls = Controls::new(mode);
        let before = controls.parameters().clone();
        assert!(matches!(
            controls.set(Control::AnalogueGain, 2000, mode, Unpowered::None),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(
            controls.set(Control::PixelRate, mode.pixel_rate, mode, Unpowered::None),
            Err(Error::ReadOnly(Control::PixelRate))
        );
        assert!(matches!(
            controls.set(Control::HorizontalBlanking, 0, mode, Unpowered::None),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(controls.parameters(), &before);
    }

    #[test]
    fn locked_flips_are_rejected() {
        let mode = &MODES[3];
        let mut controls = Controls::new(mode);
        controls.lock_flips(true);
        assert_eq!(
            controls.set(Control::HorizontalFlip, 1, mode, Unpowered::None),
            Err(Error::Locked(Control::HorizontalFlip))
        );
        controls.lock_flips(false);
        assert_eq!(
            controls.set(Control::HorizontalFlip, 1, mode, Unpowered::None),
            Ok(Applied::Deferred)
        );
    }

    #[test]
    fn exposure_is_split_into_three_bytes() {
        let writes = exposure_writes(0xabcde);
        assert_eq!(
            writes.map(|write| (write.address, write.value)),
            [(0x3502, 0xde), (0x3501, 0xbc), (0x3500, 0x0a)]
        );
    }

    #[test]
    fn names_round_trip() {
        for control in Control::ALL {
            assert_eq!(control.to_string().parse::<Control>(), Ok(*control));
        }
        assert!("brightness".parse::<Control>().is_err());
    }
}
