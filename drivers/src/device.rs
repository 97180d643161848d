use crate::configuration::Configuration;
use crate::controls::Applied;
use crate::controls::Control;
use crate::controls::Controls;
use crate::controls::Parameter;
use crate::error::Error;
use crate::format;
use crate::format::PadState;
use crate::format::SelectionTarget;
use crate::format::Which;
use crate::modes;
use crate::modes::Mode;
use crate::power::Clock;
use crate::power::Power;
use crate::power::State;
use crate::power::Supply;
use crate::properties::PROPERTIES;
use crate::registers::Bus;
use crate::registers::ChipIdHigh;
use crate::registers::ChipIdLow;
use crate::registers::FrameOffNumber;
use crate::registers::MipiControl00;
use crate::registers::MipiControl14;
use crate::registers::PadOutput;
use crate::registers::Register;
use crate::registers::SoftwareStandby;
use crate::types;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// Everything the board provides to the driver.
pub struct Resources<I2C, S, P, C, D> {
    pub i2c: I2C,
    /// Enabled in order, disabled in reverse order.
    pub supplies: Vec<S>,
    pub powerdown: Option<P>,
    pub clock: C,
    pub delay: D,
}

struct Inner<I2C, S, P, C, D> {
    bus: Bus<I2C>,
    power: Power<S, P, C, D>,
    power_references: usize,
    configuration: Configuration,
    mode: &'static Mode,
    controls: Controls,
    streaming: bool,
}

/// One attached sensor.
///
/// Every operation takes the same lock, which serializes mode changes, stream transitions
/// and control writes.
pub struct Device<I2C, S, P, C, D>
where
    I2C: I2c,
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    inner: Mutex<Inner<I2C, S, P, C, D>>,
}

impl<I2C, S, P, C, D> Device<I2C, S, P, C, D>
where
    I2C: I2c,
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// Checks the external clock, identifies the sensor and leaves it powered off in LP-11.
    pub fn attach(
        resources: Resources<I2C, S, P, C, D>,
        configuration: Configuration,
    ) -> Result<Self, Error> {
        let actual = resources.clock.rate();
        if actual != PROPERTIES.clock_frequency {
            return Err(Error::ClockFrequency {
                expected: PROPERTIES.clock_frequency,
                actual,
            });
        }
        if configuration.virtual_channel > 3 {
            return Err(Error::VirtualChannel(configuration.virtual_channel));
        }
        let mode = modes::default_mode();
        let mut inner = Inner {
            bus: Bus::new(resources.i2c, configuration.address),
            power: Power::new(
                resources.supplies,
                resources.powerdown,
                resources.clock,
                resources.delay,
            ),
            power_references: 0,
            configuration,
            mode,
            controls: Controls::new(mode),
            streaming: false,
        };
        inner.power.power_on(&mut inner.bus)?;
        let result = inner.identify();
        inner.power.power_off();
        result?;
        log::debug!("{} attached", PROPERTIES.name);
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner<I2C, S, P, C, D>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts or stops streaming. Repeating the current state is a no-op.
    pub fn stream(&self, enable: bool) -> Result<(), Error> {
        let mut inner = self.lock();
        if inner.streaming == enable {
            return Ok(());
        }
        if enable {
            inner.start()
        } else {
            inner.stop();
            Ok(())
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.lock().streaming
    }

    pub fn set_control(&self, control: Control, value: i64) -> Result<Applied, Error> {
        let mut inner = self.lock();
        let Inner {
            bus,
            power,
            controls,
            mode,
            ..
        } = &mut *inner;
        let bus = (power.state() == State::Powered).then_some(bus);
        controls.set(control, value, *mode, bus)
    }

    pub fn control(&self, control: Control) -> Parameter {
        self.lock().controls.get(control)
    }

    pub fn mode(&self) -> &'static Mode {
        self.lock().mode
    }

    /// Resolves the request to the nearest catalog mode.
    ///
    /// `Which::Active` commits the mode and resets the mode-dependent controls. It fails with
    /// [`Error::Streaming`] if the mode would change while streaming.
    pub fn negotiate_format(
        &self,
        pad: u32,
        which: Which<'_>,
        width: u32,
        height: u32,
    ) -> Result<types::FrameFormat, Error> {
        format::check_pad(pad)?;
        let mode = modes::resolve(width, height);
        match which {
            Which::Try(state) => {
                state.format = mode.format();
                state.crop = mode.crop;
            }
            Which::Active => {
                let mut inner = self.lock();
                if !std::ptr::eq(inner.mode, mode) {
                    if inner.streaming {
                        return Err(Error::Streaming);
                    }
                    inner.apply_mode(mode);
                }
            }
        }
        Ok(mode.format())
    }

    pub fn format(&self, pad: u32, which: Which<'_>) -> Result<types::FrameFormat, Error> {
        format::check_pad(pad)?;
        Ok(match which {
            Which::Try(state) => state.format,
            Which::Active => self.lock().mode.format(),
        })
    }

    pub fn selection(
        &self,
        pad: u32,
        target: SelectionTarget,
        which: Which<'_>,
    ) -> Result<types::Rectangle, Error> {
        format::check_pad(pad)?;
        Ok(match format::fixed_selection(target) {
            Some(rectangle) => rectangle,
            None => match which {
                Which::Try(state) => state.crop,
                Which::Active => self.lock().mode.crop,
            },
        })
    }

    pub fn enumerate_media_bus_code(
        &self,
        pad: u32,
        index: u32,
    ) -> Result<types::MediaBusCode, Error> {
        format::check_pad(pad)?;
        format::media_bus_code(index)
    }

    pub fn enumerate_frame_size(
        &self,
        pad: u32,
        index: u32,
        code: types::MediaBusCode,
    ) -> Result<types::FrameSizeRange, Error> {
        format::check_pad(pad)?;
        format::frame_size(index, code)
    }

    /// State for a new negotiation session.
    pub fn open_pad_state(&self) -> PadState {
        PadState::default()
    }

    /// Takes a power reference. The first one powers the sensor on.
    pub fn acquire_power(&self) -> Result<(), Error> {
        self.lock().acquire_power()
    }

    /// Drops a power reference. The last one powers the sensor off.
    pub fn release_power(&self) {
        self.lock().release_power();
    }

    pub fn power_state(&self) -> State {
        self.lock().power.state()
    }
}

impl<I2C, S, P, C, D> Inner<I2C, S, P, C, D>
where
    I2C: I2c,
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    fn identify(&mut self) -> Result<(), Error> {
        let high = ChipIdHigh::read(&mut self.bus)?.value;
        let low = ChipIdLow::read(&mut self.bus)?.value;
        if [high, low] != PROPERTIES.chip_id {
            log::error!("unexpected chip id {:#04x}{:02x}", high, low);
            return Err(Error::ChipMismatch { high, low });
        }
        MipiControl00 {
            clock_lane_gate: 1,
            bus_idle: 1,
            clock_lane_disable: 1,
            ..Default::default()
        }
        .write(&mut self.bus)
    }

    fn apply_mode(&mut self, mode: &'static Mode) {
        log::debug!("mode {}x{}", mode.width, mode.height);
        self.mode = mode;
        self.controls.apply_mode(mode);
    }

    fn acquire_power(&mut self) -> Result<(), Error> {
        if self.power_references == 0 {
            self.power.power_on(&mut self.bus)?;
        }
        self.power_references += 1;
        Ok(())
    }

    fn release_power(&mut self) {
        match self.power_references {
            0 => log::warn!("power released without a reference"),
            1 => {
                self.power_references = 0;
                self.power.power_off();
            }
            _ => self.power_references -= 1,
        }
    }

    fn start(&mut self) -> Result<(), Error> {
        log::debug!("stream on ({}x{})", self.mode.width, self.mode.height);
        self.acquire_power()?;
        if let Err(error) = self.start_sequence() {
            log::debug!("stream on failed ({error})");
            self.controls.lock_flips(false);
            if let Err(error) = SoftwareStandby::default().write(&mut self.bus) {
                log::warn!("entering software standby failed ({error})");
            }
            self.release_power();
            return Err(error);
        }
        self.streaming = true;
        Ok(())
    }

    fn start_sequence(&mut self) -> Result<(), Error> {
        self.bus.apply(self.mode.registers)?;
        let mut channel = MipiControl14::read(&mut self.bus)?;
        channel.virtual_channel = self.configuration.virtual_channel;
        channel.write(&mut self.bus)?;
        SoftwareStandby {
            streaming: 1,
            ..Default::default()
        }
        .write(&mut self.bus)?;
        self.controls.lock_flips(true);
        self.controls.flush(self.mode, &mut self.bus)?;
        let non_continuous_clock = u8::from(self.configuration.non_continuous_clock);
        MipiControl00 {
            bus_idle: 1,
            clock_lane_gate: non_continuous_clock,
            line_sync_enable: non_continuous_clock,
            ..Default::default()
        }
        .write(&mut self.bus)?;
        FrameOffNumber { value: 0 }.write(&mut self.bus)?;
        PadOutput { value: 0 }.write(&mut self.bus)
    }

    fn stop(&mut self) {
        log::debug!("stream off");
        self.controls.lock_flips(false);
        self.streaming = false;
        if let Err(error) = SoftwareStandby::default().write(&mut self.bus) {
            log::warn!("entering software standby failed ({error})");
        }
        self.release_power();
    }
}

impl<I2C, S, P, C, D> Drop for Device<I2C, S, P, C, D>
where
    I2C: I2c,
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        if inner.power.state() != State::Off {
            inner.power.power_off();
        }
    }
}
