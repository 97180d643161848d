use crate::error::Error;
use crate::registers::register_list;
use crate::registers::Bus;
use crate::registers::RegisterList;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::digital::Error as _;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

/// Settle time after releasing power-down and after starting the external clock.
pub const SETTLE_DELAY_MS: u32 = 20;

/// Un-gates the sensor I/O pads.
pub const OUTPUT_ENABLE: &RegisterList = register_list! {
    0x3000 => 0x0f,
    0x3001 => 0xff,
    0x3002 => 0xe4,
};

pub const OUTPUT_DISABLE: &RegisterList = register_list! {
    0x3000 => 0x00,
    0x3001 => 0x00,
    0x3002 => 0x00,
};

/// A supply rail (regulator) feeding the sensor.
pub trait Supply {
    type Error: std::fmt::Debug;

    fn name(&self) -> &str;

    fn enable(&mut self) -> Result<(), Self::Error>;

    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// The external clock (XCLK) feeding the sensor.
pub trait Clock {
    type Error: std::fmt::Debug;

    /// Rate in Hz.
    fn rate(&self) -> u32;

    fn enable(&mut self) -> Result<(), Self::Error>;

    fn disable(&mut self);
}

/// Stands in for the power-down GPIO on boards that do not wire it.
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = std::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Off,
    RegulatorsOn,
    Powered,
}

/// Releases a resource when dropped, unless committed first.
struct Undo<'a, Resource: ?Sized> {
    resource: Option<&'a mut Resource>,
    undo: fn(&mut Resource),
}

impl<'a, Resource: ?Sized> Undo<'a, Resource> {
    fn new(resource: &'a mut Resource, undo: fn(&mut Resource)) -> Self {
        Self {
            resource: Some(resource),
            undo,
        }
    }

    fn commit(mut self) {
        self.resource = None;
    }
}

impl<Resource: ?Sized> Drop for Undo<'_, Resource> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            (self.undo)(resource);
        }
    }
}

pub struct Power<S, P, C, D> {
    supplies: Vec<S>,
    powerdown: Option<P>,
    clock: C,
    delay: D,
    state: State,
}

impl<S, P, C, D> Power<S, P, C, D>
where
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(supplies: Vec<S>, powerdown: Option<P>, clock: C, delay: D) -> Self {
        Self {
            supplies,
            powerdown,
            clock,
            delay,
            state: State::Off,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn clock_rate(&self) -> u32 {
        self.clock.rate()
    }

    /// Supplies, then power-down release, then clock, then output enable.
    ///
    /// A failure after the supplies are up unwinds every completed step in reverse order
    /// before the original error is returned.
    pub fn power_on<I2C: I2c>(&mut self, bus: &mut Bus<I2C>) -> Result<(), Error> {
        if self.state == State::Powered {
            return Ok(());
        }
        log::debug!("power on");
        let result = sequence_on(
            &mut self.supplies,
            self.powerdown.as_mut(),
            &mut self.clock,
            &mut self.delay,
            &mut self.state,
            bus,
        );
        if let Err(error) = &result {
            log::debug!("power on failed ({error})");
            self.state = State::Off;
        }
        result
    }

    /// Never fails: errors are logged and the remaining steps still run.
    pub fn power_off(&mut self) {
        log::debug!("power off");
        if let Some(pin) = self.powerdown.as_mut() {
            assert_powerdown(pin);
        }
        disable_supplies(&mut self.supplies);
        self.clock.disable();
        self.state = State::Off;
    }
}

fn sequence_on<S, P, C, D, I2C>(
    supplies: &mut [S],
    powerdown: Option<&mut P>,
    clock: &mut C,
    delay: &mut D,
    state: &mut State,
    bus: &mut Bus<I2C>,
) -> Result<(), Error>
where
    S: Supply,
    P: OutputPin,
    C: Clock,
    D: DelayNs,
    I2C: I2c,
{
    let supplies = enable_supplies(supplies)?;
    *state = State::RegulatorsOn;

    let powerdown = match powerdown {
        Some(pin) => {
            pin.set_low().map_err(|error| Error::Gpio(error.kind()))?;
            let pin = Undo::new(pin, assert_powerdown::<P>);
            delay.delay_ms(SETTLE_DELAY_MS);
            Some(pin)
        }
        None => None,
    };

    clock
        .enable()
        .map_err(|error| Error::Clock(format!("{error:?}")))?;
    let clock = Undo::new(clock, C::disable);
    delay.delay_ms(SETTLE_DELAY_MS);

    if let Err(error) = bus.apply(OUTPUT_ENABLE) {
        if let Err(error) = bus.apply(OUTPUT_DISABLE) {
            log::warn!("disabling sensor outputs failed ({error})");
        }
        return Err(error);
    }

    clock.commit();
    if let Some(pin) = powerdown {
        pin.commit();
    }
    supplies.commit();
    *state = State::Powered;
    Ok(())
}

/// Enables every supply in order. On failure, the supplies already enabled are disabled.
fn enable_supplies<S: Supply>(supplies: &mut [S]) -> Result<Undo<'_, [S]>, Error> {
    let failure = supplies
        .iter_mut()
        .enumerate()
        .find_map(|(index, supply)| {
            supply.enable().err().map(|error| {
                (
                    index,
                    Error::Supply {
                        name: supply.name().to_owned(),
                        message: format!("{error:?}"),
                    },
                )
            })
        });
    if let Some((index, error)) = failure {
        disable_supplies(&mut supplies[..index]);
        return Err(error);
    }
    Ok(Undo::new(supplies, disable_supplies::<S>))
}

fn disable_supplies<S: Supply>(supplies: &mut [S]) {
    for supply in supplies.iter_mut().rev() {
        if let Err(error) = supply.disable() {
            log::warn!("failed to disable supply \"{}\" ({:?})", supply.name(), error);
        }
    }
}

fn assert_powerdown<P: OutputPin>(pin: &mut P) {
    if let Err(error) = pin.set_high() {
        log::warn!("failed to assert the power-down GPIO ({:?})", error.kind());
    }
}
