//! Bus and chip-select access.
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{self, SpiBus};
use embedded_hal_bus::spi::DeviceError;
use fugit::MillisDurationU32;

/// Upper bound for a single frame transfer.
pub const TRANSFER_TIMEOUT: MillisDurationU32 = MillisDurationU32::millis(1);

/// The bus operations the driver needs.
///
/// Errors are reduced to [`spi::ErrorKind`] by the driver.
pub trait Transport: spi::ErrorType {
    /// Drive chip-select low.
    fn assert_select(&mut self) -> Result<(), Self::Error>;

    /// Drive chip-select high.
    fn deassert_select(&mut self) -> Result<(), Self::Error>;

    /// Write `frame` and block until it has left the bus or `timeout` has
    /// elapsed.
    fn blocking_transfer(
        &mut self,
        frame: &[u8],
        timeout: MillisDurationU32,
    ) -> Result<(), Self::Error>;
}

/// [`Transport`] over an `embedded-hal` SPI bus and a chip-select pin.
///
/// `embedded-hal` buses have no per-call timeout. The bound is whatever the
/// HAL bus implementation enforces and `timeout` is not used.
pub struct SpiTransport<B, P> {
    bus: B,
    cs: P,
}

impl<B, P> SpiTransport<B, P> {
    pub fn new(bus: B, cs: P) -> Self {
        Self { bus, cs }
    }

    pub fn release(self) -> (B, P) {
        (self.bus, self.cs)
    }
}

impl<B: SpiBus<u8>, P: OutputPin> spi::ErrorType for SpiTransport<B, P> {
    type Error = DeviceError<B::Error, P::Error>;
}

impl<B: SpiBus<u8>, P: OutputPin> Transport for SpiTransport<B, P> {
    fn assert_select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(DeviceError::Cs)
    }

    fn deassert_select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(DeviceError::Cs)
    }

    fn blocking_transfer(
        &mut self,
        frame: &[u8],
        _timeout: MillisDurationU32,
    ) -> Result<(), Self::Error> {
        self.bus.write(frame).map_err(DeviceError::Spi)?;
        self.bus.flush().map_err(DeviceError::Spi)
    }
}
