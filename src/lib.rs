#![no_std]

//! Register-level driver for the MAX30105 / MAX30102 pulse oximetry and
//! heart-rate sensor.
//!
//! The driver identifies the chip, programs a fixed SpO2 configuration,
//! adjusts LED drive current and drains raw 18-bit samples from the chip's
//! FIFO. It does not interpret sample values.
//!
//! Known limitation: the driver forwards whatever the bus implementation
//! returns. A bus implementation that swallows errors and hands back default
//! data makes a valid zero sample indistinguishable from a failed read.

mod definitions;

pub use definitions::*;

use embedded_hal as hal;
use hal::blocking::delay::DelayMs;

/// Errors in this crate
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<CommE> {
    /// The underlying bus reported an error
    Comm(CommE),

    /// The part ID register held something other than [`EXPECTED_PART_ID`]:
    /// no device, or the wrong chip, at this address
    InvalidPartId(u8),
}

/// Raw FIFO sample, 18 significant bits
pub type SampleType = u32;

/// Fixed content of the PART_ID register for this chip family
pub const EXPECTED_PART_ID: u8 = 0x15;

/// Bus clock the chip is expected to run at unless the caller picks another
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 100_000;

/// Time the chip needs after a soft reset before its registers are valid
pub const RESET_SETTLE_MS: u8 = 100;

/// The chip's ADC resolution
pub const SAMPLE_MASK: SampleType = 0x3_FFFF;

/// Bytes per sample per channel in the FIFO
const SAMPLE_BYTES: usize = 3;

#[derive(Debug)]
pub struct MAX30105<I2C> {
    i2c_port: I2C,
    address: u8,
}

impl<I2C, CommE> MAX30105<I2C>
    where
        I2C: hal::blocking::i2c::Write<Error = CommE>
        + hal::blocking::i2c::Read<Error = CommE>,
        CommE: core::fmt::Debug
{
    pub const DEFAULT_DEVICE_ADDRESS: u8 = 0x57;

    /// Driver for a chip at a non-default address.
    /// Nothing is read or written until [`MAX30105::begin`].
    ///
    /// The bus clock is set when the caller builds `i2c_port`;
    /// the chip is specified for [`DEFAULT_BUS_FREQUENCY_HZ`] and up to 400 kHz.
    pub fn with_address(i2c_port: I2C, address: u8) -> Self {
        Self {
            i2c_port,
            address,
        }
    }

    pub fn default(i2c_port: I2C) -> Self {
        Self::with_address(i2c_port, Self::DEFAULT_DEVICE_ADDRESS)
    }

    /// Give the bus port back to the caller
    pub fn release(self) -> I2C {
        self.i2c_port
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Confirm that a chip of this family answers at the configured address.
    ///
    /// This is a single read of the part ID register, never retried.
    /// Other methods assume a prior successful `begin` and do not check again.
    pub fn begin(&mut self) -> Result<(), Error<CommE>> {
        let part_id = self.part_id()?;
        if part_id != EXPECTED_PART_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("max30105: unexpected part id {=u8:#x} at {=u8:#x}", part_id, self.address);
            return Err(Error::InvalidPartId(part_id));
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("max30105: found at {=u8:#x}", self.address);
        Ok(())
    }

    /// `true` exactly when [`MAX30105::begin`] succeeds
    pub fn is_present(&mut self) -> bool {
        self.begin().is_ok()
    }

    /// Reset the chip and program the default SpO2 configuration:
    /// red + IR at 100 Hz, 411us pulses, no averaging, no FIFO rollover,
    /// almost-full and data-ready interrupts enabled, FIFO emptied.
    ///
    /// Writes are not read back. Every write is issued even if an earlier
    /// one fails; the first bus error is returned once the sequence is done.
    pub fn setup<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), Error<CommE>> {
        let mut result = self.soft_reset();
        // register contents are undefined until the reset completes
        delay.delay_ms(RESET_SETTLE_MS);

        for &(register, value) in SETUP_SEQUENCE.iter() {
            result = result.and(self.write_register(register, value));
        }
        result
    }

    /// Set LED1 (red) drive current. Any value is written as given.
    pub fn set_pulse_amplitude_red(&mut self, amplitude: u8) -> Result<(), Error<CommE>> {
        self.write_register(Register::LED1_PA, amplitude)
    }

    /// Set LED2 drive current. Any value is written as given.
    pub fn set_pulse_amplitude_green(&mut self, amplitude: u8) -> Result<(), Error<CommE>> {
        self.write_register(Register::LED2_PA, amplitude)
    }

    /// Set pilot (proximity) LED drive current
    pub fn set_pulse_amplitude_pilot(&mut self, amplitude: u8) -> Result<(), Error<CommE>> {
        self.write_register(Register::PILOT_PA, amplitude)
    }

    /// Pop the next red sample from the FIFO.
    ///
    /// There is no check that the FIFO actually holds data. Channels are
    /// interleaved in the FIFO, so callers must alternate `get_red` and
    /// `get_ir` in the order the chip writes them.
    pub fn get_red(&mut self) -> Result<SampleType, Error<CommE>> {
        self.read_fifo_sample()
    }

    /// Pop the next IR sample from the FIFO. See [`MAX30105::get_red`].
    pub fn get_ir(&mut self) -> Result<SampleType, Error<CommE>> {
        self.read_fifo_sample()
    }

    /// Pop one red sample followed by one IR sample.
    /// Both are always drained, so a failed red read leaves the FIFO aligned.
    pub fn read_sample_pair(&mut self) -> Result<(SampleType, SampleType), Error<CommE>> {
        let red = self.get_red();
        let ir = self.get_ir();
        Ok((red?, ir?))
    }

    /// Trigger a soft reset. Does not wait for the chip to settle;
    /// allow [`RESET_SETTLE_MS`] before touching it again.
    pub fn soft_reset(&mut self) -> Result<(), Error<CommE>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("max30105: soft reset");
        self.write_register(Register::MODE_CONFIG, ModeConfig::Reset as u8)
    }

    pub fn part_id(&mut self) -> Result<u8, Error<CommE>> {
        self.read_register(Register::PART_ID)
    }

    pub fn revision_id(&mut self) -> Result<u8, Error<CommE>> {
        self.read_register(Register::REV_ID)
    }

    /// Three single-byte FIFO reads, first byte lowest.
    /// All three are issued even after an error, since each one moves the
    /// chip's read pointer.
    fn read_fifo_sample(&mut self) -> Result<SampleType, Error<CommE>> {
        let mut sample: Result<SampleType, Error<CommE>> = Ok(0);
        for shift in 0..SAMPLE_BYTES {
            let byte = self.read_register(Register::FIFO_DATA);
            sample = sample.and_then(|acc| byte.map(|b| acc | (b as SampleType) << (8 * shift)));
        }
        sample.map(|raw| raw & SAMPLE_MASK)
    }

    /// Select the register in one transaction, then read one byte back in another.
    /// The read is issued even if selecting the register failed.
    fn read_register(&mut self, register: Register) -> Result<u8,  Error<CommE>> {
        let selected = self.i2c_port
            .write(self.address, &[register as u8])
            .map_err(Error::Comm);
        let mut data = [0];
        let fetched = self.i2c_port
            .read(self.address, &mut data)
            .map_err(Error::Comm);
        selected.and(fetched).map(|_| data[0])
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(),  Error<CommE>> {
        self.i2c_port
            .write(self.address, &[register as u8, value])
            .map_err(Error::Comm)
    }
}
