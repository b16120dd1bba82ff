//!# CAN controller device
//!
//!```
//!# use mcp2515::can::MCP2515;
//!# use mcp2515::config::Configuration;
//!# use mcp2515::example::{ExampleCSPin, ExampleDelay, ExampleInterruptPin, ExampleSPIBus};
//!#
//! // Initialize controller object
//! let mut controller = MCP2515::new(ExampleSPIBus::default(), ExampleCSPin {}, ExampleInterruptPin::default());
//!
//! // Reset the device and load the default configuration settings
//! controller.configure(&Configuration::default(), &mut ExampleDelay {}).unwrap();
//! ```

use crate::config::{Configuration, InterruptConfiguration};
use crate::registers;
use crate::status::{OperationMode, OperationStatus, ReadStatus, RxStatus};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use log::debug;

/// Byte clocked out on exchanges where only the received value matters
const FILLER: u8 = 0xFF;

/// Settle time after a reset before the device accepts the next instruction
const RESET_SETTLE_TIME_US: u16 = 10;

/// Errors of the SPI transaction layer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusError<B, CS> {
    /// SPI transfer failed
    TransferError(B),
    /// Setting the chip select line failed
    CSError(CS),
}

/// Errors while configuring the device
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError<B, CS> {
    /// SPI transaction failed
    BusError(BusError<B, CS>),
    /// Device did not report configuration mode after reset
    NotInConfigurationMode,
}

impl<B, CS> From<BusError<B, CS>> for ConfigError<B, CS> {
    fn from(value: BusError<B, CS>) -> Self {
        ConfigError::BusError(value)
    }
}

/// SPI instruction set of the device. The buffer access instructions are
/// part of the closed set but currently have no operation built on them.
#[derive(Copy, Clone)]
#[repr(u8)]
enum Instruction {
    /// Reinitialize all internal registers and enter configuration mode
    Reset = 0xC0,
    /// Read one register, address auto-increments for additional exchanges
    Read = 0x03,
    /// Read a receive buffer without sending the address byte
    ReadRxBuffer = 0x90,
    /// Write one register
    Write = 0x02,
    /// Load a transmit buffer without sending the address byte
    LoadTxBuffer = 0x40,
    /// Request transmission of one or more transmit buffers
    RequestToSend = 0x80,
    /// Read the transmit/receive interrupt and request summary
    ReadStatus = 0xA0,
    /// Read the receive buffer status summary
    RxStatus = 0xB0,
    /// Modify masked bits of a bit-modifiable register
    BitModify = 0x05,
}

/// Main MCP2515 CAN controller device
///
/// The SPI bus and the pins are expected to be fully set up by the host HAL:
/// MSB first data order, SPI mode 0, controller role and a clock rate within
/// the device limit. The chip select and interrupt lines are both active low.
///
/// All instructions run to completion on the calling thread. A device that
/// never signals transfer completion blocks indefinitely inside the HAL's
/// [Transfer] implementation; no timeout is applied on top of it.
pub struct MCP2515<B, CS, INT> {
    /// SPI bus
    bus: B,

    /// Chip select pin, driven low for the duration of one instruction
    pin_cs: CS,

    /// Interrupt line of the device, observed only
    pin_int: INT,
}

impl<B, CS, INT> MCP2515<B, CS, INT>
where
    B: Transfer<u8>,
    CS: OutputPin,
    INT: InputPin,
{
    pub fn new(bus: B, pin_cs: CS, pin_int: INT) -> Self {
        Self { bus, pin_cs, pin_int }
    }

    /// Configures the device with the given settings
    ///
    /// The device is reset first, which leaves it in configuration mode with
    /// all registers at their default values. After the settle time the mode
    /// is verified by reading CANSTAT, then the bit timing registers and the
    /// interrupt configuration are written and pending interrupt flags are
    /// cleared.
    ///
    /// The device stays in configuration mode. Requesting an operation mode
    /// is done by writing CANCTRL via [Self::write_register] or
    /// [Self::modify_register] once the remaining setup (e.g. acceptance
    /// filters) is complete.
    pub fn configure<D: DelayUs<u16>>(
        &mut self,
        config: &Configuration,
        delay: &mut D,
    ) -> Result<(), ConfigError<B::Error, CS::Error>> {
        self.reset()?;
        delay.delay_us(RESET_SETTLE_TIME_US);

        let status = self.read_operation_status()?;
        if status.mode != OperationMode::Configuration {
            debug!("Device is not in configuration mode after reset. Current mode: {:?}", status.mode);
            return Err(ConfigError::NotInConfigurationMode);
        }

        self.write_register(registers::CNF1, config.bit_timing.cnf1.into())?;
        self.write_register(registers::CNF2, config.bit_timing.cnf2.into())?;
        self.write_register(registers::CNF3, config.bit_timing.cnf3.into())?;

        self.write_register(registers::CANINTE, config.interrupts.as_register())?;
        self.write_register(registers::CANINTF, 0x00)?;

        Ok(())
    }

    /// Resets the device, reinitializing all internal registers and entering
    /// configuration mode. The device needs a short settle time before it
    /// accepts the next instruction; [Self::configure] handles this, direct
    /// callers are responsible for the delay themselves.
    pub fn reset(&mut self) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Reset as u8];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Reads a single register byte
    pub fn read_register(&mut self, register: u8) -> Result<u8, BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Read as u8, register, FILLER];
        self.transfer(&mut buffer)
    }

    /// Writes a single register byte
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Write as u8, register, value];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Sets and clears the bits of a register selected by `mask` to the
    /// state given in `value`, bits outside the mask are left untouched.
    /// Only the registers documented as bit-modifiable support this
    /// instruction, which is not checked here.
    pub fn modify_register(&mut self, register: u8, mask: u8, value: u8) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::BitModify as u8, register, mask, value];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Reads and returns the operation status (CANSTAT register)
    pub fn read_operation_status(&mut self) -> Result<OperationStatus, BusError<B::Error, CS::Error>> {
        let data = self.read_register(registers::CANSTAT)?;

        Ok(OperationStatus::from_register(data))
    }

    /// Reads and returns the current interrupt configuration (CANINTE register)
    pub fn read_interrupt_configuration(&mut self) -> Result<InterruptConfiguration, BusError<B::Error, CS::Error>> {
        let data = self.read_register(registers::CANINTE)?;

        Ok(InterruptConfiguration::from_register(data))
    }

    /// Reads and returns the transmit/receive summary status
    pub fn read_status(&mut self) -> Result<ReadStatus, BusError<B::Error, CS::Error>> {
        let data = self.status_instruction(Instruction::ReadStatus)?;

        Ok(ReadStatus::from_register(data))
    }

    /// Reads and returns the receive buffer status summary
    pub fn rx_status(&mut self) -> Result<RxStatus, BusError<B::Error, CS::Error>> {
        let data = self.status_instruction(Instruction::RxStatus)?;

        Ok(RxStatus::from_register(data))
    }

    /// Returns true if the device asserts its interrupt line (active low),
    /// signaling an unhandled event enabled in the interrupt configuration.
    /// Does not block and drives no output line.
    pub fn message_pending(&self) -> Result<bool, INT::Error> {
        self.pin_int.is_low()
    }

    /// Two-exchange status instruction, returns the byte received during the
    /// filler exchange
    fn status_instruction(&mut self, instruction: Instruction) -> Result<u8, BusError<B::Error, CS::Error>> {
        let mut buffer = [instruction as u8, FILLER];
        self.transfer(&mut buffer)
    }

    /// Executes one chip select framed SPI transfer and returns the last
    /// byte received. The select line is released on every exit path, so a
    /// failed transfer never leaves the device selected.
    fn transfer(&mut self, buffer: &mut [u8]) -> Result<u8, BusError<B::Error, CS::Error>> {
        self.pin_cs.set_low().map_err(BusError::CSError)?;
        let result = self.bus.transfer(buffer).map_err(BusError::TransferError);
        self.pin_cs.set_high().map_err(BusError::CSError)?;

        let words = result?;
        Ok(words.last().copied().unwrap_or(0))
    }
}
