//! # Mock dummy structures for doc examples
//!
//! The doubles script the responses of a freshly reset device: CANSTAT
//! reads report configuration mode, the interrupt line reads asserted and
//! the status instructions report a message in receive buffer 0.
use crate::registers;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::{InputPin, OutputPin};

#[derive(Default, Debug)]
pub struct ExampleSPIBus {}

impl Transfer<u8> for ExampleSPIBus {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        match words[0] {
            // register read
            0x03 => {
                words[2] = match words[1] {
                    // configuration mode, no interrupt pending
                    registers::CANSTAT => 0b1000_0000,
                    // everything else reads as reset default
                    _ => 0x00,
                };
            }
            // READ STATUS: message waiting in receive buffer 0
            0xA0 => words[1] = 0b0000_0001,
            // RX STATUS: standard data frame in receive buffer 0, accepted by filter 0
            0xB0 => words[1] = 0b0100_0000,
            // reset, register writes and bit modifications shift back nothing of interest
            _ => {}
        }

        Ok(words)
    }
}

pub struct ExampleCSPin {}

impl OutputPin for ExampleCSPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Interrupt line double reading asserted (low)
#[derive(Default, Debug)]
pub struct ExampleInterruptPin {}

impl InputPin for ExampleInterruptPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

pub struct ExampleDelay {}

impl DelayUs<u16> for ExampleDelay {
    fn delay_us(&mut self, _us: u16) {}
}
