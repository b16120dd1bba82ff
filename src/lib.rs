#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![allow(dead_code)]

//! # Library for MCP2515 CAN controller
//!
//! Crate currently offers the following features:
//! * Complete SPI instruction set of the device: reset, register read/write,
//!   masked bit modification and both status read instructions
//! * Non-blocking check of the active-low interrupt line
//! * One-shot configuration of bit timing and interrupt sources after reset
//! * no_std support
//!
//! The driver is generic over the `embedded-hal` SPI bus, pin and delay
//! traits and owns the chip select line. Every instruction is framed by
//! exactly one select/deselect pair, and the select line is released on
//! every exit path, so a failed transfer never leaves the device selected.
//!
//! CAN frame handling (transmit/receive buffer access, filter setup) is not
//! part of this crate. The register level primitives here are the layer any
//! such logic is built on.
//!
//!## Example
//!
//!```
//!use mcp2515::can::MCP2515;
//!use mcp2515::config::{BitTiming, Configuration, InterruptConfiguration};
//!use mcp2515::example::{ExampleCSPin, ExampleDelay, ExampleInterruptPin, ExampleSPIBus};
//!use mcp2515::registers::{Cnf1, Cnf2, Cnf3};
//!use mcp2515::status::RxBufferStatus;
//!
//!let mut controller = MCP2515::new(ExampleSPIBus::default(), ExampleCSPin {}, ExampleInterruptPin::default());
//!
//! // configure CAN controller (register values for 500 kBit/s with a 8 MHz oscillator)
//!controller
//!    .configure(
//!        &Configuration {
//!            bit_timing: BitTiming {
//!                cnf1: Cnf1::new().with_brp(0),
//!                cnf2: Cnf2::new().with_btlmode(true).with_phseg1(2),
//!                cnf3: Cnf3::new().with_phseg2(2),
//!                },
//!            interrupts: InterruptConfiguration {
//!                rx0_full: true,
//!                rx1_full: true,
//!                ..InterruptConfiguration::default()
//!                },
//!             },
//!        &mut ExampleDelay {},
//!         ).unwrap();
//!
//! // Poll the interrupt line for a pending message
//!if controller.message_pending().unwrap() {
//!    // Check which buffer holds the message
//!    let status = controller.rx_status().unwrap();
//!    assert_eq!(RxBufferStatus::Buffer0, status.received);
//!}
//!```

pub mod can;
pub mod config;
pub mod status;

pub mod example;
#[cfg(test)]
pub(crate) mod mocks;
pub mod registers;
#[cfg(test)]
mod tests;
