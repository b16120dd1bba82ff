#![allow(unused_braces)]
use modular_bitfield_msb::prelude::*;

/// Device status, mode request and clock output control
pub const CANSTAT: u8 = 0x0E;
pub const CANCTRL: u8 = 0x0F;

/// Transmit/receive error counters
pub const TEC: u8 = 0x1C;
pub const REC: u8 = 0x1D;

/// Bit timing configuration, writable in configuration mode only
pub const CNF3: u8 = 0x28;
pub const CNF2: u8 = 0x29;
pub const CNF1: u8 = 0x2A;

/// Interrupt enable and flag registers
pub const CANINTE: u8 = 0x2B;
pub const CANINTF: u8 = 0x2C;

/// Error flag register
pub const EFLG: u8 = 0x2D;

/// Control registers of the transmit buffers
pub const TXB0CTRL: u8 = 0x30;
pub const TXB1CTRL: u8 = 0x40;
pub const TXB2CTRL: u8 = 0x50;

/// Control registers of the receive buffers
pub const RXB0CTRL: u8 = 0x60;
pub const RXB1CTRL: u8 = 0x70;

#[bitfield]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Bit timing configuration register 1
pub struct Cnf1 {
    /// Synchronization jump width length bits
    pub sjw: B2,
    /// Baud rate prescaler bits
    pub brp: B6,
}

#[bitfield]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Bit timing configuration register 2
pub struct Cnf2 {
    /// Phase segment 2 length is taken from CNF3 when set
    pub btlmode: bool,
    /// Bus line is sampled three times at the sample point when set
    pub sam: bool,
    /// Phase segment 1 length bits
    pub phseg1: B3,
    /// Propagation segment length bits
    pub prseg: B3,
}

#[bitfield]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Bit timing configuration register 3
pub struct Cnf3 {
    /// Start-of-frame signal on the CLKOUT pin when set
    pub sof: bool,
    /// Wake-up filter enabled when set
    pub wakfil: bool,
    #[skip]
    __: B3,
    /// Phase segment 2 length bits
    pub phseg2: B3,
}

impl Cnf3 {
    /// Set phase segment 2 length in time quanta (2-8)
    pub fn with_phase_segment_2(mut self, quanta: u8) -> Self {
        let quanta = quanta.clamp(2, 8);
        self.set_phseg2(quanta - 1);
        self
    }

    /// Get phase segment 2 length in time quanta
    pub fn get_phase_segment_2(&self) -> u8 {
        self.phseg2() + 1
    }
}
