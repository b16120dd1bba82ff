/// Operation status read from the CANSTAT register
#[derive(Copy, Clone, Debug)]
pub struct OperationStatus {
    /// Current operation mode
    pub mode: OperationMode,

    /// Highest priority interrupt currently pending
    pub interrupt_code: InterruptCode,
}

impl OperationStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        Self {
            mode: OperationMode::from_register(register),
            interrupt_code: InterruptCode::from_register(register),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperationMode {
    /// Messages are transmitted and received, errors are actively signaled
    Normal = 0b000,
    /// Internal SPI interface remains active, oscillator is stopped
    Sleep = 0b001,
    /// Transmitted messages are routed back to the receive buffers
    Loopback = 0b010,
    /// Messages are received without acknowledge or error signaling
    ListenOnly = 0b011,
    /// Configuration registers are writable, no CAN bus activity
    Configuration = 0b100,
}

impl OperationMode {
    pub(crate) fn from_register(register: u8) -> Self {
        match register >> 5 {
            0b001 => Self::Sleep,
            0b010 => Self::Loopback,
            0b011 => Self::ListenOnly,
            0b100 => Self::Configuration,
            _ => Self::Normal,
        }
    }
}

/// Interrupt source currently flagged in CANSTAT. With multiple sources
/// pending the device reports the one with the highest priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterruptCode {
    /// No interrupt pending
    None = 0b000,
    /// Error interrupt (EFLG condition)
    Error = 0b001,
    /// Wake-up on bus activity
    WakeUp = 0b010,
    /// Transmit buffer 0 empty
    TxBuffer0 = 0b011,
    /// Transmit buffer 1 empty
    TxBuffer1 = 0b100,
    /// Transmit buffer 2 empty
    TxBuffer2 = 0b101,
    /// Message waiting in receive buffer 0
    RxBuffer0 = 0b110,
    /// Message waiting in receive buffer 1
    RxBuffer1 = 0b111,
}

impl InterruptCode {
    pub(crate) fn from_register(register: u8) -> Self {
        match (register >> 1) & 0b111 {
            0b001 => Self::Error,
            0b010 => Self::WakeUp,
            0b011 => Self::TxBuffer0,
            0b100 => Self::TxBuffer1,
            0b101 => Self::TxBuffer2,
            0b110 => Self::RxBuffer0,
            0b111 => Self::RxBuffer1,
            _ => Self::None,
        }
    }
}

/// Transmit/receive summary returned by the READ STATUS instruction
#[derive(Copy, Clone, Debug)]
pub struct ReadStatus {
    /// Message waiting in receive buffer 0
    pub rx0_interrupt: bool,

    /// Message waiting in receive buffer 1
    pub rx1_interrupt: bool,

    /// Transmission of buffer 0 is pending
    pub tx0_pending: bool,

    /// Transmit buffer 0 became empty
    pub tx0_interrupt: bool,

    /// Transmission of buffer 1 is pending
    pub tx1_pending: bool,

    /// Transmit buffer 1 became empty
    pub tx1_interrupt: bool,

    /// Transmission of buffer 2 is pending
    pub tx2_pending: bool,

    /// Transmit buffer 2 became empty
    pub tx2_interrupt: bool,
}

impl ReadStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        Self {
            rx0_interrupt: register & 1 != 0,
            rx1_interrupt: register & (1 << 1) != 0,
            tx0_pending: register & (1 << 2) != 0,
            tx0_interrupt: register & (1 << 3) != 0,
            tx1_pending: register & (1 << 4) != 0,
            tx1_interrupt: register & (1 << 5) != 0,
            tx2_pending: register & (1 << 6) != 0,
            tx2_interrupt: register & (1 << 7) != 0,
        }
    }
}

/// Receive buffer summary returned by the RX STATUS instruction
#[derive(Copy, Clone, Debug)]
pub struct RxStatus {
    /// Buffers currently holding a received message
    pub received: RxBufferStatus,

    /// Kind of the most recently received message
    pub frame_kind: RxFrameKind,

    /// Filter that accepted the most recently received message
    pub filter_match: RxFilterMatch,
}

impl RxStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        Self {
            received: RxBufferStatus::from_register(register),
            frame_kind: RxFrameKind::from_register(register),
            filter_match: RxFilterMatch::from_register(register),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RxBufferStatus {
    /// No message received
    None = 0b00,
    /// Message in receive buffer 0
    Buffer0 = 0b01,
    /// Message in receive buffer 1
    Buffer1 = 0b10,
    /// Messages in both receive buffers
    Both = 0b11,
}

impl RxBufferStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        match register >> 6 {
            0b01 => Self::Buffer0,
            0b10 => Self::Buffer1,
            0b11 => Self::Both,
            _ => Self::None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RxFrameKind {
    /// Standard data frame
    StandardData = 0b00,
    /// Standard remote frame
    StandardRemote = 0b01,
    /// Extended data frame
    ExtendedData = 0b10,
    /// Extended remote frame
    ExtendedRemote = 0b11,
}

impl RxFrameKind {
    pub(crate) fn from_register(register: u8) -> Self {
        match (register >> 3) & 0b11 {
            0b01 => Self::StandardRemote,
            0b10 => Self::ExtendedData,
            0b11 => Self::ExtendedRemote,
            _ => Self::StandardData,
        }
    }
}

/// Acceptance filter of the most recently received message. The rollover
/// variants indicate a message accepted for buffer 0 that was stored in
/// buffer 1 because buffer 0 was still occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RxFilterMatch {
    Filter0 = 0b000,
    Filter1 = 0b001,
    Filter2 = 0b010,
    Filter3 = 0b011,
    Filter4 = 0b100,
    Filter5 = 0b101,
    Filter0Rollover = 0b110,
    Filter1Rollover = 0b111,
}

impl RxFilterMatch {
    pub(crate) fn from_register(register: u8) -> Self {
        match register & 0b111 {
            0b001 => Self::Filter1,
            0b010 => Self::Filter2,
            0b011 => Self::Filter3,
            0b100 => Self::Filter4,
            0b101 => Self::Filter5,
            0b110 => Self::Filter0Rollover,
            0b111 => Self::Filter1Rollover,
            _ => Self::Filter0,
        }
    }
}
