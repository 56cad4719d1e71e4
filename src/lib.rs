//! Driver for the serial command protocol spoken by Circuit Design SLR/MLR
//! radio modems.
//!
//! The modem is attached over a half-duplex UART and controlled with short
//! ASCII commands (`@CH0A\r\n`), answered by `*`-prefixed response lines.
//! Radio packets received by the modem arrive on the same line interleaved
//! with command responses, as `*DR=` telegrams carrying arbitrary payload
//! bytes. [`modem::Modem`] reconstructs typed results out of that stream.
//!
//! The crate does not open serial ports itself - the host supplies a byte
//! source and a millisecond clock through the [`modem::SerialIo`] and
//! [`modem::Clock`] traits, so the driver runs unchanged on embedded targets
//! and on a PC (see the demos for a `serialport` based setup).

#![cfg_attr(any(not(feature = "std"), not(test)), no_std)]

pub mod modem;

// include defmt::Format implementations
// we don't want them derive()d in the modules unless defmt-impl feature is set
#[cfg(feature = "defmt-impl")]
pub mod defmt;

// reexport heapless
pub use heapless;

/// Largest radio payload a single `@DT` transmission or `*DR=` reception can
/// carry. The length field on the wire is two hex digits.
pub const MAX_RADIO_PAYLOAD_LENGTH: usize = 255;

/// Capacity of the command response capture buffer. A response line longer
/// than this (before its CR) is reported as an overflow.
pub const MAX_RESPONSE_LENGTH: usize = 32;
