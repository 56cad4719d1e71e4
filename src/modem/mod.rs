//! Driver for one modem attached over a serial line.
//!
//! Commands go out as `@XX` lines and are answered with `*XX=` response
//! lines. The modem also pushes unsolicited `*DR=` telegrams whenever a
//! radio packet arrives, so responses and receptions interleave freely on
//! the wire; the driver sorts them apart and hands receptions to the event
//! sink no matter which call was in progress at that moment.
//!
//! The protocol allows one outstanding request at a time. Blocking calls
//! ([`Modem::channel`], [`Modem::transmit`], ...) poll the parser until the
//! response deadline passes. Asynchronous calls
//! ([`Modem::serial_number_async`], [`Modem::transmit_nowait`], ...) record
//! what kind of answer is owed and return; [`Modem::tick`] must then be
//! called regularly to collect it. While an answer is owed every other
//! request is refused with [`Error::Busy`].

#[cfg(feature = "std")]
use core::fmt;

use heapless::Vec;

mod io;
mod parser;
mod value;

pub use io::{Clock, SerialIo};

use parser::{Parser, Poll};

/// Default time to wait for a command response.
const DEFAULT_TIMEOUT_MS: u32 = 500;
/// LoRa command mode reports the transmission outcome only after the air
/// time, which can be many seconds at high spreading factors.
const LORA_INFO_TIMEOUT_MS: u32 = 15_000;
/// FSK command mode reports a carrier sense failure almost immediately and
/// stays silent on success.
const FSK_INFO_TIMEOUT_MS: u32 = 11;

/// Channel bounds of the JP band plan.
const CHANNEL_MIN: u8 = 0x07;
const CHANNEL_MAX: u8 = 0x2E;

/// Acknowledgement sent before the value echo when `/W` persists a setting.
const WRITE_ACK_FRAME: &[u8] = b"*WR=PS";
const FACTORY_RESET_OK_FRAME: &[u8] = b"*IZ=OK";

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum Error {
    /// Another request is still outstanding.
    Busy,
    /// A parameter lies outside the protocol defined range.
    InvalidArg,
    /// Timeout, corrupted frame, or a response that does not match the
    /// request.
    Fail,
    /// Transmission refused by the listen-before-talk carrier sense check.
    FailLbt,
    /// The caller provided buffer cannot hold the response.
    BufferTooSmall,
}

#[cfg(feature = "std")]
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Busy => write!(f, "driver is busy with another request"),
            Error::InvalidArg => write!(f, "argument outside the protocol defined range"),
            Error::Fail => write!(f, "command failed or timed out"),
            Error::FailLbt => write!(f, "transmission blocked by carrier sense"),
            Error::BufferTooSmall => write!(f, "response does not fit the provided buffer"),
        }
    }
}

/// Wireless operating mode, set and reported through `@MO`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
#[repr(u8)]
pub enum Mode {
    /// FSK binary mode. Not reachable through the command protocol.
    FskBin = 0,
    FskCmd = 1,
    /// LoRa binary mode. Not reachable through the command protocol.
    LoRaBin = 2,
    LoRaCmd = 3,
}

impl TryFrom<u8> for Mode {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::FskBin),
            1 => Ok(Mode::FskCmd),
            2 => Ok(Mode::LoRaBin),
            3 => Ok(Mode::LoRaCmd),
            _ => Err("Unknown mode code"),
        }
    }
}

/// LoRa spreading factor, set and reported through `@SF`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
#[repr(u8)]
pub enum SpreadFactor {
    Chips128 = 0,
    Chips256 = 1,
    Chips512 = 2,
    Chips1024 = 3,
    Chips2048 = 4,
    Chips4096 = 5,
}

impl TryFrom<u8> for SpreadFactor {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SpreadFactor::Chips128),
            1 => Ok(SpreadFactor::Chips256),
            2 => Ok(SpreadFactor::Chips512),
            3 => Ok(SpreadFactor::Chips1024),
            4 => Ok(SpreadFactor::Chips2048),
            5 => Ok(SpreadFactor::Chips4096),
            _ => Err("Unknown spreading factor code"),
        }
    }
}

/// Transmission outcome codes carried in `*IR=` frames.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
#[repr(u8)]
pub enum InfoResponse {
    /// The modem could not transmit.
    NoTransmission = 1,
    /// Other transmitters occupy the channel.
    ChannelBusy = 2,
    /// Transmission complete.
    Complete = 3,
}

impl TryFrom<u8> for InfoResponse {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InfoResponse::NoTransmission),
            2 => Ok(InfoResponse::ChannelBusy),
            3 => Ok(InfoResponse::Complete),
            _ => Err("Unknown information response code"),
        }
    }
}

/// Notifications delivered through the event sink, always synchronously
/// from inside [`Modem::tick`] or a blocking call.
#[derive(PartialEq)]
pub enum Event<'a> {
    /// A radio packet arrived (`*DR=` telegram). The slice borrows the
    /// driver's internal buffer and is only valid inside the sink call;
    /// the same payload stays readable through [`Modem::packet`].
    PacketReceived(&'a [u8]),
    /// Completion of [`Modem::serial_number_async`].
    SerialNumber(Result<u32, Error>),
    /// Completion of [`Modem::rssi_current_channel_async`].
    CurrentChannelRssi(Result<i16, Error>),
    /// Outcome of a [`Modem::transmit_nowait`] transmission.
    TransmitInfo(Result<InfoResponse, Error>),
    /// Response to [`Modem::send_raw_command_async`], CRLF stripped.
    RawResponse(&'a [u8]),
}

#[cfg(feature = "std")]
impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PacketReceived(data) => write!(f, "PacketReceived {{ data: {:02x?} }}", data),
            Event::SerialNumber(result) => write!(f, "SerialNumber({:?})", result),
            Event::CurrentChannelRssi(result) => write!(f, "CurrentChannelRssi({:?})", result),
            Event::TransmitInfo(result) => write!(f, "TransmitInfo({:?})", result),
            Event::RawResponse(data) => write!(f, "RawResponse {{ data: {:02x?} }}", data),
        }
    }
}

/// What kind of answer an in-flight asynchronous request still owes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Idle,
    RawResponse,
    SerialNumber,
    CurrentChannelRssi,
    TransmitInfo,
}

/// How a blocking wait ended without a response.
#[derive(Clone, Copy, PartialEq, Eq)]
enum WaitFailure {
    Timeout,
    Corrupt,
}

pub struct Modem<IO, CLK, SINK> {
    io: IO,
    clock: CLK,
    parser: Parser,
    pending: Expectation,
    /// Mode confirmed by the modem, read by [`Modem::transmit`] to pick the
    /// information response window.
    mode: Mode,
    sink: Option<SINK>,
}

impl<IO, CLK> Modem<IO, CLK, fn(Event<'_>)>
where
    IO: SerialIo,
    CLK: Clock,
{
    /// Creates a driver without an event sink; asynchronous completions and
    /// packet notifications are dropped (received packets remain available
    /// through [`Modem::packet`]).
    pub fn new(io: IO, clock: CLK) -> Self {
        Modem {
            io,
            clock,
            parser: Parser::new(),
            pending: Expectation::Idle,
            mode: Mode::LoRaCmd,
            sink: None,
        }
    }
}

impl<IO, CLK, SINK> Modem<IO, CLK, SINK>
where
    IO: SerialIo,
    CLK: Clock,
    SINK: FnMut(Event<'_>),
{
    pub fn with_event_sink(io: IO, clock: CLK, sink: SINK) -> Self {
        Modem {
            io,
            clock,
            parser: Parser::new(),
            pending: Expectation::Idle,
            mode: Mode::LoRaCmd,
            sink: Some(sink),
        }
    }

    pub fn set_event_sink(&mut self, sink: SINK) {
        self.sink = Some(sink);
    }

    pub fn clear_event_sink(&mut self) {
        self.sink = None;
    }

    /// Probes the modem and caches its operating mode. Until this (or a
    /// successful [`Self::set_mode`]) runs, [`Self::transmit`] assumes LoRa
    /// command mode and uses the long outcome window.
    pub fn init(&mut self) -> Result<Mode, Error> {
        self.parser.reset();
        self.pending = Expectation::Idle;
        let mode = self.mode()?;
        self.mode = mode;
        Ok(mode)
    }

    /// Advances the receive parser once and delivers whatever completed:
    /// inbound packets and answers to asynchronous requests. Call this
    /// regularly whenever no blocking call is in progress.
    pub fn tick(&mut self) {
        match self.parser.poll(&mut self.io) {
            Poll::Response => self.dispatch_response(),
            Poll::Packet => {
                if let (Some(sink), Some(payload)) = (self.sink.as_mut(), self.parser.packet()) {
                    sink(Event::PacketReceived(payload));
                }
            }
            Poll::Pending | Poll::Garbage | Poll::Overflow => {}
        }
    }

    /// Current frequency channel (`@CH`).
    pub fn channel(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"CH")
    }

    /// Sets the frequency channel (`@CH`), 0x07 to 0x2E.
    pub fn set_channel(&mut self, channel: u8, persist: bool) -> Result<(), Error> {
        if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&channel) {
            return Err(Error::InvalidArg);
        }
        self.write_byte_value(*b"CH", channel, persist)
    }

    /// Current operating mode (`@MO`). Does not touch the cached mode.
    pub fn mode(&mut self) -> Result<Mode, Error> {
        let code = self.read_byte_value(*b"MO")?;
        Mode::try_from(code).map_err(|_| Error::Fail)
    }

    /// Switches the operating mode (`@MO`) and caches it on success. The
    /// binary modes are refused; this driver only speaks the command
    /// protocol.
    pub fn set_mode(&mut self, mode: Mode, persist: bool) -> Result<(), Error> {
        if mode == Mode::FskBin || mode == Mode::LoRaBin {
            return Err(Error::InvalidArg);
        }
        self.write_byte_value(*b"MO", mode as u8, persist)?;
        self.mode = mode;
        // the response is followed by a banner line ("LORA MODE")
        self.io.skip_line(DEFAULT_TIMEOUT_MS);
        Ok(())
    }

    /// Current LoRa spreading factor (`@SF`).
    pub fn spread_factor(&mut self) -> Result<SpreadFactor, Error> {
        let code = self.read_byte_value(*b"SF")?;
        SpreadFactor::try_from(code).map_err(|_| Error::Fail)
    }

    /// Sets the LoRa spreading factor (`@SF`).
    pub fn set_spread_factor(&mut self, sf: SpreadFactor, persist: bool) -> Result<(), Error> {
        self.write_byte_value(*b"SF", sf as u8, persist)
    }

    /// Equipment ID of this modem (`@EI`).
    pub fn equipment_id(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"EI")
    }

    pub fn set_equipment_id(&mut self, id: u8, persist: bool) -> Result<(), Error> {
        self.write_byte_value(*b"EI", id, persist)
    }

    /// Destination ID transmissions are addressed to (`@DI`); 0x00 is
    /// broadcast.
    pub fn destination_id(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"DI")
    }

    pub fn set_destination_id(&mut self, id: u8, persist: bool) -> Result<(), Error> {
        self.write_byte_value(*b"DI", id, persist)
    }

    /// Group ID (`@GI`).
    pub fn group_id(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"GI")
    }

    pub fn set_group_id(&mut self, id: u8, persist: bool) -> Result<(), Error> {
        self.write_byte_value(*b"GI", id, persist)
    }

    /// Carrier sense RSSI output setting (`@CI`), 0x00 off / 0x01 on.
    pub fn carrier_sense_rssi_output(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"CI")
    }

    pub fn set_carrier_sense_rssi_output(&mut self, setting: u8, persist: bool) -> Result<(), Error> {
        self.write_byte_value(*b"CI", setting, persist)
    }

    /// User ID (`@UI`), a 16-bit value.
    pub fn user_id(&mut self) -> Result<u16, Error> {
        self.ensure_idle()?;
        let query = query_frame(*b"UI");
        self.send(&query);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        value::hex_word(
            self.parser.response(),
            value::HEX_WORD_FRAME_LEN,
            &response_prefix(*b"UI"),
        )
    }

    /// RSSI of the last successful reception (`@RS`), in dBm.
    pub fn rssi_last_rx(&mut self) -> Result<i16, Error> {
        self.read_dbm_value(*b"RS")
    }

    /// Noise floor currently seen on the configured channel (`@RA`), in dBm.
    pub fn rssi_current_channel(&mut self) -> Result<i16, Error> {
        self.read_dbm_value(*b"RA")
    }

    /// Serial number of the modem (`@SN`).
    pub fn serial_number(&mut self) -> Result<u32, Error> {
        self.ensure_idle()?;
        let query = query_frame(*b"SN");
        self.send(&query);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        value::serial_number(
            self.parser.response(),
            value::SERIAL_NUMBER_FRAME_LEN,
            &response_prefix(*b"SN"),
        )
    }

    /// UART baud rate code (`@BR`), e.g. 0x19 for 19200 BPS.
    pub fn baud_rate(&mut self) -> Result<u8, Error> {
        self.read_byte_value(*b"BR")
    }

    /// Sets the UART baud rate (`@BR`) from a BPS value.
    pub fn set_baud_rate(&mut self, baud_rate: u32, persist: bool) -> Result<(), Error> {
        let code = match baud_rate {
            1200 => 0x12,
            2400 => 0x24,
            4800 => 0x48,
            9600 => 0x96,
            19200 => 0x19,
            _ => return Err(Error::InvalidArg),
        };
        self.write_byte_value(*b"BR", code, persist)
    }

    /// Restores factory settings (`@IZ`).
    pub fn factory_reset(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        let query = query_frame(*b"IZ");
        self.send(&query);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        if self.parser.response() != WRITE_ACK_FRAME {
            return Err(Error::Fail);
        }
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        // a rejecting *IZ=NG is a known wire value; it is not matched here
        // and fails like any other unexpected frame
        if self.parser.response() != FACTORY_RESET_OK_FRAME {
            return Err(Error::Fail);
        }
        // the reset is followed by a mode banner line
        self.io.skip_line(DEFAULT_TIMEOUT_MS);
        Ok(())
    }

    /// Sends a fully formed command line (including CRLF) and copies the
    /// response frame into `response`, returning its length.
    pub fn send_raw_command(
        &mut self,
        command: &[u8],
        response: &mut [u8],
        timeout_ms: u32,
    ) -> Result<usize, Error> {
        if command.is_empty() || response.is_empty() {
            return Err(Error::InvalidArg);
        }
        self.ensure_idle()?;
        self.send(command);
        self.await_response(timeout_ms)?;
        let frame = self.parser.response();
        if frame.len() > response.len() {
            return Err(Error::BufferTooSmall);
        }
        response[..frame.len()].copy_from_slice(frame);
        Ok(frame.len())
    }

    /// Sends a fully formed command line and returns immediately; the
    /// response arrives as [`Event::RawResponse`] from [`Self::tick`].
    pub fn send_raw_command_async(&mut self, command: &[u8]) -> Result<(), Error> {
        if command.is_empty() {
            return Err(Error::InvalidArg);
        }
        self.ensure_idle()?;
        self.send(command);
        self.pending = Expectation::RawResponse;
        Ok(())
    }

    /// Transmits `payload` and blocks until the modem reports the outcome.
    ///
    /// In LoRa command mode the information response only arrives after the
    /// air time, which can take seconds. In FSK command mode a successful
    /// transmission produces no information response at all, so silence
    /// within the short window counts as success.
    pub fn transmit(&mut self, payload: &[u8]) -> Result<(), Error> {
        self.ensure_idle()?;
        self.start_transmission(payload)?;
        match self.mode {
            Mode::LoRaCmd => {
                self.await_response(LORA_INFO_TIMEOUT_MS)?;
                match decode_info_response(self.parser.response())? {
                    InfoResponse::NoTransmission | InfoResponse::ChannelBusy => {
                        Err(Error::FailLbt)
                    }
                    InfoResponse::Complete => Ok(()),
                }
            }
            _ => match self.wait_response(FSK_INFO_TIMEOUT_MS) {
                Err(WaitFailure::Timeout) => Ok(()),
                Err(WaitFailure::Corrupt) => Err(Error::Fail),
                Ok(()) => match decode_info_response(self.parser.response())? {
                    InfoResponse::NoTransmission => Err(Error::FailLbt),
                    _ => Ok(()),
                },
            },
        }
    }

    /// Like [`Self::transmit`] but returns right after the length echo; the
    /// outcome arrives later as [`Event::TransmitInfo`] from [`Self::tick`].
    pub fn transmit_nowait(&mut self, payload: &[u8]) -> Result<(), Error> {
        if payload.is_empty() {
            return Err(Error::InvalidArg);
        }
        self.ensure_idle()?;
        self.start_transmission(payload)?;
        self.pending = Expectation::TransmitInfo;
        Ok(())
    }

    /// Requests the serial number; the answer arrives as
    /// [`Event::SerialNumber`] from [`Self::tick`].
    pub fn serial_number_async(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        let query = query_frame(*b"SN");
        self.send(&query);
        self.pending = Expectation::SerialNumber;
        Ok(())
    }

    /// Requests the channel noise floor; the answer arrives as
    /// [`Event::CurrentChannelRssi`] from [`Self::tick`].
    pub fn rssi_current_channel_async(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;
        let query = query_frame(*b"RA");
        self.send(&query);
        self.pending = Expectation::CurrentChannelRssi;
        Ok(())
    }

    /// Whether a received radio packet is waiting to be picked up.
    pub fn has_packet(&self) -> bool {
        self.parser.packet_present()
    }

    /// The most recent received radio packet, without consuming it. Stays
    /// available until deleted or replaced by the next reception.
    pub fn packet(&self) -> Option<&[u8]> {
        self.parser.packet()
    }

    /// Frees the packet slot for the next reception.
    pub fn delete_packet(&mut self) {
        self.parser.delete_packet();
    }

    fn ensure_idle(&self) -> Result<(), Error> {
        if self.pending != Expectation::Idle {
            return Err(Error::Busy);
        }
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) {
        #[cfg(feature = "defmt-impl")]
        defmt::trace!("tx {=[u8]:a}", bytes);
        self.io.write(bytes);
    }

    fn read_byte_value(&mut self, code: [u8; 2]) -> Result<u8, Error> {
        self.ensure_idle()?;
        let query = query_frame(code);
        self.send(&query);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        value::hex_byte(
            self.parser.response(),
            value::HEX_BYTE_FRAME_LEN,
            &response_prefix(code),
        )
    }

    fn write_byte_value(&mut self, code: [u8; 2], value: u8, persist: bool) -> Result<(), Error> {
        self.ensure_idle()?;
        let command = set_byte_frame(code, value, persist);
        self.send(&command);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        if persist {
            // writing to NVM is acknowledged before the value echo
            if self.parser.response() != WRITE_ACK_FRAME {
                return Err(Error::Fail);
            }
            self.await_response(DEFAULT_TIMEOUT_MS)?;
        }
        let echoed = value::hex_byte(
            self.parser.response(),
            value::HEX_BYTE_FRAME_LEN,
            &response_prefix(code),
        )?;
        if echoed != value {
            return Err(Error::Fail);
        }
        Ok(())
    }

    fn read_dbm_value(&mut self, code: [u8; 2]) -> Result<i16, Error> {
        self.ensure_idle()?;
        let query = query_frame(code);
        self.send(&query);
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        value::decimal_dbm(self.parser.response(), &response_prefix(code))
    }

    /// Writes the `@DT` header, the payload and the terminator, then checks
    /// the length echo.
    fn start_transmission(&mut self, payload: &[u8]) -> Result<(), Error> {
        if payload.len() > crate::MAX_RADIO_PAYLOAD_LENGTH {
            return Err(Error::InvalidArg);
        }
        let mut header = Vec::<u8, 5>::new();
        header.extend_from_slice(b"@DT").unwrap();
        let mut digits = [0u8; 2];
        base16::encode_config_slice(&[payload.len() as u8], base16::EncodeUpper, &mut digits);
        header.extend_from_slice(&digits).unwrap();
        self.send(&header);
        self.send(payload);
        self.send(b"\r\n");
        self.await_response(DEFAULT_TIMEOUT_MS)?;
        let echoed = value::hex_byte(
            self.parser.response(),
            value::HEX_BYTE_FRAME_LEN,
            &response_prefix(*b"DT"),
        )?;
        if echoed as usize != payload.len() {
            return Err(Error::Fail);
        }
        Ok(())
    }

    /// Polls the parser until a response completes or `timeout_ms` passes.
    /// Packets arriving meanwhile go straight to the event sink; they
    /// neither satisfy nor extend the wait.
    fn wait_response(&mut self, timeout_ms: u32) -> Result<(), WaitFailure> {
        let started = self.clock.millis();
        loop {
            match self.parser.poll(&mut self.io) {
                Poll::Pending => {}
                Poll::Response => return Ok(()),
                Poll::Packet => {
                    if let (Some(sink), Some(payload)) =
                        (self.sink.as_mut(), self.parser.packet())
                    {
                        sink(Event::PacketReceived(payload));
                    }
                }
                Poll::Garbage | Poll::Overflow => return Err(WaitFailure::Corrupt),
            }
            if self.clock.millis().wrapping_sub(started) > timeout_ms {
                // whatever was being captured is abandoned; its tail bytes
                // will be parsed as the start of a new frame
                self.parser.abort();
                return Err(WaitFailure::Timeout);
            }
        }
    }

    fn await_response(&mut self, timeout_ms: u32) -> Result<(), Error> {
        self.wait_response(timeout_ms).map_err(|_| Error::Fail)
    }

    /// Decodes a completed response according to the pending expectation
    /// and emits the result, exactly once, through the event sink.
    fn dispatch_response(&mut self) {
        let expectation = core::mem::replace(&mut self.pending, Expectation::Idle);
        if expectation == Expectation::Idle {
            // nobody is waiting for this frame; most likely the late answer
            // to a synchronous call that already timed out
            #[cfg(feature = "defmt-impl")]
            defmt::warn!("response frame without a consumer");
            return;
        }
        let sink = match self.sink.as_mut() {
            Some(sink) => sink,
            None => return,
        };
        let frame = self.parser.response();
        match expectation {
            Expectation::Idle => (),
            Expectation::RawResponse => sink(Event::RawResponse(frame)),
            Expectation::SerialNumber => sink(Event::SerialNumber(value::serial_number(
                frame,
                value::SERIAL_NUMBER_FRAME_LEN,
                &response_prefix(*b"SN"),
            ))),
            Expectation::CurrentChannelRssi => sink(Event::CurrentChannelRssi(
                value::decimal_dbm(frame, &response_prefix(*b"RA")),
            )),
            Expectation::TransmitInfo => {
                sink(Event::TransmitInfo(decode_info_response(frame)))
            }
        }
    }
}

fn decode_info_response(frame: &[u8]) -> Result<InfoResponse, Error> {
    let code = value::hex_byte(frame, value::HEX_BYTE_FRAME_LEN, &response_prefix(*b"IR"))?;
    InfoResponse::try_from(code).map_err(|_| Error::Fail)
}

/// `@XX\r\n`
fn query_frame(code: [u8; 2]) -> Vec<u8, 8> {
    let mut frame = Vec::new();
    frame.push(b'@').unwrap();
    frame.extend_from_slice(&code).unwrap();
    frame.extend_from_slice(b"\r\n").unwrap();
    frame
}

/// `@XX<hex value>[/W]\r\n`
fn set_byte_frame(code: [u8; 2], value: u8, persist: bool) -> Vec<u8, 12> {
    let mut frame = Vec::new();
    frame.push(b'@').unwrap();
    frame.extend_from_slice(&code).unwrap();
    let mut digits = [0u8; 2];
    base16::encode_config_slice(&[value], base16::EncodeUpper, &mut digits);
    frame.extend_from_slice(&digits).unwrap();
    if persist {
        frame.extend_from_slice(b"/W").unwrap();
    }
    frame.extend_from_slice(b"\r\n").unwrap();
    frame
}

/// `*XX=`
fn response_prefix(code: [u8; 2]) -> [u8; 4] {
    [b'*', code[0], code[1], b'=']
}
