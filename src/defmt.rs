use defmt::Formatter;

use crate::modem::{Error, Event, InfoResponse, Mode, SpreadFactor};

impl defmt::Format for Error {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            Error::Busy => defmt::write!(fmt, "Error::Busy"),
            Error::InvalidArg => defmt::write!(fmt, "Error::InvalidArg"),
            Error::Fail => defmt::write!(fmt, "Error::Fail"),
            Error::FailLbt => defmt::write!(fmt, "Error::FailLbt"),
            Error::BufferTooSmall => defmt::write!(fmt, "Error::BufferTooSmall"),
        }
    }
}

impl defmt::Format for Mode {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            Mode::FskBin => defmt::write!(fmt, "Mode::FskBin"),
            Mode::FskCmd => defmt::write!(fmt, "Mode::FskCmd"),
            Mode::LoRaBin => defmt::write!(fmt, "Mode::LoRaBin"),
            Mode::LoRaCmd => defmt::write!(fmt, "Mode::LoRaCmd"),
        }
    }
}

impl defmt::Format for SpreadFactor {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            SpreadFactor::Chips128 => defmt::write!(fmt, "SpreadFactor::Chips128"),
            SpreadFactor::Chips256 => defmt::write!(fmt, "SpreadFactor::Chips256"),
            SpreadFactor::Chips512 => defmt::write!(fmt, "SpreadFactor::Chips512"),
            SpreadFactor::Chips1024 => defmt::write!(fmt, "SpreadFactor::Chips1024"),
            SpreadFactor::Chips2048 => defmt::write!(fmt, "SpreadFactor::Chips2048"),
            SpreadFactor::Chips4096 => defmt::write!(fmt, "SpreadFactor::Chips4096"),
        }
    }
}

impl defmt::Format for InfoResponse {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            InfoResponse::NoTransmission => defmt::write!(fmt, "InfoResponse::NoTransmission"),
            InfoResponse::ChannelBusy => defmt::write!(fmt, "InfoResponse::ChannelBusy"),
            InfoResponse::Complete => defmt::write!(fmt, "InfoResponse::Complete"),
        }
    }
}

impl defmt::Format for Event<'_> {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            Event::PacketReceived(data) => {
                defmt::write!(fmt, "Event::PacketReceived({=[u8]:02x})", data)
            }
            Event::SerialNumber(Ok(sn)) => defmt::write!(fmt, "Event::SerialNumber({=u32})", sn),
            Event::SerialNumber(Err(e)) => defmt::write!(fmt, "Event::SerialNumber({})", e),
            Event::CurrentChannelRssi(Ok(rssi)) => {
                defmt::write!(fmt, "Event::CurrentChannelRssi({=i16}dBm)", rssi)
            }
            Event::CurrentChannelRssi(Err(e)) => {
                defmt::write!(fmt, "Event::CurrentChannelRssi({})", e)
            }
            Event::TransmitInfo(Ok(info)) => defmt::write!(fmt, "Event::TransmitInfo({})", info),
            Event::TransmitInfo(Err(e)) => defmt::write!(fmt, "Event::TransmitInfo({})", e),
            Event::RawResponse(data) => {
                defmt::write!(fmt, "Event::RawResponse({=[u8]:02x})", data)
            }
        }
    }
}
