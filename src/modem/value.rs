//! Decoders for the value part of captured response frames.
//!
//! All of them are pure functions over the captured byte slice: they check
//! the frame length and the `*XX=` prefix first and only then interpret the
//! value bytes. Every typed accessor of the driver is a thin wrapper around
//! one of these.

use super::Error;

/// Length of a response carrying one hex byte, e.g. `*CH=0A`.
pub(crate) const HEX_BYTE_FRAME_LEN: usize = 6;
/// Length of a response carrying one hex word, e.g. `*UI=ABCD`.
pub(crate) const HEX_WORD_FRAME_LEN: usize = 8;
/// Length bounds of an RSSI response, `*RS=-12dBm` to `*RS=-123dBm`.
pub(crate) const DBM_FRAME_MIN_LEN: usize = 10;
pub(crate) const DBM_FRAME_MAX_LEN: usize = 11;
/// Length of a serial number response, e.g. `*SN=S1234567`.
pub(crate) const SERIAL_NUMBER_FRAME_LEN: usize = 12;

/// Decodes the two hex digits following `prefix` into a byte.
pub(crate) fn hex_byte(frame: &[u8], expected_len: usize, prefix: &[u8]) -> Result<u8, Error> {
    if frame.len() != expected_len || !frame.starts_with(prefix) {
        return Err(Error::Fail);
    }
    let mut value = [0u8; 1];
    base16::decode_slice(&frame[prefix.len()..prefix.len() + 2], &mut value)
        .map_err(|_| Error::Fail)?;
    Ok(value[0])
}

/// Decodes the four hex digits following `prefix` into a 16-bit value.
pub(crate) fn hex_word(frame: &[u8], expected_len: usize, prefix: &[u8]) -> Result<u16, Error> {
    if frame.len() != expected_len || !frame.starts_with(prefix) {
        return Err(Error::Fail);
    }
    let mut value = [0u8; 2];
    base16::decode_slice(&frame[prefix.len()..prefix.len() + 4], &mut value)
        .map_err(|_| Error::Fail)?;
    Ok(u16::from_be_bytes(value))
}

/// Parses a signed decimal with a trailing `dBm` suffix, e.g. `*RA=-103dBm`.
/// The number must fill the frame exactly between prefix and suffix.
pub(crate) fn decimal_dbm(frame: &[u8], prefix: &[u8]) -> Result<i16, Error> {
    if frame.len() < DBM_FRAME_MIN_LEN
        || frame.len() > DBM_FRAME_MAX_LEN
        || !frame.starts_with(prefix)
    {
        return Err(Error::Fail);
    }
    if !frame.ends_with(b"dBm") {
        return Err(Error::Fail);
    }

    let number = &frame[prefix.len()..frame.len() - 3];
    let (negative, digits) = match number.first() {
        Some(b'-') => (true, &number[1..]),
        _ => (false, number),
    };
    if digits.is_empty() {
        return Err(Error::Fail);
    }

    let mut value: i16 = 0;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return Err(Error::Fail);
        }
        value = value * 10 + (digit - b'0') as i16;
    }
    Ok(if negative { -value } else { value })
}

/// Parses the decimal serial number following `prefix`. Serial numbers come
/// either as eight digits (`*SN=00000001`) or as a single letter followed by
/// seven digits (`*SN=S0000001`).
pub(crate) fn serial_number(frame: &[u8], expected_len: usize, prefix: &[u8]) -> Result<u32, Error> {
    if frame.len() != expected_len || !frame.starts_with(prefix) {
        return Err(Error::Fail);
    }

    let mut digits = &frame[prefix.len()..];
    if !digits[0].is_ascii_digit() {
        digits = &digits[1..];
    }

    let mut value: u32 = 0;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return Err(Error::Fail);
        }
        value = value * 10 + (digit - b'0') as u32;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_byte_round_trip() {
        for byte in 0..=255u8 {
            let mut digits = [0u8; 2];
            base16::encode_config_slice(&[byte], base16::EncodeUpper, &mut digits);
            let mut frame = b"*CH=".to_vec();
            frame.extend_from_slice(&digits);
            assert_eq!(hex_byte(&frame, HEX_BYTE_FRAME_LEN, b"*CH="), Ok(byte));
        }
    }

    #[test]
    fn test_hex_byte_accepts_lowercase() {
        assert_eq!(hex_byte(b"*CH=0a", HEX_BYTE_FRAME_LEN, b"*CH="), Ok(0x0A));
    }

    #[test]
    fn test_hex_byte_rejects_wrong_prefix_and_length() {
        assert_eq!(
            hex_byte(b"*MO=0A", HEX_BYTE_FRAME_LEN, b"*CH="),
            Err(Error::Fail)
        );
        assert_eq!(
            hex_byte(b"*CH=0A0", HEX_BYTE_FRAME_LEN, b"*CH="),
            Err(Error::Fail)
        );
        assert_eq!(
            hex_byte(b"*CH=0G", HEX_BYTE_FRAME_LEN, b"*CH="),
            Err(Error::Fail)
        );
    }

    #[test]
    fn test_hex_word() {
        assert_eq!(hex_word(b"*UI=ABCD", HEX_WORD_FRAME_LEN, b"*UI="), Ok(0xABCD));
        assert_eq!(hex_word(b"*UI=0000", HEX_WORD_FRAME_LEN, b"*UI="), Ok(0));
        assert_eq!(
            hex_word(b"*UI=ABC", HEX_WORD_FRAME_LEN, b"*UI="),
            Err(Error::Fail)
        );
    }

    #[test]
    fn test_decimal_dbm_two_and_three_digits() {
        assert_eq!(decimal_dbm(b"*RS=-12dBm", b"*RS="), Ok(-12));
        assert_eq!(decimal_dbm(b"*RS=-123dBm", b"*RS="), Ok(-123));
    }

    #[test]
    fn test_decimal_dbm_bad_suffix() {
        assert_eq!(decimal_dbm(b"*RS=-12XBm", b"*RS="), Err(Error::Fail));
    }

    #[test]
    fn test_decimal_dbm_length_out_of_range() {
        // a four digit magnitude does not fit the frame bounds
        assert_eq!(decimal_dbm(b"*RS=-1234dBm", b"*RS="), Err(Error::Fail));
        assert_eq!(decimal_dbm(b"*RS=-1dBm", b"*RS="), Err(Error::Fail));
    }

    #[test]
    fn test_decimal_dbm_digit_run_must_reach_suffix() {
        assert_eq!(decimal_dbm(b"*RS=-1_3dBm", b"*RS="), Err(Error::Fail));
    }

    #[test]
    fn test_serial_number_plain_digits() {
        assert_eq!(
            serial_number(b"*SN=00012345", SERIAL_NUMBER_FRAME_LEN, b"*SN="),
            Ok(12345)
        );
    }

    #[test]
    fn test_serial_number_letter_prefix() {
        assert_eq!(
            serial_number(b"*SN=S1234567", SERIAL_NUMBER_FRAME_LEN, b"*SN="),
            Ok(1234567)
        );
    }

    #[test]
    fn test_serial_number_rejects_non_digit_run() {
        assert_eq!(
            serial_number(b"*SN=S12E4567", SERIAL_NUMBER_FRAME_LEN, b"*SN="),
            Err(Error::Fail)
        );
        assert_eq!(
            serial_number(b"*SN=0001234", SERIAL_NUMBER_FRAME_LEN, b"*SN="),
            Err(Error::Fail)
        );
    }
}
