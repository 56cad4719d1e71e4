//! Collaborator traits the driver is generic over.
//!
//! The driver never touches a serial port or a timer directly. A host
//! provides both: [`SerialIo`] is the byte pipe to the modem UART and
//! [`Clock`] is a free-running millisecond counter used for response
//! deadlines. On embedded targets these map straight onto the UART
//! peripheral and the systick counter; on a PC they wrap `serialport` and
//! `std::time::Instant` (see the demos).

/// Non-blocking byte transport to the modem UART.
pub trait SerialIo {
    /// Returns whether at least one received byte is ready to be read.
    fn available(&mut self) -> bool;

    /// Reads a single received byte, `None` when nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Reads up to `buf.len()` pending bytes, returning how many were
    /// copied. Must not block waiting for more.
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        while count < buf.len() {
            match self.read_byte() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    /// Writes all of `bytes` to the modem.
    fn write(&mut self, bytes: &[u8]);

    /// Discards received bytes up to and including the next LF, giving up
    /// after `timeout_ms`. Used to drop the free-form banner lines
    /// (`LORA MODE`) the modem prints after a mode change or reset.
    fn skip_line(&mut self, timeout_ms: u32);
}

/// Free-running millisecond counter.
///
/// The absolute value carries no meaning; deadlines are computed with
/// wrapping subtraction, so a u32 wrap every ~49 days is fine.
pub trait Clock {
    fn millis(&self) -> u32;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport and clock doubles shared by the driver tests.

    use super::{Clock, SerialIo};
    use core::cell::Cell;
    use std::collections::VecDeque;

    /// Serial double: bytes queued by a test come back out of `read_byte`,
    /// everything the driver writes is captured in `tx`.
    pub(crate) struct MockPort {
        pub rx: VecDeque<u8>,
        pub tx: Vec<u8>,
        pub skipped_lines: usize,
    }

    impl MockPort {
        pub fn new() -> Self {
            MockPort {
                rx: VecDeque::new(),
                tx: Vec::new(),
                skipped_lines: 0,
            }
        }

        pub fn queue(&mut self, bytes: &[u8]) {
            self.rx.extend(bytes);
        }
    }

    impl SerialIo for MockPort {
        fn available(&mut self) -> bool {
            !self.rx.is_empty()
        }

        fn read_byte(&mut self) -> Option<u8> {
            self.rx.pop_front()
        }

        fn write(&mut self, bytes: &[u8]) {
            self.tx.extend_from_slice(bytes);
        }

        fn skip_line(&mut self, _timeout_ms: u32) {
            while let Some(byte) = self.rx.pop_front() {
                if byte == b'\n' {
                    break;
                }
            }
            self.skipped_lines += 1;
        }
    }

    /// Deterministic clock: every `millis()` call advances time by `step`,
    /// so deadline loops terminate without real sleeping.
    pub(crate) struct TestClock {
        now: Cell<u32>,
        step: u32,
    }

    impl TestClock {
        pub fn new() -> Self {
            TestClock {
                now: Cell::new(0),
                step: 1,
            }
        }
    }

    impl Clock for TestClock {
        fn millis(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(self.step));
            now
        }
    }

    #[test]
    fn test_default_bulk_read() {
        let mut port = MockPort::new();
        port.queue(b"abcdef");
        let mut buf = [0u8; 4];
        assert_eq!(SerialIo::read(&mut port, &mut buf), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(SerialIo::read(&mut port, &mut buf), 2);
        assert_eq!(&buf[..2], b"ef");
    }
}
