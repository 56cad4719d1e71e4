use std::env;
use std::io::Read as _;
use std::time::{Duration, Instant};

use mlr_serial::modem::{Clock, Modem, SerialIo};

const PORT_NAME: &'static str = "/dev/ttyUSB0";

struct PortIo {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialIo for PortIo {
    fn available(&mut self) -> bool {
        self.port.bytes_to_read().map(|n| n > 0).unwrap_or(false)
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        use std::io::Write as _;
        let _ = self.port.write_all(bytes);
    }

    fn skip_line(&mut self, timeout_ms: u32) {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms as u64);
        while Instant::now() < deadline {
            match self.read_byte() {
                Some(b'\n') => break,
                Some(_) => continue,
                None => std::thread::sleep(Duration::from_millis(1)),
            }
        }
    }
}

struct SystemClock {
    started: Instant,
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        self.started.elapsed().as_millis() as u32
    }
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Provide the message to transmit as the only argument");
        std::process::exit(1);
    }
    let message = args.pop().expect("No message argument");

    match serialport::new(PORT_NAME, 19_200)
        .timeout(Duration::from_millis(10))
        .open()
    {
        Ok(port) => {
            let clock = SystemClock {
                started: Instant::now(),
            };
            let mut modem = Modem::new(PortIo { port }, clock);

            let mode = modem.init().expect("could not probe modem mode");
            println!("modem mode = {:?}", mode);

            match modem.transmit(message.as_bytes()) {
                Ok(()) => println!("transmission complete"),
                Err(e) => eprintln!("transmission failed: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Failed to open \"{}\". Error: {}", PORT_NAME, e);
            ::std::process::exit(1);
        }
    }
}
