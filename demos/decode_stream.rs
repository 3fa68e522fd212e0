use std::io::{self, BufRead};

use nmea0183_decoder::{ChecksumMode, SentenceDecoder};

fn main() -> io::Result<()> {
    let mut decoder = SentenceDecoder::new();
    if std::env::args().skip(1).any(|arg| arg == "--verify-checksum") {
        decoder = decoder.checksum_mode(ChecksumMode::Optional);
    }

    for line in io::stdin().lock().split(b'\n') {
        let line = line?;

        match decoder.decode(&line) {
            Ok(Some(sentence)) => println!("{sentence}"),
            Ok(None) => {}
            Err(e) => println!("Error decoding data: {e}"),
        }
    }

    Ok(())
}
