use crate::error::VmError;
use crate::state::State;
use byteorder::{BigEndian, ReadBytesExt};
use std::{fs, io::BufReader};

fn read_rom(filename: &str) -> Result<Vec<u16>, std::io::Error> {
    let mut reader = BufReader::new(fs::File::open(filename)?);
    let mut buffer = Vec::new();

    loop {
        match reader.read_u16::<BigEndian>() {
            Ok(value) => {
                buffer.push(value);
            }
            Err(e) => {
                return if e.kind() == std::io::ErrorKind::UnexpectedEof {
                    Ok(buffer)
                } else {
                    Err(e)
                };
            }
        }
    }
}

/// Loads an image file into `state`. The first word is the origin; every
/// word after it is written starting at that address, in order.
pub fn load_file(filename: String, mut state: State) -> Result<State, VmError> {
    let words = read_rom(&filename).map_err(|source| VmError::ImageLoad {
        path: filename,
        source,
    })?;

    if let Some((&origin, words)) = words.split_first() {
        state.load_words(origin, words);
    }

    Ok(state)
}
