//! The per-instrument track records that make up a pattern

use crate::serde::{read_byte, read_exact_or_eof};
use std::{
    fmt,
    io::{self, ErrorKind, Read},
};
use thiserror::Error;

/// A single instrument's trigger pattern
///
/// Track records are variable-length: a numeric index, a length-prefixed
/// instrument name and one byte per sequencer step. All multi-byte fields are
/// little-endian. Unlike the version field, the name is _not_ null-terminated;
/// its length prefix is authoritative and zero bytes are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// The numeric identifier the file assigns to this track
    ///
    /// Indices come straight from the file; they are not guaranteed to be
    /// unique, let alone sequential.
    pub index: u32,

    /// The instrument name
    pub name: String,

    /// Which sequencer steps trigger the instrument
    pub steps: [bool; Self::STEPS],

    /// How many file bytes the record occupied, for the declared-length bookkeeping
    pub(crate) size_in_bytes: u64,
}

impl Track {
    /// The number of steps in every track
    pub const STEPS: usize = 16;

    /// Read the next track record, or `None` when the stream has cleanly run out
    ///
    /// A stream that ends before the first byte of a record is not an error in
    /// itself; whether that is acceptable is up to the caller and its length
    /// bookkeeping. A stream that ends anywhere _inside_ a record is
    /// [`TrackReadError::Truncated`].
    pub fn from_reader<R>(mut reader: R) -> Result<Option<Self>, TrackReadError>
    where
        R: Read,
    {
        let mut index_bytes = [0; 4];
        if !read_exact_or_eof(&mut reader, &mut index_bytes)? {
            return Ok(None);
        }
        let index = u32::from_le_bytes(index_bytes);

        let name_length = read_byte(&mut reader)?;

        let mut name_bytes = vec![0; name_length as usize];
        reader.read_exact(&mut name_bytes)?;
        let name = String::from_utf8_lossy(&name_bytes).into_owned();

        let mut step_bytes = [0; Self::STEPS];
        reader.read_exact(&mut step_bytes)?;

        let mut steps = [false; Self::STEPS];
        for (step, byte) in steps.iter_mut().zip(step_bytes) {
            *step = byte != 0;
        }

        Ok(Some(Self {
            index,
            name,
            steps,
            size_in_bytes: 4 + 1 + name_length as u64 + Self::STEPS as u64,
        }))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}) {}\t", self.index, self.name)?;

        for (step, active) in self.steps.iter().enumerate() {
            if step % 4 == 0 {
                f.write_str("|")?;
            }

            f.write_str(if *active { "x" } else { "-" })?;
        }

        f.write_str("|")
    }
}

/// An error describing what could go wrong reading a [`Track`] from I/O
#[derive(Debug, Error)]
pub enum TrackReadError {
    /// The record began, but the stream ended before its last field
    #[error("The track record was cut short")]
    Truncated,

    /// Any other failure that has to do with I/O
    #[error("Something failed with I/O")]
    Io(#[source] io::Error),
}

impl From<io::Error> for TrackReadError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            ErrorKind::UnexpectedEof => Self::Truncated,
            _ => Self::Io(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn record(index: u32, name: &str, steps: [u8; Track::STEPS]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&index.to_le_bytes());
        bytes.push(name.len() as u8);
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&steps);
        bytes
    }

    #[test]
    fn read() {
        let mut steps = [0; Track::STEPS];
        steps[0] = 1;
        steps[4] = 0xFF;

        let track = Track::from_reader(Cursor::new(record(40, "kick", steps)))
            .expect("could not read the record")
            .expect("expected a record");

        assert_eq!(track.index, 40);
        assert_eq!(track.name, "kick");
        assert!(track.steps[0]);
        assert!(track.steps[4]);
        assert_eq!(track.steps.iter().filter(|active| **active).count(), 2);
        assert_eq!(track.size_in_bytes, 25);
    }

    #[test]
    fn empty_name() {
        let track = Track::from_reader(Cursor::new(record(0, "", [0; Track::STEPS])))
            .expect("could not read the record")
            .expect("expected a record");

        assert_eq!(track.name, "");
        assert_eq!(track.size_in_bytes, 21);
    }

    #[test]
    fn end_of_stream() {
        assert_eq!(Track::from_reader(Cursor::new([])).unwrap(), None);
    }

    #[test]
    fn truncated() {
        let bytes = record(0, "kick", [0; Track::STEPS]);

        let result = Track::from_reader(Cursor::new(&bytes[..10]));
        assert!(matches!(result, Err(TrackReadError::Truncated)));

        // Even a partial index means the record began
        let result = Track::from_reader(Cursor::new(&bytes[..2]));
        assert!(matches!(result, Err(TrackReadError::Truncated)));
    }

    #[test]
    fn display() {
        let mut steps = [0; Track::STEPS];
        for step in steps.iter_mut().step_by(2) {
            *step = 1;
        }

        let track = Track::from_reader(Cursor::new(record(0, "kick", steps)))
            .expect("could not read the record")
            .expect("expected a record");

        assert_eq!(track.to_string(), "(0) kick\t|x-x-|x-x-|x-x-|x-x-|");
    }
}
