//! Decoding `.splice` files into [`Pattern`] values

pub mod track;

pub use track::{Track, TrackReadError};

use crate::{
    serde::{read_f32_le, read_u64_be},
    version::Version,
};
use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

/// A drum pattern, as stored in a `.splice` file
///
/// Every pattern file starts with a fixed signature and header (a declared
/// byte count, the version the file was saved with and the tempo), followed by
/// any number of variable-length [`Track`] records.
///
/// ```no_run
/// # use splice::Pattern;
/// # use std::fs::File;
/// // Decode a pattern from a path on disk
/// let pattern = Pattern::from_file("late-night.splice")?;
///
/// // Or from any open byte source
/// let pattern = Pattern::from_reader(File::open("late-night.splice")?)?;
///
/// print!("{pattern}");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// The hardware version the file was saved with
    pub version: Version,

    /// The tempo in beats per minute
    pub tempo: f32,

    /// The instrument tracks, in on-disk order
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// The signature every pattern file starts with
    pub const MAGIC: [u8; 6] = *b"SPLICE";

    /// The part of the declared byte count taken up by the version and tempo fields
    const FIXED_FIELDS_LEN: u64 = Version::LEN as u64 + 4;

    /// Decode a pattern from an I/O reader
    ///
    /// The declared byte count in the header decides how many track records to
    /// expect; the reader is left positioned at the declared end of the
    /// pattern and any trailing bytes are not consumed.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, PatternReadError>
    where
        R: Read,
    {
        let mut magic = [0; Self::MAGIC.len()];
        reader.read_exact(&mut magic)?;

        if magic != Self::MAGIC {
            return Err(PatternReadError::UnknownFormat);
        }

        // The one big-endian field in the format: how many bytes follow it.
        // That count is authoritative, not the length of the stream, since the
        // records that follow carry no count of their own.
        let declared = read_u64_be(&mut reader).map_err(PatternReadError::CorruptHeader)?;

        let version = {
            let mut bytes = [0; Version::LEN];
            reader
                .read_exact(&mut bytes)
                .map_err(PatternReadError::CorruptHeader)?;

            Version::from_bytes(bytes)
        };

        let tempo = read_f32_le(&mut reader).map_err(PatternReadError::CorruptHeader)?;

        let mut remaining = declared
            .checked_sub(Self::FIXED_FIELDS_LEN)
            .ok_or(PatternReadError::DeclaredLengthTooShort(declared))?;

        // Two separate exits: the declared count reaching zero is success, the
        // stream running out first is not. Files whose last record reaches past
        // the declared count are accepted; the count just ends with the record.
        let mut tracks = Vec::new();
        while remaining > 0 {
            match Track::from_reader(&mut reader)? {
                Some(track) => {
                    remaining = remaining.saturating_sub(track.size_in_bytes);
                    tracks.push(track);
                }
                None => return Err(PatternReadError::MissingDeclaredBytes { remaining }),
            }
        }

        Ok(Self {
            version,
            tempo,
            tracks,
        })
    }

    /// Decode a pattern from a path on disk (.splice)
    pub fn from_file<P>(path: P) -> Result<Self, FromFileError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let pattern = Self::from_reader(file)?;

        Ok(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;

        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }

        Ok(())
    }
}

/// An error describing what could go wrong reading a [`Pattern`] from I/O
#[derive(Debug, Error)]
pub enum PatternReadError {
    /// The stream does not start with the SPLICE signature
    #[error("Unknown file format")]
    UnknownFormat,

    /// A fixed-width header field could not be fully read
    #[error("The header was cut short")]
    CorruptHeader(#[source] io::Error),

    /// The declared byte count does not even cover the version and tempo fields
    #[error("The declared byte count {0} does not cover the header fields")]
    DeclaredLengthTooShort(u64),

    /// The stream ran out while the declared byte count still promised records
    #[error("The stream ended with {remaining} declared bytes still unread")]
    MissingDeclaredBytes {
        /// How many declared bytes the stream failed to supply
        remaining: u64,
    },

    /// Reading a track record failed
    #[error("Reading a track record failed")]
    Track(#[from] TrackReadError),

    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Io(#[from] io::Error),
}

/// Errors that might be returned from [`Pattern::from_file()`]
#[derive(Debug, Error)]
pub enum FromFileError {
    /// Opening the file itself failed
    #[error("Opening the file failed")]
    FileOpen(#[from] io::Error),

    /// Decoding failed
    #[error("Reading the pattern from file failed")]
    Read(#[from] PatternReadError),
}
