//! Primitives for reading the raw fields of the pattern format
//!
//! Every helper returns a freshly owned value; nothing here keeps scratch
//! buffers between reads.

use std::{
    io::{self, ErrorKind, Read},
    slice,
};

pub(crate) fn read_byte<R>(mut reader: R) -> io::Result<u8>
where
    R: Read,
{
    let mut byte = 0;
    reader.read_exact(slice::from_mut(&mut byte))?;
    Ok(byte)
}

pub(crate) fn read_u64_be<R>(mut reader: R) -> io::Result<u64>
where
    R: Read,
{
    let mut bytes = [0; 8];
    reader.read_exact(&mut bytes)?;
    Ok(u64::from_be_bytes(bytes))
}

pub(crate) fn read_f32_le<R>(mut reader: R) -> io::Result<f32>
where
    R: Read,
{
    let mut bytes = [0; 4];
    reader.read_exact(&mut bytes)?;
    Ok(f32::from_le_bytes(bytes))
}

/// Fill `buf` completely, or report that the stream was already exhausted
///
/// Returns `false` when not a single byte was available. A stream that runs
/// out after the first byte produces an [`ErrorKind::UnexpectedEof`] error,
/// just like [`Read::read_exact`] would.
pub(crate) fn read_exact_or_eof<R>(mut reader: R, buf: &mut [u8]) -> io::Result<bool>
where
    R: Read,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => return Err(ErrorKind::UnexpectedEof.into()),
            Ok(count) => filled += count,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn endianness() {
        let count = read_u64_be(Cursor::new([0, 0, 0, 0, 0, 0, 0, 0x25])).unwrap();
        assert_eq!(count, 37);

        let tempo = read_f32_le(Cursor::new(120.0_f32.to_le_bytes())).unwrap();
        assert_eq!(tempo, 120.0);
    }

    #[test]
    fn exact_or_eof() {
        let mut buf = [0; 4];

        assert!(!read_exact_or_eof(Cursor::new([]), &mut buf).unwrap());
        assert!(read_exact_or_eof(Cursor::new([1, 2, 3, 4, 5]), &mut buf).unwrap());
        assert_eq!(buf, [1, 2, 3, 4]);

        let error = read_exact_or_eof(Cursor::new([1, 2]), &mut buf).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEof);
    }
}
