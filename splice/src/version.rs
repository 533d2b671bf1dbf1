//! The null-terminated version string stored in every pattern file

use std::{borrow::Cow, fmt};

/// The hardware/software version a pattern file was saved with
///
/// Pattern files reserve a fixed 32-byte field for the version. The text ends
/// at the first zero byte; a field without any zero byte uses all 32 bytes
/// (think [strnlen](https://en.cppreference.com/w/c/string/byte/strlen)).
///
/// Any byte content is structurally legal. Bytes that do not form valid UTF-8
/// are replaced when the version is converted to text for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    bytes: [u8; Self::LEN],
}

impl Version {
    /// The number of bytes reserved for the version field
    pub const LEN: usize = 32;

    /// Wrap the raw bytes of a version field
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self { bytes }
    }

    /// Access the underlying bytes that make up the version
    ///
    /// This includes any amount of 0's used for null-termination
    pub fn bytes(&self) -> &[u8; Self::LEN] {
        &self.bytes
    }

    /// The number of bytes up to the null-termination (or [`Self::LEN`])
    pub fn len(&self) -> usize {
        self.bytes
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(Self::LEN)
    }

    /// Are there _any_ bytes in the version string?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to text, replacing any invalid UTF-8 sequences
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes[..self.len()])
    }
}

impl Default for Version {
    fn default() -> Self {
        Self {
            bytes: [0; Self::LEN],
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_terminated() {
        let mut bytes = [0; Version::LEN];
        bytes[..11].copy_from_slice(b"0.808-alpha");

        let version = Version::from_bytes(bytes);
        assert_eq!(version.len(), 11);
        assert!(!version.is_empty());
        assert_eq!(version.to_text(), "0.808-alpha");
        assert_eq!(format!("{version}"), "0.808-alpha");
    }

    #[test]
    fn without_null_byte() {
        let version = Version::from_bytes([b'9'; Version::LEN]);
        assert_eq!(version.len(), Version::LEN);
        assert_eq!(version.to_text(), "9".repeat(Version::LEN));
    }

    #[test]
    fn default() {
        let version = Version::default();
        assert_eq!(version.len(), 0);
        assert!(version.is_empty());
        assert_eq!(version.to_text(), "");
    }
}
