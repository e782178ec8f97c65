//! Core type definitions for BadgeDB.

use std::fmt;
use std::str::FromStr;

/// An owned card UID.
///
/// UIDs are opaque fixed-width byte sequences; two UIDs are equal iff all
/// bytes are equal. The width is a store configuration knob, so `CardUid`
/// does not fix it - the store rejects UIDs of the wrong width.
///
/// Formats as colon-separated uppercase hex (`AA:BB:CC:DD`) and parses
/// the same, with or without the colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardUid(Vec<u8>);

impl CardUid {
    /// Creates a UID from raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the UID bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the UID width in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the UID has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for CardUid {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for CardUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Error parsing a hex UID string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUidError(String);

impl fmt::Display for ParseUidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid UID: {}", self.0)
    }
}

impl std::error::Error for ParseUidError {}

impl FromStr for CardUid {
    type Err = ParseUidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        if hex.is_empty() || hex.len() % 2 != 0 {
            return Err(ParseUidError(format!(
                "expected an even number of hex digits, got {:?}",
                s
            )));
        }
        let mut bytes = Vec::with_capacity(hex.len() / 2);
        for chunk in hex.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(chunk).map_err(|_| {
                ParseUidError(format!("non-ASCII digits in {:?}", s))
            })?;
            let byte = u8::from_str_radix(pair, 16)
                .map_err(|_| ParseUidError(format!("non-hex digits in {:?}", s)))?;
            bytes.push(byte);
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_colon_hex() {
        let uid = CardUid::new(vec![0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(format!("{uid}"), "AA:BB:CC:DD");
    }

    #[test]
    fn parse_with_colons() {
        let uid: CardUid = "aa:bb:cc:dd".parse().unwrap();
        assert_eq!(uid.as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn parse_bare_hex() {
        let uid: CardUid = "01020304".parse().unwrap();
        assert_eq!(uid.as_bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn parse_roundtrip() {
        let uid = CardUid::new(vec![0x00, 0x7F, 0xFF]);
        let parsed: CardUid = format!("{uid}").parse().unwrap();
        assert_eq!(parsed, uid);
    }

    #[test]
    fn parse_rejects_odd_length() {
        assert!("ABC".parse::<CardUid>().is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!("ZZ:11".parse::<CardUid>().is_err());
        assert!("".parse::<CardUid>().is_err());
    }
}
