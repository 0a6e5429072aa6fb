// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Identity types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{ADDRESS_LEN, DIGEST_LEN};
use crate::error::GovernanceError;

/// 20-byte account identity of a validator or worker.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LEN]);

/// 32-byte content digest (proposal hashes, job hashes, node hashes).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Digest(pub [u8; DIGEST_LEN]);

/// Proposal sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    pub fn next(&self) -> Self {
        SequenceNumber(self.0 + 1)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of commands applied to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Version(pub u64);

impl Version {
    pub fn next(&self) -> Self {
        Version(self.0 + 1)
    }
}

/// Seconds since the UNIX epoch.
pub type Timestamp = u64;

fn decode_fixed<const N: usize>(raw: &str) -> Result<[u8; N], GovernanceError> {
    let trimmed = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(trimmed)
        .map_err(|e| GovernanceError::InvalidInput(format!("{raw}: {e}")))?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        GovernanceError::InvalidInput(format!("{raw}: expected {N} bytes, found {}", b.len()))
    })
}

macro_rules! hex_identity {
    ($name:ident) => {
        impl $name {
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = GovernanceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_fixed(s).map($name)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_identity!(Address);
hex_identity!(Digest);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_parse_with_and_without_prefix() {
        let a: Address = "0x560fd8449ebadafe8168a560f656148f655459ca".parse().unwrap();
        let b: Address = "560fd8449ebadafe8168a560f656148f655459ca".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), "0x560fd8449ebadafe8168a560f656148f655459ca");
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0x560fd8449ebadafe8168a560f656148f655459ca".parse::<Digest>().is_err());
        assert!("zz".parse::<Digest>().is_err());
    }

    #[test]
    fn test_json_uses_hex_strings() {
        let d = Digest([0xab; 32]);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(32)));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
