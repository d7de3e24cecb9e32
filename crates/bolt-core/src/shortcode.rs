use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The integer identifier assigned to a stored URL.
///
/// Codes start at 1 and grow strictly with each created record; they are
/// never reused. On the wire a short code is a bare decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(u64);

impl ShortCode {
    /// Wraps an already-assigned code value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a short code from caller input.
    ///
    /// Anything that is not an unsigned decimal integer is rejected with
    /// [`RegistryError::MalformedCode`]. Whether the parsed value refers
    /// to an existing record is a separate lookup concern.
    pub fn parse(input: &str) -> Result<Self, RegistryError> {
        input
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| RegistryError::MalformedCode(input.to_string()))
    }

    /// Returns the underlying integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ShortCode {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
