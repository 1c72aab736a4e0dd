use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 256-bit seed that fully determines a generated layout.
///
/// Seeds are written as 64 lowercase hexadecimal digits and can be parsed back
/// with [`FromStr`].
///
/// # Examples
///
/// ```
/// use mines_generator::BoardSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: BoardSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), mines_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error raised while parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contains a character that is not a hexadecimal digit.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.as_bytes();
        if text.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: text.len() });
        }

        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(text[2 * i]).ok_or(SeedParseError::InvalidDigit { offset: 2 * i })?;
            let lo = hex_value(text[2 * i + 1])
                .ok_or(SeedParseError::InvalidDigit { offset: 2 * i + 1 })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
