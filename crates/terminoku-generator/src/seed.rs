//! Puzzle seeds and the random streams derived from them.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// Seeds display as 64 lowercase hex characters and parse back from the same
/// format, which is how they travel through CLI flags and bug reports.
///
/// # Examples
///
/// ```
/// use terminoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([0x5a; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Keys a PCG stream from this seed.
    ///
    /// The seed bytes are conditioned through SHA-256 first, so structured
    /// inputs (all-zero bytes, counters) still produce well-mixed streams.
    #[must_use]
    pub(crate) fn to_rng(self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut key = [0; 16];
        key.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(key)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed string has length {length}, expected 64")]
    WrongLength {
        /// Length of the rejected string in characters.
        length: usize,
    },
    /// The string contains a character outside `0-9a-fA-F`.
    #[display("seed string contains a non-hex character")]
    InvalidHexDigit,
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParsePuzzleSeedError::WrongLength {
                length: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            let pair =
                std::str::from_utf8(pair).map_err(|_| ParsePuzzleSeedError::InvalidHexDigit)?;
            *byte =
                u8::from_str_radix(pair, 16).map_err(|_| ParsePuzzleSeedError::InvalidHexDigit)?;
        }
        Ok(Self(bytes))
    }
}
