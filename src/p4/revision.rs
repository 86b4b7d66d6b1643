/// Depot file revision numbers.
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use thiserror::Error;

/// A depot-assigned file revision, always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(NonZeroU64);

impl Revision {
    /// Wrap a raw revision number. Returns `None` for 0.
    #[must_use]
    pub fn new(n: u64) -> Option<Self> {
        NonZeroU64::new(n).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure to read a revision number from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRevisionError {
    #[error("'{0}' is not a revision number")]
    NotANumber(String),

    #[error("revision must be a positive integer")]
    Zero,
}

impl FromStr for Revision {
    type Err = ParseRevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s
            .parse()
            .map_err(|_| ParseRevisionError::NotANumber(s.to_owned()))?;
        Self::new(n).ok_or(ParseRevisionError::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!("8".parse::<Revision>().unwrap().get(), 8);
    }

    #[test]
    fn test_parse_zero_rejected() {
        assert_eq!("0".parse::<Revision>(), Err(ParseRevisionError::Zero));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(matches!(
            "8 ".parse::<Revision>(),
            Err(ParseRevisionError::NotANumber(_))
        ));
        assert!(matches!(
            "-3".parse::<Revision>(),
            Err(ParseRevisionError::NotANumber(_))
        ));
        assert!(matches!(
            "".parse::<Revision>(),
            Err(ParseRevisionError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_beyond_32_bits() {
        assert_eq!(
            "4294967296".parse::<Revision>().unwrap().get(),
            4_294_967_296
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Revision::new(42).unwrap().to_string(), "42");
    }
}
