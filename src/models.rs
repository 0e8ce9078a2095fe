use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
}

impl Algorithm {
    /// Algorithms in the order they are created and computed at startup.
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Md5, Algorithm::Sha1]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
        }
    }

    /// Length of the hex digest: two characters per digest byte.
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            other => bail!("unsupported hash algorithm: {}", other),
        }
    }
}

/// Result field for one algorithm. `Loading` renders as the literal
/// placeholder until the background computation lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestState {
    Idle,
    Loading,
    Done(String),
}

impl DigestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DigestState::Loading)
    }
}

impl fmt::Display for DigestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestState::Idle => Ok(()),
            DigestState::Loading => write!(f, "Loading..."),
            DigestState::Done(hex) => write!(f, "{}", hex),
        }
    }
}

/// One row of the display: an algorithm and its most recent result.
/// Slots are created once at startup and only mutated afterwards.
#[derive(Debug, Clone)]
pub struct HashSlot {
    pub algorithm: Algorithm,
    pub result: DigestState,
}

impl HashSlot {
    pub fn new(algorithm: Algorithm) -> Self {
        HashSlot {
            algorithm,
            result: DigestState::Idle,
        }
    }
}

/// The currently selected file, if any. Overwritten on each selection;
/// no history is kept.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_algorithm_names() {
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("MD5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("sha1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!("SHA-1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
    }

    #[test]
    fn rejects_unsupported_algorithm_names() {
        let err = "sha256".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("unsupported hash algorithm"));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn digest_lengths_match_algorithms() {
        assert_eq!(Algorithm::Md5.hex_len(), 32);
        assert_eq!(Algorithm::Sha1.hex_len(), 40);
    }

    #[test]
    fn loading_state_displays_placeholder() {
        assert_eq!(DigestState::Loading.to_string(), "Loading...");
        assert_eq!(DigestState::Idle.to_string(), "");
        assert_eq!(DigestState::Done("abc123".into()).to_string(), "abc123");
    }
}
