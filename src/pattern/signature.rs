// Tue Jan 13 2026 - Alex

use crate::config::SignatureConfig;
use crate::pattern::mask::{parse_pattern, split_optional};
use crate::pattern::matcher::{search_by, wildcard_eq};
use crate::pattern::wildcard::resolve_masked_wildcard;
use crate::pattern::PatternError;
use std::fmt;

/// A byte pattern where every position holding `wildcard` matches any byte.
///
/// The empty signature (the `Default`) is valid and never matches anything.
/// Cloning copies the pattern into a fresh buffer.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    pattern: Vec<u8>,
    wildcard: u8,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `pattern` as is. Any byte equal to `wildcard` becomes a
    /// match-any position, so the caller must pick a value free of literals.
    pub fn with_wildcard(pattern: impl AsRef<[u8]>, wildcard: u8) -> Self {
        Self {
            pattern: pattern.as_ref().to_vec(),
            wildcard,
        }
    }

    /// Masked construction with `'?'` as the unknown marker.
    pub fn from_masked(pattern: impl AsRef<[u8]>, mask: impl AsRef<[u8]>) -> Result<Self, PatternError> {
        Self::from_masked_with(pattern, mask, b'?')
    }

    /// Builds a signature from `pattern` and a same-length `mask`. Positions
    /// where the mask holds `unknown` match any byte; the internal wildcard is
    /// the lowest byte value absent from the remaining literal bytes.
    pub fn from_masked_with(
        pattern: impl AsRef<[u8]>,
        mask: impl AsRef<[u8]>,
        unknown: u8,
    ) -> Result<Self, PatternError> {
        let pattern = pattern.as_ref();
        let mask = mask.as_ref();

        if pattern.len() != mask.len() {
            return Err(PatternError::LengthMismatch {
                pattern: pattern.len(),
                mask: mask.len(),
            });
        }

        let wildcard = resolve_masked_wildcard(pattern, mask, unknown)?;
        let pattern: Vec<u8> = pattern
            .iter()
            .zip(mask.iter())
            .map(|(&b, &m)| if m != unknown { b } else { wildcard })
            .collect();

        log::debug!(
            "Built masked signature of {} bytes with wildcard {:#04x}",
            pattern.len(),
            wildcard
        );

        Ok(Self { pattern, wildcard })
    }

    pub fn from_masked_config(
        pattern: impl AsRef<[u8]>,
        mask: impl AsRef<[u8]>,
        config: &SignatureConfig,
    ) -> Result<Self, PatternError> {
        config.validate()?;
        Self::from_masked_with(pattern, mask, config.unknown_marker)
    }

    /// `None` entries match any byte.
    pub fn from_optional(bytes: &[Option<u8>]) -> Result<Self, PatternError> {
        let unknown = b'?';
        let (pattern, mask) = split_optional(bytes, unknown);
        Self::from_masked_with(pattern, mask, unknown)
    }

    /// Parses an IDA style pattern, e.g. `"48 8B 05 ?? ?? ?? ?? C3"`.
    pub fn from_ida(text: &str) -> Result<Self, PatternError> {
        Self::from_ida_with(text, &SignatureConfig::default())
    }

    pub fn from_ida_with(text: &str, config: &SignatureConfig) -> Result<Self, PatternError> {
        let parsed = parse_pattern(text, config)?;
        log::debug!("Parsed text pattern '{}' into {} bytes", text, parsed.len());
        Self::from_optional(&parsed)
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.pattern
    }

    pub fn wildcard(&self) -> u8 {
        self.wildcard
    }

    pub fn wildcard_count(&self) -> usize {
        self.pattern.iter().filter(|&&b| b == self.wildcard).count()
    }

    pub fn literal_count(&self) -> usize {
        self.len() - self.wildcard_count()
    }

    /// True when `data` begins with a match. The empty signature never matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        if self.pattern.is_empty() || data.len() < self.pattern.len() {
            return false;
        }

        let eq = wildcard_eq(self.wildcard);
        data.iter().zip(self.pattern.iter()).all(|(d, p)| eq(d, p))
    }

    /// Offset of the first match in `haystack`, or `haystack.len()` when there
    /// is none.
    pub fn find(&self, haystack: impl AsRef<[u8]>) -> usize {
        let haystack = haystack.as_ref();
        self.find_in(haystack).unwrap_or(haystack.len())
    }

    pub fn find_in(&self, haystack: impl AsRef<[u8]>) -> Option<usize> {
        let haystack = haystack.as_ref();
        if self.pattern.is_empty() {
            return None;
        }

        let found = search_by(haystack, &self.pattern, wildcard_eq(self.wildcard));
        log::trace!(
            "Searched {} bytes for {}-byte signature: {:?}",
            haystack.len(),
            self.pattern.len(),
            found
        );
        found
    }

    pub fn to_hex_string(&self) -> String {
        self.pattern
            .iter()
            .map(|&b| {
                if b == self.wildcard {
                    "??".to_string()
                } else {
                    format!("{:02X}", b)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
