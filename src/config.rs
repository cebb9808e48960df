// Tue Jan 13 2026 - Alex

use crate::pattern::PatternError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    pub unknown_marker: u8,
    pub text_wildcard: char,
    pub allow_empty: bool,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            unknown_marker: b'?',
            text_wildcard: '?',
            allow_empty: true,
        }
    }
}

impl SignatureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_marker(mut self, marker: u8) -> Self {
        self.unknown_marker = marker;
        self
    }

    pub fn with_text_wildcard(mut self, wildcard: char) -> Self {
        self.text_wildcard = wildcard;
        self
    }

    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        if self.text_wildcard.is_ascii_hexdigit() {
            return Err(PatternError::InvalidConfig(format!(
                "text_wildcard '{}' must not be a hex digit",
                self.text_wildcard
            )));
        }
        if self.text_wildcard.is_whitespace() {
            return Err(PatternError::InvalidConfig(
                "text_wildcard must not be whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
