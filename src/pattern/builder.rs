// Tue Jan 13 2026 - Alex

use crate::pattern::{PatternError, Signature};

pub struct SignatureBuilder {
    bytes: Vec<Option<u8>>,
}

impl SignatureBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn byte(mut self, byte: u8) -> Self {
        self.bytes.push(Some(byte));
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend(bytes.iter().copied().map(Some));
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.bytes.push(None);
        self
    }

    pub fn wildcards(mut self, count: usize) -> Self {
        self.bytes.extend(std::iter::repeat(None).take(count));
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn build(self) -> Result<Signature, PatternError> {
        Signature::from_optional(&self.bytes)
    }
}

impl Default for SignatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
