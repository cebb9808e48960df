// Tue Jan 13 2026 - Alex

use crate::pattern::PatternError;

/// Picks a byte value that never appears among the literal bytes of a pattern,
/// so it can stand in for "any byte" inside the stored signature.
///
/// The lowest unused value always wins, which keeps the chosen wildcard stable
/// for equal inputs.
#[derive(Debug, Clone)]
pub struct WildcardResolver {
    present: [bool; 256],
}

impl WildcardResolver {
    pub fn new() -> Self {
        Self {
            present: [false; 256],
        }
    }

    pub fn mark(&mut self, byte: u8) {
        self.present[byte as usize] = true;
    }

    pub fn mark_all<I>(&mut self, bytes: I)
    where
        I: IntoIterator<Item = u8>,
    {
        for byte in bytes {
            self.mark(byte);
        }
    }

    pub fn is_marked(&self, byte: u8) -> bool {
        self.present[byte as usize]
    }

    pub fn resolve(&self) -> Result<u8, PatternError> {
        let wildcard = self
            .present
            .iter()
            .position(|&present| !present)
            .map(|value| value as u8)
            .ok_or(PatternError::NoUnusedByte)?;

        log::debug!("Resolved wildcard byte {:#04x}", wildcard);
        Ok(wildcard)
    }
}

impl Default for WildcardResolver {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve_wildcard(literals: &[u8]) -> Result<u8, PatternError> {
    let mut resolver = WildcardResolver::new();
    resolver.mark_all(literals.iter().copied());
    resolver.resolve()
}

/// Only bytes whose mask entry differs from `unknown` take part.
pub fn resolve_masked_wildcard(pattern: &[u8], mask: &[u8], unknown: u8) -> Result<u8, PatternError> {
    let mut resolver = WildcardResolver::new();
    resolver.mark_all(
        pattern
            .iter()
            .zip(mask.iter())
            .filter(|&(_, &m)| m != unknown)
            .map(|(&b, _)| b),
    );
    resolver.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_unused_wins() {
        assert_eq!(resolve_wildcard(&[]).unwrap(), 0x00);
        assert_eq!(resolve_wildcard(&[0x00, 0x01, 0x03]).unwrap(), 0x02);
        assert_eq!(resolve_wildcard(&[0x05, 0x00, 0x00]).unwrap(), 0x01);
    }

    #[test]
    fn test_all_values_used() {
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(resolve_wildcard(&all), Err(PatternError::NoUnusedByte));

        let mut almost: Vec<u8> = (0..=255).collect();
        almost.retain(|&b| b != 0xFE);
        assert_eq!(resolve_wildcard(&almost).unwrap(), 0xFE);
    }

    #[test]
    fn test_masked_ignores_unknown_positions() {
        let pattern = [0x00, 0x01, 0x02];
        let mask = *b"x?x";
        assert_eq!(resolve_masked_wildcard(&pattern, &mask, b'?').unwrap(), 0x01);
    }

    #[test]
    fn test_masked_all_values_used() {
        let mut pattern: Vec<u8> = (0..=255).collect();
        pattern.push(0x42);
        let mut mask = vec![b'x'; 256];
        mask.push(b'?');
        assert_eq!(
            resolve_masked_wildcard(&pattern, &mask, b'?'),
            Err(PatternError::NoUnusedByte)
        );
    }

    #[test]
    fn test_resolver_marks() {
        let mut resolver = WildcardResolver::default();
        assert!(!resolver.is_marked(0x10));
        resolver.mark(0x10);
        assert!(resolver.is_marked(0x10));
        resolver.mark_all([0x00, 0x01]);
        assert_eq!(resolver.resolve().unwrap(), 0x02);
    }
}
