// Tue Jan 13 2026 - Alex

use crate::config::SignatureConfig;
use crate::pattern::PatternError;

/// Parses a whitespace separated pattern such as `"48 8B ?? 05 ?"`.
///
/// Each token is either a hex byte of one or two digits or one or two
/// `config.text_wildcard` characters, which yield `None`.
pub fn parse_pattern(text: &str, config: &SignatureConfig) -> Result<Vec<Option<u8>>, PatternError> {
    config.validate()?;

    let mut parsed = Vec::new();
    for part in text.split_whitespace() {
        parsed.push(parse_token(part, config.text_wildcard)?);
    }

    if parsed.is_empty() && !config.allow_empty {
        return Err(PatternError::InvalidPattern("pattern is empty".to_string()));
    }

    Ok(parsed)
}

fn parse_token(part: &str, wildcard: char) -> Result<Option<u8>, PatternError> {
    let len = part.chars().count();
    if len == 0 || len > 2 {
        return Err(PatternError::InvalidPattern(format!("bad token '{}'", part)));
    }
    if part.chars().all(|c| c == wildcard) {
        return Ok(None);
    }
    if !part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PatternError::InvalidPattern(format!("bad token '{}'", part)));
    }

    u8::from_str_radix(part, 16)
        .map(Some)
        .map_err(|_| PatternError::InvalidPattern(format!("bad token '{}'", part)))
}

/// Splits optional bytes into a pattern and a mask using `unknown` as the
/// don't-care marker. Literal positions get the inverse of `unknown`.
pub fn split_optional(bytes: &[Option<u8>], unknown: u8) -> (Vec<u8>, Vec<u8>) {
    let literal = !unknown;
    bytes
        .iter()
        .map(|b| match b {
            Some(byte) => (*byte, literal),
            None => (0, unknown),
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let config = SignatureConfig::default();
        let parsed = parse_pattern("48 8B ?? 05 ? c3", &config).unwrap();
        assert_eq!(
            parsed,
            vec![Some(0x48), Some(0x8B), None, Some(0x05), None, Some(0xC3)]
        );
    }

    #[test]
    fn test_parse_single_digit() {
        let parsed = parse_pattern("A 0", &SignatureConfig::default()).unwrap();
        assert_eq!(parsed, vec![Some(0x0A), Some(0x00)]);
    }

    #[test]
    fn test_parse_errors() {
        let config = SignatureConfig::default();
        assert!(matches!(parse_pattern("48 ZZ", &config), Err(PatternError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("488B", &config), Err(PatternError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("???", &config), Err(PatternError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("+1", &config), Err(PatternError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("4?", &config), Err(PatternError::InvalidPattern(_))));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_pattern("   ", &SignatureConfig::default()).unwrap().is_empty());

        let strict = SignatureConfig::default().with_allow_empty(false);
        assert!(matches!(parse_pattern("", &strict), Err(PatternError::InvalidPattern(_))));
    }

    #[test]
    fn test_parse_custom_wildcard() {
        let config = SignatureConfig::default().with_text_wildcard('*');
        let parsed = parse_pattern("E8 ** ** * 90", &config).unwrap();
        assert_eq!(parsed, vec![Some(0xE8), None, None, None, Some(0x90)]);
        assert!(parse_pattern("E8 ??", &config).is_err());
    }

    #[test]
    fn test_split_optional() {
        let (pattern, mask) = split_optional(&[Some(0xAA), None, Some(0xCC)], b'?');
        assert_eq!(pattern, vec![0xAA, 0x00, 0xCC]);
        assert_eq!(mask[1], b'?');
        assert_ne!(mask[0], b'?');
        assert_ne!(mask[2], b'?');
    }
}
