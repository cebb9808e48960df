// Tue Jan 13 2026 - Alex

pub mod builder;
pub mod error;
pub mod mask;
pub mod matcher;
pub mod signature;
pub mod wildcard;

pub use builder::SignatureBuilder;
pub use error::{ErrorKind, PatternError};
pub use matcher::search_by;
pub use signature::Signature;
pub use wildcard::{resolve_masked_wildcard, resolve_wildcard, WildcardResolver};

/// Returns the offset of the first occurrence of `signature` in `data`.
pub fn scan_for_signature(data: &[u8], signature: &Signature) -> Option<usize> {
    signature.find_in(data)
}
