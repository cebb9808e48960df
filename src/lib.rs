// Tue Jan 15 2026 - Alex

pub mod config;
pub mod pattern;

pub use config::SignatureConfig;
pub use pattern::{ErrorKind, PatternError, Signature, SignatureBuilder, WildcardResolver};
