//! Limits applied when loading and compiling rule sets
//!
//! These constants bound rule loading to prevent ReDoS and memory
//! exhaustion from hostile or malformed rule files.

/// Maximum size for TOML rule files (1MB)
///
/// Rule files are small configuration files; anything larger indicates
/// misconfiguration or malicious content.
pub const MAX_TOML_FILE_SIZE: usize = 1_048_576; // 1MB

/// Maximum regex pattern length (500 characters)
///
/// Extremely long patterns are a sign of malicious input or poor design.
pub const MAX_REGEX_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
///
/// Applied during regex compilation via RegexBuilder to bound the memory
/// used by a compiled pattern.
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
///
/// Bounds the size of the lazy DFA used during matching.
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB
