//! # Error Types
//!
//! Protocol-level failures for the lifecycle precompile.
//!
//! Business outcomes (unauthorized, already frozen, ...) are NOT errors; they
//! travel as ordinary return codes inside a successful result. Everything in
//! this module aborts the call without producing output.

use thiserror::Error;

// =============================================================================
// ABI ERRORS
// =============================================================================

/// Errors raised by the binary call codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Not enough bytes to read the requested region.
    #[error("truncated input: need {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        /// Start of the region being read.
        offset: usize,
        /// Bytes the region needs.
        needed: usize,
        /// Bytes the input actually holds.
        available: usize,
    },

    /// Address word carries non-zero bytes in its 12-byte padding.
    #[error("dirty address padding in word at offset {offset}")]
    DirtyAddressPadding {
        /// Offset of the address word.
        offset: usize,
    },

    /// Signed integer word does not fit the 64-bit status code range.
    #[error("int256 at offset {offset} overflows i64")]
    IntegerOverflow {
        /// Offset of the integer word.
        offset: usize,
    },

    /// Offset or length word is larger than the addressable range.
    #[error("offset/length word at offset {offset} is out of range")]
    OffsetOverflow {
        /// Offset of the offending word.
        offset: usize,
    },

    /// String payload is not valid UTF-8.
    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        /// Offset of the string payload.
        offset: usize,
    },
}

// =============================================================================
// TABLE ERRORS
// =============================================================================

/// Errors from the external table storage collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Write addressed a table that does not exist.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// Table already exists (on create).
    #[error("table already exists: {0}")]
    TableExists(String),

    /// Stored field value could not be parsed.
    #[error("corrupt field {key} in table {table}: {value:?}")]
    CorruptField {
        /// Table holding the field.
        table: String,
        /// Field name.
        key: String,
        /// Raw stored value.
        value: String,
    },

    /// Lock poisoned by a panicking writer.
    #[error("table store lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// PRECOMPILE ERRORS
// =============================================================================

/// Errors that abort a precompiled call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrecompileError {
    /// Input shorter than a 4-byte selector.
    #[error("input too short for selector: {actual} bytes")]
    InputTooShort {
        /// Input length in bytes.
        actual: usize,
    },

    /// No method is bound to this selector.
    #[error("unknown selector: 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    /// Argument or result encoding is malformed.
    #[error("abi error: {0}")]
    Abi(#[from] AbiError),

    /// Decoded arguments do not fit the method (decoder/dispatch mismatch).
    #[error("argument mismatch for {0}")]
    ArgumentMismatch(&'static str),

    /// Storage collaborator failed.
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors loading or validating [`crate::config::LifecycleConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Source could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// Table prefix must be non-empty.
    #[error("table prefix must not be empty")]
    EmptyTablePrefix,

    /// Status description table has the wrong number of entries.
    #[error("status descriptions: expected {expected} entries, got {actual}")]
    DescriptionCount {
        /// Number of status values.
        expected: usize,
        /// Number of configured descriptions.
        actual: usize,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
