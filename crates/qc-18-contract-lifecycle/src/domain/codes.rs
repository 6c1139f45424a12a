//! # Return Codes
//!
//! Integer results returned in the leading `int256` of every call output.
//! Negative codes are declared business failures, not protocol errors.

/// A mutation was applied.
pub const CODE_SUCCESS: i64 = 1;

/// A query completed.
pub const CODE_QUERY_OK: i64 = 0;

/// Freeze requested while the contract is already frozen.
pub const CODE_INVALID_CONTRACT_FROZEN: i64 = -51900;

/// Unfreeze requested while the contract is already available.
pub const CODE_INVALID_CONTRACT_AVAILABLE: i64 = -51901;

/// The manager being granted is already in the authority list.
pub const CODE_INVALID_CONTRACT_REPEAT_AUTHORIZATION: i64 = -51902;

/// The address is not a contract address.
pub const CODE_INVALID_CONTRACT_ADDRESS: i64 = -51903;

/// No account table exists for the target address.
pub const CODE_INVALID_TABLE_NOT_EXIST: i64 = -51904;

/// The caller is not in the contract's authority list.
pub const CODE_INVALID_NO_AUTHORIZED: i64 = -51905;

/// Short name for a code, for log fields.
#[must_use]
pub fn describe(code: i64) -> &'static str {
    match code {
        CODE_SUCCESS => "success",
        CODE_QUERY_OK => "ok",
        CODE_INVALID_CONTRACT_FROZEN => "contract frozen",
        CODE_INVALID_CONTRACT_AVAILABLE => "contract available",
        CODE_INVALID_CONTRACT_REPEAT_AUTHORIZATION => "repeat authorization",
        CODE_INVALID_CONTRACT_ADDRESS => "invalid contract address",
        CODE_INVALID_TABLE_NOT_EXIST => "table not exist",
        CODE_INVALID_NO_AUTHORIZED => "not authorized",
        _ => "unknown",
    }
}
