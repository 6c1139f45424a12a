//! # Function Selectors
//!
//! Selector = first 4 bytes of keccak256(signature).

use sha3::{Digest, Keccak256};

/// 4-byte function selector.
pub type Selector = [u8; 4];

/// Length of a selector.
pub const SELECTOR_LEN: usize = 4;

/// Computes the selector of a canonical signature such as `"freeze(address)"`.
#[must_use]
pub fn function_selector(signature: &str) -> Selector {
    let hash = Keccak256::digest(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Splits call input into selector and argument bytes.
///
/// Returns `None` if the input is shorter than a selector.
#[must_use]
pub fn split_selector(input: &[u8]) -> Option<(Selector, &[u8])> {
    if input.len() < SELECTOR_LEN {
        return None;
    }
    let (head, args) = input.split_at(SELECTOR_LEN);
    Some(([head[0], head[1], head[2], head[3]], args))
}
