//! # ABI Encoder
//!
//! Head/tail encoding. Static values sit inline in the head; dynamic values
//! leave an offset in the head and append `length ++ data` to the tail.
//! Offsets are relative to the start of the encoded block.

use super::selector::function_selector;
use super::types::{AbiValue, WORD_SIZE};
use crate::domain::value_objects::{Address, Bytes, U256};

/// Encodes `values` as an ABI tuple.
#[must_use]
pub fn encode(values: &[AbiValue]) -> Bytes {
    let head_len = values.len() * WORD_SIZE;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for value in values {
        match value {
            AbiValue::Address(address) => head.extend_from_slice(&address_word(address)),
            AbiValue::Int(v) => head.extend_from_slice(&int_word(*v)),
            AbiValue::String(s) => {
                head.extend_from_slice(&usize_word(head_len + tail.len()));
                tail.extend_from_slice(&usize_word(s.len()));
                tail.extend_from_slice(s.as_bytes());
                pad_to_word(&mut tail);
            }
            AbiValue::AddressArray(list) => {
                head.extend_from_slice(&usize_word(head_len + tail.len()));
                tail.extend_from_slice(&usize_word(list.len()));
                for address in list {
                    tail.extend_from_slice(&address_word(address));
                }
            }
        }
    }

    head.extend_from_slice(&tail);
    Bytes::from(head)
}

/// Encodes a full call: selector of `signature` followed by `values`.
#[must_use]
pub fn encode_call(signature: &str, values: &[AbiValue]) -> Bytes {
    let mut out = function_selector(signature).to_vec();
    out.extend_from_slice(encode(values).as_slice());
    Bytes::from(out)
}

fn address_word(address: &Address) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

fn int_word(value: i64) -> [u8; WORD_SIZE] {
    // Sign-extend into the upper 24 bytes.
    let mut word = if value < 0 {
        [0xff; WORD_SIZE]
    } else {
        [0u8; WORD_SIZE]
    };
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

fn usize_word(value: usize) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    U256::from(value as u64).to_big_endian(&mut word);
    word
}

fn pad_to_word(buf: &mut Vec<u8>) {
    let rem = buf.len() % WORD_SIZE;
    if rem != 0 {
        buf.resize(buf.len() + WORD_SIZE - rem, 0);
    }
}
