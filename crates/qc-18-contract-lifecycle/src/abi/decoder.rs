//! # ABI Decoder
//!
//! Strict decoding: every read is bounds-checked and any malformed word is a
//! hard [`AbiError`]. Nothing is zero-filled or truncated.

use super::types::{AbiValue, ParamType, WORD_SIZE};
use crate::domain::value_objects::{Address, U256};
use crate::errors::AbiError;

/// Decodes an ABI tuple of the given shape from `data`.
///
/// # Errors
///
/// Returns an [`AbiError`] if `data` is shorter than the head, a dynamic
/// offset points outside `data`, or a word is not a valid value of its type.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
    let head_len = types.len() * WORD_SIZE;
    if data.len() < head_len {
        return Err(AbiError::Truncated {
            offset: 0,
            needed: head_len,
            available: data.len(),
        });
    }

    types
        .iter()
        .enumerate()
        .map(|(i, param)| decode_param(*param, data, i * WORD_SIZE))
        .collect()
}

fn decode_param(param: ParamType, data: &[u8], offset: usize) -> Result<AbiValue, AbiError> {
    match param {
        ParamType::Address => decode_address(data, offset).map(AbiValue::Address),
        ParamType::Int256 => decode_int(data, offset).map(AbiValue::Int),
        ParamType::String => decode_string(data, offset).map(AbiValue::String),
        ParamType::AddressArray => decode_address_array(data, offset).map(AbiValue::AddressArray),
    }
}

fn read_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], AbiError> {
    let end = offset.checked_add(len).ok_or(AbiError::OffsetOverflow { offset })?;
    data.get(offset..end).ok_or(AbiError::Truncated {
        offset,
        needed: len,
        available: data.len().saturating_sub(offset),
    })
}

fn read_word(data: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    read_slice(data, offset, WORD_SIZE)
}

/// Reads an offset or length word.
fn read_usize(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(read_word(data, offset)?);
    if value > U256::from(usize::MAX as u64) {
        return Err(AbiError::OffsetOverflow { offset });
    }
    Ok(value.as_usize())
}

fn decode_address(data: &[u8], offset: usize) -> Result<Address, AbiError> {
    let word = read_word(data, offset)?;
    if word[..12].iter().any(|&b| b != 0) {
        return Err(AbiError::DirtyAddressPadding { offset });
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Ok(Address::new(bytes))
}

fn decode_int(data: &[u8], offset: usize) -> Result<i64, AbiError> {
    let word = read_word(data, offset)?;
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..]);
    let value = i64::from_be_bytes(low);

    // The upper 24 bytes must be the sign extension of the low 8.
    let fill = if value < 0 { 0xff } else { 0x00 };
    if word[..24].iter().any(|&b| b != fill) {
        return Err(AbiError::IntegerOverflow { offset });
    }
    Ok(value)
}

fn decode_string(data: &[u8], head_offset: usize) -> Result<String, AbiError> {
    let tail = read_usize(data, head_offset)?;
    let len = read_usize(data, tail)?;
    let start = tail
        .checked_add(WORD_SIZE)
        .ok_or(AbiError::OffsetOverflow { offset: tail })?;
    let raw = read_slice(data, start, len)?;
    String::from_utf8(raw.to_vec()).map_err(|_| AbiError::InvalidUtf8 { offset: start })
}

fn decode_address_array(data: &[u8], head_offset: usize) -> Result<Vec<Address>, AbiError> {
    let tail = read_usize(data, head_offset)?;
    let count = read_usize(data, tail)?;
    let start = tail
        .checked_add(WORD_SIZE)
        .ok_or(AbiError::OffsetOverflow { offset: tail })?;

    // Bound the count by the bytes actually present before allocating.
    let body_len = count
        .checked_mul(WORD_SIZE)
        .ok_or(AbiError::OffsetOverflow { offset: tail })?;
    read_slice(data, start, body_len)?;

    (0..count)
        .map(|i| decode_address(data, start + i * WORD_SIZE))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
