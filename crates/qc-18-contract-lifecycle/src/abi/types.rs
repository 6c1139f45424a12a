//! # ABI Types
//!
//! The parameter shapes the lifecycle interface uses and their values.

use crate::domain::value_objects::Address;

/// Size of one ABI word.
pub const WORD_SIZE: usize = 32;

/// Declared shape of one parameter or result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `address`, left-padded to a word.
    Address,
    /// `int256`, two's complement.
    Int256,
    /// `string`, dynamic.
    String,
    /// `address[]`, dynamic.
    AddressArray,
}

impl ParamType {
    /// Canonical name used in function signatures.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Int256 => "int256",
            Self::String => "string",
            Self::AddressArray => "address[]",
        }
    }

    /// True if the value lives in the tail section.
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(self, Self::String | Self::AddressArray)
    }
}

/// A decoded ABI value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    /// `address`
    Address(Address),
    /// `int256` restricted to the i64 range
    Int(i64),
    /// `string`
    String(String),
    /// `address[]`
    AddressArray(Vec<Address>),
}

impl AbiValue {
    /// Shape of this value.
    #[must_use]
    pub const fn param_type(&self) -> ParamType {
        match self {
            Self::Address(_) => ParamType::Address,
            Self::Int(_) => ParamType::Int256,
            Self::String(_) => ParamType::String,
            Self::AddressArray(_) => ParamType::AddressArray,
        }
    }

    /// The address, if this is an `address` value.
    #[must_use]
    pub const fn as_address(&self) -> Option<Address> {
        match self {
            Self::Address(a) => Some(*a),
            _ => None,
        }
    }

    /// The integer, if this is an `int256` value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a `string` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an `address[]` value.
    #[must_use]
    pub fn as_addresses(&self) -> Option<&[Address]> {
        match self {
            Self::AddressArray(list) => Some(list),
            _ => None,
        }
    }
}

/// Builds `name(type1,type2,...)`.
#[must_use]
pub fn signature(name: &str, params: &[ParamType]) -> String {
    let types: Vec<&str> = params.iter().map(|p| p.canonical_name()).collect();
    format!("{name}({})", types.join(","))
}
