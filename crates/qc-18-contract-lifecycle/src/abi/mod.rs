//! # Binary Call Codec
//!
//! Contract-ABI style encoding of selectors, arguments and results.
//! No state; pure transforms.
//!
//! - `selector.rs` - keccak-derived 4-byte selectors
//! - `types.rs` - parameter shapes and values
//! - `encoder.rs` - head/tail encoder
//! - `decoder.rs` - strict decoder

pub mod decoder;
pub mod encoder;
pub mod selector;
pub mod types;

pub use decoder::decode;
pub use encoder::{encode, encode_call};
pub use selector::{function_selector, split_selector, Selector, SELECTOR_LEN};
pub use types::{signature, AbiValue, ParamType, WORD_SIZE};
