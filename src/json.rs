//! Helpers shared by the JSON interchange mirrors.

use solana_address::Address;

use crate::errors::CodecError;

pub(crate) fn parse_address(text: &str) -> Result<Address, CodecError> {
    text.parse()
        .map_err(|_| CodecError::MalformedJson(format!("invalid address {text:?}")))
}

pub(crate) fn parse_int<T: std::str::FromStr>(text: &str) -> Result<T, CodecError> {
    text.parse()
        .map_err(|_| CodecError::InvalidNumber(text.to_string()))
}
