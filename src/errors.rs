use solana_address::Address;
use thiserror::Error;

/// Failures of the binary and JSON codecs.
///
/// An account is either exactly decodable or not trustworthy, so nothing in
/// this taxonomy is ever coerced to a default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid account discriminator: expected {expected:?}, found {found:?}")]
    BadDiscriminator { expected: [u8; 8], found: [u8; 8] },

    #[error("buffer too short: need {needed} bytes, got {got}")]
    TruncatedBuffer { needed: usize, got: usize },

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("fixed-point arithmetic overflow")]
    Overflow,
}

/// Failures of the fetch path, generic over the transport's own error type.
///
/// An absent account is not an error; it surfaces as `Ok(None)` from the
/// fetcher. Every variant that concerns a single account names its address
/// so batch callers can tell which lookup went wrong.
#[derive(Error, Debug)]
pub enum FetchError<E> {
    #[error("transport error: {0}")]
    Transport(#[source] E),

    #[error("account {address} is owned by {found}, expected {expected}")]
    OwnershipMismatch {
        address: Address,
        expected: Address,
        found: Address,
    },

    #[error("account {address} failed to decode: {source}")]
    Decode {
        address: Address,
        source: CodecError,
    },
}
