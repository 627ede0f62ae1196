//! Typed account retrieval over a pluggable byte transport.

use async_trait::async_trait;
use solana_address::Address;
use tracing::debug;

use crate::account::ProgramAccount;
use crate::errors::FetchError;

/// Raw account state as the ledger reports it: the owning program and the
/// account's data bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    pub owner: Address,
    pub data: Vec<u8>,
}

/// The transport that resolves addresses to raw account bytes.
///
/// One network round trip per call. Retry, backoff, timeouts and
/// cancellation are the implementor's concern; its errors pass through the
/// fetcher unchanged.
#[async_trait]
pub trait AccountSource {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn account_bytes(&self, address: &Address) -> Result<Option<RawAccount>, Self::Error>;

    /// Batched lookup; the result preserves the order of `addresses`.
    async fn multiple_account_bytes(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<RawAccount>>, Self::Error>;
}

/// Typed account access for one program: fetches bytes, verifies the owning
/// program, and decodes.
#[derive(Debug, Clone)]
pub struct AccountFetcher<S> {
    source: S,
    program_id: Address,
}

impl<S: AccountSource> AccountFetcher<S> {
    pub fn new(source: S, program_id: Address) -> Self {
        Self { source, program_id }
    }

    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    /// Fetches and decodes one account. An absent account is `Ok(None)`;
    /// every other failure is an error.
    pub async fn fetch_one<A: ProgramAccount>(
        &self,
        address: &Address,
    ) -> Result<Option<A>, FetchError<S::Error>> {
        let raw = self
            .source
            .account_bytes(address)
            .await
            .map_err(FetchError::Transport)?;
        match raw {
            None => {
                debug!(%address, "account not found");
                Ok(None)
            }
            Some(raw) => self.decode_owned(address, &raw).map(Some),
        }
    }

    /// Batched fetch. Outcomes stay in input order and are independent, so
    /// one foreign-owned or undecodable account never poisons the rest; only
    /// a transport failure fails the whole call.
    pub async fn fetch_many<A: ProgramAccount>(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Result<Option<A>, FetchError<S::Error>>>, FetchError<S::Error>> {
        let raws = self
            .source
            .multiple_account_bytes(addresses)
            .await
            .map_err(FetchError::Transport)?;
        debug!(
            requested = addresses.len(),
            returned = raws.len(),
            "batched account fetch"
        );
        Ok(addresses
            .iter()
            .zip(raws)
            .map(|(address, raw)| match raw {
                None => Ok(None),
                Some(raw) => self.decode_owned(address, &raw).map(Some),
            })
            .collect())
    }

    fn decode_owned<A: ProgramAccount>(
        &self,
        address: &Address,
        raw: &RawAccount,
    ) -> Result<A, FetchError<S::Error>> {
        if raw.owner != self.program_id {
            return Err(FetchError::OwnershipMismatch {
                address: *address,
                expected: self.program_id,
                found: raw.owner,
            });
        }
        A::decode(&raw.data).map_err(|source| FetchError::Decode {
            address: *address,
            source,
        })
    }
}
