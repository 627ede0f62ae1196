use std::collections::HashMap;

use perps_client::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("transport unavailable")]
struct MockTransportError;

#[derive(Default)]
struct MockSource {
    accounts: HashMap<Address, RawAccount>,
    fail: bool,
}

#[async_trait::async_trait]
impl AccountSource for MockSource {
    type Error = MockTransportError;

    async fn account_bytes(&self, address: &Address) -> Result<Option<RawAccount>, Self::Error> {
        if self.fail {
            return Err(MockTransportError);
        }
        Ok(self.accounts.get(address).cloned())
    }

    async fn multiple_account_bytes(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<RawAccount>>, Self::Error> {
        if self.fail {
            return Err(MockTransportError);
        }
        Ok(addresses
            .iter()
            .map(|address| self.accounts.get(address).cloned())
            .collect())
    }
}

fn program_id() -> Address {
    Address::new_from_array([42u8; 32])
}

fn address(seed: u8) -> Address {
    Address::new_from_array([seed; 32])
}

fn sample_group(owner_seed: u8) -> TraderRiskGroup {
    let mut value = TraderRiskGroup {
        tag: AccountTag::TraderRiskGroup,
        owner: address(owner_seed),
        cash_balance: Fractional::new(1_000_000, 6),
        client_order_id: 99,
        ..TraderRiskGroup::default()
    };
    value.active_products[0] = 1;
    value
}

fn ledger_entry(value: &TraderRiskGroup) -> RawAccount {
    RawAccount {
        owner: program_id(),
        data: value.encode(),
    }
}

#[tokio::test]
async fn fetch_one_decodes_owned_account() {
    let value = sample_group(7);
    let trg_address = address(1);
    let mut source = MockSource::default();
    source.accounts.insert(trg_address, ledger_entry(&value));

    let fetcher = AccountFetcher::new(source, program_id());
    let fetched: Option<TraderRiskGroup> = fetcher.fetch_one(&trg_address).await.unwrap();
    assert_eq!(fetched, Some(value));
}

#[tokio::test]
async fn fetch_one_returns_none_for_missing_account() {
    let fetcher = AccountFetcher::new(MockSource::default(), program_id());
    let fetched: Option<TraderRiskGroup> = fetcher.fetch_one(&address(1)).await.unwrap();
    assert_eq!(fetched, None);
}

#[tokio::test]
async fn fetch_one_rejects_foreign_owner() {
    let value = sample_group(7);
    let trg_address = address(1);
    let mut source = MockSource::default();
    source.accounts.insert(
        trg_address,
        RawAccount {
            owner: address(99),
            data: value.encode(),
        },
    );

    let fetcher = AccountFetcher::new(source, program_id());
    let err = fetcher
        .fetch_one::<TraderRiskGroup>(&trg_address)
        .await
        .unwrap_err();
    match err {
        FetchError::OwnershipMismatch {
            address: reported,
            expected,
            found,
        } => {
            assert_eq!(reported, trg_address);
            assert_eq!(expected, program_id());
            assert_eq!(found, address(99));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_one_propagates_transport_errors() {
    let source = MockSource {
        fail: true,
        ..MockSource::default()
    };
    let fetcher = AccountFetcher::new(source, program_id());
    let err = fetcher
        .fetch_one::<TraderRiskGroup>(&address(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn fetch_many_preserves_order_around_missing_accounts() {
    let first = sample_group(7);
    let third = sample_group(8);
    let mut source = MockSource::default();
    source.accounts.insert(address(1), ledger_entry(&first));
    source.accounts.insert(address(3), ledger_entry(&third));

    let fetcher = AccountFetcher::new(source, program_id());
    let fetched = fetcher
        .fetch_many::<TraderRiskGroup>(&[address(1), address(2), address(3)])
        .await
        .unwrap();

    assert_eq!(fetched.len(), 3);
    assert_eq!(fetched[0].as_ref().unwrap().as_ref(), Some(&first));
    assert_eq!(fetched[1].as_ref().unwrap().as_ref(), None);
    assert_eq!(fetched[2].as_ref().unwrap().as_ref(), Some(&third));
}

#[tokio::test]
async fn fetch_many_isolates_per_account_failures() {
    let good = sample_group(7);
    let mut source = MockSource::default();
    source.accounts.insert(address(1), ledger_entry(&good));
    source.accounts.insert(
        address(2),
        RawAccount {
            owner: program_id(),
            data: vec![0u8; 16], // wrong discriminator, far too short
        },
    );

    let fetcher = AccountFetcher::new(source, program_id());
    let fetched = fetcher
        .fetch_many::<TraderRiskGroup>(&[address(1), address(2)])
        .await
        .unwrap();

    assert_eq!(fetched[0].as_ref().unwrap().as_ref(), Some(&good));
    match fetched[1].as_ref().unwrap_err() {
        FetchError::Decode {
            address: reported,
            source,
        } => {
            assert_eq!(*reported, address(2));
            assert!(matches!(source, CodecError::BadDiscriminator { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_many_fails_whole_call_on_transport_error() {
    let source = MockSource {
        fail: true,
        ..MockSource::default()
    };
    let fetcher = AccountFetcher::new(source, program_id());
    let err = fetcher
        .fetch_many::<TraderRiskGroup>(&[address(1), address(2)])
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn fetched_account_survives_json_interchange() {
    let value = sample_group(7);
    let trg_address = address(1);
    let mut source = MockSource::default();
    source.accounts.insert(trg_address, ledger_entry(&value));

    let fetcher = AccountFetcher::new(source, program_id());
    let fetched: TraderRiskGroup = fetcher.fetch_one(&trg_address).await.unwrap().unwrap();

    let text = serde_json::to_string(&fetched.to_json()).unwrap();
    let parsed = TraderRiskGroup::from_json_value(serde_json::from_str(&text).unwrap()).unwrap();
    assert_eq!(parsed, fetched);
    assert_eq!(parsed.encode(), value.encode());
}
