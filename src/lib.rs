//! Client-side codecs for the accounts of an on-chain derivatives-trading
//! program: fixed binary layouts behind a shared [`Layout`]/[`ProgramAccount`]
//! framework, a JSON interchange mirror, and typed fetching over a pluggable
//! byte transport.
//!
//! [`Layout`]: crate::layout::Layout
//! [`ProgramAccount`]: crate::account::ProgramAccount

pub mod account;
pub mod discriminator;
pub mod errors;
pub mod fetch;
pub mod fractional;
mod json;
pub mod layout;
pub mod open_orders;
pub mod position;
pub mod tag;
pub mod trader_risk_group;

pub use solana_address::Address;

/// Convenient single-import surface.
pub mod prelude {
    pub use crate::account::ProgramAccount;
    pub use crate::errors::{CodecError, FetchError};
    pub use crate::fetch::{AccountFetcher, AccountSource, RawAccount};
    pub use crate::fractional::Fractional;
    pub use crate::layout::Layout;
    pub use crate::open_orders::OpenOrders;
    pub use crate::position::TraderPosition;
    pub use crate::tag::AccountTag;
    pub use crate::trader_risk_group::TraderRiskGroup;
    pub use solana_address::Address;
}
