use serde::{Deserialize, Serialize};
use solana_address::Address;

use crate::errors::CodecError;
use crate::fractional::{Fractional, FRACTIONAL_LEN};
use crate::json::{parse_address, parse_int};
use crate::layout::{Layout, PUBKEY_LEN};
use crate::tag::AccountTag;

pub const TRADER_POSITION_LEN: usize = 1 + PUBKEY_LEN + FRACTIONAL_LEN * 2 + 8 + FRACTIONAL_LEN * 2;

/// One slot in a trading account's fixed position array.
///
/// Slots past the account's active count stay zeroed on chain and must
/// round-trip byte-for-byte; the zero padding is wire format, not garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraderPosition {
    pub tag: AccountTag,
    pub product_key: Address,
    pub position: Fractional,
    pub pending_position: Fractional,
    pub product_index: u64,
    pub last_cum_funding_snapshot: Fractional,
    pub last_social_loss_snapshot: Fractional,
}

impl Default for TraderPosition {
    fn default() -> Self {
        Self {
            tag: AccountTag::Uninitialized,
            product_key: Address::new_from_array([0u8; PUBKEY_LEN]),
            position: Fractional::ZERO,
            pending_position: Fractional::ZERO,
            product_index: 0,
            last_cum_funding_snapshot: Fractional::ZERO,
            last_social_loss_snapshot: Fractional::ZERO,
        }
    }
}

impl Layout for TraderPosition {
    const WIDTH: usize = TRADER_POSITION_LEN;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        Ok(Self {
            tag: AccountTag::read(buf, offset)?,
            product_key: Address::read(buf, offset)?,
            position: Fractional::read(buf, offset)?,
            pending_position: Fractional::read(buf, offset)?,
            product_index: u64::read(buf, offset)?,
            last_cum_funding_snapshot: Fractional::read(buf, offset)?,
            last_social_loss_snapshot: Fractional::read(buf, offset)?,
        })
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        self.tag.write(buf, offset);
        self.product_key.write(buf, offset);
        self.position.write(buf, offset);
        self.pending_position.write(buf, offset);
        self.product_index.write(buf, offset);
        self.last_cum_funding_snapshot.write(buf, offset);
        self.last_social_loss_snapshot.write(buf, offset);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderPositionJson {
    pub tag: String,
    pub product_key: String,
    pub position: String,
    pub pending_position: String,
    pub product_index: String,
    pub last_cum_funding_snapshot: String,
    pub last_social_loss_snapshot: String,
}

impl TraderPosition {
    pub fn to_json(&self) -> TraderPositionJson {
        TraderPositionJson {
            tag: self.tag.name().to_string(),
            product_key: self.product_key.to_string(),
            position: self.position.to_decimal_string(),
            pending_position: self.pending_position.to_decimal_string(),
            product_index: self.product_index.to_string(),
            last_cum_funding_snapshot: self.last_cum_funding_snapshot.to_decimal_string(),
            last_social_loss_snapshot: self.last_social_loss_snapshot.to_decimal_string(),
        }
    }

    pub fn from_json(json: &TraderPositionJson) -> Result<Self, CodecError> {
        Ok(Self {
            tag: AccountTag::from_name(&json.tag)?,
            product_key: parse_address(&json.product_key)?,
            position: Fractional::from_decimal_str(&json.position)?,
            pending_position: Fractional::from_decimal_str(&json.pending_position)?,
            product_index: parse_int(&json.product_index)?,
            last_cum_funding_snapshot: Fractional::from_decimal_str(
                &json.last_cum_funding_snapshot,
            )?,
            last_social_loss_snapshot: Fractional::from_decimal_str(
                &json.last_social_loss_snapshot,
            )?,
        })
    }
}
