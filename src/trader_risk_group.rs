use serde::{Deserialize, Serialize};
use solana_address::Address;

use crate::account::ProgramAccount;
use crate::discriminator::DISCRIMINATOR_LEN;
use crate::errors::CodecError;
use crate::fractional::{Fractional, FRACTIONAL_LEN};
use crate::json::{parse_address, parse_int};
use crate::layout::{Layout, PUBKEY_LEN};
use crate::open_orders::{OpenOrders, OpenOrdersJson, OPEN_ORDERS_LEN};
use crate::position::{TraderPosition, TraderPositionJson, TRADER_POSITION_LEN};
use crate::tag::AccountTag;

pub const MAX_ACTIVE_PRODUCTS: usize = 128;
pub const MAX_TRADER_POSITIONS: usize = 16;

pub const TRADER_RISK_GROUP_BODY_LEN: usize = 1
    + PUBKEY_LEN * 2
    + MAX_ACTIVE_PRODUCTS
    + FRACTIONAL_LEN * 5
    + 8
    + 4
    + 4
    + TRADER_POSITION_LEN * MAX_TRADER_POSITIONS
    + PUBKEY_LEN * 2
    + 16
    + OPEN_ORDERS_LEN;
pub const TRADER_RISK_GROUP_ACCOUNT_LEN: usize = DISCRIMINATOR_LEN + TRADER_RISK_GROUP_BODY_LEN;

/// A trader's risk account: balances, fee rates, the fixed position array,
/// and open-order bookkeeping. Field order is the wire contract.
///
/// A decoded value is an immutable snapshot of ledger state; changes on
/// chain require a fresh fetch and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraderRiskGroup {
    pub tag: AccountTag,
    pub market_product_group: Address,
    pub owner: Address,
    pub active_products: [u8; MAX_ACTIVE_PRODUCTS],
    pub total_deposited: Fractional,
    pub total_withdrawn: Fractional,
    pub cash_balance: Fractional,
    pub pending_cash_balance: Fractional,
    pub pending_fees: Fractional,
    pub valid_until: i64,
    pub maker_fee_bps: i32,
    pub taker_fee_bps: i32,
    pub trader_positions: [TraderPosition; MAX_TRADER_POSITIONS],
    pub risk_state_account: Address,
    pub fee_state_account: Address,
    pub client_order_id: u128,
    pub open_orders: OpenOrders,
}

impl Default for TraderRiskGroup {
    fn default() -> Self {
        let zero = Address::new_from_array([0u8; PUBKEY_LEN]);
        Self {
            tag: AccountTag::default(),
            market_product_group: zero,
            owner: zero,
            active_products: [0u8; MAX_ACTIVE_PRODUCTS],
            total_deposited: Fractional::ZERO,
            total_withdrawn: Fractional::ZERO,
            cash_balance: Fractional::ZERO,
            pending_cash_balance: Fractional::ZERO,
            pending_fees: Fractional::ZERO,
            valid_until: 0,
            maker_fee_bps: 0,
            taker_fee_bps: 0,
            trader_positions: [TraderPosition::default(); MAX_TRADER_POSITIONS],
            risk_state_account: zero,
            fee_state_account: zero,
            client_order_id: 0,
            open_orders: OpenOrders::default(),
        }
    }
}

impl Layout for TraderRiskGroup {
    const WIDTH: usize = TRADER_RISK_GROUP_BODY_LEN;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        Ok(Self {
            tag: AccountTag::read(buf, offset)?,
            market_product_group: Address::read(buf, offset)?,
            owner: Address::read(buf, offset)?,
            active_products: <[u8; MAX_ACTIVE_PRODUCTS]>::read(buf, offset)?,
            total_deposited: Fractional::read(buf, offset)?,
            total_withdrawn: Fractional::read(buf, offset)?,
            cash_balance: Fractional::read(buf, offset)?,
            pending_cash_balance: Fractional::read(buf, offset)?,
            pending_fees: Fractional::read(buf, offset)?,
            valid_until: i64::read(buf, offset)?,
            maker_fee_bps: i32::read(buf, offset)?,
            taker_fee_bps: i32::read(buf, offset)?,
            trader_positions: <[TraderPosition; MAX_TRADER_POSITIONS]>::read(buf, offset)?,
            risk_state_account: Address::read(buf, offset)?,
            fee_state_account: Address::read(buf, offset)?,
            client_order_id: u128::read(buf, offset)?,
            open_orders: OpenOrders::read(buf, offset)?,
        })
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        self.tag.write(buf, offset);
        self.market_product_group.write(buf, offset);
        self.owner.write(buf, offset);
        self.active_products.write(buf, offset);
        self.total_deposited.write(buf, offset);
        self.total_withdrawn.write(buf, offset);
        self.cash_balance.write(buf, offset);
        self.pending_cash_balance.write(buf, offset);
        self.pending_fees.write(buf, offset);
        self.valid_until.write(buf, offset);
        self.maker_fee_bps.write(buf, offset);
        self.taker_fee_bps.write(buf, offset);
        self.trader_positions.write(buf, offset);
        self.risk_state_account.write(buf, offset);
        self.fee_state_account.write(buf, offset);
        self.client_order_id.write(buf, offset);
        self.open_orders.write(buf, offset);
    }
}

impl ProgramAccount for TraderRiskGroup {
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [121, 228, 110, 56, 254, 207, 245, 168];
}

impl TraderRiskGroup {
    /// Finds the position slot carrying `product_key`, skipping inactive
    /// slots.
    pub fn position_for_product(&self, product_key: &Address) -> Option<&TraderPosition> {
        self.trader_positions
            .iter()
            .find(|p| p.tag != AccountTag::Uninitialized && p.product_key == *product_key)
    }

    pub fn to_json(&self) -> TraderRiskGroupJson {
        TraderRiskGroupJson {
            tag: self.tag.name().to_string(),
            market_product_group: self.market_product_group.to_string(),
            owner: self.owner.to_string(),
            active_products: self.active_products.to_vec(),
            total_deposited: self.total_deposited.to_decimal_string(),
            total_withdrawn: self.total_withdrawn.to_decimal_string(),
            cash_balance: self.cash_balance.to_decimal_string(),
            pending_cash_balance: self.pending_cash_balance.to_decimal_string(),
            pending_fees: self.pending_fees.to_decimal_string(),
            valid_until: self.valid_until.to_string(),
            maker_fee_bps: self.maker_fee_bps,
            taker_fee_bps: self.taker_fee_bps,
            trader_positions: self.trader_positions.iter().map(|p| p.to_json()).collect(),
            risk_state_account: self.risk_state_account.to_string(),
            fee_state_account: self.fee_state_account.to_string(),
            client_order_id: self.client_order_id.to_string(),
            open_orders: self.open_orders.to_json(),
        }
    }

    pub fn from_json(json: &TraderRiskGroupJson) -> Result<Self, CodecError> {
        if json.active_products.len() != MAX_ACTIVE_PRODUCTS {
            return Err(CodecError::MalformedJson(format!(
                "activeProducts must have {MAX_ACTIVE_PRODUCTS} entries, got {}",
                json.active_products.len()
            )));
        }
        if json.trader_positions.len() != MAX_TRADER_POSITIONS {
            return Err(CodecError::MalformedJson(format!(
                "traderPositions must have {MAX_TRADER_POSITIONS} entries, got {}",
                json.trader_positions.len()
            )));
        }
        let mut active_products = [0u8; MAX_ACTIVE_PRODUCTS];
        active_products.copy_from_slice(&json.active_products);
        let mut trader_positions = [TraderPosition::default(); MAX_TRADER_POSITIONS];
        for (slot, item) in trader_positions.iter_mut().zip(&json.trader_positions) {
            *slot = TraderPosition::from_json(item)?;
        }
        Ok(Self {
            tag: AccountTag::from_name(&json.tag)?,
            market_product_group: parse_address(&json.market_product_group)?,
            owner: parse_address(&json.owner)?,
            active_products,
            total_deposited: Fractional::from_decimal_str(&json.total_deposited)?,
            total_withdrawn: Fractional::from_decimal_str(&json.total_withdrawn)?,
            cash_balance: Fractional::from_decimal_str(&json.cash_balance)?,
            pending_cash_balance: Fractional::from_decimal_str(&json.pending_cash_balance)?,
            pending_fees: Fractional::from_decimal_str(&json.pending_fees)?,
            valid_until: parse_int(&json.valid_until)?,
            maker_fee_bps: json.maker_fee_bps,
            taker_fee_bps: json.taker_fee_bps,
            trader_positions,
            risk_state_account: parse_address(&json.risk_state_account)?,
            fee_state_account: parse_address(&json.fee_state_account)?,
            client_order_id: parse_int(&json.client_order_id)?,
            open_orders: OpenOrders::from_json(&json.open_orders)?,
        })
    }

    /// Decodes the interchange object from a loose JSON value, checking the
    /// shape before field parsing.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, CodecError> {
        let json: TraderRiskGroupJson = serde_json::from_value(value)
            .map_err(|err| CodecError::MalformedJson(err.to_string()))?;
        Self::from_json(&json)
    }
}

/// JSON-safe mirror of [`TraderRiskGroup`]. Addresses and 64-bit-plus
/// integers travel as strings; fee rates fit a JSON number and stay numeric;
/// fixed arrays keep their length and order, inactive slots included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderRiskGroupJson {
    pub tag: String,
    pub market_product_group: String,
    pub owner: String,
    pub active_products: Vec<u8>,
    pub total_deposited: String,
    pub total_withdrawn: String,
    pub cash_balance: String,
    pub pending_cash_balance: String,
    pub pending_fees: String,
    pub valid_until: String,
    pub maker_fee_bps: i32,
    pub taker_fee_bps: i32,
    pub trader_positions: Vec<TraderPositionJson>,
    pub risk_state_account: String,
    pub fee_state_account: String,
    pub client_order_id: String,
    pub open_orders: OpenOrdersJson,
}
