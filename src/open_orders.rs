use serde::{Deserialize, Serialize};

use crate::errors::CodecError;
use crate::json::parse_int;
use crate::layout::Layout;

pub const OPEN_ORDERS_RESERVED_LEN: usize = 40;
pub const OPEN_ORDERS_LEN: usize = 8 * 3 + OPEN_ORDERS_RESERVED_LEN;

/// Resting-order bookkeeping carried inside the trader account: a free-list
/// header plus a reserved tail the program may repurpose. Both halves
/// round-trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOrders {
    pub free_list_head: u64,
    pub total_open_orders: u64,
    pub max_open_orders: u64,
    pub reserved: [u8; OPEN_ORDERS_RESERVED_LEN],
}

impl Default for OpenOrders {
    fn default() -> Self {
        Self {
            free_list_head: 0,
            total_open_orders: 0,
            max_open_orders: 0,
            reserved: [0u8; OPEN_ORDERS_RESERVED_LEN],
        }
    }
}

impl Layout for OpenOrders {
    const WIDTH: usize = OPEN_ORDERS_LEN;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        Ok(Self {
            free_list_head: u64::read(buf, offset)?,
            total_open_orders: u64::read(buf, offset)?,
            max_open_orders: u64::read(buf, offset)?,
            reserved: <[u8; OPEN_ORDERS_RESERVED_LEN]>::read(buf, offset)?,
        })
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        self.free_list_head.write(buf, offset);
        self.total_open_orders.write(buf, offset);
        self.max_open_orders.write(buf, offset);
        self.reserved.write(buf, offset);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersJson {
    pub free_list_head: String,
    pub total_open_orders: String,
    pub max_open_orders: String,
    pub reserved: Vec<u8>,
}

impl OpenOrders {
    pub fn to_json(&self) -> OpenOrdersJson {
        OpenOrdersJson {
            free_list_head: self.free_list_head.to_string(),
            total_open_orders: self.total_open_orders.to_string(),
            max_open_orders: self.max_open_orders.to_string(),
            reserved: self.reserved.to_vec(),
        }
    }

    pub fn from_json(json: &OpenOrdersJson) -> Result<Self, CodecError> {
        if json.reserved.len() != OPEN_ORDERS_RESERVED_LEN {
            return Err(CodecError::MalformedJson(format!(
                "openOrders.reserved must have {OPEN_ORDERS_RESERVED_LEN} entries, got {}",
                json.reserved.len()
            )));
        }
        let mut reserved = [0u8; OPEN_ORDERS_RESERVED_LEN];
        reserved.copy_from_slice(&json.reserved);
        Ok(Self {
            free_list_head: parse_int(&json.free_list_head)?,
            total_open_orders: parse_int(&json.total_open_orders)?,
            max_open_orders: parse_int(&json.max_open_orders)?,
            reserved,
        })
    }
}
