use crate::errors::CodecError;
use crate::layout::Layout;

/// Logical kind of an on-chain account, stored as a one-byte discriminant.
///
/// The set is closed; growing it is a protocol version change, so a byte or
/// name outside it is a decode error rather than a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AccountTag {
    #[default]
    Uninitialized = 0,
    MarketProductGroup = 1,
    TraderRiskGroup = 2,
    TraderPosition = 3,
    MarketProductGroupWithCombos = 4,
    ComboGroup = 5,
    Combo = 6,
    RiskProfile = 7,
}

impl AccountTag {
    pub fn from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::MarketProductGroup),
            2 => Ok(Self::TraderRiskGroup),
            3 => Ok(Self::TraderPosition),
            4 => Ok(Self::MarketProductGroupWithCombos),
            5 => Ok(Self::ComboGroup),
            6 => Ok(Self::Combo),
            7 => Ok(Self::RiskProfile),
            other => Err(CodecError::UnknownVariant(format!("account tag {other}"))),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Canonical variant name, the JSON interchange form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::MarketProductGroup => "MarketProductGroup",
            Self::TraderRiskGroup => "TraderRiskGroup",
            Self::TraderPosition => "TraderPosition",
            Self::MarketProductGroupWithCombos => "MarketProductGroupWithCombos",
            Self::ComboGroup => "ComboGroup",
            Self::Combo => "Combo",
            Self::RiskProfile => "RiskProfile",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, CodecError> {
        match name {
            "Uninitialized" => Ok(Self::Uninitialized),
            "MarketProductGroup" => Ok(Self::MarketProductGroup),
            "TraderRiskGroup" => Ok(Self::TraderRiskGroup),
            "TraderPosition" => Ok(Self::TraderPosition),
            "MarketProductGroupWithCombos" => Ok(Self::MarketProductGroupWithCombos),
            "ComboGroup" => Ok(Self::ComboGroup),
            "Combo" => Ok(Self::Combo),
            "RiskProfile" => Ok(Self::RiskProfile),
            other => Err(CodecError::UnknownVariant(format!("account tag {other:?}"))),
        }
    }
}

impl Layout for AccountTag {
    const WIDTH: usize = 1;

    fn read(buf: &[u8], offset: &mut usize) -> Result<Self, CodecError> {
        Self::from_u8(u8::read(buf, offset)?)
    }

    fn write(&self, buf: &mut [u8], offset: &mut usize) {
        self.as_u8().write(buf, offset);
    }
}
