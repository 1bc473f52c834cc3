use std::fmt;

use cosmwasm_schema::cw_serde;

#[cw_serde]
pub enum AssetInfo {
    Token { contract_addr: String },
    NativeToken { denom: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::NativeToken {
            denom: denom.into(),
        }
    }

    pub fn token(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Token {
            contract_addr: contract_addr.into(),
        }
    }
}

/// Renders the bare denom or token address, the form the oracle queries key on.
impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Token { contract_addr } => f.write_str(contract_addr),
            AssetInfo::NativeToken { denom } => f.write_str(denom),
        }
    }
}
