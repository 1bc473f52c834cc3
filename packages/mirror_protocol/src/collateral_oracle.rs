use cosmwasm_schema::{cw_serde, schemars::JsonSchema, QueryResponses};
use cosmwasm_std::{Addr, Api, Decimal, StdResult};
use serde::{Deserialize, Serialize};

use crate::{
    asset::AssetInfo,
    decimal::{canonicalize, CanonicalDecimal, NumericInput},
    error::ClientResult,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub mint_contract: String,
    pub factory_contract: String,
    pub base_denom: String,
}

/// Partial config update. A `None` field is left out of the message and the
/// contract keeps its current value.
#[cw_serde]
#[derive(Default)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_denom: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
            && self.mint_contract.is_none()
            && self.factory_contract.is_none()
            && self.base_denom.is_none()
    }

    /// Merges the update over `current`, validating any new address.
    pub fn apply(&self, api: &dyn Api, current: ConfigResponse) -> StdResult<ConfigResponse> {
        let validate = |addr: &Option<String>, current: Addr| -> StdResult<Addr> {
            match addr {
                Some(addr) => api.addr_validate(addr),
                None => Ok(current),
            }
        };
        Ok(ConfigResponse {
            owner: validate(&self.owner, current.owner)?,
            mint_contract: validate(&self.mint_contract, current.mint_contract)?,
            factory_contract: validate(&self.factory_contract, current.factory_contract)?,
            base_denom: self.base_denom.clone().unwrap_or(current.base_denom),
        })
    }
}

/// Where the oracle reads a collateral asset's price from.
#[cw_serde]
pub enum SourceType {
    TerraOracle { terra_oracle_query: String },
    Terraswap { terraswap_query: String },
    BandOracle { band_oracle_query: String },
    FixedPrice { price: CanonicalDecimal },
}

impl SourceType {
    pub fn terra_oracle(query: impl Into<String>) -> Self {
        SourceType::TerraOracle {
            terra_oracle_query: query.into(),
        }
    }

    pub fn terraswap(query: impl Into<String>) -> Self {
        SourceType::Terraswap {
            terraswap_query: query.into(),
        }
    }

    pub fn band_oracle(query: impl Into<String>) -> Self {
        SourceType::BandOracle {
            band_oracle_query: query.into(),
        }
    }

    /// Fixed prices are canonicalized like every other decimal field.
    pub fn fixed_price(price: impl Into<NumericInput>) -> ClientResult<Self> {
        Ok(SourceType::FixedPrice {
            price: canonicalize("price", price)?,
        })
    }

    /// The wire key of the active variant, also reported as `source_type` by
    /// the collateral info queries.
    pub fn tag(&self) -> &'static str {
        match self {
            SourceType::TerraOracle { .. } => "terra_oracle",
            SourceType::Terraswap { .. } => "terraswap",
            SourceType::BandOracle { .. } => "band_oracle",
            SourceType::FixedPrice { .. } => "fixed_price",
        }
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateConfig(ConfigUpdate),
    RegisterCollateralAsset {
        asset: AssetInfo,
        price_source: SourceType,
        collateral_premium: CanonicalDecimal,
    },
    RevokeCollateralAsset {
        asset: AssetInfo,
    },
    UpdateCollateralPremium {
        asset: AssetInfo,
        collateral_premium: CanonicalDecimal,
    },
    UpdateCollateralPriceSource {
        asset: AssetInfo,
        price_source: SourceType,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(CollateralPriceResponse)]
    CollateralPrice { asset: String },
    #[returns(CollateralInfoResponse)]
    CollateralAssetInfo { asset: String },
    #[returns(CollateralInfosResponse)]
    CollateralAssetInfos {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[schemars(crate = "::cosmwasm_schema::schemars")]
pub struct ConfigResponse {
    pub owner: Addr,
    pub mint_contract: Addr,
    pub factory_contract: Addr,
    pub base_denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[schemars(crate = "::cosmwasm_schema::schemars")]
pub struct CollateralPriceResponse {
    pub asset: String,
    pub rate: Decimal,
    pub last_updated: u64,
    pub collateral_premium: Decimal,
    pub is_revoked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[schemars(crate = "::cosmwasm_schema::schemars")]
pub struct CollateralInfoResponse {
    pub asset: String,
    pub collateral_premium: Decimal,
    pub source_type: String,
    pub is_revoked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[schemars(crate = "::cosmwasm_schema::schemars")]
pub struct CollateralInfosResponse {
    pub collaterals: Vec<CollateralInfoResponse>,
}
