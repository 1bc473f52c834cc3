use cosmwasm_std::{Addr, Api};

use crate::{
    asset::AssetInfo,
    collateral_oracle::{
        CollateralInfoResponse, CollateralInfosResponse, CollateralPriceResponse, ConfigResponse,
        ConfigUpdate, ExecuteMsg, InstantiateMsg, QueryMsg, SourceType,
    },
    decimal::{canonicalize, NumericInput},
    envelope::{ExecuteEnvelope, InstantiateEnvelope},
    error::ClientResult,
    transport::Transport,
};

use super::{ClientConfig, ContractClient};

/// Binding for a deployed collateral oracle contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollateralOracle {
    client: ContractClient,
}

impl CollateralOracle {
    pub fn new(contract_address: Addr, signer: Option<Addr>) -> Self {
        CollateralOracle {
            client: ContractClient::new(contract_address, signer),
        }
    }

    pub fn from_config(api: &dyn Api, config: &ClientConfig) -> ClientResult<Self> {
        Ok(CollateralOracle {
            client: ContractClient::from_config(api, config)?,
        })
    }

    pub fn client(&self) -> &ContractClient {
        &self.client
    }

    pub fn contract_address(&self) -> &Addr {
        &self.client.contract_address
    }

    pub fn instantiate(
        &self,
        init_msg: InstantiateMsg,
        migratable: bool,
    ) -> InstantiateEnvelope<InstantiateMsg> {
        self.client.create_instantiate_msg(init_msg, vec![], migratable)
    }

    pub fn update_config(&self, update: ConfigUpdate) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.execute(ExecuteMsg::UpdateConfig(update))
    }

    pub fn register_collateral_asset(
        &self,
        asset: AssetInfo,
        price_source: SourceType,
        collateral_premium: impl Into<NumericInput>,
    ) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.execute(ExecuteMsg::RegisterCollateralAsset {
            asset,
            price_source,
            collateral_premium: canonicalize("collateral_premium", collateral_premium)?,
        })
    }

    pub fn revoke_collateral_asset(
        &self,
        asset: AssetInfo,
    ) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.execute(ExecuteMsg::RevokeCollateralAsset { asset })
    }

    pub fn update_collateral_premium(
        &self,
        asset: AssetInfo,
        collateral_premium: impl Into<NumericInput>,
    ) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.execute(ExecuteMsg::UpdateCollateralPremium {
            asset,
            collateral_premium: canonicalize("collateral_premium", collateral_premium)?,
        })
    }

    pub fn update_collateral_price_source(
        &self,
        asset: AssetInfo,
        price_source: SourceType,
    ) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.execute(ExecuteMsg::UpdateCollateralPriceSource {
            asset,
            price_source,
        })
    }

    pub fn config<T: Transport + ?Sized>(&self, transport: &T) -> ClientResult<ConfigResponse> {
        self.client.query(transport, &QueryMsg::Config {})
    }

    pub fn collateral_price<T: Transport + ?Sized>(
        &self,
        transport: &T,
        asset: impl Into<String>,
    ) -> ClientResult<CollateralPriceResponse> {
        self.client.query(
            transport,
            &QueryMsg::CollateralPrice {
                asset: asset.into(),
            },
        )
    }

    pub fn collateral_asset_info<T: Transport + ?Sized>(
        &self,
        transport: &T,
        asset: impl Into<String>,
    ) -> ClientResult<CollateralInfoResponse> {
        self.client.query(
            transport,
            &QueryMsg::CollateralAssetInfo {
                asset: asset.into(),
            },
        )
    }

    pub fn collateral_asset_infos<T: Transport + ?Sized>(
        &self,
        transport: &T,
    ) -> ClientResult<CollateralInfosResponse> {
        self.client.query(transport, &QueryMsg::CollateralAssetInfos {})
    }

    fn execute(&self, msg: ExecuteMsg) -> ClientResult<ExecuteEnvelope<ExecuteMsg>> {
        self.client.create_execute_msg(msg, vec![])
    }
}
