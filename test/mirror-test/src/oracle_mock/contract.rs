use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::oracle_mock::{
    state::{load_config, save_config},
    ContractError,
};
use mirror_protocol::collateral_oracle::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:mock-collateral-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = ConfigResponse {
        owner: deps.api.addr_validate(&msg.owner)?,
        mint_contract: deps.api.addr_validate(&msg.mint_contract)?,
        factory_contract: deps.api.addr_validate(&msg.factory_contract)?,
        base_denom: msg.base_denom,
    };
    save_config(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    match msg {
        ExecuteMsg::UpdateConfig(update) => execute::update_config(deps, config, update),
        ExecuteMsg::RegisterCollateralAsset {
            asset,
            price_source,
            collateral_premium,
        } => execute::register_collateral_asset(
            deps,
            env,
            asset,
            price_source,
            collateral_premium.decimal(),
        ),
        ExecuteMsg::RevokeCollateralAsset { asset } => {
            execute::revoke_collateral_asset(deps, asset)
        }
        ExecuteMsg::UpdateCollateralPremium {
            asset,
            collateral_premium,
        } => execute::update_collateral_premium(deps, asset, collateral_premium.decimal()),
        ExecuteMsg::UpdateCollateralPriceSource {
            asset,
            price_source,
        } => execute::update_collateral_price_source(deps, env, asset, price_source),
    }
}

pub mod execute {
    use cosmwasm_std::{Decimal, Storage};

    use mirror_protocol::{
        asset::AssetInfo,
        collateral_oracle::{ConfigUpdate, SourceType},
    };

    use crate::oracle_mock::state::{load_collateral, save_collateral, CollateralAsset};

    use super::*;

    pub fn update_config(
        deps: DepsMut,
        config: ConfigResponse,
        update: ConfigUpdate,
    ) -> Result<Response, ContractError> {
        let config = update.apply(deps.api, config)?;
        save_config(deps.storage, &config)?;
        Ok(Response::new().add_attribute("method", "update_config"))
    }

    pub fn register_collateral_asset(
        deps: DepsMut,
        env: Env,
        asset: AssetInfo,
        price_source: SourceType,
        collateral_premium: Decimal,
    ) -> Result<Response, ContractError> {
        let key = asset.to_string();
        if load_collateral(deps.storage, &key)?.is_some() {
            return Err(ContractError::AlreadyRegistered { asset: key });
        }
        save_collateral(
            deps.storage,
            &CollateralAsset {
                asset,
                price_source,
                collateral_premium,
                is_revoked: false,
                last_updated: env.block.time.seconds(),
            },
        )?;
        Ok(Response::new()
            .add_attribute("method", "register_collateral_asset")
            .add_attribute("asset", key))
    }

    pub fn revoke_collateral_asset(
        deps: DepsMut,
        asset: AssetInfo,
    ) -> Result<Response, ContractError> {
        let mut collateral = load_registered(deps.storage, &asset)?;
        collateral.is_revoked = true;
        save_collateral(deps.storage, &collateral)?;
        Ok(Response::new()
            .add_attribute("method", "revoke_collateral_asset")
            .add_attribute("asset", asset.to_string()))
    }

    pub fn update_collateral_premium(
        deps: DepsMut,
        asset: AssetInfo,
        collateral_premium: Decimal,
    ) -> Result<Response, ContractError> {
        let mut collateral = load_registered(deps.storage, &asset)?;
        collateral.collateral_premium = collateral_premium;
        save_collateral(deps.storage, &collateral)?;
        Ok(Response::new()
            .add_attribute("method", "update_collateral_premium")
            .add_attribute("collateral_premium", collateral_premium.to_string()))
    }

    pub fn update_collateral_price_source(
        deps: DepsMut,
        env: Env,
        asset: AssetInfo,
        price_source: SourceType,
    ) -> Result<Response, ContractError> {
        let mut collateral = load_registered(deps.storage, &asset)?;
        collateral.price_source = price_source;
        collateral.last_updated = env.block.time.seconds();
        save_collateral(deps.storage, &collateral)?;
        Ok(Response::new()
            .add_attribute("method", "update_collateral_price_source")
            .add_attribute("source_type", collateral.price_source.tag()))
    }

    fn load_registered(
        storage: &dyn Storage,
        asset: &AssetInfo,
    ) -> Result<CollateralAsset, ContractError> {
        load_collateral(storage, &asset.to_string())?.ok_or_else(|| {
            ContractError::NotRegistered {
                asset: asset.to_string(),
            }
        })
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&load_config(deps.storage)?),
        QueryMsg::CollateralPrice { asset } => to_binary(&query::collateral_price(deps, asset)?),
        QueryMsg::CollateralAssetInfo { asset } => {
            to_binary(&query::collateral_asset_info(deps, asset)?)
        }
        QueryMsg::CollateralAssetInfos {} => to_binary(&query::collateral_asset_infos(deps)?),
    }
}

pub mod query {
    use cosmwasm_std::{Order, StdError};

    use mirror_protocol::collateral_oracle::{
        CollateralInfoResponse, CollateralInfosResponse, CollateralPriceResponse, SourceType,
    };

    use crate::oracle_mock::state::{load_collateral, CollateralAsset, COLLATERALS};

    use super::*;

    fn load(deps: Deps, asset: &str) -> StdResult<CollateralAsset> {
        load_collateral(deps.storage, asset)?
            .ok_or_else(|| StdError::not_found(format!("collateral asset {asset}")))
    }

    fn info(collateral: CollateralAsset) -> CollateralInfoResponse {
        CollateralInfoResponse {
            asset: collateral.asset.to_string(),
            collateral_premium: collateral.collateral_premium,
            source_type: collateral.price_source.tag().to_string(),
            is_revoked: collateral.is_revoked,
        }
    }

    pub fn collateral_price(deps: Deps, asset: String) -> StdResult<CollateralPriceResponse> {
        let collateral = load(deps, &asset)?;
        let rate = match &collateral.price_source {
            SourceType::FixedPrice { price } => price.decimal(),
            source => {
                return Err(StdError::generic_err(format!(
                    "{} feed is not available",
                    source.tag()
                )))
            }
        };
        Ok(CollateralPriceResponse {
            asset,
            rate,
            last_updated: collateral.last_updated,
            collateral_premium: collateral.collateral_premium,
            is_revoked: collateral.is_revoked,
        })
    }

    pub fn collateral_asset_info(deps: Deps, asset: String) -> StdResult<CollateralInfoResponse> {
        load(deps, &asset).map(info)
    }

    pub fn collateral_asset_infos(deps: Deps) -> StdResult<CollateralInfosResponse> {
        let collaterals = COLLATERALS
            .range(deps.storage, None, None, Order::Ascending)
            .map(|item| item.map(|(_, collateral)| info(collateral)))
            .collect::<StdResult<Vec<_>>>()?;
        Ok(CollateralInfosResponse { collaterals })
    }
}
