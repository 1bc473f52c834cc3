pub mod collateral_oracle;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Coin};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    envelope::{build_execute, build_instantiate, ExecuteEnvelope, InstantiateEnvelope},
    error::ClientResult,
    query,
    transport::Transport,
};

pub use collateral_oracle::CollateralOracle;

/// Deployment of one contract, as read from a client's settings.
#[cw_serde]
pub struct ClientConfig {
    pub contract_address: String,
    pub signer: Option<String>,
}

/// Contract-agnostic half of every binding: the deployed address and the
/// signer that execute and instantiate envelopes are built for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractClient {
    pub contract_address: Addr,
    pub signer: Option<Addr>,
}

impl ContractClient {
    pub fn new(contract_address: Addr, signer: Option<Addr>) -> Self {
        ContractClient {
            contract_address,
            signer,
        }
    }

    pub fn from_config(api: &dyn Api, config: &ClientConfig) -> ClientResult<Self> {
        let contract_address = api.addr_validate(&config.contract_address)?;
        let signer = config
            .signer
            .as_deref()
            .map(|signer| api.addr_validate(signer))
            .transpose()?;
        Ok(ContractClient::new(contract_address, signer))
    }

    pub fn create_instantiate_msg<M: Serialize>(
        &self,
        init_msg: M,
        init_funds: Vec<Coin>,
        migratable: bool,
    ) -> InstantiateEnvelope<M> {
        debug!(migratable, "built instantiate envelope");
        build_instantiate(self.signer.clone(), init_msg, init_funds, migratable)
    }

    pub fn create_execute_msg<M: Serialize>(
        &self,
        execute_msg: M,
        funds: Vec<Coin>,
    ) -> ClientResult<ExecuteEnvelope<M>> {
        let envelope = build_execute(
            self.signer.clone(),
            self.contract_address.clone(),
            execute_msg,
            funds,
        );
        let tag = envelope.tag()?;
        debug!(contract = %self.contract_address, execute = %tag, "built execute envelope");
        Ok(envelope)
    }

    pub fn query<T, Q, R>(&self, transport: &T, query_msg: &Q) -> ClientResult<R>
    where
        T: Transport + ?Sized,
        Q: Serialize,
        R: DeserializeOwned,
    {
        query::query(transport, &self.contract_address, query_msg)
    }
}
