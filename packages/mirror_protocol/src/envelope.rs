use cosmwasm_std::{to_binary, Addr, Coin, CosmosMsg, WasmMsg};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Instantiate payload plus the metadata the broadcaster needs.
///
/// `migratable` is carried as-is; only [`InstantiateEnvelope::into_cosmos_msg`]
/// reads it, to make the sender the contract admin.
#[derive(Clone, Debug, PartialEq)]
pub struct InstantiateEnvelope<M> {
    pub sender: Option<Addr>,
    pub msg: M,
    pub funds: Vec<Coin>,
    pub migratable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExecuteEnvelope<M> {
    pub sender: Option<Addr>,
    pub contract: Addr,
    pub msg: M,
    pub funds: Vec<Coin>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryEnvelope<M> {
    pub contract: Addr,
    pub msg: M,
}

pub fn build_instantiate<M>(
    sender: Option<Addr>,
    msg: M,
    funds: Vec<Coin>,
    migratable: bool,
) -> InstantiateEnvelope<M> {
    InstantiateEnvelope {
        sender,
        msg,
        funds,
        migratable,
    }
}

pub fn build_execute<M>(
    sender: Option<Addr>,
    contract: Addr,
    msg: M,
    funds: Vec<Coin>,
) -> ExecuteEnvelope<M> {
    ExecuteEnvelope {
        sender,
        contract,
        msg,
        funds,
    }
}

pub fn build_query<M>(contract: Addr, msg: M) -> QueryEnvelope<M> {
    QueryEnvelope { contract, msg }
}

impl<M: Serialize> InstantiateEnvelope<M> {
    pub fn to_json(&self) -> ClientResult<Value> {
        Ok(serde_json::to_value(&self.msg)?)
    }

    pub fn into_cosmos_msg(
        self,
        code_id: u64,
        label: impl Into<String>,
    ) -> ClientResult<CosmosMsg> {
        let admin = match self.migratable {
            true => self.sender.map(|sender| sender.to_string()),
            false => None,
        };
        Ok(CosmosMsg::Wasm(WasmMsg::Instantiate {
            admin,
            code_id,
            msg: to_binary(&self.msg)?,
            funds: self.funds,
            label: label.into(),
        }))
    }
}

impl<M: Serialize> ExecuteEnvelope<M> {
    pub fn to_json(&self) -> ClientResult<Value> {
        Ok(serde_json::to_value(&self.msg)?)
    }

    /// The operation key, e.g. `register_collateral_asset`.
    pub fn tag(&self) -> ClientResult<String> {
        envelope_key(&self.to_json()?).map(str::to_string)
    }

    pub fn into_cosmos_msg(self) -> ClientResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract.into_string(),
            msg: to_binary(&self.msg)?,
            funds: self.funds,
        }))
    }
}

impl<M: Serialize> QueryEnvelope<M> {
    pub fn to_json(&self) -> ClientResult<Value> {
        Ok(serde_json::to_value(&self.msg)?)
    }

    pub fn tag(&self) -> ClientResult<String> {
        envelope_key(&self.to_json()?).map(str::to_string)
    }
}

/// Returns the single top-level key of an encoded execute or query message.
pub fn envelope_key(value: &Value) -> ClientResult<&str> {
    match value.as_object() {
        Some(object) if object.len() == 1 => {
            Ok(object.keys().next().map(String::as_str).unwrap_or_default())
        }
        Some(object) => Err(ClientError::MalformedEnvelope {
            found: format!(
                "{} keys {:?}",
                object.len(),
                object.keys().collect::<Vec<_>>()
            ),
        }),
        None => Err(ClientError::MalformedEnvelope {
            found: format!("non-object {value}"),
        }),
    }
}
