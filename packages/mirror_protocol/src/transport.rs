use anyhow::{anyhow, bail};
use cosmwasm_std::{
    to_vec, Addr, Binary, ContractResult, CustomQuery, QuerierWrapper, QueryRequest, SystemResult,
    WasmQuery,
};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Instantiate,
    Execute,
    Query,
}

/// Node transport. Implementations own connection handling, signing,
/// timeouts and retries; this crate only hands them encoded envelopes.
pub trait Transport {
    fn send(&self, contract: &Addr, envelope: &Value, mode: Mode) -> anyhow::Result<Value>;
}

impl<F> Transport for F
where
    F: Fn(&Addr, &Value, Mode) -> anyhow::Result<Value>,
{
    fn send(&self, contract: &Addr, envelope: &Value, mode: Mode) -> anyhow::Result<Value> {
        self(contract, envelope, mode)
    }
}

/// Smart queries through a contract's (or a test chain's) querier.
impl<C: CustomQuery> Transport for QuerierWrapper<'_, C> {
    fn send(&self, contract: &Addr, envelope: &Value, mode: Mode) -> anyhow::Result<Value> {
        if mode != Mode::Query {
            bail!("querier cannot send {mode:?} messages");
        }
        let request: QueryRequest<C> = WasmQuery::Smart {
            contract_addr: contract.to_string(),
            msg: Binary::from(serde_json::to_vec(envelope)?),
        }
        .into();
        match self.raw_query(&to_vec(&request)?) {
            SystemResult::Err(err) => Err(anyhow!("querier system error: {err}")),
            SystemResult::Ok(ContractResult::Err(err)) => {
                Err(anyhow!("query to {contract} failed: {err}"))
            }
            SystemResult::Ok(ContractResult::Ok(data)) => Ok(serde_json::from_slice(&data)?),
        }
    }
}
