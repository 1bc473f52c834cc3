use cosmwasm_std::Addr;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{
    envelope::{build_query, envelope_key},
    error::{ClientError, ClientResult},
    transport::{Mode, Transport},
};

/// Sends `msg` to `contract` and decodes the reply as `R`.
///
/// One round trip per call. Transport failures come back as
/// [`ClientError::Transport`] untouched; a reply that does not match `R`
/// is a [`ClientError::ResponseShape`] naming the query key.
pub fn query<T, Q, R>(transport: &T, contract: &Addr, msg: &Q) -> ClientResult<R>
where
    T: Transport + ?Sized,
    Q: Serialize,
    R: DeserializeOwned,
{
    let envelope = build_query(contract.clone(), msg).to_json()?;
    let key = envelope_key(&envelope)?.to_string();
    debug!(contract = %contract, query = %key, "dispatching contract query");

    let reply = transport
        .send(contract, &envelope, Mode::Query)
        .map_err(ClientError::Transport)?;

    serde_json::from_value(reply).map_err(|source| {
        warn!(contract = %contract, query = %key, error = %source, "unexpected query reply");
        ClientError::ResponseShape { query: key, source }
    })
}
