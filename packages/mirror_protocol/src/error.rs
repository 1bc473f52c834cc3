use cosmwasm_std::StdError;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid numeric input for {field}: {input:?} ({kind})")]
    InvalidNumericInput {
        field: &'static str,
        input: String,
        kind: NumericErrorKind,
    },

    #[error("Unexpected {query} response shape: {source}")]
    ResponseShape {
        query: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Envelope must have exactly one top-level key, found {found}")]
    MalformedEnvelope { found: String },

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(anyhow::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericErrorKind {
    #[error("not a base-10 number")]
    NotANumber,
    #[error("negative value")]
    Negative,
    #[error("not a finite number")]
    NonFinite,
    #[error("more than 18 fractional digits")]
    TooPrecise,
    #[error("exceeds the decimal range")]
    OutOfRange,
}
