pub mod asset;
pub mod client;
pub mod collateral_oracle;
pub mod decimal;
pub mod envelope;
mod error;
pub mod query;
pub mod transport;

pub use crate::error::{ClientError, ClientResult, NumericErrorKind};
