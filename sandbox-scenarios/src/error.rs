use std::{fmt::Display, path::PathBuf, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("invalid endpoint `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("sandbox at {url} not ready after {waited_secs}s: {reason}")]
    SandboxNotReady {
        url: String,
        waited_secs: u64,
        reason: String,
    },
    #[error("invalid genesis credentials: {0}")]
    GenesisCredentials(String),
    #[error("signer error: {0}")]
    Signer(String),
    #[error("failed to create account {account_id}: {reason}")]
    AccountCreation { account_id: String, reason: String },
    #[error("failed to read contract code from {}: {source}", path.display())]
    ContractCode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("deployment of {contract_id} failed: {reason}")]
    Deployment { contract_id: String, reason: String },
    #[error("{method} on {contract_id} failed: {reason}")]
    Transaction {
        contract_id: String,
        method: String,
        reason: String,
    },
    #[error("view {method} on {contract_id} failed: {reason}")]
    View {
        contract_id: String,
        method: String,
        reason: String,
    },
    #[error("l1 client error: {0}")]
    L1(String),
}

pub type Result<T, E = ScenarioError> = std::result::Result<T, E>;

/// Parse `raw` into whatever type the caller needs, mapping the parse failure with `on_error`.
pub(crate) fn parse_with<T>(raw: &str, on_error: impl FnOnce(String) -> ScenarioError) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| on_error(e.to_string()))
}
