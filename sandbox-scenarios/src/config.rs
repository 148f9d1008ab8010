//! Environment resolver: connection settings read from flags or environment variables, each
//! with a local default.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Publicly known development seed phrase. Only meant for local test networks.
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

pub const DEFAULT_SANDBOX_RPC_URL: &str = "http://localhost:3030";
pub const DEFAULT_ETHEREUM_HOST: &str = "http://localhost:8545";
pub const DEFAULT_NUL_WALLET_WASM: &str = "target/near/nul_wallet/nul_wallet.wasm";
pub const DEFAULT_GUARDIAN_BLOCKING_WASM: &str =
    "target/near/guardian_blocking/guardian_blocking.wasm";
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 60;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Run a contract scenario against a local NEAR sandbox")]
pub struct ScenarioConfig {
    /// JSON-RPC endpoint of the sandbox node
    #[arg(
        long,
        value_name = "URL",
        env = "SANDBOX_RPC_URL",
        default_value = DEFAULT_SANDBOX_RPC_URL
    )]
    pub sandbox_rpc_url: String,

    /// L1 RPC endpoints, comma separated. The first one backs the L1 client
    #[arg(
        long,
        value_name = "URLS",
        env = "ETHEREUM_HOSTS",
        value_delimiter = ',',
        default_value = DEFAULT_ETHEREUM_HOST
    )]
    pub ethereum_hosts: Vec<String>,

    /// Account funding the test wallets. Defaults to the sandbox genesis account
    #[arg(long, value_name = "ACCOUNT_ID", env = "GENESIS_ACCOUNT_ID")]
    pub genesis_account_id: Option<String>,

    /// Secret key of the funding account. Defaults to the sandbox genesis key
    #[arg(long, value_name = "KEY", env = "GENESIS_PRIVATE_KEY", hide_env_values = true)]
    pub genesis_private_key: Option<String>,

    /// Compiled NulWallet contract
    #[arg(
        long,
        value_name = "PATH",
        env = "NUL_WALLET_WASM",
        default_value = DEFAULT_NUL_WALLET_WASM
    )]
    pub nul_wallet_wasm: PathBuf,

    /// Compiled GuardianBlocking contract
    #[arg(
        long,
        value_name = "PATH",
        env = "GUARDIAN_BLOCKING_WASM",
        default_value = DEFAULT_GUARDIAN_BLOCKING_WASM
    )]
    pub guardian_blocking_wasm: PathBuf,

    /// Seconds to wait for the sandbox to answer before giving up
    #[arg(
        long,
        value_name = "SECONDS",
        env = "SANDBOX_READY_TIMEOUT_SECS",
        default_value_t = DEFAULT_READY_TIMEOUT_SECS
    )]
    pub ready_timeout_secs: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            sandbox_rpc_url: DEFAULT_SANDBOX_RPC_URL.to_string(),
            ethereum_hosts: vec![DEFAULT_ETHEREUM_HOST.to_string()],
            genesis_account_id: None,
            genesis_private_key: None,
            nul_wallet_wasm: PathBuf::from(DEFAULT_NUL_WALLET_WASM),
            guardian_blocking_wasm: PathBuf::from(DEFAULT_GUARDIAN_BLOCKING_WASM),
            ready_timeout_secs: DEFAULT_READY_TIMEOUT_SECS,
        }
    }
}

impl ScenarioConfig {
    /// Defaults pointed at a specific sandbox endpoint.
    pub fn local(sandbox_rpc_url: impl Into<String>) -> Self {
        Self {
            sandbox_rpc_url: sandbox_rpc_url.into(),
            ..Self::default()
        }
    }

    pub fn with_contracts(
        mut self,
        nul_wallet_wasm: impl Into<PathBuf>,
        guardian_blocking_wasm: impl Into<PathBuf>,
    ) -> Self {
        self.nul_wallet_wasm = nul_wallet_wasm.into();
        self.guardian_blocking_wasm = guardian_blocking_wasm.into();
        self
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }
}
