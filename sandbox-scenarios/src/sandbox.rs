//! Sandbox connector: binds a network configuration to the sandbox endpoint and waits until the
//! node answers before any scenario step runs.

use std::{sync::Arc, time::Duration};

use near_api::{Chain, NetworkConfig, RPCEndpoint};
use tokio::time::{sleep, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    config::{ScenarioConfig, TEST_MNEMONIC},
    error::{parse_with, Result, ScenarioError},
    l1::L1Client,
    wallet::{TestWallet, WALLET_FUNDING},
};

pub const SANDBOX_NETWORK_NAME: &str = "sandbox";

const READY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Everything a scenario needs, created once at startup and read-only afterwards. Several
/// scenarios can share one environment since each asks for its own batch of wallets.
pub struct SandboxEnvironment {
    pub config: ScenarioConfig,
    pub network: Arc<NetworkConfig>,
    pub genesis: TestWallet,
    pub l1: L1Client,
}

pub fn connect(config: &ScenarioConfig) -> Result<NetworkConfig> {
    let url = parse_with(&config.sandbox_rpc_url, |reason| {
        ScenarioError::InvalidEndpoint {
            url: config.sandbox_rpc_url.clone(),
            reason,
        }
    })?;

    Ok(NetworkConfig {
        network_name: SANDBOX_NETWORK_NAME.to_string(),
        rpc_endpoints: vec![RPCEndpoint::new(url)],
        ..NetworkConfig::testnet()
    })
}

/// Wait until the node reports a block height, returns that height.
pub async fn wait_for_sandbox(
    network: &NetworkConfig,
    url: &str,
    timeout: Duration,
) -> Result<u64> {
    let started = Instant::now();
    loop {
        match Chain::block_number().fetch_from(network).await {
            Ok(height) => return Ok(height),
            Err(e) if started.elapsed() < timeout => {
                debug!(url, error = %e, "sandbox not ready yet");
                sleep(READY_POLL_INTERVAL).await;
            }
            Err(e) => {
                return Err(ScenarioError::SandboxNotReady {
                    url: url.to_string(),
                    waited_secs: started.elapsed().as_secs(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

pub async fn setup_sandbox(config: ScenarioConfig) -> Result<SandboxEnvironment> {
    let network = connect(&config)?;
    let block_height =
        wait_for_sandbox(&network, &config.sandbox_rpc_url, config.ready_timeout()).await?;

    let genesis = TestWallet::genesis(&config)?;
    let l1 = L1Client::new(&config.ethereum_hosts, TEST_MNEMONIC)?;

    info!("Sandbox info:");
    info!("Network: {} at {}", network.network_name, config.sandbox_rpc_url);
    info!("Block height: {block_height}");
    info!("Funding account: {}", genesis.account_id());
    info!("L1 hosts: {}", l1.hosts().join(","));
    info!("L1 owner address: {}", l1.eth_address());

    Ok(SandboxEnvironment {
        config,
        network: Arc::new(network),
        genesis,
        l1,
    })
}

impl SandboxEnvironment {
    /// One funded wallet per role, named `<role>-<run id>` under the funding account.
    ///
    /// Every call draws a fresh run id, so repeated calls never collide. Roles must be unique
    /// within one call.
    pub async fn test_wallets<const N: usize>(&self, roles: [&str; N]) -> Result<[TestWallet; N]> {
        let run_id = new_run_id();
        debug!(%run_id, "creating test wallets");

        let mut wallets = Vec::with_capacity(N);
        for role in roles {
            let wallet = self
                .genesis
                .create_sub_account(&format!("{role}-{run_id}"), WALLET_FUNDING, &self.network)
                .await?;
            info!("Wallet {role}: {}", wallet.account_id());
            wallets.push(wallet);
        }

        wallets
            .try_into()
            .map_err(|created: Vec<TestWallet>| ScenarioError::AccountCreation {
                account_id: format!("<role>-{run_id}"),
                reason: format!("created {} wallets, expected {N}", created.len()),
            })
    }
}

// The tail of a v7 uuid is random, the head is a timestamp shared by runs started in the same
// millisecond.
fn new_run_id() -> String {
    let id = Uuid::now_v7().simple().to_string();
    id[id.len() - 12..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ids_are_short_and_distinct() {
        let first = new_run_id();
        let second = new_run_id();
        assert_eq!(first.len(), 12);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, second);
    }

    #[test]
    fn connect_uses_configured_endpoint() {
        let network = connect(&ScenarioConfig::local("http://127.0.0.1:3030")).unwrap();
        assert_eq!(network.network_name, SANDBOX_NETWORK_NAME);
        assert_eq!(network.rpc_endpoints.len(), 1);
    }

    #[test]
    fn connect_rejects_malformed_url() {
        let err = connect(&ScenarioConfig::local("localhost without scheme")).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidEndpoint { .. }));
    }

    #[tokio::test]
    async fn wait_for_sandbox_gives_up_after_timeout() {
        // Nothing listens on port 9 locally
        let config = ScenarioConfig::local("http://127.0.0.1:9");
        let network = connect(&config).unwrap();
        let err = wait_for_sandbox(&network, &config.sandbox_rpc_url, Duration::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, ScenarioError::SandboxNotReady { .. }));
    }
}
