use std::{fmt, path::Path, sync::Arc};

use near_api::{AccountId, Contract, Data, NearToken, NetworkConfig};
use serde::de::DeserializeOwned;

use crate::{
    error::{Result, ScenarioError},
    wallet::TestWallet,
};

/// Balance moved from the deployer to a new contract account, covers the code storage.
pub const CONTRACT_FUNDING: NearToken = NearToken::from_near(10);

/// A deployed contract together with the wallet that authorizes calls to it.
#[derive(Clone)]
pub struct ContractHandle {
    contract_id: AccountId,
    wallet: TestWallet,
    network: Arc<NetworkConfig>,
}

impl fmt::Debug for ContractHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractHandle")
            .field("contract_id", &self.contract_id)
            .field("wallet", &self.wallet)
            .finish_non_exhaustive()
    }
}

impl ContractHandle {
    /// Deploy `wasm_path` to `<name>.<deployer>` and run `init_method` with `init_args`.
    ///
    /// The returned handle sends transactions as `deployer`.
    pub async fn deploy(
        network: Arc<NetworkConfig>,
        deployer: &TestWallet,
        name: &str,
        wasm_path: &Path,
        init_method: &str,
        init_args: serde_json::Value,
    ) -> Result<Self> {
        let code = tokio::fs::read(wasm_path)
            .await
            .map_err(|source| ScenarioError::ContractCode {
                path: wasm_path.to_path_buf(),
                source,
            })?;

        let contract_account = deployer
            .create_sub_account(name, CONTRACT_FUNDING, &network)
            .await?;
        let contract_id = contract_account.account_id().clone();
        let deploy_error = |reason: String| ScenarioError::Deployment {
            contract_id: contract_id.to_string(),
            reason,
        };

        Contract::deploy(contract_id.clone())
            .use_code(code)
            .with_init_call(init_method, init_args)
            .map_err(|e| deploy_error(e.to_string()))?
            .with_signer(contract_account.signer().clone())
            .send_to(&network)
            .await
            .map_err(|e| deploy_error(e.to_string()))?
            .into_result()
            .map_err(|e| deploy_error(format!("{e:?}")))?;

        tracing::debug!(%contract_id, init_method, "contract deployed");

        Ok(Self {
            contract_id,
            wallet: deployer.clone(),
            network,
        })
    }

    /// The same contract, with calls authorized by `wallet`.
    pub fn at(&self, wallet: &TestWallet) -> Self {
        Self {
            contract_id: self.contract_id.clone(),
            wallet: wallet.clone(),
            network: self.network.clone(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.contract_id
    }

    pub fn wallet(&self) -> &TestWallet {
        &self.wallet
    }

    /// Sign and submit a state-changing call, returning once its execution outcome is known.
    ///
    /// A call that panics inside the contract is reported as [`ScenarioError::Transaction`].
    pub async fn send(&self, method: &str, args: serde_json::Value) -> Result<()> {
        let transaction_error = |reason: String| ScenarioError::Transaction {
            contract_id: self.contract_id.to_string(),
            method: method.to_string(),
            reason,
        };

        Contract(self.contract_id.clone())
            .call_function(method, args)
            .transaction()
            .with_signer(self.wallet.account_id().clone(), self.wallet.signer().clone())
            .send_to(&self.network)
            .await
            .map_err(|e| transaction_error(e.to_string()))?
            .into_result()
            .map_err(|e| transaction_error(format!("{e:?}")))?;

        tracing::debug!(
            contract_id = %self.contract_id,
            method,
            signer = %self.wallet.account_id(),
            "transaction executed"
        );
        Ok(())
    }

    /// Read-only call, nothing is signed or submitted.
    pub async fn simulate<T: DeserializeOwned + Send + Sync>(
        &self,
        method: &str,
        args: serde_json::Value,
    ) -> Result<T> {
        let result: Data<T> = Contract(self.contract_id.clone())
            .call_function(method, args)
            .read_only()
            .fetch_from(&self.network)
            .await
            .map_err(|e| ScenarioError::View {
                contract_id: self.contract_id.to_string(),
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        Ok(result.data)
    }
}
