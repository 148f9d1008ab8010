use std::{fmt, sync::Arc};

use near_api::{signer, Account, AccountId, NearToken, NetworkConfig, Signer};
use near_sandbox::GenesisAccount;

use crate::{
    config::ScenarioConfig,
    error::{parse_with, Result, ScenarioError},
};

/// Balance given to every test wallet, enough to fund a contract account on top of its own storage.
pub const WALLET_FUNDING: NearToken = NearToken::from_near(30);

/// A funded account and the key that signs for it.
#[derive(Clone)]
pub struct TestWallet {
    account_id: AccountId,
    signer: Arc<Signer>,
}

impl fmt::Debug for TestWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestWallet")
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

impl TestWallet {
    pub fn new(account_id: AccountId, signer: Arc<Signer>) -> Self {
        Self { account_id, signer }
    }

    /// The funding account: configured credentials, or the sandbox genesis account.
    pub fn genesis(config: &ScenarioConfig) -> Result<Self> {
        let genesis = GenesisAccount::default();

        let account_id = config
            .genesis_account_id
            .clone()
            .unwrap_or_else(|| genesis.account_id.to_string());
        let private_key = config
            .genesis_private_key
            .clone()
            .unwrap_or_else(|| genesis.private_key.to_string());

        let account_id: AccountId = parse_with(&account_id, ScenarioError::GenesisCredentials)?;
        let signer = Signer::from_secret_key(parse_with(
            &private_key,
            ScenarioError::GenesisCredentials,
        )?)
        .map_err(|e| ScenarioError::Signer(e.to_string()))?;

        Ok(Self { account_id, signer })
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn signer(&self) -> &Arc<Signer> {
        &self.signer
    }

    /// Create `<name>.<self>` funded by this wallet, signed by a freshly generated key.
    pub async fn create_sub_account(
        &self,
        name: &str,
        funding: NearToken,
        network: &NetworkConfig,
    ) -> Result<TestWallet> {
        let raw_id = format!("{name}.{}", self.account_id);
        let account_error = |reason: String| ScenarioError::AccountCreation {
            account_id: raw_id.clone(),
            reason,
        };

        let account_id: AccountId = parse_with(&raw_id, account_error)?;
        let secret_key = signer::generate_secret_key().map_err(|e| ScenarioError::Signer(e.to_string()))?;
        let signer = Signer::from_secret_key(secret_key.clone())
            .map_err(|e| ScenarioError::Signer(e.to_string()))?;

        Account::create_account(account_id.clone())
            .fund_myself(self.account_id.clone(), funding)
            .with_public_key(secret_key.public_key())
            .with_signer(self.signer.clone())
            .send_to(network)
            .await
            .map_err(|e| account_error(e.to_string()))?
            .into_result()
            .map_err(|e| account_error(format!("{e:?}")))?;

        tracing::debug!(%account_id, "created account");

        Ok(TestWallet { account_id, signer })
    }
}
