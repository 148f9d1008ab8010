use near_api::AccountId;
use near_sdk::json_types::U64;
use ::nul_wallet::ContractInfo;
use portal_address::EthAddress;
use serde_json::json;

use crate::{contract::ContractHandle, error::Result, sandbox::SandboxEnvironment, wallet::TestWallet};

pub const NUL_WALLET_ACCOUNT_NAME: &str = "nul-wallet";

/// Typed calls to a deployed NulWallet contract.
#[derive(Clone, Debug)]
pub struct NulWallet {
    handle: ContractHandle,
}

impl NulWallet {
    pub async fn deploy(
        env: &SandboxEnvironment,
        deployer: &TestWallet,
        owner_id: &AccountId,
        portal_address: EthAddress,
    ) -> Result<Self> {
        let handle = ContractHandle::deploy(
            env.network.clone(),
            deployer,
            NUL_WALLET_ACCOUNT_NAME,
            &env.config.nul_wallet_wasm,
            "new",
            json!({
                "owner_id": owner_id,
                "portal_address": portal_address,
            }),
        )
        .await?;
        Ok(Self { handle })
    }

    /// The same contract, with calls authorized by `wallet`.
    pub fn at(&self, wallet: &TestWallet) -> Self {
        Self {
            handle: self.handle.at(wallet),
        }
    }

    pub fn id(&self) -> &AccountId {
        self.handle.id()
    }

    pub async fn add_contact(&self, address: &AccountId) -> Result<()> {
        self.handle
            .send("add_contact", json!({ "address": address }))
            .await
    }

    pub async fn remove_contact(&self, address: &AccountId) -> Result<()> {
        self.handle
            .send("remove_contact", json!({ "address": address }))
            .await
    }

    pub async fn cast_vote(&self, candidate: &AccountId) -> Result<()> {
        self.handle
            .send("cast_vote", json!({ "candidate": candidate }))
            .await
    }

    pub async fn update_owner_id(&self, owner_id: &AccountId) -> Result<()> {
        self.handle
            .send("update_owner_id", json!({ "owner_id": owner_id }))
            .await
    }

    pub async fn get_vote_count(&self, candidate: &AccountId) -> Result<u64> {
        let count: U64 = self
            .handle
            .simulate("get_vote_count", json!({ "candidate": candidate }))
            .await?;
        Ok(count.0)
    }

    pub async fn is_address_in_contacts(&self, address: &AccountId) -> Result<bool> {
        self.handle
            .simulate("is_address_in_contacts", json!({ "address": address }))
            .await
    }

    pub async fn has_voted(&self, voter: &AccountId) -> Result<bool> {
        self.handle
            .simulate("has_voted", json!({ "voter": voter }))
            .await
    }

    pub async fn get_contacts(&self) -> Result<Vec<AccountId>> {
        self.handle
            .simulate("get_contacts", json!({ "from_index": null, "limit": null }))
            .await
    }

    pub async fn get_contract_info(&self) -> Result<ContractInfo> {
        self.handle.simulate("get_contract_info", json!({})).await
    }
}
