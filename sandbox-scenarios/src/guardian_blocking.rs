use ::guardian_blocking::{BlockRequestView, ContractInfo};
use near_api::AccountId;
use portal_address::EthAddress;
use serde_json::json;

use crate::{contract::ContractHandle, error::Result, sandbox::SandboxEnvironment, wallet::TestWallet};

pub const GUARDIAN_BLOCKING_ACCOUNT_NAME: &str = "guardian-blocking";

/// Typed calls to a deployed GuardianBlocking contract.
#[derive(Clone, Debug)]
pub struct GuardianBlocking {
    handle: ContractHandle,
}

impl GuardianBlocking {
    /// Deploy with `deployer` as owner. `required_approvals` falls back to the contract default.
    pub async fn deploy(
        env: &SandboxEnvironment,
        deployer: &TestWallet,
        portal_address: EthAddress,
        required_approvals: Option<u32>,
    ) -> Result<Self> {
        let handle = ContractHandle::deploy(
            env.network.clone(),
            deployer,
            GUARDIAN_BLOCKING_ACCOUNT_NAME,
            &env.config.guardian_blocking_wasm,
            "new",
            json!({
                "owner_id": deployer.account_id(),
                "portal_address": portal_address,
                "required_approvals": required_approvals,
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

    pub async fn add_guardian(&self, guardian: &AccountId) -> Result<()> {
        self.handle
            .send("add_guardian", json!({ "guardian": guardian }))
            .await
    }

    pub async fn remove_guardian(&self, guardian: &AccountId) -> Result<()> {
        self.handle
            .send("remove_guardian", json!({ "guardian": guardian }))
            .await
    }

    pub async fn initiate_blocking(&self, user: &AccountId) -> Result<()> {
        self.handle
            .send("initiate_blocking", json!({ "user": user }))
            .await
    }

    pub async fn approve_blocking(&self, user: &AccountId) -> Result<()> {
        self.handle
            .send("approve_blocking", json!({ "user": user }))
            .await
    }

    pub async fn cancel_blocking(&self, user: &AccountId) -> Result<()> {
        self.handle
            .send("cancel_blocking", json!({ "user": user }))
            .await
    }

    pub async fn unblock_user(&self, user: &AccountId) -> Result<()> {
        self.handle
            .send("unblock_user", json!({ "user": user }))
            .await
    }

    pub async fn update_owner_id(&self, owner_id: &AccountId) -> Result<()> {
        self.handle
            .send("update_owner_id", json!({ "owner_id": owner_id }))
            .await
    }

    pub async fn is_user_blocked(&self, user: &AccountId) -> Result<bool> {
        self.handle
            .simulate("is_user_blocked", json!({ "user": user }))
            .await
    }

    pub async fn is_guardian(&self, account_id: &AccountId) -> Result<bool> {
        self.handle
            .simulate("is_guardian", json!({ "account_id": account_id }))
            .await
    }

    pub async fn get_guardians(&self) -> Result<Vec<AccountId>> {
        self.handle.simulate("get_guardians", json!({})).await
    }

    pub async fn get_blocked_users(&self) -> Result<Vec<AccountId>> {
        self.handle
            .simulate(
                "get_blocked_users",
                json!({ "from_index": null, "limit": null }),
            )
            .await
    }

    pub async fn get_pending_blocking(&self, user: &AccountId) -> Result<Option<BlockRequestView>> {
        self.handle
            .simulate("get_pending_blocking", json!({ "user": user }))
            .await
    }

    pub async fn get_contract_info(&self) -> Result<ContractInfo> {
        self.handle.simulate("get_contract_info", json!({})).await
    }
}
