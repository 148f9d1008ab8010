//! The two end-to-end scenarios. Each step waits for the previous one, the first failure is
//! returned as is.

use near_api::AccountId;
use portal_address::EthAddress;
use tracing::info;

use crate::{
    error::Result, guardian_blocking::GuardianBlocking, nul_wallet::NulWallet,
    sandbox::SandboxEnvironment,
};

/// What the NulWallet scenario observed once all its steps went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NulWalletOutcome {
    pub contract_id: AccountId,
    pub owner: AccountId,
    pub candidate: AccountId,
    pub voter: AccountId,
    pub vote_count: u64,
    pub voter_is_contact: bool,
    /// The candidate is never added, so this is expected to stay false.
    pub candidate_is_contact: bool,
}

/// What the GuardianBlocking scenario observed once all its steps went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianBlockingOutcome {
    pub contract_id: AccountId,
    pub owner: AccountId,
    pub guardian: AccountId,
    pub user: AccountId,
    pub blocked_before_approval: bool,
    pub blocked_after_approval: bool,
    pub guardian_after_removal: bool,
    pub blocked_after_guardian_removal: bool,
}

/// Deploy a NulWallet, register two contacts, vote as one of them and read the results back.
pub async fn run_nul_wallet(env: &SandboxEnvironment) -> Result<NulWalletOutcome> {
    let [owner, candidate, voter] = env.test_wallets(["owner", "candidate", "voter"]).await?;

    // No L1 functionality, the portal stays at the zero address
    let nul_wallet = NulWallet::deploy(env, &owner, owner.account_id(), EthAddress::ZERO).await?;
    info!("NulWallet contract deployed at {}", nul_wallet.id());

    nul_wallet.add_contact(owner.account_id()).await?;
    info!("Added {} as a contact", owner.account_id());

    nul_wallet.add_contact(voter.account_id()).await?;
    info!("Added {} as a contact", voter.account_id());

    nul_wallet
        .at(&voter)
        .cast_vote(candidate.account_id())
        .await?;
    info!("Vote cast for candidate {}", candidate.account_id());

    let vote_count = nul_wallet.get_vote_count(candidate.account_id()).await?;
    info!("Vote count for {}: {vote_count}", candidate.account_id());

    let voter_is_contact = nul_wallet.is_address_in_contacts(voter.account_id()).await?;
    info!("Is {} a contact? {voter_is_contact}", voter.account_id());

    let candidate_is_contact = nul_wallet
        .is_address_in_contacts(candidate.account_id())
        .await?;
    info!("Is {} a contact? {candidate_is_contact}", candidate.account_id());

    Ok(NulWalletOutcome {
        contract_id: nul_wallet.id().clone(),
        owner: owner.account_id().clone(),
        candidate: candidate.account_id().clone(),
        voter: voter.account_id().clone(),
        vote_count,
        voter_is_contact,
        candidate_is_contact,
    })
}

/// Deploy a GuardianBlocking contract, block a user through a guardian, then remove the guardian.
pub async fn run_guardian_blocking(env: &SandboxEnvironment) -> Result<GuardianBlockingOutcome> {
    let [owner, guardian, user] = env.test_wallets(["owner", "guardian", "user"]).await?;

    let guardian_blocking = GuardianBlocking::deploy(env, &owner, EthAddress::ZERO, None).await?;
    info!(
        "GuardianBlocking contract deployed at {}",
        guardian_blocking.id()
    );

    guardian_blocking.add_guardian(guardian.account_id()).await?;
    info!("Added {} as a guardian", guardian.account_id());

    let as_guardian = guardian_blocking.at(&guardian);
    as_guardian.initiate_blocking(user.account_id()).await?;
    info!("Blocking initiated for user {}", user.account_id());

    let blocked_before_approval = guardian_blocking.is_user_blocked(user.account_id()).await?;
    info!(
        "Is user {} blocked before approval? {blocked_before_approval}",
        user.account_id()
    );

    as_guardian.approve_blocking(user.account_id()).await?;
    info!("Blocking approved for user {}", user.account_id());

    let blocked_after_approval = guardian_blocking.is_user_blocked(user.account_id()).await?;
    info!(
        "Is user {} blocked? {blocked_after_approval}",
        user.account_id()
    );

    guardian_blocking
        .remove_guardian(guardian.account_id())
        .await?;
    info!("Removed {} as a guardian", guardian.account_id());

    let guardian_after_removal = guardian_blocking.is_guardian(guardian.account_id()).await?;
    let blocked_after_guardian_removal =
        guardian_blocking.is_user_blocked(user.account_id()).await?;
    info!(
        "Is user {} still blocked? {blocked_after_guardian_removal}",
        user.account_id()
    );

    Ok(GuardianBlockingOutcome {
        contract_id: guardian_blocking.id().clone(),
        owner: owner.account_id().clone(),
        guardian: guardian.account_id().clone(),
        user: user.account_id().clone(),
        blocked_before_approval,
        blocked_after_approval,
        guardian_after_removal,
        blocked_after_guardian_removal,
    })
}
