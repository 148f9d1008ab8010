use near_sdk::json_types::U64;

use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ContractInfo {
    pub owner_id: AccountId,
    pub portal_address: EthAddress,
    pub required_approvals: u32,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct BlockRequestView {
    pub user: AccountId,
    pub initiator: AccountId,
    pub approvals: Vec<AccountId>,
    pub active_approvals: u32,
    pub required_approvals: u32,
    pub initiated_at_ms: U64,
}

#[near]
impl Contract {
    pub fn get_contract_info(&self) -> ContractInfo {
        ContractInfo {
            owner_id: self.owner_id.clone(),
            portal_address: self.portal_address,
            required_approvals: self.required_approvals,
        }
    }

    pub fn is_user_blocked(&self, user: AccountId) -> bool {
        self.blocked_users.contains(&user)
    }

    pub fn is_guardian(&self, account_id: AccountId) -> bool {
        self.guardians.contains(&account_id)
    }

    pub fn get_guardians(&self) -> Vec<AccountId> {
        self.guardians.iter().cloned().collect()
    }

    // Get the list of blocked users
    pub fn get_blocked_users(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<AccountId> {
        let from = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(self.blocked_users.len());

        self.blocked_users
            .iter()
            .skip(from as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    // Get the pending blocking request for a user, if any
    pub fn get_pending_blocking(&self, user: AccountId) -> Option<BlockRequestView> {
        self.pending_blocks.get(&user).map(|request| BlockRequestView {
            user: user.clone(),
            initiator: request.initiator.clone(),
            approvals: request.approvals.clone(),
            active_approvals: self.active_approvals(request),
            required_approvals: self.required_approvals,
            initiated_at_ms: U64(request.initiated_at_ms),
        })
    }
}
