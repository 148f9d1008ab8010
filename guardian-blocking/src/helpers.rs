use crate::*;

impl Contract {
    // Require the caller to be the owner
    pub(crate) fn require_owner(&self) {
        require!(
            env::predecessor_account_id() == self.owner_id,
            "Caller is not the owner"
        );
    }

    // Require the caller to be a guardian, returns the caller
    pub(crate) fn require_guardian(&self) -> AccountId {
        let account_id = env::predecessor_account_id();
        require!(
            self.guardians.contains(&account_id),
            "Caller is not a guardian"
        );
        account_id
    }

    // Approvals given by accounts that are still guardians
    pub(crate) fn active_approvals(&self, request: &BlockRequest) -> u32 {
        request
            .approvals
            .iter()
            .filter(|approver| self.guardians.contains(*approver))
            .count() as u32
    }
}
