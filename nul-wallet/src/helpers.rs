use crate::*;

impl Contract {
    // Require the caller to be the owner
    pub(crate) fn require_owner(&self) {
        require!(
            env::predecessor_account_id() == self.owner_id,
            "Caller is not the owner"
        );
    }

    pub(crate) fn require_contact(&self, account_id: &AccountId) {
        require!(self.contacts.contains(account_id), "Only contacts can vote");
    }
}
