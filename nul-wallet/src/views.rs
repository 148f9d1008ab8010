use near_sdk::json_types::U64;

use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ContractInfo {
    pub owner_id: AccountId,
    pub portal_address: EthAddress,
}

#[near]
impl Contract {
    pub fn get_contract_info(&self) -> ContractInfo {
        ContractInfo {
            owner_id: self.owner_id.clone(),
            portal_address: self.portal_address,
        }
    }

    // Number of votes cast for a candidate, zero if nobody voted for it
    pub fn get_vote_count(&self, candidate: AccountId) -> U64 {
        U64(self.vote_counts.get(&candidate).copied().unwrap_or(0))
    }

    pub fn is_address_in_contacts(&self, address: AccountId) -> bool {
        self.contacts.contains(&address)
    }

    pub fn has_voted(&self, voter: AccountId) -> bool {
        self.votes.contains_key(&voter)
    }

    // Get the list of contacts
    pub fn get_contacts(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<AccountId> {
        let from = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(self.contacts.len());

        self.contacts
            .iter()
            .skip(from as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}
