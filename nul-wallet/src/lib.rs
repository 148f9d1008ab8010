use near_sdk::{
    env, log, near, require,
    store::{IterableSet, LookupMap},
    AccountId, BorshStorageKey, PanicOnDefault,
};
pub use portal_address::EthAddress;

mod helpers;
mod views;

#[cfg(test)]
mod unit_tests;

pub use views::ContractInfo;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    pub portal_address: EthAddress,
    pub contacts: IterableSet<AccountId>,
    pub vote_counts: LookupMap<AccountId, u64>,
    // voter -> candidate
    pub votes: LookupMap<AccountId, AccountId>,
}

#[derive(BorshStorageKey)]
#[near]
pub enum StorageKey {
    Contacts,
    VoteCounts,
    Votes,
}

#[near(event_json(standard = "nul_wallet"))]
pub enum Event<'a> {
    #[event_version("1.0.0")]
    ContactAdded { account_id: &'a AccountId },
    #[event_version("1.0.0")]
    ContactRemoved { account_id: &'a AccountId },
    #[event_version("1.0.0")]
    VoteCast {
        voter: &'a AccountId,
        candidate: &'a AccountId,
    },
}

#[near]
impl Contract {
    #[init]
    #[private]
    pub fn new(owner_id: AccountId, portal_address: EthAddress) -> Self {
        if portal_address.is_zero() {
            log!("Deployed without an L1 portal");
        }
        Self {
            owner_id,
            portal_address,
            contacts: IterableSet::new(StorageKey::Contacts),
            vote_counts: LookupMap::new(StorageKey::VoteCounts),
            votes: LookupMap::new(StorageKey::Votes),
        }
    }

    // Cast a vote for a candidate, only contacts can vote and only once
    pub fn cast_vote(&mut self, candidate: AccountId) {
        let voter = env::predecessor_account_id();
        self.require_contact(&voter);
        require!(!self.votes.contains_key(&voter), "Voter has already voted");

        let count = self.vote_counts.get(&candidate).copied().unwrap_or(0);
        self.vote_counts.insert(candidate.clone(), count + 1);
        self.votes.insert(voter.clone(), candidate.clone());

        Event::VoteCast {
            voter: &voter,
            candidate: &candidate,
        }
        .emit();
    }

    // Owner methods

    // Add an address to the contacts, adding an existing contact is a no-op
    pub fn add_contact(&mut self, address: AccountId) {
        self.require_owner();
        if self.contacts.insert(address.clone()) {
            Event::ContactAdded {
                account_id: &address,
            }
            .emit();
        }
    }

    // Remove an address from the contacts, votes already cast are kept
    pub fn remove_contact(&mut self, address: AccountId) {
        self.require_owner();
        require!(self.contacts.remove(&address), "Address is not a contact");
        Event::ContactRemoved {
            account_id: &address,
        }
        .emit();
    }

    // Update owner ID
    pub fn update_owner_id(&mut self, owner_id: AccountId) {
        self.require_owner();
        self.owner_id = owner_id;
    }
}
