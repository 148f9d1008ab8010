use near_sdk::{
    env, near, require,
    store::{IterableMap, IterableSet},
    AccountId, BorshStorageKey, PanicOnDefault,
};
pub use portal_address::EthAddress;

mod helpers;
mod views;


pub use views::{BlockRequestView, ContractInfo};

pub const DEFAULT_REQUIRED_APPROVALS: u32 = 1;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    pub portal_address: EthAddress,
    pub required_approvals: u32,
    pub guardians: IterableSet<AccountId>,
    pub pending_blocks: IterableMap<AccountId, BlockRequest>,
    pub blocked_users: IterableSet<AccountId>,
}

// A blocking request waiting for guardian approvals
#[near(serializers = [borsh])]
#[derive(Clone, Debug)]
pub struct BlockRequest {
    pub initiator: AccountId,
    pub approvals: Vec<AccountId>,
    pub initiated_at_ms: u64,
}

#[derive(BorshStorageKey)]
#[near]
pub enum StorageKey {
    Guardians,
    PendingBlocks,
    BlockedUsers,
}

#[near(event_json(standard = "guardian_blocking"))]
pub enum Event<'a> {
    #[event_version("1.0.0")]
    GuardianAdded { account_id: &'a AccountId },
    #[event_version("1.0.0")]
    GuardianRemoved { account_id: &'a AccountId },
    #[event_version("1.0.0")]
    BlockingInitiated {
        user: &'a AccountId,
        guardian: &'a AccountId,
    },
    #[event_version("1.0.0")]
    BlockingApproved {
        user: &'a AccountId,
        guardian: &'a AccountId,
        approvals: u32,
    },
    #[event_version("1.0.0")]
    BlockingCancelled {
        user: &'a AccountId,
        cancelled_by: &'a AccountId,
    },
    #[event_version("1.0.0")]
    UserBlocked { user: &'a AccountId },
    #[event_version("1.0.0")]
    UserUnblocked { user: &'a AccountId },
}

#[near]
impl Contract {
    #[init]
    #[private]
    pub fn new(
        owner_id: AccountId,
        portal_address: EthAddress,
        required_approvals: Option<u32>,
    ) -> Self {
        let required_approvals = required_approvals.unwrap_or(DEFAULT_REQUIRED_APPROVALS);
        require!(
            required_approvals > 0,
            "Required approvals must be at least 1"
        );
        Self {
            owner_id,
            portal_address,
            required_approvals,
            guardians: IterableSet::new(StorageKey::Guardians),
            pending_blocks: IterableMap::new(StorageKey::PendingBlocks),
            blocked_users: IterableSet::new(StorageKey::BlockedUsers),
        }
    }

    // Guardian methods

    // Open a blocking request for a user, it still needs approvals before the user is blocked
    pub fn initiate_blocking(&mut self, user: AccountId) {
        let guardian = self.require_guardian();
        require!(!self.blocked_users.contains(&user), "User is already blocked");
        require!(
            !self.pending_blocks.contains_key(&user),
            "Blocking already initiated for user"
        );

        self.pending_blocks.insert(
            user.clone(),
            BlockRequest {
                initiator: guardian.clone(),
                approvals: Vec::new(),
                initiated_at_ms: env::block_timestamp_ms(),
            },
        );

        Event::BlockingInitiated {
            user: &user,
            guardian: &guardian,
        }
        .emit();
    }

    // Approve a pending blocking request, blocks the user once enough guardians approved
    pub fn approve_blocking(&mut self, user: AccountId) {
        let guardian = self.require_guardian();

        let mut request = self
            .pending_blocks
            .get(&user)
            .cloned()
            .unwrap_or_else(|| env::panic_str("No pending blocking request for user"));
        require!(
            !request.approvals.contains(&guardian),
            "Guardian has already approved"
        );

        request.approvals.push(guardian.clone());
        let approvals = self.active_approvals(&request);

        Event::BlockingApproved {
            user: &user,
            guardian: &guardian,
            approvals,
        }
        .emit();

        if approvals >= self.required_approvals {
            self.pending_blocks.remove(&user);
            self.blocked_users.insert(user.clone());
            Event::UserBlocked { user: &user }.emit();
        } else {
            self.pending_blocks.insert(user, request);
        }
    }

    // Drop a pending blocking request, allowed for its initiator and the owner
    pub fn cancel_blocking(&mut self, user: AccountId) {
        let caller = env::predecessor_account_id();
        let request = self
            .pending_blocks
            .get(&user)
            .unwrap_or_else(|| env::panic_str("No pending blocking request for user"));
        require!(
            caller == request.initiator || caller == self.owner_id,
            "Only the initiator or the owner can cancel"
        );

        self.pending_blocks.remove(&user);
        Event::BlockingCancelled {
            user: &user,
            cancelled_by: &caller,
        }
        .emit();
    }

    // Owner methods

    // Add a guardian, adding an existing guardian is a no-op
    pub fn add_guardian(&mut self, guardian: AccountId) {
        self.require_owner();
        if self.guardians.insert(guardian.clone()) {
            Event::GuardianAdded {
                account_id: &guardian,
            }
            .emit();
        }
    }

    // Remove a guardian, users it helped block stay blocked
    pub fn remove_guardian(&mut self, guardian: AccountId) {
        self.require_owner();
        require!(
            self.guardians.remove(&guardian),
            "Account is not a guardian"
        );
        Event::GuardianRemoved {
            account_id: &guardian,
        }
        .emit();
    }

    pub fn unblock_user(&mut self, user: AccountId) {
        self.require_owner();
        require!(self.blocked_users.remove(&user), "User is not blocked");
        Event::UserUnblocked { user: &user }.emit();
    }

    // Update owner ID
    pub fn update_owner_id(&mut self, owner_id: AccountId) {
        self.require_owner();
        self.owner_id = owner_id;
    }
}
