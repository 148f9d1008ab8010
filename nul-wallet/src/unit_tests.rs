use crate::*;
use near_sdk::test_utils::{accounts, get_logs, VMContextBuilder};
use near_sdk::testing_env;

// Helper function to create a mock context
fn get_context(predecessor: AccountId) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id(accounts(0))
        .signer_account_id(predecessor.clone())
        .predecessor_account_id(predecessor);
    builder
}

fn set_caller(account_id: AccountId) {
    testing_env!(get_context(account_id).build());
}

// accounts(1) owns the wallet, accounts(2) and accounts(3) are contacts
fn setup_contract() -> Contract {
    set_caller(accounts(0));
    let mut contract = Contract::new(accounts(1), EthAddress::ZERO);
    set_caller(accounts(1));
    contract.add_contact(accounts(2));
    contract.add_contact(accounts(3));
    contract
}

#[test]
fn test_new() {
    set_caller(accounts(0));
    let contract = Contract::new(accounts(1), EthAddress::ZERO);

    let info = contract.get_contract_info();
    assert_eq!(info.owner_id, accounts(1));
    assert!(info.portal_address.is_zero());
    assert!(contract.get_contacts(None, None).is_empty());
    assert_eq!(contract.get_vote_count(accounts(2)).0, 0);
}

#[test]
fn test_add_contact() {
    let contract = setup_contract();

    assert!(contract.is_address_in_contacts(accounts(2)));
    assert!(contract.is_address_in_contacts(accounts(3)));
    assert!(!contract.is_address_in_contacts(accounts(4)));
    assert_eq!(contract.get_contacts(None, None), vec![accounts(2), accounts(3)]);
}

// Adding the same contact twice keeps a single entry and emits a single event
#[test]
fn test_add_contact_twice() {
    set_caller(accounts(0));
    let mut contract = Contract::new(accounts(1), EthAddress::ZERO);
    set_caller(accounts(1));
    contract.add_contact(accounts(2));
    contract.add_contact(accounts(2));

    assert_eq!(contract.get_contacts(None, None).len(), 1);
    let added = get_logs()
        .iter()
        .filter(|line| line.contains("contact_added"))
        .count();
    assert_eq!(added, 1);
}

#[test]
#[should_panic(expected = "Caller is not the owner")]
fn test_add_contact_not_owner() {
    let mut contract = setup_contract();
    set_caller(accounts(2));
    contract.add_contact(accounts(4));
}

#[test]
fn test_remove_contact() {
    let mut contract = setup_contract();
    contract.remove_contact(accounts(2));

    assert!(!contract.is_address_in_contacts(accounts(2)));
    assert_eq!(contract.get_contacts(None, None), vec![accounts(3)]);
}

#[test]
#[should_panic(expected = "Address is not a contact")]
fn test_remove_contact_not_found() {
    let mut contract = setup_contract();
    contract.remove_contact(accounts(4));
}

#[test]
fn test_cast_vote() {
    let mut contract = setup_contract();
    set_caller(accounts(2));
    contract.cast_vote(accounts(4));

    assert_eq!(contract.get_vote_count(accounts(4)).0, 1);
    assert!(contract.has_voted(accounts(2)));
    assert!(!contract.has_voted(accounts(3)));
    assert!(get_logs().iter().any(|line| line.contains("vote_cast")));

    set_caller(accounts(3));
    contract.cast_vote(accounts(4));
    assert_eq!(contract.get_vote_count(accounts(4)).0, 2);
}

#[test]
#[should_panic(expected = "Voter has already voted")]
fn test_cast_vote_twice() {
    let mut contract = setup_contract();
    set_caller(accounts(2));
    contract.cast_vote(accounts(4));
    contract.cast_vote(accounts(4));
}

// A second vote for a different candidate is rejected as well
#[test]
#[should_panic(expected = "Voter has already voted")]
fn test_cast_vote_switch_candidate() {
    let mut contract = setup_contract();
    set_caller(accounts(2));
    contract.cast_vote(accounts(4));
    contract.cast_vote(accounts(5));
}

#[test]
#[should_panic(expected = "Only contacts can vote")]
fn test_cast_vote_not_contact() {
    let mut contract = setup_contract();
    set_caller(accounts(4));
    contract.cast_vote(accounts(5));
}

// Votes cast before a contact is removed still count
#[test]
fn test_remove_contact_keeps_votes() {
    let mut contract = setup_contract();
    set_caller(accounts(2));
    contract.cast_vote(accounts(4));

    set_caller(accounts(1));
    contract.remove_contact(accounts(2));
    assert_eq!(contract.get_vote_count(accounts(4)).0, 1);
}

#[test]
fn test_get_contacts_pagination() {
    let mut contract = setup_contract();
    contract.add_contact(accounts(4));

    assert_eq!(contract.get_contacts(Some(1), Some(1)), vec![accounts(3)]);
    assert_eq!(contract.get_contacts(Some(2), None), vec![accounts(4)]);
    assert!(contract.get_contacts(Some(5), None).is_empty());
}

#[test]
fn test_update_owner_id() {
    let mut contract = setup_contract();
    contract.update_owner_id(accounts(5));
    assert_eq!(contract.get_contract_info().owner_id, accounts(5));

    set_caller(accounts(5));
    contract.add_contact(accounts(4));
    assert!(contract.is_address_in_contacts(accounts(4)));
}

#[test]
#[should_panic(expected = "Caller is not the owner")]
fn test_update_owner_id_not_owner() {
    let mut contract = setup_contract();
    set_caller(accounts(3));
    contract.update_owner_id(accounts(3));
}
