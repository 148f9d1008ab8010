use portal_address::{EthAddress, EthAddressError};
use rstest::rstest;

const ANVIL_ACCOUNT_0: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

#[test]
fn zero_address_displays_as_forty_zeros() {
    assert_eq!(
        EthAddress::ZERO.to_string(),
        "0x0000000000000000000000000000000000000000"
    );
    assert!(EthAddress::ZERO.is_zero());
    assert_eq!(EthAddress::default(), EthAddress::ZERO);
}

#[rstest]
#[case::lowercase_prefixed(ANVIL_ACCOUNT_0)]
#[case::checksummed("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")]
#[case::unprefixed("f39fd6e51aad88f6f4ce6ab8827279cfffb92266")]
#[case::upper_prefix("0Xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")]
fn parses_accepted_forms(#[case] input: &str) {
    let address: EthAddress = input.parse().expect("address should parse");
    assert_eq!(address.to_string(), ANVIL_ACCOUNT_0);
    assert!(!address.is_zero());
}

#[rstest]
#[case::too_short("0x1234", EthAddressError::InvalidLength(4))]
#[case::too_long(
    "0xf39fd6e51aad88f6f4ce6ab8827279cfffb9226600",
    EthAddressError::InvalidLength(42)
)]
#[case::not_hex(
    "0xz39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    EthAddressError::InvalidHex("0xz39fd6e51aad88f6f4ce6ab8827279cfffb92266".to_string())
)]
fn rejects_malformed_addresses(#[case] input: &str, #[case] expected: EthAddressError) {
    assert_eq!(input.parse::<EthAddress>(), Err(expected));
}

#[test]
fn json_uses_hex_string() {
    let address: EthAddress = ANVIL_ACCOUNT_0.parse().unwrap();
    let json = serde_json::to_value(address).unwrap();
    assert_eq!(json, serde_json::json!(ANVIL_ACCOUNT_0));

    let back: EthAddress = serde_json::from_value(json).unwrap();
    assert_eq!(back, address);

    assert!(serde_json::from_value::<EthAddress>(serde_json::json!("0x12")).is_err());
}

#[test]
fn borsh_stores_raw_bytes() {
    let address: EthAddress = ANVIL_ACCOUNT_0.parse().unwrap();
    let encoded = borsh::to_vec(&address).unwrap();
    assert_eq!(encoded.len(), 20);
    assert_eq!(&encoded[..], address.as_bytes());
}
