use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{coins_bip39::English, LocalWallet, MnemonicBuilder},
    types::Address,
};
use portal_address::EthAddress;

use crate::error::{Result, ScenarioError};

/// Ethereum-compatible client signing with the account derived from a seed phrase.
///
/// Building the client does not touch the network, an unreachable host only shows up on the
/// first request.
pub struct L1Client {
    hosts: Vec<String>,
    client: SignerMiddleware<Provider<Http>, LocalWallet>,
}

impl L1Client {
    pub fn new(hosts: &[String], mnemonic: &str) -> Result<Self> {
        let primary = hosts
            .first()
            .ok_or_else(|| ScenarioError::L1("no L1 hosts configured".to_string()))?;

        let provider = Provider::<Http>::try_from(primary.as_str()).map_err(|e| {
            ScenarioError::InvalidEndpoint {
                url: primary.clone(),
                reason: e.to_string(),
            }
        })?;

        let wallet = MnemonicBuilder::<English>::default()
            .phrase(mnemonic)
            .index(0u32)
            .and_then(|builder| builder.build())
            .map_err(|e| ScenarioError::L1(format!("failed to derive signer: {e}")))?;

        Ok(Self {
            hosts: hosts.to_vec(),
            client: SignerMiddleware::new(provider, wallet),
        })
    }

    pub fn address(&self) -> Address {
        self.client.address()
    }

    /// The signing address in the form the contracts store.
    pub fn eth_address(&self) -> EthAddress {
        EthAddress::from(self.address().0)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_MNEMONIC;

    #[test]
    fn derives_first_development_account() {
        let client = L1Client::new(&["http://localhost:8545".to_string()], TEST_MNEMONIC).unwrap();
        assert_eq!(
            client.eth_address().to_string(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(client.hosts(), ["http://localhost:8545".to_string()]);
    }

    #[test]
    fn rejects_empty_host_list() {
        assert!(matches!(
            L1Client::new(&[], TEST_MNEMONIC),
            Err(ScenarioError::L1(_))
        ));
    }

    #[test]
    fn rejects_unparsable_host() {
        assert!(matches!(
            L1Client::new(&["not a url".to_string()], TEST_MNEMONIC),
            Err(ScenarioError::InvalidEndpoint { .. })
        ));
    }
}
