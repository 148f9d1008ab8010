use clap::Parser as _;
use sandbox_scenarios::{init_tracing, scenarios::run_nul_wallet, setup_sandbox, ScenarioConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ScenarioConfig::parse();
    init_tracing();

    let env = setup_sandbox(config).await?;
    let outcome = run_nul_wallet(&env).await?;

    tracing::info!(
        contract_id = %outcome.contract_id,
        vote_count = outcome.vote_count,
        voter_is_contact = outcome.voter_is_contact,
        "NulWallet scenario finished"
    );

    Ok(())
}
