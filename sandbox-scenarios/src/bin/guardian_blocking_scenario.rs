use clap::Parser as _;
use sandbox_scenarios::{
    init_tracing, scenarios::run_guardian_blocking, setup_sandbox, ScenarioConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ScenarioConfig::parse();
    init_tracing();

    let env = setup_sandbox(config).await?;
    let outcome = run_guardian_blocking(&env).await?;

    tracing::info!(
        contract_id = %outcome.contract_id,
        user_blocked = outcome.blocked_after_guardian_removal,
        "GuardianBlocking scenario finished"
    );

    Ok(())
}
