// Test Helpers
use near_sandbox::Sandbox;
use sandbox_scenarios::{setup_sandbox, SandboxEnvironment, ScenarioConfig, ScenarioError};

#[allow(dead_code)]
pub const NUL_WALLET_WASM_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../target/near/nul_wallet/nul_wallet.wasm"
);
#[allow(dead_code)]
pub const GUARDIAN_BLOCKING_WASM_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../target/near/guardian_blocking/guardian_blocking.wasm"
);

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Start a fresh sandbox and connect to it. The sandbox stops when the returned handle drops.
#[allow(dead_code)]
pub async fn start_environment(
) -> Result<(Sandbox, SandboxEnvironment), Box<dyn std::error::Error + Send + Sync>> {
    let sandbox = Sandbox::start_sandbox().await?;
    let env = connect_environment(&sandbox).await?;
    Ok((sandbox, env))
}

/// Set up one more environment against an already running sandbox, as a later run would.
#[allow(dead_code)]
pub async fn connect_environment(
    sandbox: &Sandbox,
) -> Result<SandboxEnvironment, Box<dyn std::error::Error + Send + Sync>> {
    let config = ScenarioConfig::local(sandbox.rpc_addr.to_string())
        .with_contracts(NUL_WALLET_WASM_PATH, GUARDIAN_BLOCKING_WASM_PATH);
    Ok(setup_sandbox(config).await?)
}

/// Assert that a call was rejected by the contract with a panic containing `message`.
#[allow(dead_code)]
pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T, ScenarioError>, message: &str) {
    match result {
        Err(err @ ScenarioError::Transaction { .. }) => assert!(
            err.to_string().contains(message),
            "expected rejection containing {message:?}, got {err}"
        ),
        other => panic!("expected a rejected transaction, got {other:?}"),
    }
}
