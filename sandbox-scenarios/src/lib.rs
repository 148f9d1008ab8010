//! Scripted interaction with the sandbox contracts.
//!
//! Every scenario follows the same shape: resolve the environment, connect to the sandbox and
//! wait until it answers, then deploy a contract and drive it through a fixed sequence of
//! transactions and view calls. Steps are awaited one after the other and the first error
//! aborts the run.

pub mod config;
pub mod contract;
pub mod error;
pub mod guardian_blocking;
pub mod l1;
pub mod nul_wallet;
pub mod sandbox;
pub mod scenarios;
pub mod wallet;

pub use config::ScenarioConfig;
pub use error::{Result, ScenarioError};
pub use sandbox::{setup_sandbox, SandboxEnvironment};
pub use wallet::TestWallet;

use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Install the global tracing subscriber, `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
