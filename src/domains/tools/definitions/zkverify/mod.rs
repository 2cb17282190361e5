//! zkVerify documentation tools.

pub mod common;
mod fetch_docs;
mod network_info;
mod proof_system;
mod relayer;
mod sdk_code;
mod tutorial;
mod verification_cost;

pub use fetch_docs::{FetchDocsParams, FetchDocsTool};
pub use network_info::{NetworkInfoParams, NetworkInfoTool};
pub use proof_system::{ProofSystemParams, ProofSystemTool};
pub use relayer::{RelayerParams, RelayerTool};
pub use sdk_code::{SdkCodeParams, SdkCodeTool};
pub use tutorial::{TutorialParams, TutorialTool};
pub use verification_cost::{VerificationCostParams, VerificationCostTool};
