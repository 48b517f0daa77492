use crate::GateDecision;

use async_trait::async_trait;

/// Optional membership check run before any link is read or written.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    async fn check(&self, email: &str) -> GateDecision;
}
