mod algorithm_registry;
mod expiry_policy;

pub use algorithm_registry::{AlgorithmAssessment, AlgorithmRegistry, DEFAULT_APPROVED_ALGORITHMS};
pub use expiry_policy::ExpiryPolicy;
