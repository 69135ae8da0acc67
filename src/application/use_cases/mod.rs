/// Use cases module containing application business logic orchestration
mod run_compliance;

pub use run_compliance::RunComplianceUseCase;
