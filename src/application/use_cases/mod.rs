/// Use cases module containing application business logic orchestration
mod validate_submissions;

pub use validate_submissions::ValidateSubmissionsUseCase;
