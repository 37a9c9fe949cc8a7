/// Use cases module containing application business logic orchestration
mod run_check;

pub use run_check::RunCheckUseCase;
