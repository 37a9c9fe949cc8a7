pub mod checkstyle_command;
pub mod tokio_runner;

pub use checkstyle_command::CheckstyleCommand;
pub use tokio_runner::TokioProcessRunner;
