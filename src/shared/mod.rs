pub mod error;
pub mod result;

pub use error::{CheckError, ExitCode};
pub use result::Result;
