pub mod check_request;
pub mod task_result;

pub use check_request::{CheckRequest, SourceSet};
pub use task_result::{TargetReport, TaskResult, TaskStatus};
