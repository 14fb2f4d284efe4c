pub mod app;
pub mod args;
pub mod output;
pub mod prompt;

pub use app::{exit_code, App};
pub use args::Args;
pub use prompt::resolve_request;
