// Launch Queue Core - Reorderable queue, ports and use cases
// NO infrastructure dependencies: stores, launchers and auth come in through ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
