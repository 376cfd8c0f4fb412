pub mod commands;
pub mod config;
pub mod error;
pub mod gh;
pub mod prompt;
pub mod types;

pub use commands::{run, Outcome};
pub use config::Config;
pub use error::{Error, Result};
