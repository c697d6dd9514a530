pub mod args;
pub mod commands;
pub mod prompt;

pub use args::*;
pub use commands::*;
pub use prompt::*;
