//! One module per subcommand. Handlers translate parsed arguments into
//! core calls and print the results; no snippet logic lives here.

pub mod completions;
pub mod config;
pub mod copy;
pub mod init;
pub mod input;
#[cfg(feature = "interactive")]
pub mod interactive;
pub mod render;
pub mod scopes;
