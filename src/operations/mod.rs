//! Operations module
//!
//! Running aliases through the shell and the built-in `init` command

pub mod dispatch;
pub mod init;
pub mod shell;

pub use dispatch::*;
pub use init::*;
pub use shell::*;
