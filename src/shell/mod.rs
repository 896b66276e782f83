//! External command execution and process environment.

pub mod command;
pub mod interrupt;
pub mod mock;
pub mod platform;

pub use command::{display_command, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::is_ci;
