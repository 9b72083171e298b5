//! Line-oriented command shell driving the renderer.
pub mod command;
pub mod session;

pub use command::{CharSelection, Command, CommandError, OutputKind, ResChange};
pub use session::{Flow, Session};
