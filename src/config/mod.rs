//! JSON configuration for the shell and the one-shot renderer.
pub mod render;
pub mod shell;

pub use render::{RenderOutputConfig, RenderToolConfig};
pub use shell::ShellConfig;
