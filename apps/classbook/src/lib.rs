//! # Classbook
//!
//! The interactive layer on top of `classbook-core`: flags, the menu shell
//! and the text/JSON views. Exposed as a library so integration tests can
//! drive the shell with in-memory buffers.

pub mod cli;
pub mod render;
pub mod shell;

pub use render::OutputMode;
pub use shell::{Shell, ShellError, State};
