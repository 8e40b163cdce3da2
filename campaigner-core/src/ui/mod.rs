//! Terminal presentation: loading spinner, Markdown rendering, and TTY checks

pub mod markdown;
pub mod spinner;
pub mod terminal;

pub use markdown::*;
pub use spinner::*;
pub use terminal::*;
