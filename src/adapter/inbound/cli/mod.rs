//! CLI module graph.

pub mod add;
pub mod command;
pub mod diagnostic;
pub mod dispatch;
pub mod log;
pub mod matches;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod teams;
